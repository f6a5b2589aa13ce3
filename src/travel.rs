//! Switching cities and getting around inside one.

use crate::engine::Engine;
use crate::price;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelMode {
    Train,
    Plane,
    /// Intercity rail tunnel (e.g. 花桥站), charged as a subway multiple.
    Tunnel,
}

impl TravelMode {
    pub fn display(self) -> &'static str {
        match self {
            TravelMode::Train => "高铁",
            TravelMode::Plane => "飞机",
            TravelMode::Tunnel => "跨城地铁",
        }
    }
}

/// New cities visitable per week; already-visited cities stay accessible.
const WEEKLY_NEW_CITY_CAP: usize = 2;

impl Engine<'_> {
    /// Travel to another city. Validates the target, the weekly cap and the
    /// fare, relocates the player to the arrival location, rolls the
    /// transit luggage risk and resets the price context.
    pub fn switch_city(&mut self, target_key: &str, mode: TravelMode) -> bool {
        let Some(target) = self.catalog.city(target_key) else {
            self.log.show(format!("找不到城市：{target_key}"));
            return false;
        };
        if self.state.current_city == target_key {
            self.log.show(format!("你已经在{}了！", target.name));
            return false;
        }
        let already_visited = self
            .state
            .city_visits_this_week
            .iter()
            .any(|c| c == target_key);
        if !already_visited && self.state.city_visits_this_week.len() >= WEEKLY_NEW_CITY_CAP {
            self.log
                .show(format!("本周已经去过{WEEKLY_NEW_CITY_CAP}个城市了，下周才能再去新城市！"));
            return false;
        }
        let Some(origin) = self.city() else {
            return false;
        };

        let fare = match mode {
            TravelMode::Train => origin.fares.train.get(target_key).copied(),
            TravelMode::Plane => origin.fares.plane.get(target_key).copied(),
            TravelMode::Tunnel => origin
                .tunnel_to(target_key)
                .map(|_| origin.fares.subway * self.config.hazards.tunnel_fare_multiplier),
        };
        let Some(fare) = fare.filter(|f| *f > 0) else {
            log::error!(
                "no {} route {} -> {}",
                mode.display(),
                origin.key,
                target_key
            );
            self.log
                .show(format!("从{}没有{}可以到{}。", origin.name, mode.display(), target.name));
            return false;
        };
        if self.state.cash < fare {
            self.log
                .show(format!("现金不足！需要{}元才能前往{}", fare, target.name));
            return false;
        }

        self.state.cash -= fare;
        let origin_key = origin.key.clone();
        self.state.current_city = target_key.to_string();
        if !already_visited {
            self.state.city_visits_this_week.push(target_key.to_string());
        }

        // Arrive at the matching gateway: station, airport, or the tunnel's
        // far end; fall back to the first location.
        let arrival = match mode {
            TravelMode::Train => target.train_station(),
            TravelMode::Plane => target.airport(),
            TravelMode::Tunnel => target.tunnel_to(&origin_key),
        }
        .or_else(|| target.first_location());
        self.state.current_location = arrival.map(|l| l.id).unwrap_or(0);

        self.log.show(format!(
            "成功乘坐{}前往{}！花费{}元，剩余现金{}元",
            mode.display(),
            target.name,
            fare,
            self.state.cash
        ));

        // Transit carries its own chance of losing every piece of luggage.
        let loss_pct = match mode {
            TravelMode::Tunnel => self.config.hazards.subway_loss_pct,
            TravelMode::Train => self.config.hazards.train_loss_pct,
            TravelMode::Plane => self.config.hazards.plane_loss_pct,
        };
        if self.state.total_goods > 0 && self.rng.hit(loss_pct) {
            for goods in &mut self.state.goods {
                goods.owned = 0;
            }
            self.state.total_goods = 0;
            self.log
                .show("糟糕！行李在旅途中全部丢失，货物一件不剩……");
        }

        // New city, new market context.
        let leave_out = price::leave_out_for(
            target,
            self.state.current_location,
            self.state.time_left,
            &self.config.price,
        );
        price::generate(&mut self.state.goods, leave_out, &mut self.rng);
        true
    }

    /// Ride the subway to another location in the current city.
    pub fn move_to_location(&mut self, location_id: i64) -> bool {
        let Some(city) = self.city() else {
            return false;
        };
        let Some(location) = city.location(location_id) else {
            self.log.show("地铁线路图上没有这一站。");
            return false;
        };
        if self.state.current_location == location_id {
            self.log.show(format!("你已经在{}了。", location.name));
            return false;
        }
        let fare = city.fares.subway;
        if self.state.cash < fare {
            self.log.show(format!("连{fare}元地铁票都买不起了……"));
            return false;
        }
        self.state.cash -= fare;
        self.state.current_location = location_id;
        self.log
            .show(format!("花{}元乘地铁来到{}。", fare, location.name));
        true
    }
}
