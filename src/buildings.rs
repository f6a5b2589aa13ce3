//! Hospital, work, restaurant and housing.

use crate::catalog::HouseType;
use crate::engine::Engine;

impl Engine<'_> {
    /// Paid healing at the city hospital. Fails when already at full health
    /// or short on cash.
    pub fn hospital_treatment(&mut self, points: i32) -> bool {
        let Some(city) = self.city() else {
            return false;
        };
        if points <= 0 {
            return false;
        }
        if self.state.health >= 100 {
            self.log.show("小护士笑着说：\"你看起来气色很好，不需要治疗。\"");
            return false;
        }
        let cost = points as i64 * city.buildings.hospital.cost_per_point;
        if self.state.cash < cost {
            self.log.show("医生说：\"钱不够！拒绝治疗！\"");
            return false;
        }

        let old = self.state.health;
        self.state.cash -= cost;
        self.state.add_health(points);
        self.log.show(format!(
            "治疗成功！健康从{}点恢复到{}点，花费{}元",
            old, self.state.health, cost
        ));
        true
    }

    /// Work a shift of the given type. All preconditions must pass; success
    /// pays a rolled income, costs rolled stamina, and drags one incidental
    /// health and money roll along as flavor.
    pub fn do_work(&mut self, work_type_id: &str) -> bool {
        let Some(city) = self.city() else {
            return false;
        };
        let Some(work) = city.work_type(work_type_id) else {
            log::warn!("unknown work type {work_type_id} in {}", city.key);
            self.log.show("这里没有这种工作。");
            return false;
        };

        if self.state.health <= 0 {
            self.log.show("健康值过低，无法打工！请先去医院治疗。");
            return false;
        }
        if work.deposit > 0 && self.state.cash < work.deposit {
            self.log
                .show(format!("交不起{}元押金，无法开工！", work.deposit));
            return false;
        }
        if work.daily_limit > 0 {
            let visits = self.state.work_visits.get(work_type_id).copied().unwrap_or(0);
            if visits >= work.daily_limit {
                self.log
                    .show(format!("{}本周的趟数已经跑满了，歇歇吧！", work.name));
                return false;
            }
        }
        let stamina_cost =
            self.rng.range(work.stamina_cost_min as i64, work.stamina_cost_max as i64) as i32;
        if self.state.stamina < stamina_cost {
            self.log.show("体力不足，先去饭店吃一顿吧！");
            return false;
        }

        self.state.cash -= work.deposit;
        *self
            .state
            .work_visits
            .entry(work_type_id.to_string())
            .or_insert(0) += 1;

        let income = self.rng.range(work.income_min, work.income_max);
        self.state.cash += income;
        self.state.add_stamina(-stamina_cost);

        let deposit_text = if work.deposit > 0 {
            format!("，押金{}元", work.deposit)
        } else {
            String::new()
        };
        self.log.show(format!(
            "{}打工完成，获得{}元收入{}，体力-{}",
            work.name, income, deposit_text, stamina_cost
        ));

        // Working exposes you to the streets: one incidental health roll
        // and one incidental money roll.
        self.process_health_events();
        if !self.state.is_game_over {
            self.process_money_events();
        }
        true
    }

    /// One sitting: pay a rolled price, recover rolled stamina, risk food
    /// poisoning. Only fails when cash can't cover the minimum price.
    pub fn eat_at_restaurant(&mut self) -> bool {
        let Some(city) = self.city() else {
            return false;
        };
        let restaurant = &city.buildings.restaurant;
        if self.state.cash < restaurant.cost_min {
            self.log.show("兜里连一碗面钱都没有，老板把你轰了出来。");
            return false;
        }

        let cost = self
            .rng
            .range(restaurant.cost_min, restaurant.cost_max)
            .min(self.state.cash);
        let restored = self.rng.range(restaurant.stamina_min as i64, restaurant.stamina_max as i64) as i32;
        self.state.cash -= cost;
        self.state.add_stamina(restored);
        self.log.show(format!(
            "在饭店美餐一顿，花费{}元，体力+{}",
            cost, restored
        ));

        if self.rng.hit(restaurant.poisoning_pct) {
            let damage = self
                .rng
                .range(restaurant.poisoning_damage_min as i64, restaurant.poisoning_damage_max as i64)
                as i32;
            self.state.health = (self.state.health - damage).max(0);
            self.log
                .show(format!("坏了，食物中毒！上吐下泻，健康-{damage}"));
            if self.state.health == 0 {
                self.check_game_over();
            }
        }
        true
    }

    /// Dynamic monthly rent for a house type in a city: the catalog rent
    /// scaled by that city's drift multiplier.
    pub fn monthly_rent_for(&self, city_key: &str, house: &HouseType) -> i64 {
        (house.monthly_rent as f64 * self.state.rent_multiplier(city_key)) as i64
    }

    /// Rent (or switch to) a house type in the current city. The move-in
    /// payment is the new deposit minus the refund from any lease being
    /// vacated here; a discount threshold halves the new deposit.
    pub fn rent_house(&mut self, house_type_id: &str) -> bool {
        let Some(city) = self.city() else {
            return false;
        };
        let Some(house) = city.house_type(house_type_id) else {
            log::warn!("unknown house type {house_type_id} in {}", city.key);
            self.log.show("中介翻了翻本子：\"没有这种房型。\"");
            return false;
        };

        let city_key = city.key.clone();
        let previous = self
            .state
            .rented_houses
            .get(&city_key)
            .and_then(|id| city.house_type(id));
        if previous.is_some_and(|p| p.id == house.id) {
            self.log.show(format!("你已经租住{}了！", house.name));
            return false;
        }

        let mut deposit = self.monthly_rent_for(&city_key, house);
        if house.discount_threshold > 0 && self.state.cash >= house.discount_threshold {
            deposit /= 2;
        }
        // Vacating an existing lease here refunds its deposit, valued at
        // that house's current monthly rent.
        let refund = previous.map_or(0, |p| self.monthly_rent_for(&city_key, p));
        let net = deposit - refund;
        if net > self.state.cash {
            self.log
                .show(format!("押金不够！还差{}元。", net - self.state.cash));
            return false;
        }

        self.state.cash -= net;
        self.state.max_capacity += house.capacity_increase - previous.map_or(0, |p| p.capacity_increase);
        let house_name = house.name.clone();
        self.state
            .rented_houses
            .insert(city_key.clone(), house.id.clone());
        if !self.state.is_leased_in(&city_key) {
            self.state.rented_cities.push(city_key);
        }

        if refund > 0 {
            self.log.show(format!(
                "换租{}成功，退回旧押金{}元，支付新押金{}元，仓库容量{}",
                house_name, refund, deposit, self.state.max_capacity
            ));
        } else {
            self.log.show(format!(
                "租房成功！住进{}，支付押金{}元，仓库容量增加到{}",
                house_name, deposit, self.state.max_capacity
            ));
        }
        true
    }

    /// Monthly settlement across every leased city. Driven by the engine
    /// every `weeks_per_month` ticks; inability to pay evicts.
    pub(crate) fn process_monthly_rent(&mut self) {
        let cities: Vec<String> = self.state.rented_cities.clone();
        for city_key in cities {
            let Some(city) = self.catalog.city(&city_key) else {
                log::error!("leased city {city_key} missing from catalog");
                continue;
            };
            let Some(house) = self
                .state
                .rented_houses
                .get(&city_key)
                .and_then(|id| city.house_type(id))
            else {
                log::error!("leased house type missing in {city_key}");
                continue;
            };
            let rent = self.monthly_rent_for(&city_key, house);
            if self.state.cash >= rent {
                self.state.cash -= rent;
                self.log
                    .show(format!("支付{}的月租{}元", city.name, rent));
            } else {
                self.evict(&city_key, rent);
            }
        }
    }

    /// Rent unpaid: the landlord seizes all cash, goods beyond the suitcase
    /// floor are liquidated highest-priced first for partial recovery, and
    /// housing in that city is stripped.
    fn evict(&mut self, city_key: &str, rent_due: i64) {
        let city_name = self
            .catalog
            .city(city_key)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| city_key.to_string());

        self.state.cash = 0;
        self.state.rented_houses.remove(city_key);
        self.state.rented_cities.retain(|c| c != city_key);

        // Capacity falls back to base plus whatever leases survive.
        let mut capacity = self.state.base_capacity;
        for (key, house_id) in &self.state.rented_houses {
            if let Some(house) = self
                .catalog
                .city(key)
                .and_then(|c| c.house_type(house_id))
            {
                capacity += house.capacity_increase;
            }
        }
        self.state.max_capacity = capacity;

        let mut recovered = 0;
        let mut to_shed = (self.state.total_goods - self.state.base_capacity).max(0);
        if to_shed > 0 {
            let mut order: Vec<usize> = (0..self.state.goods.len())
                .filter(|&i| self.state.goods[i].owned > 0)
                .collect();
            order.sort_by_key(|&i| std::cmp::Reverse(self.state.goods[i].price));
            for index in order {
                if to_shed == 0 {
                    break;
                }
                let goods = &mut self.state.goods[index];
                let sold = goods.owned.min(to_shed);
                goods.owned -= sold;
                recovered += sold * goods.price;
                to_shed -= sold;
            }
            self.state.recount_goods();
        }

        self.log.show(format!(
            "交不起{city_name}的月租{rent_due}元，被扫地出门！现金被房东全部没收，\
             多余的货物被变卖抵债{recovered}元。"
        ));
    }

    /// Weekly chance per leased city of the landlord moving the rent,
    /// permanently drifting that city's multiplier within [0.5, 1.5].
    pub(crate) fn process_rent_drift(&mut self) {
        let cities: Vec<String> = self.state.rented_cities.clone();
        for city_key in cities {
            if !self.rng.hit(self.config.hazards.rent_drift_pct) {
                continue;
            }
            let city_name = self
                .catalog
                .city(&city_key)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| city_key.clone());
            let up = self.rng.hit(50);
            let pct = if up {
                self.rng.range(10, 25)
            } else {
                self.rng.range(5, 15)
            };
            let old = self.state.rent_multiplier(&city_key);
            let factor = if up {
                1.0 + pct as f64 / 100.0
            } else {
                1.0 - pct as f64 / 100.0
            };
            let new = (old * factor).clamp(0.5, 1.5);
            self.state.rent_multipliers.insert(city_key, new);
            if up {
                self.log
                    .show(format!("{city_name}的房东通知：房租上涨{pct}%！"));
            } else {
                self.log
                    .show(format!("{city_name}租市遇冷，房租下调{pct}%。"));
            }
        }
    }

    /// Weekly hotel bill (or worse) in a city without a lease.
    pub(crate) fn settle_accommodation(&mut self) {
        if self.state.is_leased_here() {
            return;
        }
        let Some(city) = self.city() else {
            return;
        };
        let weekly = city.rent.hotel_daily_price * 7;
        if self.state.cash >= weekly {
            self.state.cash -= weekly;
            self.log.show(format!(
                "你在{}没有住处，住了一周旅馆，花费{}元",
                city.name, weekly
            ));
        } else {
            let penalty = self.config.hazards.homeless_health_penalty;
            self.state.health = (self.state.health - penalty).max(0);
            self.log.show(format!(
                "付不起旅馆钱，只能睡桥洞，风餐露宿，健康-{penalty}"
            ));
        }
    }

    /// Involuntary hospitalization when health is too low and enough time
    /// remains. Consumes 1-2 weeks, levies a random daily debt and restores
    /// a little health. Returns whether it happened so the engine skips its
    /// own time decrement that tick.
    pub(crate) fn check_forced_hospitalization(&mut self) -> bool {
        let Some(city) = self.city() else {
            return false;
        };
        let trigger = city.buildings.hospital.trigger_health;

        if self.state.health < trigger
            && self.state.time_left > self.config.time.hospitalization_cutoff
        {
            let days = 1 + self.rng.num(2) as u32;
            let hazards = &self.config.hazards;
            let cost = days as i64
                * self
                    .rng
                    .range(hazards.hospitalization_cost_min, hazards.hospitalization_cost_max);
            self.state.debt += cost;
            let restored = hazards.hospitalization_health_restored;
            self.state.add_health(restored);
            self.state.time_left = self.state.time_left.saturating_sub(days);

            let place = {
                let pick = self.rng.num(city.locations.len() as i64) as usize;
                city.locations[pick].name.clone()
            };
            self.log.show(format!(
                "你的健康状况太差，在{place}晕倒，被抬进医院治疗了{days}周。\
                 好心人为你垫付了住院费{cost}元，记在你的债务上。健康恢复了{restored}点。"
            ));
            return true;
        }

        if self.state.health < 20 && self.state.health > 0 {
            self.log.show("你的健康……非常危险……快去医院……");
        }
        false
    }
}
