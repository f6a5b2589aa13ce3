//! The tick driver.
//!
//! One `Engine` owns the whole mutable game state plus the RNG and message
//! log, and borrows the immutable catalog. The per-week sequence in
//! [`Engine::next_time`] is the contract everything else relies on: managers
//! are implemented as `impl Engine` blocks in their own modules and mutate
//! state in the order fixed here.

use crate::catalog::{Catalog, CityConfig};
use crate::config::GameConfig;
use crate::log::GameLog;
use crate::market::{self, MarketInfo};
use crate::price;
use crate::rng::GameRng;
use crate::season;
use crate::state::{GameResult, GameState};

pub struct Engine<'c> {
    pub catalog: &'c Catalog,
    pub config: GameConfig,
    pub state: GameState,
    pub rng: GameRng,
    pub log: GameLog,
}

impl<'c> Engine<'c> {
    pub fn new(
        catalog: &'c Catalog,
        config: GameConfig,
        start_city: &str,
        rng: GameRng,
    ) -> Result<Self, String> {
        let state = GameState::new(catalog, &config, start_city)?;
        let mut engine = Self {
            catalog,
            config,
            state,
            rng,
            log: GameLog::new(),
        };
        engine.log.set_week(1);
        engine.generate_initial_prices();
        Ok(engine)
    }

    /// Replace the state wholesale and start over in `start_city`.
    pub fn restart(&mut self, start_city: &str) -> Result<(), String> {
        self.state = GameState::new(self.catalog, &self.config, start_city)?;
        self.log = GameLog::new();
        self.log.set_week(1);
        self.generate_initial_prices();
        Ok(())
    }

    /// Config of the city the player is currently in. `None` only for
    /// corrupt state and is treated as a data error by callers.
    pub(crate) fn city(&self) -> Option<&'c CityConfig> {
        let city = self.catalog.city(&self.state.current_city);
        if city.is_none() {
            log::error!("no catalog entry for city {}", self.state.current_city);
        }
        city
    }

    /// 1-based week currently being played.
    pub fn current_week(&self) -> u32 {
        season::current_week(&self.state, &self.config)
    }

    pub fn generate_initial_prices(&mut self) {
        if let Some(city) = self.city() {
            let leave_out = price::leave_out_for(
                city,
                self.state.current_location,
                self.state.time_left,
                &self.config.price,
            );
            price::generate(&mut self.state.goods, leave_out, &mut self.rng);
        }
    }

    /// Current city's market view (pure projection).
    pub fn market_info(&self) -> Option<MarketInfo<'_>> {
        self.city().map(|city| market::market_info(&self.state, city))
    }

    /// Advance one week. A no-op once the game is over.
    pub fn next_time(&mut self) {
        if self.state.is_game_over {
            return;
        }
        let week = self.current_week();
        self.log.set_week(week);

        let Some(city) = self.city() else {
            return;
        };

        // Prices first so every later message sees this week's market.
        let leave_out = price::leave_out_for(
            city,
            self.state.current_location,
            self.state.time_left,
            &self.config.price,
        );
        price::generate(&mut self.state.goods, leave_out, &mut self.rng);

        self.process_interest();

        self.process_rent_drift();
        if week % self.config.time.weeks_per_month == 0 {
            self.process_monthly_rent();
        }

        self.settle_accommodation();
        if self.check_game_over() {
            return;
        }

        self.advance_prediction_market();

        self.check_luggage_loss();

        self.process_commercial_events();
        self.process_health_events();
        if self.state.is_game_over {
            return;
        }
        self.process_money_events();

        self.check_debt_limit();
        if self.state.is_game_over {
            return;
        }
        self.check_bank_hacking(self.config.financial.hacker_enabled);

        let hospitalized = self.check_forced_hospitalization();
        if !hospitalized {
            self.state.time_left = self.state.time_left.saturating_sub(1);
        }
        self.state.work_visits.clear();
        self.state.city_visits_this_week.clear();

        if self.check_game_over() {
            return;
        }

        if self.state.time_left == 1 {
            self.log.show("最后一周了，记得把所有商品都卖掉！");
        }
    }

    /// End the game if health or time has run out. Safe to call from any
    /// manager: health-death is immediate, not deferred to the tick boundary.
    pub(crate) fn check_game_over(&mut self) -> bool {
        if self.state.is_game_over {
            return true;
        }
        if self.state.time_left == 0 || self.state.health <= 0 {
            if self.state.health <= 0 {
                self.log
                    .show("你倒在街头，日记本上写着：\"我太累了，需要休息……\"");
            }
            self.end_game();
            return true;
        }
        false
    }

    /// Freeze the terminal result. Idempotent.
    pub fn end_game(&mut self) {
        if self.state.is_game_over {
            return;
        }
        self.state.is_game_over = true;

        let score = self.state.cash + self.state.bank_savings - self.state.debt;
        let evaluation = self.config.evaluate_score(score).to_string();
        let weeks_played = self.config.time.total_weeks - self.state.time_left;

        self.state.game_result = Some(GameResult {
            final_score: score,
            evaluation,
            weeks_played,
        });
    }

    /// Weekly ~8% chance of losing everything carried while unleased in the
    /// current city.
    pub(crate) fn check_luggage_loss(&mut self) {
        if self.state.total_goods == 0 || self.state.is_leased_here() {
            return;
        }
        if !self.rng.hit(self.config.hazards.luggage_loss_pct) {
            return;
        }
        for goods in &mut self.state.goods {
            goods.owned = 0;
        }
        self.state.total_goods = 0;
        self.log
            .show("你没有落脚点，随身带的货物在街头被偷了个精光！");
    }
}
