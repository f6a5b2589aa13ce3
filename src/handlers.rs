//! The three weekly event handlers: commercial, health, money.
//!
//! All three roll `uniform(0, range) % freq == 0` per event. Commercial
//! scans the whole pool and guarantees at least one message per week via a
//! fallback pick; health stops on the first event that fires; money
//! evaluates every event independently.

use crate::engine::Engine;
use crate::events::{self, CommercialEvent};
use crate::season;

impl Engine<'_> {
    pub fn process_commercial_events(&mut self) {
        let Some(city) = self.city() else {
            return;
        };
        let term = season::solar_term_for_state(&self.state, &self.config);
        let pool = &city.events.commercial;

        let mut fired = false;
        for (index, event) in pool.iter().enumerate() {
            if event.freq <= 0 || !events::tags_match(&event.tags, term) {
                continue;
            }
            let roll = self.rng.num(self.config.events.commercial_range);
            if roll % event.freq != 0 {
                continue;
            }
            let is_last = index == pool.len() - 1;
            if self.apply_commercial_event(event, is_last) {
                fired = true;
            }
        }

        // Guarantee at least one commercial message per week when any event
        // targets a currently priced good.
        if !fired && !pool.is_empty() {
            let candidates: Vec<&CommercialEvent> = pool
                .iter()
                .filter(|e| {
                    self.state
                        .goods_by_id(e.goods_id)
                        .is_some_and(|g| g.price > 0)
                })
                .collect();
            if !candidates.is_empty() {
                let pick = self.rng.num(candidates.len() as i64) as usize;
                self.apply_commercial_event(candidates[pick], false);
            }
        }
    }

    /// Apply one commercial event; returns whether it produced a message.
    fn apply_commercial_event(&mut self, event: &CommercialEvent, is_last: bool) -> bool {
        let Some(index) = self.state.ensure_goods(self.catalog, event.goods_id) else {
            // Must not happen for well-formed content.
            log::error!(
                "commercial event \"{}\" references unknown goods id {}",
                event.message,
                event.goods_id
            );
            return false;
        };

        let name = self.state.goods[index].name.clone();
        if self.state.goods[index].price == 0 && !event.is_pure_grant() {
            return false;
        }

        let mut message = event.message.clone();
        if event.price_multiplier > 0 {
            let goods = &mut self.state.goods[index];
            let old = goods.price;
            goods.price *= event.price_multiplier;
            message = format!("{}，{}价格从{}元涨到{}元", event.message, name, old, goods.price);
        } else if event.price_divider > 0 {
            let goods = &mut self.state.goods[index];
            let old = goods.price;
            goods.price /= event.price_divider;
            message = format!("{}，{}价格从{}元跌到{}元", event.message, name, old, goods.price);
        }

        if event.goods_given > 0 {
            // A paid grant never blocks: any shortfall becomes debt.
            if event.cost > 0 {
                if self.state.cash >= event.cost {
                    self.state.cash -= event.cost;
                } else {
                    let shortfall = event.cost - self.state.cash;
                    self.state.cash = 0;
                    self.state.debt += shortfall;
                }
            }

            let added = self.add_goods(event.goods_id, event.goods_given);
            let cost_text = if event.cost > 0 {
                format!("，花费{}元", event.cost)
            } else {
                String::new()
            };

            if is_last {
                // The final pool entry always leaves a parting sting.
                let sting = self.config.hazards.commercial_parting_debt;
                self.state.debt += sting;
                message = if added > 0 {
                    format!("{}，获得{}件{}{}，债务+{}元", event.message, added, name, cost_text, sting)
                } else {
                    format!("{}{}，仓库已满，无法获得商品，债务+{}元", event.message, cost_text, sting)
                };
            } else if added > 0 {
                message = format!("{}，获得{}件{}{}", event.message, added, name, cost_text);
            } else {
                message = format!("{}{}，仓库已满，无法获得商品", event.message, cost_text);
            }
        }

        self.log.show(message);
        true
    }

    /// First eligible health event that fires costs health and stops the
    /// scan. A kill is reported to the engine immediately.
    pub fn process_health_events(&mut self) {
        let Some(city) = self.city() else {
            return;
        };
        let term = season::solar_term_for_state(&self.state, &self.config);

        for event in &city.events.health {
            if event.freq <= 0 || !events::tags_match(&event.tags, term) {
                continue;
            }
            let roll = self.rng.num(self.config.events.health_range);
            if roll % event.freq != 0 {
                continue;
            }
            self.state.health = (self.state.health - event.damage).max(0);
            self.log.show(format!("{}，健康-{}", event.message, event.damage));
            self.log.play(&event.sound);
            if self.state.health == 0 {
                self.check_game_over();
            }
            return;
        }
    }

    pub fn process_money_events(&mut self) {
        let Some(city) = self.city() else {
            return;
        };

        for event in &city.events.money {
            if event.freq <= 0 {
                continue;
            }
            let roll = self.rng.num(self.config.events.money_range);
            if roll % event.freq != 0 {
                continue;
            }

            let mut message = String::new();
            if event.cash_based {
                let min_cash = if event.min_cash > 0 { event.min_cash } else { 1000 };
                let max_cash = if event.max_cash > 0 { event.max_cash } else { 100_000 };
                if self.state.cash < min_cash {
                    continue;
                }
                let stake = self.state.cash.min(max_cash);
                let is_profit = match event.is_profit {
                    Some(fixed) => fixed,
                    None => self.rng.num(100) < 50,
                };
                if is_profit {
                    if let Some(multiplier) = event.profit_multiplier {
                        let profit = (stake as f64 * multiplier).floor() as i64;
                        self.state.cash += profit;
                        message = format!("{}，赚了{}元！", event.message, profit);
                    }
                } else if let Some(multiplier) = event.loss_multiplier {
                    let loss = (stake as f64 * multiplier).floor() as i64;
                    self.state.cash = (self.state.cash - loss).max(0);
                    message = format!("{}，损失了{}元", event.message, loss);
                }
            } else if event.targets_savings {
                if self.state.bank_savings > 0 {
                    let loss = self.state.bank_savings * event.cash_multiplier / 100;
                    self.state.bank_savings = (self.state.bank_savings - loss).max(0);
                    message = if loss > 0 {
                        format!("{}，你的存款减少了{}元，倒霉呀！", event.message, loss)
                    } else {
                        event.message.clone()
                    };
                }
            } else if event.cash_multiplier != 0 {
                let rate = event.cash_multiplier.abs();
                let delta = self.state.cash * rate / 100;
                if event.cash_multiplier > 0 {
                    self.state.cash = (self.state.cash - delta).max(0);
                    message = if delta > 0 {
                        format!("{}，现金减少了{}元", event.message, delta)
                    } else {
                        event.message.clone()
                    };
                } else {
                    self.state.cash += delta;
                    message = if delta > 0 {
                        format!("{}，赚了{}元！", event.message, delta)
                    } else {
                        event.message.clone()
                    };
                }
            }

            if !message.is_empty() {
                self.log.show(message);
            }
        }
    }
}
