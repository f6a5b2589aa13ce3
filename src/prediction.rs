//! Prediction-market side game.
//!
//! A small PolyMarket-style book over next week's goods prices. The engine
//! advances it once per tick: due events settle, bets pay out at the
//! option's final odds, and a fresh event spawns when the board runs thin.
//! Ids come from state counters so seeded runs replay.

use crate::engine::Engine;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionMarketState {
    pub active_events: Vec<PredictionEvent>,
    pub settled_events: Vec<PredictionEvent>,
    pub bets: Vec<PredictionBet>,
    pub total_bets_amount: i64,
    pub total_payout: i64,
    pub statistics: PredictionStats,
    pub next_event_id: u64,
    pub next_bet_id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionEvent {
    pub id: String,
    pub title: String,
    pub options: Vec<PredictionOption>,
    /// Week the event settles in; always in the future while active.
    pub settlement_week: u32,
    pub min_bet: i64,
    pub max_bet: i64,
    pub created_week: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionOption {
    pub id: String,
    pub text: String,
    pub odds: f64,
    pub total_bets: i64,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionBet {
    pub id: String,
    pub event_id: String,
    pub option_id: String,
    pub amount: i64,
    pub odds_at_bet: f64,
    pub bet_week: u32,
    pub settled: bool,
    pub payout: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionStats {
    pub total_predictions: u32,
    pub successful_predictions: u32,
    pub failed_predictions: u32,
    pub win_rate: f64,
    pub net_profit: i64,
}

const MARKET_FEE: f64 = 0.05;
const MIN_ODDS: f64 = 1.1;
const MAX_ODDS: f64 = 10.0;
const ACTIVE_EVENT_TARGET: usize = 2;

/// Recompute dynamic odds from the bet distribution: heavily backed options
/// shorten, empty options stay attractive.
fn update_odds(event: &mut PredictionEvent) {
    let total: i64 = event.options.iter().map(|o| o.total_bets).sum();
    if total == 0 {
        let equal = 1.0 / event.options.len().max(1) as f64;
        for option in &mut event.options {
            option.odds = equal;
        }
        return;
    }
    for option in &mut event.options {
        if option.total_bets == 0 {
            option.odds = (total as f64 / 100.0).max(2.0);
        } else {
            let base = total as f64 / option.total_bets as f64;
            option.odds = (base * (1.0 - MARKET_FEE)).clamp(MIN_ODDS, MAX_ODDS);
        }
    }
}

impl Engine<'_> {
    /// Stake cash on an option of an active event.
    pub fn place_bet(&mut self, event_id: &str, option_id: &str, amount: i64) -> bool {
        if self.state.cash < amount {
            self.log.show("现金不足，无法投注");
            return false;
        }
        let week = self.current_week();
        let market = &mut self.state.prediction_market;
        let Some(event) = market.active_events.iter_mut().find(|e| e.id == event_id) else {
            self.log.show("事件不存在或已结算");
            return false;
        };
        if amount < event.min_bet {
            let min = event.min_bet;
            self.log.show(format!("最小投注金额为{min}元"));
            return false;
        }
        if amount > event.max_bet {
            let max = event.max_bet;
            self.log.show(format!("最大投注金额为{max}元"));
            return false;
        }
        let Some(option) = event.options.iter_mut().find(|o| o.id == option_id) else {
            self.log.show("选项不存在");
            return false;
        };

        self.state.cash -= amount;
        let odds_at_bet = option.odds;
        option.total_bets += amount;

        market.next_bet_id += 1;
        let bet = PredictionBet {
            id: format!("bet_{}", market.next_bet_id),
            event_id: event_id.to_string(),
            option_id: option_id.to_string(),
            amount,
            odds_at_bet,
            bet_week: week,
            settled: false,
            payout: 0,
        };
        let title = event.title.clone();
        update_odds(event);
        market.bets.push(bet);
        market.total_bets_amount += amount;

        self.log.show(format!("在\"{title}\"上投注{amount}元"));
        true
    }

    /// Per-tick advance: settle everything due, then keep the board topped
    /// up with price-prediction events for the current city.
    pub(crate) fn advance_prediction_market(&mut self) {
        let week = self.current_week();

        let due: Vec<String> = self
            .state
            .prediction_market
            .active_events
            .iter()
            .filter(|e| e.settlement_week > 0 && week >= e.settlement_week)
            .map(|e| e.id.clone())
            .collect();
        for event_id in due {
            self.settle_prediction_event(&event_id);
        }

        if self.state.prediction_market.active_events.len() < ACTIVE_EVENT_TARGET {
            self.spawn_prediction_event(week);
        }
    }

    /// Resolve an event: pick the winning option (weighted by money when
    /// any is staked), pay winners at the option's final odds, move the
    /// event to the settled list.
    fn settle_prediction_event(&mut self, event_id: &str) {
        let market = &mut self.state.prediction_market;
        let Some(position) = market.active_events.iter().position(|e| e.id == event_id) else {
            return;
        };
        let mut event = market.active_events.remove(position);

        let total: i64 = event.options.iter().map(|o| o.total_bets).sum();
        let winner = if total > 0 {
            let mut draw = self.rng.num(total);
            let mut pick = 0;
            for (index, option) in event.options.iter().enumerate() {
                if draw < option.total_bets {
                    pick = index;
                    break;
                }
                draw -= option.total_bets;
            }
            pick
        } else {
            self.rng.num(event.options.len() as i64) as usize
        };
        event.options[winner].is_correct = true;
        let winner_id = event.options[winner].id.clone();
        let winner_odds = event.options[winner].odds;

        let mut cash_won = 0;
        for bet in market
            .bets
            .iter_mut()
            .filter(|b| b.event_id == event_id && !b.settled)
        {
            bet.settled = true;
            market.statistics.total_predictions += 1;
            if bet.option_id == winner_id {
                let payout = (bet.amount as f64 * winner_odds).floor() as i64;
                bet.payout = payout;
                cash_won += payout;
                market.total_payout += payout;
                market.statistics.successful_predictions += 1;
                market.statistics.net_profit += payout - bet.amount;
            } else {
                bet.payout = 0;
                market.statistics.failed_predictions += 1;
                market.statistics.net_profit -= bet.amount;
            }
        }
        let stats = &mut market.statistics;
        if stats.total_predictions > 0 {
            stats.win_rate =
                stats.successful_predictions as f64 / stats.total_predictions as f64 * 100.0;
        }
        self.state.cash += cash_won;

        let title = event.title.clone();
        self.state.prediction_market.settled_events.push(event);
        if cash_won > 0 {
            self.log
                .show(format!("预测事件\"{title}\"结算，你赢得{cash_won}元！"));
        } else {
            self.log.show(format!("预测事件\"{title}\"已结算"));
        }
    }

    /// New event asking where a random priced good of the current city will
    /// land next week.
    fn spawn_prediction_event(&mut self, week: u32) {
        let Some(city) = self.city() else {
            return;
        };
        let priced: Vec<(String, i64)> = self
            .state
            .goods
            .iter()
            .filter(|g| city.owns_goods(g.id) && g.price > 0)
            .map(|g| (g.name.clone(), g.price))
            .collect();
        if priced.is_empty() {
            return;
        }
        let (name, price) = priced[self.rng.num(priced.len() as i64) as usize].clone();

        let low = price * 80 / 100;
        let high = price * 120 / 100;
        let market = &mut self.state.prediction_market;
        market.next_event_id += 1;
        let initial_odds = 1.0 / 3.0;
        let event = PredictionEvent {
            id: format!("event_{}", market.next_event_id),
            title: format!("{name}下周价位"),
            options: vec![
                PredictionOption {
                    id: format!("under_{low}"),
                    text: format!("低于{low}元"),
                    odds: initial_odds,
                    total_bets: 0,
                    is_correct: false,
                },
                PredictionOption {
                    id: format!("{low}_{high}"),
                    text: format!("{low}元到{high}元之间"),
                    odds: initial_odds,
                    total_bets: 0,
                    is_correct: false,
                },
                PredictionOption {
                    id: format!("over_{high}"),
                    text: format!("高于{high}元"),
                    odds: initial_odds,
                    total_bets: 0,
                    is_correct: false,
                },
            ],
            settlement_week: week + self.rng.range(1, 2) as u32,
            min_bet: 100,
            max_bet: 10_000,
            created_week: week,
        };
        market.active_events.push(event);
    }
}
