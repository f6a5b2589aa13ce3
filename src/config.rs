//! Game-wide tunable parameters.
//!
//! Everything the simulation needs outside the per-city content catalog
//! lives here, fully resolved up front: no component falls back to its own
//! defaults at the call site.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub initial: InitialStats,
    pub time: TimeConfig,
    pub financial: FinancialConfig,
    pub price: PriceConfig,
    pub events: EventRanges,
    pub hazards: HazardConfig,
    /// Descending score tiers; the first tier whose `min` the final score
    /// reaches supplies the evaluation text.
    pub score_evaluations: Vec<ScoreTier>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitialStats {
    pub cash: i64,
    pub debt: i64,
    pub bank_savings: i64,
    pub health: i32,
    pub stamina: i32,
    pub fame: i32,
    pub base_capacity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeConfig {
    pub total_weeks: u32,
    /// Rent settles on every week divisible by this.
    pub weeks_per_month: u32,
    /// Forced hospitalization only triggers with more than this many weeks left.
    pub hospitalization_cutoff: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialConfig {
    pub debt_interest_rate: f64,
    pub bank_interest_rate: f64,
    pub max_debt_limit: i64,
    /// Flat health hit when debt crosses the ceiling.
    pub debt_penalty_health: i32,
    pub hacker_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceConfig {
    pub default_leave_out: usize,
    pub final_weeks_leave_out: usize,
    pub transportation_hub_leave_out: usize,
}

/// Upper bounds for the modulo-frequency event rolls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRanges {
    pub commercial_range: i64,
    pub health_range: i64,
    pub money_range: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardConfig {
    /// Weekly chance of losing all carried goods while unleased in the
    /// current city.
    pub luggage_loss_pct: i64,
    /// Per-transit luggage loss chances by travel mode.
    pub subway_loss_pct: i64,
    pub train_loss_pct: i64,
    pub plane_loss_pct: i64,
    /// Intercity tunnel fare = subway fare times this.
    pub tunnel_fare_multiplier: i64,
    pub homeless_health_penalty: i32,
    /// Per-leased-city weekly chance of a rent change event.
    pub rent_drift_pct: i64,
    /// Debt tacked on by the final commercial event in a pool whenever it
    /// fires with a goods grant.
    pub commercial_parting_debt: i64,
    /// Daily hospitalization charge range.
    pub hospitalization_cost_min: i64,
    pub hospitalization_cost_max: i64,
    pub hospitalization_health_restored: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreTier {
    pub min: i64,
    pub message: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial: InitialStats {
                cash: 2000,
                debt: 5000,
                bank_savings: 0,
                health: 100,
                stamina: 100,
                fame: 100,
                base_capacity: 100,
            },
            time: TimeConfig {
                total_weeks: 52,
                weeks_per_month: 4,
                hospitalization_cutoff: 3,
            },
            financial: FinancialConfig {
                debt_interest_rate: 0.10,
                bank_interest_rate: 0.01,
                max_debt_limit: 100_000,
                debt_penalty_health: 30,
                hacker_enabled: true,
            },
            price: PriceConfig {
                default_leave_out: 3,
                final_weeks_leave_out: 0,
                transportation_hub_leave_out: 0,
            },
            events: EventRanges {
                commercial_range: 950,
                health_range: 1000,
                money_range: 1000,
            },
            hazards: HazardConfig {
                luggage_loss_pct: 8,
                subway_loss_pct: 5,
                train_loss_pct: 10,
                plane_loss_pct: 12,
                tunnel_fare_multiplier: 3,
                homeless_health_penalty: 15,
                rent_drift_pct: 5,
                commercial_parting_debt: 2500,
                hospitalization_cost_min: 1000,
                hospitalization_cost_max: 9500,
                hospitalization_health_restored: 10,
            },
            score_evaluations: default_score_evaluations(),
        }
    }
}

fn default_score_evaluations() -> Vec<ScoreTier> {
    let tiers = [
        (1_000_000, "商界传奇！你的名字写进了创业教科书。"),
        (500_000, "身家丰厚，可以提前退休了。"),
        (100_000, "小有成就，街坊都叫你老板。"),
        (50_000, "辛苦一年，总算攒下了一笔家底。"),
        (10_000, "收支相抵，勉强算没白忙活。"),
        (0, "两手空空，明年再来吧。"),
        (i64::MIN, "血本无归，还欠了一屁股债……"),
    ];
    tiers
        .into_iter()
        .map(|(min, message)| ScoreTier {
            min,
            message: message.to_string(),
        })
        .collect()
}

impl GameConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.time.total_weeks == 0 {
            return Err("total_weeks must be positive".to_string());
        }
        if self.time.weeks_per_month == 0 {
            return Err("weeks_per_month must be positive".to_string());
        }
        if self.score_evaluations.is_empty() {
            return Err("score_evaluations must not be empty".to_string());
        }
        if self.initial.base_capacity <= 0 {
            return Err("base_capacity must be positive".to_string());
        }
        Ok(())
    }

    /// Evaluation text for a final score, via the descending tier table.
    pub fn evaluate_score(&self, score: i64) -> &str {
        for tier in &self.score_evaluations {
            if score >= tier.min {
                return &tier.message;
            }
        }
        self.score_evaluations
            .last()
            .map(|t| t.message.as_str())
            .unwrap_or("")
    }
}
