//! Event pool definitions.
//!
//! Each city carries three read-only pools: commercial events move goods
//! prices (and sometimes force goods on the player), health events cost
//! health, money events move cash or savings. An event fires when a uniform
//! draw over the pool's configured range lands on a multiple of its `freq`,
//! so lower `freq` means more frequent.

use crate::season::SolarTerm;
use serde::{Deserialize, Serialize};

fn is_zero(n: &i64) -> bool {
    *n == 0
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommercialEvent {
    pub freq: i64,
    pub message: String,
    /// Global goods id (`city_id * GOODS_ID_BASE + index`).
    pub goods_id: i64,
    /// Exactly one of `price_multiplier` / `price_divider` is nonzero,
    /// unless the event is a pure grant.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub price_multiplier: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub price_divider: i64,
    /// Units forced into the player's inventory when the event fires.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub goods_given: i64,
    /// Charge collected before a grant; shortfall converts to debt.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub cost: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl CommercialEvent {
    /// Grant-only events still fire on goods whose price is withheld.
    pub fn is_pure_grant(&self) -> bool {
        self.goods_given > 0 && self.price_multiplier == 0 && self.price_divider == 0
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthEvent {
    pub freq: i64,
    pub message: String,
    pub damage: i32,
    #[serde(default)]
    pub sound: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoneyEvent {
    pub freq: i64,
    pub message: String,
    /// Percentage of current cash: positive deducts, negative pays out.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub cash_multiplier: i64,
    /// Wager-style event staking `min(cash, max_cash)`.
    #[serde(default)]
    pub cash_based: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub min_cash: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_cash: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit_multiplier: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loss_multiplier: Option<f64>,
    /// Fixed outcome; `None` flips a fair coin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_profit: Option<bool>,
    /// Drains a percentage of bank savings instead of cash.
    #[serde(default)]
    pub targets_savings: bool,
}

/// Tag eligibility shared by commercial and health events.
///
/// Untagged events are always eligible. A tagged event needs the current
/// season's tag, the exact solar-term name, or `transition` while the season
/// is spring or autumn.
pub fn tags_match(tags: &[String], term: SolarTerm) -> bool {
    if tags.is_empty() {
        return true;
    }
    tags.iter().any(|tag| {
        tag == term.season.tag()
            || tag == term.name
            || (tag == "transition" && term.season.is_transition())
    })
}
