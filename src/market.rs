//! Market projection: the current city's purchasable-goods view.
//!
//! A pure read over shared goods state, rebuilt on every call so price
//! changes from events are always reflected. Holds no state of its own.

use crate::catalog::CityConfig;
use crate::state::{GameState, Goods};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoodsStatus {
    Available,
    InsufficientFunds,
    InsufficientSpace,
}

#[derive(Debug, Clone)]
pub struct MarketGoodsInfo<'a> {
    pub goods: &'a Goods,
    pub can_afford: bool,
    pub has_space: bool,
    pub can_buy: bool,
    pub status: GoodsStatus,
}

#[derive(Debug, Clone)]
pub struct MarketInfo<'a> {
    pub available_goods: Vec<MarketGoodsInfo<'a>>,
    pub total_available: usize,
    pub purchasable_count: usize,
    pub is_empty: bool,
}

/// Goods of the current city with a live price, cheapest first, annotated
/// with affordability and capacity status.
pub fn market_info<'a>(state: &'a GameState, city: &CityConfig) -> MarketInfo<'a> {
    let space = state.available_space();
    let mut available: Vec<MarketGoodsInfo<'a>> = state
        .goods
        .iter()
        .filter(|g| city.owns_goods(g.id) && g.price > 0)
        .map(|goods| {
            let can_afford = state.cash >= goods.price;
            let has_space = space >= 1;
            let can_buy = can_afford && has_space;
            let status = if !can_afford {
                GoodsStatus::InsufficientFunds
            } else if !has_space {
                GoodsStatus::InsufficientSpace
            } else {
                GoodsStatus::Available
            };
            MarketGoodsInfo { goods, can_afford, has_space, can_buy, status }
        })
        .collect();

    available.sort_by_key(|info| info.goods.price);

    let purchasable_count = available.iter().filter(|info| info.can_buy).count();
    MarketInfo {
        total_available: available.len(),
        purchasable_count,
        is_empty: available.is_empty(),
        available_goods: available,
    }
}

/// Most units of a good the player could buy right now, limited by cash
/// and remaining effective capacity.
pub fn max_purchase_quantity(state: &GameState, goods: &Goods) -> i64 {
    if goods.price <= 0 {
        return 0;
    }
    let by_cash = state.cash / goods.price;
    by_cash.min(state.available_space())
}
