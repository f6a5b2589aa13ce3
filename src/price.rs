//! Weekly market price regeneration.

use crate::catalog::CityConfig;
use crate::config::PriceConfig;
use crate::rng::GameRng;
use crate::state::Goods;

/// Recompute every priced good's current price from its base/range band,
/// then withhold `leave_out` of the priced goods (without replacement),
/// zeroing their price to simulate stock-outs. Mutates `goods` in place.
pub fn generate(goods: &mut [Goods], leave_out: usize, rng: &mut GameRng) {
    for item in goods.iter_mut() {
        if item.base_price > 0 && item.price_range > 0 {
            item.price = item.base_price + rng.num(item.price_range);
        }
    }

    let mut available: Vec<usize> = goods
        .iter()
        .enumerate()
        .filter(|(_, g)| g.base_price > 0 && g.price_range > 0 && g.price > 0)
        .map(|(i, _)| i)
        .collect();

    // Fewer priced goods than requested: withhold only what exists.
    let actual = leave_out.min(available.len());
    for _ in 0..actual {
        let pick = rng.num(available.len() as i64) as usize;
        let index = available.swap_remove(pick);
        goods[index].price = 0;
    }
}

/// How many goods to withhold this week. Transportation hubs are always
/// fully stocked, and the final weeks leave everything on sale so the
/// player can liquidate.
pub fn leave_out_for(
    city: &CityConfig,
    current_location: i64,
    time_left: u32,
    config: &PriceConfig,
) -> usize {
    let at_hub = city
        .location(current_location)
        .is_some_and(|l| l.is_transportation_hub());
    if at_hub {
        return config.transportation_hub_leave_out;
    }
    if time_left <= 2 {
        return config.final_weeks_leave_out;
    }
    config.default_leave_out
}
