//! The single mutable game-state aggregate.
//!
//! Every manager mutates this structure in place; correctness rests on the
//! engine's fixed per-tick sequencing, not on isolation. The state is built
//! fresh at game start and replaced wholesale on restart.

use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::prediction::PredictionMarketState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Runtime goods record. `id` is globally unique across cities, so a good
/// keeps its identity (and the player's holdings) while travelling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goods {
    pub id: i64,
    pub name: String,
    pub base_price: i64,
    pub price_range: i64,
    /// Current market price; 0 means withheld/unavailable this week.
    pub price: i64,
    pub owned: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub final_score: i64,
    pub evaluation: String,
    pub weeks_played: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub cash: i64,
    pub debt: i64,
    pub bank_savings: i64,
    pub health: i32,
    pub stamina: i32,
    pub max_stamina: i32,
    pub fame: i32,
    /// Weeks remaining; the game ends when this reaches 0.
    pub time_left: u32,
    pub current_city: String,
    pub current_location: i64,
    pub goods: Vec<Goods>,
    /// Kept in sync with `sum(goods.owned)` by every mutator.
    pub total_goods: i64,
    /// Suitcase floor available even with no lease anywhere.
    pub base_capacity: i64,
    /// Base plus every rented house's capacity bonus across cities.
    pub max_capacity: i64,
    pub rented_cities: Vec<String>,
    /// City key -> rented house type id.
    pub rented_houses: BTreeMap<String, String>,
    /// City key -> rent drift multiplier, bounded [0.5, 1.5].
    pub rent_multipliers: BTreeMap<String, f64>,
    /// Work type id -> uses this week; cleared every tick.
    pub work_visits: BTreeMap<String, u32>,
    pub city_visits_this_week: Vec<String>,
    pub sound_enabled: bool,
    pub is_game_over: bool,
    pub game_result: Option<GameResult>,
    pub prediction_market: PredictionMarketState,
}

impl GameState {
    /// Fresh state for a new game starting in `start_city`.
    ///
    /// The goods list is the union of every city's catalog so holdings
    /// survive travel; everything starts unpriced and unowned.
    pub fn new(catalog: &Catalog, config: &GameConfig, start_city: &str) -> Result<Self, String> {
        let city = catalog
            .city(start_city)
            .ok_or_else(|| format!("unknown starting city {start_city}"))?;

        let mut goods = Vec::new();
        for source in &catalog.cities {
            for (index, def) in source.goods.iter().enumerate() {
                goods.push(Goods {
                    id: source.goods_id(index),
                    name: def.name.clone(),
                    base_price: def.base_price,
                    price_range: def.price_range,
                    price: 0,
                    owned: 0,
                });
            }
        }

        let start_location = city.first_location().map(|l| l.id).unwrap_or(0);

        Ok(Self {
            cash: config.initial.cash,
            debt: config.initial.debt,
            bank_savings: config.initial.bank_savings,
            health: config.initial.health,
            stamina: config.initial.stamina,
            max_stamina: config.initial.stamina,
            fame: config.initial.fame,
            time_left: config.time.total_weeks,
            current_city: city.key.clone(),
            current_location: start_location,
            goods,
            total_goods: 0,
            base_capacity: config.initial.base_capacity,
            max_capacity: config.initial.base_capacity,
            rented_cities: Vec::new(),
            rented_houses: BTreeMap::new(),
            rent_multipliers: BTreeMap::new(),
            work_visits: BTreeMap::new(),
            city_visits_this_week: Vec::new(),
            sound_enabled: true,
            is_game_over: false,
            game_result: None,
            prediction_market: PredictionMarketState::default(),
        })
    }

    pub fn goods_by_id(&self, id: i64) -> Option<&Goods> {
        self.goods.iter().find(|g| g.id == id)
    }

    pub fn goods_by_id_mut(&mut self, id: i64) -> Option<&mut Goods> {
        self.goods.iter_mut().find(|g| g.id == id)
    }

    /// Ensure a catalog good exists in live state, materializing it at
    /// price 0 / owned 0 on first reference. Idempotent; returns the index
    /// into `goods`, or `None` for an id absent from the catalog.
    pub fn ensure_goods(&mut self, catalog: &Catalog, id: i64) -> Option<usize> {
        if let Some(index) = self.goods.iter().position(|g| g.id == id) {
            return Some(index);
        }
        let (_, def) = catalog.goods_def(id)?;
        self.goods.push(Goods {
            id,
            name: def.name.clone(),
            base_price: def.base_price,
            price_range: def.price_range,
            price: 0,
            owned: 0,
        });
        Some(self.goods.len() - 1)
    }

    pub fn is_leased_in(&self, city_key: &str) -> bool {
        self.rented_cities.iter().any(|c| c == city_key)
    }

    pub fn is_leased_here(&self) -> bool {
        self.is_leased_in(&self.current_city)
    }

    /// Capacity usable right now: full capacity only where the player holds
    /// a lease, the suitcase floor everywhere else.
    pub fn effective_capacity(&self) -> i64 {
        if self.rented_cities.iter().any(|c| *c == self.current_city) {
            self.max_capacity
        } else {
            self.base_capacity
        }
    }

    pub fn available_space(&self) -> i64 {
        (self.effective_capacity() - self.total_goods).max(0)
    }

    pub fn rent_multiplier(&self, city_key: &str) -> f64 {
        self.rent_multipliers.get(city_key).copied().unwrap_or(1.0)
    }

    /// Recompute `total_goods` from the goods list.
    pub fn recount_goods(&mut self) {
        self.total_goods = self.goods.iter().map(|g| g.owned).sum();
    }

    pub fn add_health(&mut self, delta: i32) {
        self.health = (self.health + delta).clamp(0, 100);
    }

    pub fn add_stamina(&mut self, delta: i32) {
        self.stamina = (self.stamina + delta).clamp(0, self.max_stamina);
    }

    pub fn add_fame(&mut self, delta: i32) {
        self.fame = (self.fame + delta).clamp(0, 100);
    }
}
