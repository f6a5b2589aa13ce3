pub mod buildings;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod events;
pub mod financial;
pub mod goods;
pub mod handlers;
pub mod log;
pub mod market;
pub mod prediction;
pub mod price;
pub mod rng;
pub mod season;
pub mod state;
pub mod travel;

pub use engine::Engine;

#[cfg(test)]
mod buildings_test;
#[cfg(test)]
mod handlers_test;
#[cfg(test)]
mod travel_test;
