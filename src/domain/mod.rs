mod cell;
mod grid;
mod rules;
mod generation;
mod patterns;

pub use cell::Cell;
pub use grid::Grid;
pub use rules::{Rule, ConwayRule, LifeWithoutDeathRule};
pub use generation::{advance_generation, stage_generation};
pub use patterns::{Pattern, presets};
