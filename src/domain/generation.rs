//! Generation stepping.
//!
//! A generation runs in two phases over the same grid: every cell first stages its
//! next state from the untouched visible states, then all staged states are committed
//! at once. No neighbor read can observe a write from the same generation.

use super::{Grid, Rule};

/// Phase 1: stage the next state of every cell, leaving `alive` untouched
pub fn stage_generation(grid: &mut Grid, rule: &dyn Rule) {
    let (width, height) = grid.dimensions();

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let cell = grid.get(x, y);
            let neighbors = grid.live_neighbors(x, y);
            grid.set(x, y, cell.stage(rule.evolve(cell.alive, neighbors)));
        }
    }
}

/// Advance the grid by exactly one generation
pub fn advance_generation(grid: &mut Grid, rule: &dyn Rule) {
    stage_generation(grid, rule);
    grid.commit_staged();
}
