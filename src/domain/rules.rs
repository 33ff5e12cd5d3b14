/// Trait for the birth/survival rule applied to each cell
pub trait Rule {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Next alive state for a cell with the given number of live neighbors (0-8)
    fn evolve(&self, alive: bool, neighbors: u8) -> bool;
}

/// Conway's Game of Life (B3/S23)
/// The classic cellular automaton rules
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "Conway"
    }

    fn description(&self) -> &'static str {
        "B3/S23 - Classic"
    }

    fn evolve(&self, alive: bool, neighbors: u8) -> bool {
        matches!((alive, neighbors), (true, 2 | 3) | (false, 3))
    }
}

/// Life without Death (B3/S012345678)
///
/// Reproduces the older staging behavior where under- and overpopulated cells were
/// staged as alive, so live cells never die. Births still need exactly 3 neighbors.
#[derive(Clone, Copy, Debug, Default)]
pub struct LifeWithoutDeathRule;

impl Rule for LifeWithoutDeathRule {
    fn name(&self) -> &'static str {
        "Life without Death"
    }

    fn description(&self) -> &'static str {
        "B3/S012345678 - Legacy staging"
    }

    fn evolve(&self, alive: bool, neighbors: u8) -> bool {
        alive || neighbors == 3
    }
}
