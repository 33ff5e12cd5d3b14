/// Cell represents the fundamental unit in Conway's Game of Life.
///
/// `alive` is the visible state. `staged` holds the next-generation state while a
/// generation is being computed and is always false between generations.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Cell {
    pub alive: bool,
    pub staged: bool,
}

impl Cell {
    pub const DEAD: Cell = Cell { alive: false, staged: false };
    pub const ALIVE: Cell = Cell { alive: true, staged: false };

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        self.alive
    }

    /// Same cell with a new visible state; the staged marker is kept
    pub const fn with_alive(self, alive: bool) -> Self {
        Cell { alive, staged: self.staged }
    }

    /// Record the next-generation state without touching the visible one
    pub const fn stage(self, next: bool) -> Self {
        Cell { alive: self.alive, staged: next }
    }

    /// Promote the staged state and clear the marker
    pub const fn commit(self) -> Self {
        Cell { alive: self.staged, staged: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dead() {
        assert_eq!(Cell::default(), Cell::DEAD);
        assert!(!Cell::default().is_alive());
    }

    #[test]
    fn test_with_alive_preserves_marker() {
        let staged = Cell::DEAD.stage(true);
        assert_eq!(staged.with_alive(true), Cell { alive: true, staged: true });
        assert_eq!(staged.with_alive(false), Cell { alive: false, staged: true });
    }

    #[test]
    fn test_stage_keeps_visible_state() {
        let cell = Cell::ALIVE.stage(false);
        assert!(cell.is_alive());
        assert!(!cell.staged);
    }

    #[test]
    fn test_commit_promotes_and_clears() {
        assert_eq!(Cell::ALIVE.stage(false).commit(), Cell::DEAD);
        assert_eq!(Cell::DEAD.stage(true).commit(), Cell::ALIVE);
    }
}
