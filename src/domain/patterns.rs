use super::Grid;

/// Represents a pattern that can be stamped onto the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(i32, i32)>,  // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i32, i32)>) -> Self {
        let width = cells.iter().map(|&(x, _)| x).max().map_or(0, |x| x as usize + 1);
        let height = cells.iter().map(|&(_, y)| y).max().map_or(0, |y| y as usize + 1);
        Self { name, description, width, height, cells }
    }

    /// Stamp the pattern centered on (cx, cy).
    /// Cells that land outside the grid are clipped; existing cells are left alone.
    pub fn place_on(&self, grid: &mut Grid, cx: i32, cy: i32) {
        let origin_x = cx.saturating_sub(self.width as i32 / 2);
        let origin_y = cy.saturating_sub(self.height as i32 / 2);
        for &(dx, dy) in &self.cells {
            // Offsets that overflow are off the grid anyway
            let (Some(x), Some(y)) = (origin_x.checked_add(dx), origin_y.checked_add(dy)) else {
                continue;
            };
            let cell = grid.get(x, y);
            grid.set(x, y, cell.with_alive(true));
        }
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ]
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (1, 0), (2, 0)]
        )
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ]
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ]
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ]
        )
    }

    /// Patterns in hotkey order (1-6)
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            lwss(),
            block(),
        ]
    }
}
