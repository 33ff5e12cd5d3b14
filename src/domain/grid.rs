use super::Cell;
use rand::Rng;

/// Grid manages the 2D cellular automaton grid.
///
/// Cells live in one row-major buffer. The edges are hard: every coordinate outside
/// the grid reads as a dead cell and ignores writes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::DEAD; width * height],
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to a buffer index, `None` outside the grid
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Get cell at position; out of bounds reads as a dead cell
    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.index(x, y)
            .map_or(Cell::DEAD, |idx| self.cells[idx])
    }

    /// Set cell at position; out of bounds writes are ignored
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = cell;
        }
    }

    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_alive()
    }

    /// Count live neighbors; the border behaves as permanently dead.
    /// Neighbors whose coordinates overflow `i32` count as dead too.
    pub fn live_neighbors(&self, x: i32, y: i32) -> u8 {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(|(dx, dy)| Some((x.checked_add(dx)?, y.checked_add(dy)?)))
            .filter(|&(nx, ny)| self.is_alive(nx, ny))
            .count() as u8
    }

    /// Promote every staged marker into the visible state
    pub(crate) fn commit_staged(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = cell.commit());
    }

    /// Reset every cell to dead with no marker
    pub fn reset_all(&mut self) {
        self.cells.fill(Cell::DEAD);
    }

    /// Fill the grid at random; each cell is alive with probability `density`
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = density.clamp(0.0, 1.0);
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(density) {
                Cell::ALIVE
            } else {
                Cell::DEAD
            };
        });
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }
}
