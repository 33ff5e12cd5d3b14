use log::{debug, info, warn};
use rand::{SeedableRng, rngs::StdRng};

use super::SimulationClock;
use crate::config::SimConfig;
use crate::domain::{Grid, Pattern, Rule, advance_generation};

/// A frame owing more generations than this is treated as a stall
const STALL_WARN_STEPS: u32 = 8;

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub grid: Grid,
    pub rule: Box<dyn Rule>,
    pub clock: SimulationClock,
    pub generation: u64,
    /// Cell under the pointer, if any
    pub highlighted: Option<(i32, i32)>,
    pub quit_requested: bool,
    density: f64,
    rng: StdRng,
}

impl GameState {
    /// Create a paused, all-dead simulation from the configuration
    pub fn new(config: &SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            grid: Grid::new(config.grid.width as usize, config.grid.height as usize),
            rule: config.rule.build(),
            clock: SimulationClock::new(config.step_ms as f64),
            generation: 0,
            highlighted: None,
            quit_requested: false,
            density: config.density,
            rng,
        }
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn start(mut self) -> Self {
        if !self.clock.is_running() {
            info!("simulation started at generation {}", self.generation);
        }
        self.clock.set_running(true);
        self
    }

    pub fn pause(mut self) -> Self {
        if self.clock.is_running() {
            info!("simulation paused at generation {}", self.generation);
        }
        self.clock.set_running(false);
        self
    }

    /// Clear grid, stop and reset generation counter
    pub fn reset(mut self) -> Self {
        self.grid.reset_all();
        self.clock.reset();
        self.generation = 0;
        info!("grid reset");
        self
    }

    /// Randomize grid, stop and reset generation counter
    pub fn randomize(mut self) -> Self {
        self.grid.randomize(&mut self.rng, self.density);
        self.clock.reset();
        self.generation = 0;
        info!("grid randomized, population {}", self.grid.population());
        self
    }

    /// Advance exactly one generation; only while paused
    pub fn step_once(mut self) -> Self {
        if !self.clock.is_running() {
            self.evolve();
        }
        self
    }

    /// Set the cell at (x, y) alive or dead, keeping its staged marker
    pub fn paint(&mut self, x: i32, y: i32, alive: bool) {
        let cell = self.grid.get(x, y);
        self.grid.set(x, y, cell.with_alive(alive));
    }

    /// Stamp a pattern centered on the highlighted cell
    pub fn stamp(&mut self, pattern: &Pattern) {
        if let Some((x, y)) = self.highlighted {
            pattern.place_on(&mut self.grid, x, y);
            debug!("stamped {} ({}) at ({x}, {y})", pattern.name, pattern.description);
        }
    }

    fn evolve(&mut self) {
        advance_generation(&mut self.grid, self.rule.as_ref());
        self.generation += 1;
    }

    /// Update simulation for the frame observed at `now_ms`.
    /// Returns the number of generations run.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let due = self.clock.tick(now_ms);
        if !self.clock.is_running() {
            return 0;
        }

        if due > STALL_WARN_STEPS {
            warn!("frame stalled, catching up {due} generations");
        } else if due > 1 {
            debug!("catching up {due} generations");
        }

        for _ in 0..due {
            self.evolve();
        }
        due
    }
}
