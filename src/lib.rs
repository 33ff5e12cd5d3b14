// Domain layer - grid, rules and generation stepping
pub mod domain;

// Application layer - simulation state and scheduling
pub mod application;

// Startup configuration and window launch
pub mod config;
pub mod launch;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, Rule, presets, advance_generation};
pub use application::{GameState, SimulationClock, Viewport};
pub use config::{CliArgs, SimConfig};
