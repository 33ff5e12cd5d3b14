mod clock;
mod game_state;
mod viewport;

pub use clock::SimulationClock;
pub use game_state::GameState;
pub use viewport::Viewport;
