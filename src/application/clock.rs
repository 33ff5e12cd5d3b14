/// Fixed-timestep accumulator that decides how many generations are due.
///
/// Frame time is added to a lag counter and drained in whole steps, so the
/// simulation rate stays independent of the display rate. Timestamps are in
/// milliseconds from any monotonic origin.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationClock {
    step_ms: f64,
    lag_ms: f64,
    last_ms: Option<f64>,
    running: bool,
}

impl SimulationClock {
    /// New paused clock with no lag
    pub fn new(step_ms: f64) -> Self {
        debug_assert!(step_ms > 0.0);
        Self {
            step_ms,
            lag_ms: 0.0,
            last_ms: None,
            running: false,
        }
    }

    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }

    /// Time owed to the simulation that has not yet made up a full step
    pub fn lag_ms(&self) -> f64 {
        self.lag_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Stop and drop any owed time
    pub fn reset(&mut self) {
        self.running = false;
        self.lag_ms = 0.0;
    }

    /// Observe the current time and return the number of steps now due.
    ///
    /// The first observation only records the timestamp. While paused the timestamp
    /// still advances but no lag builds up, so resuming never triggers a burst.
    pub fn tick(&mut self, now_ms: f64) -> u32 {
        let elapsed = self.last_ms.map_or(0.0, |last| (now_ms - last).max(0.0));
        self.last_ms = Some(now_ms);

        if !self.running {
            return 0;
        }

        self.lag_ms += elapsed;
        let mut due = 0;
        while self.lag_ms >= self.step_ms {
            self.lag_ms -= self.step_ms;
            due += 1;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_clock(step_ms: f64) -> SimulationClock {
        let mut clock = SimulationClock::new(step_ms);
        clock.set_running(true);
        assert_eq!(clock.tick(0.0), 0);
        clock
    }

    #[test]
    fn test_first_tick_only_records_timestamp() {
        let mut clock = SimulationClock::new(250.0);
        clock.set_running(true);
        assert_eq!(clock.tick(10_000.0), 0);
        assert_eq!(clock.lag_ms(), 0.0);
    }

    #[test]
    fn test_catch_up_keeps_remainder() {
        let mut clock = running_clock(250.0);
        assert_eq!(clock.tick(999.0), 3);
        assert_eq!(clock.lag_ms(), 249.0);
    }

    #[test]
    fn test_exact_step() {
        let mut clock = running_clock(250.0);
        assert_eq!(clock.tick(250.0), 1);
        assert_eq!(clock.lag_ms(), 0.0);
    }

    #[test]
    fn test_lag_accumulates_across_frames() {
        let mut clock = running_clock(250.0);
        let due: u32 = (1..=15).map(|frame| clock.tick(frame as f64 * 16.0)).sum();
        // 240 ms is still short of one step
        assert_eq!(due, 0);
        assert_eq!(clock.tick(256.0), 1);
        assert_eq!(clock.lag_ms(), 6.0);
    }

    #[test]
    fn test_paused_clock_never_fires() {
        let mut clock = SimulationClock::new(250.0);
        assert_eq!(clock.tick(0.0), 0);
        assert_eq!(clock.tick(5_000.0), 0);
        assert_eq!(clock.lag_ms(), 0.0);
    }

    #[test]
    fn test_no_burst_after_resume() {
        let mut clock = running_clock(250.0);
        assert_eq!(clock.tick(100.0), 0);

        clock.set_running(false);
        assert_eq!(clock.tick(10_000.0), 0);
        assert_eq!(clock.tick(20_000.0), 0);

        clock.set_running(true);
        assert_eq!(clock.tick(20_100.0), 0);
        assert_eq!(clock.tick(20_150.0), 1);
    }

    #[test]
    fn test_backwards_time_is_ignored() {
        let mut clock = running_clock(250.0);
        assert_eq!(clock.tick(200.0), 0);
        assert_eq!(clock.tick(100.0), 0);
        assert_eq!(clock.lag_ms(), 200.0);
        assert_eq!(clock.tick(150.0), 1);
    }

    #[test]
    fn test_reset_stops_and_clears_lag() {
        let mut clock = running_clock(250.0);
        clock.tick(200.0);
        clock.reset();
        assert!(!clock.is_running());
        assert_eq!(clock.lag_ms(), 0.0);
    }
}
