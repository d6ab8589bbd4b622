use std::time::Instant;

/// Accumulates the wall-clock time spent between `start`/`stop` pairs.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Timer {
    pub total_time: u128,
    started_at: Option<Instant>,
}

impl Default for Timer {
    fn default() -> Self {
        Self { total_time: 0, started_at: None }
    }
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A timer that is already running.
    pub fn started() -> Self {
        let mut timer = Self::new();
        timer.start();
        timer
    }

    #[inline(always)]
    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    /// Stops the timer and returns the nanoseconds of the last lap. Stopping an
    /// idle timer is a no-op returning 0.
    #[inline(always)]
    pub fn stop(&mut self) -> u128 {
        let Some(started_at) = self.started_at.take() else {
            return 0;
        };

        let lap = started_at.elapsed().as_nanos();
        self.total_time += lap;
        lap
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }
}

#[test]
fn test_timer() {
    use std::{thread, time};

    let mut timer = Timer::started();

    thread::sleep(time::Duration::from_millis(20));

    let lap = timer.stop();

    assert!(lap >= 20_000_000);
    assert_eq!(timer.total_time, lap);
    assert!(!timer.is_running());
    assert_eq!(timer.stop(), 0);
}
