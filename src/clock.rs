use std::time::Duration;

/// Converts wall-clock time into a whole number of fixed logical ticks so the
/// physics advances at the same rate however fast frames are drawn.
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    step: Duration,
    accumulator: Duration,
    max_ticks_per_frame: u32,
}

impl FixedStepClock {
    pub fn new(tick_rate: u32, max_ticks_per_frame: u32) -> Self {
        FixedStepClock {
            step: Duration::from_secs(1) / tick_rate.max(1),
            accumulator: Duration::ZERO,
            max_ticks_per_frame: max_ticks_per_frame.max(1),
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Adds `elapsed` wall time and returns how many ticks are now due.
    ///
    /// After a long stall at most `max_ticks_per_frame` ticks are returned and
    /// the remaining backlog is dropped.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut due = 0;
        while self.accumulator >= self.step && due < self.max_ticks_per_frame {
            self.accumulator -= self.step;
            due += 1;
        }
        if due == self.max_ticks_per_frame {
            self.accumulator = self.accumulator.min(self.step);
        }
        due
    }

    pub fn until_next_tick(&self) -> Duration {
        self.step.saturating_sub(self.accumulator)
    }
}
