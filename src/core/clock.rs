//! Elapsed-time tracking.
//!
//! The engine itself never sleeps or schedules anything; an external
//! one-second tick asks for the elapsed value whenever it wants to display
//! it. The clock stores a start instant plus an accumulator of seconds
//! already banked, so completing a game freezes the value and reopening
//! the game (undo past a win) resumes from the accumulated total rather
//! than resetting.

use std::time::Instant;

/// Wall-clock accumulator for one game.
///
/// `running` + `banked` split: while running, elapsed = banked + time since
/// `started_at`; while frozen, elapsed = banked.
#[derive(Clone, Copy, Debug)]
pub struct GameClock {
    started_at: Option<Instant>,
    banked_secs: u64,
}

impl GameClock {
    /// A running clock starting now with nothing banked.
    #[must_use]
    pub fn start() -> Self {
        Self {
            started_at: Some(Instant::now()),
            banked_secs: 0,
        }
    }

    /// Whole seconds elapsed so far.
    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        let running = self
            .started_at
            .map(|t| t.elapsed().as_secs())
            .unwrap_or(0);
        self.banked_secs + running
    }

    /// Whether the clock is currently accumulating.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Stop accumulating, banking the current total.
    pub fn freeze(&mut self) {
        self.banked_secs = self.elapsed_secs();
        self.started_at = None;
    }

    /// Resume accumulating from the banked total. No-op while running.
    pub fn resume(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }
}
