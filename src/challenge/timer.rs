//! Cancellable countdown owned by a challenge session.
//!
//! The host event loop calls `tick()` once per second. The timer is not a
//! thread or a task: it only keeps the remaining-seconds counter and a
//! stopped flag, so a tick arriving after resolution or cancellation is
//! observed as `TimerTick::Stopped` and cannot re-fire the timeout path.

use serde::{Deserialize, Serialize};

/// Seconds on the clock when a challenge starts.
pub const CHALLENGE_SECONDS: u32 = 30;

/// Result of advancing the countdown by one second.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerTick {
    /// Still counting; payload is the seconds remaining.
    Running(u32),
    /// This tick brought the clock to zero. Fires at most once.
    Expired,
    /// The timer was already stopped; the tick was ignored.
    Stopped,
}

/// One-second countdown with an explicit stop.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CountdownTimer {
    remaining: u32,
    stopped: bool,
}

impl CountdownTimer {
    /// Create a running countdown with the given number of seconds.
    #[must_use]
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            stopped: seconds == 0,
        }
    }

    /// Seconds remaining.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether the countdown has been stopped (expired or cancelled).
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Advance by one second.
    ///
    /// Reaching zero stops the timer and returns `Expired` exactly once;
    /// every later tick returns `Stopped`.
    pub fn tick(&mut self) -> TimerTick {
        if self.stopped {
            return TimerTick::Stopped;
        }

        self.remaining -= 1;
        if self.remaining == 0 {
            self.stopped = true;
            TimerTick::Expired
        } else {
            TimerTick::Running(self.remaining)
        }
    }

    /// Stop the countdown. Idempotent.
    pub fn stop(&mut self) {
        self.stopped = true;
    }
}
