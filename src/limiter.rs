//! Redraw throttling

use std::time::{Duration, Instant};

/// Decides whether a redraw is due; never sleeps
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    min_interval: Duration,
    last_render: Option<Instant>,
}

impl FrameLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_render: None,
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// True when `min_interval` has passed since the last accepted frame;
    /// an accepted frame is recorded at `now`
    pub fn should_render(&mut self, now: Instant) -> bool {
        let due = self
            .last_render
            .map(|last| now.saturating_duration_since(last) >= self.min_interval)
            .unwrap_or(true);
        if due {
            self.last_render = Some(now);
        }
        due
    }

    /// Let the next frame through regardless of timing
    pub fn force(&mut self) {
        self.last_render = None;
    }
}
