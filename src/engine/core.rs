use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub app_name: String,
    pub window_width: u32,
    pub window_height: u32,
    /// Pause between the end of one frame and the start of the next.
    pub frame_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            app_name: "Bouncy Ball".to_string(),
            window_width: 900,
            window_height: 600,
            frame_delay_ms: 20,
        }
    }
}

impl EngineConfig {
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}

/// Paces frames with a fixed delay measured from the end of the previous
/// frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    delay: Duration,
    next_frame: Instant,
}

impl FrameClock {
    pub fn new(delay: Duration, now: Instant) -> Self {
        Self {
            delay,
            next_frame: now,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    pub fn deadline(&self) -> Instant {
        self.next_frame
    }

    /// Records that a frame finished at `now`.
    pub fn frame_finished(&mut self, now: Instant) {
        self.next_frame = now + self.delay;
    }
}
