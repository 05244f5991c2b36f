use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous baseline, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// The baseline is the last `tick()` or `reset()`. The runtime resets it
/// right after a frame is drawn, so the next delta covers the time spent
/// waiting for the display rather than the frame's own work.
///
/// Deltas are unclamped by default so accumulated animation time follows the
/// wall clock. `with_max_delta` caps them for callers that prefer to skip
/// long stalls (debugger pauses, minimized windows).
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_max: Option<Duration>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_max: None,
        }
    }

    /// Creates a clock whose deltas never exceed `dt_max`.
    pub fn with_max_delta(dt_max: Duration) -> Self {
        Self {
            dt_max: Some(dt_max),
            ..Self::new()
        }
    }

    /// Moves the baseline to now.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let mut dt = now.saturating_duration_since(self.last);
        if let Some(max) = self.dt_max {
            dt = dt.min(max);
        }

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
