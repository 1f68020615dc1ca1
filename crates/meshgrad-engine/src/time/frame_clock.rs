use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Clamped time since the previous tick.
    pub dt: Duration,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic tick counter.
    pub frame_index: u64,
}

/// Wall clock producing clamped frame deltas.
///
/// Delta time is clamped so a stalled or suspended host (debugger, minimised
/// window, dropped frames) resumes the animation where it left off instead of
/// jumping ahead by the whole stall.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    frame_index: u64,
    dt_max: Duration,
}

impl FrameClock {
    /// Longest delta a single tick may report.
    pub const DEFAULT_DT_MAX: Duration = Duration::from_millis(250);

    /// Creates a clock whose first tick reports a zero delta.
    pub fn new() -> Self {
        Self::with_max_delta(Self::DEFAULT_DT_MAX)
    }

    pub fn with_max_delta(dt_max: Duration) -> Self {
        Self {
            last: None,
            frame_index: 0,
            dt_max,
        }
    }

    /// Forgets the previous tick; the next tick reports a zero delta.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Advances the clock to the current instant.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    ///
    /// Timestamps earlier than the previous one yield a zero delta.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = match self.last {
            Some(last) => now.saturating_duration_since(last).min(self.dt_max),
            None => Duration::ZERO,
        };
        self.last = Some(now);

        let ft = FrameTime {
            dt,
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
