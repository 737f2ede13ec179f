use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Milliseconds since the clock was created. This is the shared
    /// animation clock fed to `AnimationPhase::at`.
    pub clock_ms: f64,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// One clock per render loop; the per-loop baseline keeps multiple loader
/// instances from sharing delta-time state.
///
/// Delta time is clamped to avoid pathological values when the loop is
/// paused by the debugger, minimized, or stalls. The `clock_ms` baseline is
/// never clamped: wave phase is a pure function of wall-clock time.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps.
    ///
    /// Clamp rationale:
    /// - minimum prevents zero-dt behavior from tight loops on some platforms
    /// - maximum prevents simulation explosions after long stalls
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            frame_index: 0,
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
        }
    }

    /// Resets both the delta baseline and the animation clock.
    ///
    /// Useful when resuming from suspension; wave phase restarts at zero.
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.start = now;
        self.last = now;
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let mut dt = now.saturating_duration_since(self.last);

        // Clamp delta time to keep downstream systems stable.
        if dt < self.dt_min {
            dt = self.dt_min;
        } else if dt > self.dt_max {
            dt = self.dt_max;
        }

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            clock_ms: now.saturating_duration_since(self.start).as_secs_f64() * 1000.0,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_advances_frame_index() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
    }

    #[test]
    fn clock_ms_is_monotonic() {
        let mut clock = FrameClock::new();
        let a = clock.tick().clock_ms;
        let b = clock.tick().clock_ms;
        assert!(b >= a);
    }

    #[test]
    fn dt_respects_clamp_floor() {
        let mut clock = FrameClock::new();
        let ft = clock.tick();
        assert!(ft.dt >= 0.0001);
    }
}
