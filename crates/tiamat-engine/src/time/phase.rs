use std::f64::consts::TAU;

use crate::wave::config::DEFAULT_PERIOD_MS;

/// Corner-softness bounds for curvature-based variants.
pub const ROUNDNESS_MIN: f64 = 0.1;
pub const ROUNDNESS_MAX: f64 = 0.5;

/// The roundness oscillation runs slower than the wave itself.
const ROUNDNESS_CYCLE_RATIO: f64 = 0.6;
const MIN_ROUNDNESS_CYCLE_MS: f64 = 600.0;

/// Per-wave oscillation phase for one frame.
///
/// Derived from the shared millisecond clock and the wave's period; recomputed
/// every tick and never retained.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationPhase {
    /// Position within the current cycle, in `[0, 2π)`.
    pub wrapped_rad: f64,

    /// Unwrapped, monotonically increasing phase. Drives motion that must
    /// not visibly snap when the cycle wraps (the `travel` variant).
    pub continuous_rad: f64,

    /// Slow secondary oscillation in `[ROUNDNESS_MIN, ROUNDNESS_MAX]`
    /// controlling corner softness.
    pub roundness: f64,
}

impl AnimationPhase {
    /// Computes the phase triple at `clock_ms` for a wave with the given
    /// period. A non-positive period falls back to the default before any
    /// phase math; the result is always finite.
    pub fn at(clock_ms: f64, period_ms: f64) -> Self {
        let period = if period_ms.is_finite() && period_ms > 0.0 {
            period_ms
        } else {
            DEFAULT_PERIOD_MS
        };
        let clock = if clock_ms.is_finite() { clock_ms } else { 0.0 };

        let wrapped_rad = (clock.rem_euclid(period) / period) * TAU;
        let continuous_rad = (clock / period) * TAU;

        let cycle = (period * ROUNDNESS_CYCLE_RATIO).max(MIN_ROUNDNESS_CYCLE_MS);
        let cycle_rad = (clock.rem_euclid(cycle) / cycle) * TAU;
        let roundness =
            ROUNDNESS_MIN + (ROUNDNESS_MAX - ROUNDNESS_MIN) * (0.5 + 0.5 * cycle_rad.sin());

        Self { wrapped_rad, continuous_rad, roundness }
    }
}
