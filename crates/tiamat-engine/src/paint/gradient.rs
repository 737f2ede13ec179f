use crate::coords::Vec2;

use super::Rgba8;

/// A single gradient stop.
///
/// `t` is expected in [0, 1] in typical usage, but is not strictly enforced.
/// Surfaces may clamp/sort stops at build time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Rgba8,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Rgba8) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in logical pixel space.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as geometry.
/// - stops are ordered by `t` by construction in this engine.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Vertical fill gradient for one wave: solid base color at the crest,
    /// the derived transparent end color at `stop` (fraction of `height`).
    pub fn wave_fill(height: f32, base: Rgba8, end: Rgba8, stop: f32) -> Self {
        Self::new(
            Vec2::zero(),
            Vec2::new(0.0, height),
            vec![ColorStop::new(0.0, base), ColorStop::new(stop, end)],
        )
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }
}

/// Horizontal edge-fade mask over the composed waves.
///
/// `fade_out` is the clamped [0, 100] intensity: the inner opaque stops sit
/// at `fade_out / 200` and `1 − fade_out / 200`, so 0 disables the fade and
/// 100 fades all the way to the center. Consumers apply this with
/// destination-in semantics.
pub fn fade_mask(width: f32, height: f32, fade_out: f32) -> LinearGradient {
    let inner = fade_out / 200.0;
    LinearGradient::new(
        Vec2::new(0.0, height / 2.0),
        Vec2::new(width, height / 2.0),
        vec![
            ColorStop::new(0.0, Rgba8::transparent()),
            ColorStop::new(inner, Rgba8::black()),
            ColorStop::new(1.0 - inner, Rgba8::black()),
            ColorStop::new(1.0, Rgba8::transparent()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wave_fill_is_vertical_with_two_stops() {
        let g = LinearGradient::wave_fill(
            80.0,
            Rgba8::opaque(1, 45, 83),
            Rgba8::new(10, 20, 30, 0),
            0.8,
        );
        assert!(g.is_valid());
        assert_eq!(g.start, Vec2::zero());
        assert_eq!(g.end, Vec2::new(0.0, 80.0));
        assert_eq!(g.stops[0].t, 0.0);
        assert_eq!(g.stops[1].t, 0.8);
        assert_eq!(g.stops[1].color.a, 0);
    }

    #[test]
    fn fade_mask_stop_positions() {
        let g = fade_mask(240.0, 80.0, 60.0);
        let ts: Vec<f32> = g.stops.iter().map(|s| s.t).collect();
        assert_eq!(ts, vec![0.0, 0.3, 0.7, 1.0]);
        assert_eq!(g.start.y, 40.0);
        assert_eq!(g.end.x, 240.0);
    }

    #[test]
    fn fade_mask_extremes() {
        let none = fade_mask(100.0, 50.0, 0.0);
        assert_eq!(none.stops[1].t, 0.0);
        assert_eq!(none.stops[2].t, 1.0);

        let full = fade_mask(100.0, 50.0, 100.0);
        assert_eq!(full.stops[1].t, 0.5);
        assert_eq!(full.stops[2].t, 0.5);
    }
}
