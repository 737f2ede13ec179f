//! Reusable path geometry buffer.
//!
//! Responsibilities:
//! - record a closed wave outline as verbs + points
//! - keep allocated capacity across frames (`reset()` clears, never frees)
//! - answer the queries surfaces and tests need (bounds, flattening)

use crate::coords::{Rect, Vec2};

/// Path construction verb. Point consumption per verb:
/// `MoveTo`/`LineTo` 1, `QuadTo` 2 (control, end), `CubicTo` 3
/// (control, control, end), `Close` 0.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PathVerb {
    MoveTo,
    LineTo,
    QuadTo,
    CubicTo,
    Close,
}

/// One decoded path segment, yielded by [`WavePath::segments`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathSegment {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { ctrl: Vec2, end: Vec2 },
    CubicTo { ctrl1: Vec2, ctrl2: Vec2, end: Vec2 },
    Close,
}

/// Mutable wave outline buffer.
///
/// One buffer exists per wave slot; the frame orchestrator rewrites it in
/// place every tick. The buffer is never read outside the frame that wrote
/// it, so there is no retained-geometry invalidation to manage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WavePath {
    verbs: Vec<PathVerb>,
    points: Vec<Vec2>,
}

impl WavePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded geometry. Keeps allocated capacity for reuse.
    #[inline]
    pub fn reset(&mut self) {
        self.verbs.clear();
        self.points.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    #[inline]
    pub fn verbs(&self) -> &[PathVerb] {
        &self.verbs
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.verbs.push(PathVerb::MoveTo);
        self.points.push(Vec2::new(x, y));
    }

    #[inline]
    pub fn line_to(&mut self, x: f32, y: f32) {
        self.verbs.push(PathVerb::LineTo);
        self.points.push(Vec2::new(x, y));
    }

    #[inline]
    pub fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.verbs.push(PathVerb::QuadTo);
        self.points.push(Vec2::new(cx, cy));
        self.points.push(Vec2::new(x, y));
    }

    #[inline]
    pub fn cubic_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        self.verbs.push(PathVerb::CubicTo);
        self.points.push(Vec2::new(c1x, c1y));
        self.points.push(Vec2::new(c2x, c2y));
        self.points.push(Vec2::new(x, y));
    }

    #[inline]
    pub fn close(&mut self) {
        self.verbs.push(PathVerb::Close);
    }

    /// Iterates decoded segments in recorded order.
    pub fn segments(&self) -> impl Iterator<Item = PathSegment> + '_ {
        let mut i = 0;
        self.verbs.iter().map(move |verb| match verb {
            PathVerb::MoveTo => {
                let p = self.points[i];
                i += 1;
                PathSegment::MoveTo(p)
            }
            PathVerb::LineTo => {
                let p = self.points[i];
                i += 1;
                PathSegment::LineTo(p)
            }
            PathVerb::QuadTo => {
                let (ctrl, end) = (self.points[i], self.points[i + 1]);
                i += 2;
                PathSegment::QuadTo { ctrl, end }
            }
            PathVerb::CubicTo => {
                let (ctrl1, ctrl2, end) = (self.points[i], self.points[i + 1], self.points[i + 2]);
                i += 3;
                PathSegment::CubicTo { ctrl1, ctrl2, end }
            }
            PathVerb::Close => PathSegment::Close,
        })
    }

    /// Control-polygon bounding box (covers the curve, conservatively).
    ///
    /// `None` for an empty path.
    pub fn bounds(&self) -> Option<Rect> {
        let mut pts = self.points.iter();
        let first = *pts.next()?;
        Some(pts.fold(Rect::at_point(first), |r, p| r.include(*p)))
    }

    /// Flattens the outline into a polyline, appending to `out`.
    ///
    /// Curves are subdivided with `steps_per_curve` uniform parameter steps.
    /// `Close` emits the subpath start point so the polyline ends where the
    /// fill boundary does.
    pub fn flatten_into(&self, steps_per_curve: usize, out: &mut Vec<Vec2>) {
        let steps = steps_per_curve.max(1);
        let mut cursor = Vec2::zero();
        let mut subpath_start = Vec2::zero();

        for seg in self.segments() {
            match seg {
                PathSegment::MoveTo(p) => {
                    cursor = p;
                    subpath_start = p;
                    out.push(p);
                }
                PathSegment::LineTo(p) => {
                    cursor = p;
                    out.push(p);
                }
                PathSegment::QuadTo { ctrl, end } => {
                    for step in 1..=steps {
                        let t = step as f32 / steps as f32;
                        out.push(quad_point(cursor, ctrl, end, t));
                    }
                    cursor = end;
                }
                PathSegment::CubicTo { ctrl1, ctrl2, end } => {
                    for step in 1..=steps {
                        let t = step as f32 / steps as f32;
                        out.push(cubic_point(cursor, ctrl1, ctrl2, end, t));
                    }
                    cursor = end;
                }
                PathSegment::Close => {
                    cursor = subpath_start;
                    out.push(subpath_start);
                }
            }
        }
    }
}

fn quad_point(p0: Vec2, c: Vec2, p1: Vec2, t: f32) -> Vec2 {
    let a = p0.lerp(c, t);
    let b = c.lerp(p1, t);
    a.lerp(b, t)
}

fn cubic_point(p0: Vec2, c1: Vec2, c2: Vec2, p1: Vec2, t: f32) -> Vec2 {
    let a = p0.lerp(c1, t);
    let b = c1.lerp(c2, t);
    let c = c2.lerp(p1, t);
    let ab = a.lerp(b, t);
    let bc = b.lerp(c, t);
    ab.lerp(bc, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> WavePath {
        let mut p = WavePath::new();
        p.move_to(0.0, 0.0);
        p.line_to(10.0, 0.0);
        p.line_to(5.0, 8.0);
        p.close();
        p
    }

    // ── recording ─────────────────────────────────────────────────────────

    #[test]
    fn records_verbs_and_points_in_order() {
        let p = triangle();
        assert_eq!(
            p.verbs(),
            &[PathVerb::MoveTo, PathVerb::LineTo, PathVerb::LineTo, PathVerb::Close]
        );
        assert_eq!(p.points().len(), 3);
    }

    #[test]
    fn reset_clears_but_keeps_capacity() {
        let mut p = triangle();
        let cap = p.points.capacity();
        p.reset();
        assert!(p.is_empty());
        assert_eq!(p.points.capacity(), cap);
    }

    #[test]
    fn segments_decode_curve_points() {
        let mut p = WavePath::new();
        p.move_to(0.0, 0.0);
        p.quad_to(1.0, 2.0, 3.0, 0.0);
        p.cubic_to(4.0, 1.0, 5.0, -1.0, 6.0, 0.0);

        let segs: Vec<PathSegment> = p.segments().collect();
        assert_eq!(segs.len(), 3);
        assert_eq!(
            segs[1],
            PathSegment::QuadTo { ctrl: Vec2::new(1.0, 2.0), end: Vec2::new(3.0, 0.0) }
        );
        assert_eq!(
            segs[2],
            PathSegment::CubicTo {
                ctrl1: Vec2::new(4.0, 1.0),
                ctrl2: Vec2::new(5.0, -1.0),
                end: Vec2::new(6.0, 0.0),
            }
        );
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[test]
    fn bounds_of_empty_path_is_none() {
        assert_eq!(WavePath::new().bounds(), None);
    }

    #[test]
    fn bounds_covers_all_points() {
        let b = triangle().bounds().unwrap();
        assert_eq!(b.min, Vec2::new(0.0, 0.0));
        assert_eq!(b.max, Vec2::new(10.0, 8.0));
    }

    #[test]
    fn flatten_closes_back_to_subpath_start() {
        let mut out = Vec::new();
        triangle().flatten_into(4, &mut out);
        assert_eq!(out.first(), Some(&Vec2::new(0.0, 0.0)));
        assert_eq!(out.last(), Some(&Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn flatten_quad_endpoints_are_exact() {
        let mut p = WavePath::new();
        p.move_to(0.0, 0.0);
        p.quad_to(5.0, 10.0, 10.0, 0.0);

        let mut out = Vec::new();
        p.flatten_into(8, &mut out);
        assert_eq!(out.first(), Some(&Vec2::new(0.0, 0.0)));
        assert_eq!(out.last(), Some(&Vec2::new(10.0, 0.0)));
        // Curve apex of this symmetric quad is at (5, 5).
        let apex = out.iter().fold(0.0_f32, |m, p| m.max(p.y));
        assert!((apex - 5.0).abs() < 1e-4);
    }
}
