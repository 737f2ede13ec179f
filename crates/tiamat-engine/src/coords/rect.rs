use super::Vec2;

/// Axis-aligned rectangle in logical pixels, stored as min/max corners.
///
/// The min/max form suits the engine's primary use: accumulating path
/// bounding boxes one point at a time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    #[inline]
    pub const fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Degenerate rectangle covering a single point.
    #[inline]
    pub const fn at_point(p: Vec2) -> Self {
        Self { min: p, max: p }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Grows the rectangle to include `p`.
    #[inline]
    pub fn include(self, p: Vec2) -> Rect {
        Rect {
            min: self.min.min(p),
            max: self.max.max(p),
        }
    }

    /// Smallest rectangle covering both inputs.
    #[inline]
    pub fn union(self, other: Rect) -> Rect {
        Rect {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn include_expands_in_both_directions() {
        let r = Rect::at_point(Vec2::new(2.0, 3.0))
            .include(Vec2::new(-1.0, 5.0))
            .include(Vec2::new(4.0, 0.0));
        assert_eq!(r.min, Vec2::new(-1.0, 0.0));
        assert_eq!(r.max, Vec2::new(4.0, 5.0));
    }

    #[test]
    fn union_covers_both() {
        let a = Rect::from_min_max(Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0));
        let b = Rect::from_min_max(Vec2::new(1.0, -1.0), Vec2::new(3.0, 1.0));
        let u = a.union(b);
        assert_eq!(u.min, Vec2::new(0.0, -1.0));
        assert_eq!(u.max, Vec2::new(3.0, 2.0));
    }

    #[test]
    fn contains_is_edge_inclusive() {
        let r = Rect::from_min_max(Vec2::zero(), Vec2::new(10.0, 10.0));
        assert!(r.contains(Vec2::new(0.0, 0.0)));
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(!r.contains(Vec2::new(10.1, 5.0)));
    }
}
