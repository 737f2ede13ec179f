/// Curve-construction strategy for one wave.
///
/// The set is closed: dispatch is a plain match per path rebuild, no runtime
/// extensibility.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum PathVariant {
    /// Quadratic joins with roundness-scaled handles; corner softness
    /// breathes over time.
    #[default]
    Rounded,
    /// Quadratic joins anchored on span midpoints; sharper transitions.
    Choppy,
    /// One continuous Catmull-Rom-derived cubic chain; no corner artifacts.
    Smooth,
    /// Single high-amplitude bump from two cubic arcs; suited to small
    /// canvases.
    Pulse,
    /// Hard ±1 samples joined with axis-aligned steps.
    Square,
    /// Sine with an amplitude envelope peaking at the canvas center.
    Ripple,
    /// Traveling (non-standing) wave driven by the unwrapped phase.
    Travel,
}

impl PathVariant {
    pub const ALL: [PathVariant; 7] = [
        PathVariant::Rounded,
        PathVariant::Choppy,
        PathVariant::Smooth,
        PathVariant::Pulse,
        PathVariant::Square,
        PathVariant::Ripple,
        PathVariant::Travel,
    ];

    /// Parses a variant tag. Unknown tags yield `None`; callers fall back
    /// through their layered defaults rather than erroring.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim() {
            "rounded" => Some(PathVariant::Rounded),
            "choppy" => Some(PathVariant::Choppy),
            "smooth" => Some(PathVariant::Smooth),
            "pulse" => Some(PathVariant::Pulse),
            "square" => Some(PathVariant::Square),
            "ripple" => Some(PathVariant::Ripple),
            "travel" => Some(PathVariant::Travel),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PathVariant::Rounded => "rounded",
            PathVariant::Choppy => "choppy",
            PathVariant::Smooth => "smooth",
            PathVariant::Pulse => "pulse",
            PathVariant::Square => "square",
            PathVariant::Ripple => "ripple",
            PathVariant::Travel => "travel",
        }
    }

    /// Crest sample count. Square and travel need extra points to read as a
    /// square wave / a full traveling cycle across the span.
    pub const fn point_count(self) -> usize {
        match self {
            PathVariant::Square | PathVariant::Travel => 7,
            _ => 5,
        }
    }

    /// Vertical scale applied on top of the layout amplitude.
    pub const fn amplitude_multiplier(self) -> f64 {
        match self {
            PathVariant::Square => 0.8,
            PathVariant::Travel => 1.05,
            _ => 1.0,
        }
    }

    /// Phase progress for point `index` of `point_count`.
    ///
    /// The rounded/choppy/smooth family spreads one point short of a full
    /// period across the span (`i / n`); the square/ripple/travel family
    /// covers the full span (`i / (n − 1)`). The asymmetry is part of each
    /// family's look and is kept as-is.
    pub fn phase_progress(self, index: usize, point_count: usize) -> f64 {
        match self {
            PathVariant::Rounded | PathVariant::Choppy | PathVariant::Smooth => {
                index as f64 / point_count as f64
            }
            _ => index as f64 / (point_count - 1) as f64,
        }
    }
}
