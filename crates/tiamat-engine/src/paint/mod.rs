//! Paint model shared between the wave core and rendering surfaces.
//!
//! Scope:
//! - color representation (straight-alpha sRGB bytes, hex in/out, HSL math)
//! - gradient descriptors (per-wave vertical fill, global edge-fade mask)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::{Hsl, Rgba8, gradient_end_color};
pub use gradient::{ColorStop, LinearGradient, fade_mask};
