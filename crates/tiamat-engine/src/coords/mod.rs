//! Coordinate and geometry types shared across the engine.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Wave sampling math runs in `f64` (the shared clock grows without bound);
//! emitted geometry is `f32`.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
