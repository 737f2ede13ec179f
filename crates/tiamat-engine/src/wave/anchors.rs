//! Fixed per-attribute anchor tables and the slot interpolator.
//!
//! Each table authors the attribute at five reference slots; any wave count
//! from 1 to 5 interpolates across the same table instead of needing a
//! separately authored table per count.

use std::f64::consts::PI;

pub const BASE_Y_ANCHORS: [f64; 5] = [0.35, 0.425, 0.5, 0.575, 0.65];
pub const AMPLITUDE_ANCHORS: [f64; 5] = [0.12, 0.135, 0.15, 0.125, 0.1];
pub const OPACITY_ANCHORS: [f64; 5] = [0.2, 0.275, 0.35, 0.425, 0.5];
pub const GRADIENT_STOP_ANCHORS: [f64; 5] = [0.7, 0.75, 0.8, 0.85, 0.9];
pub const PHASE_OFFSET_ANCHORS: [f64; 5] =
    [0.0, PI * 0.35, PI * 0.7, PI * 1.05, PI * 1.4];

/// Samples an anchor table for one wave slot.
///
/// A single wave takes the middle anchor (no interpolation). Otherwise the
/// slot maps to `(index / (wave_count − 1)) × (len − 1)` and blends linearly
/// between its floor/ceil neighbors.
pub fn sample_anchor(anchors: &[f64; 5], wave_count: usize, index: usize) -> f64 {
    if wave_count <= 1 {
        return anchors[(anchors.len() - 1) / 2];
    }

    let position = (index as f64 / (wave_count - 1) as f64) * (anchors.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = (position.ceil() as usize).min(anchors.len() - 1);

    if lower == upper {
        return anchors[lower];
    }

    let mix = position - lower as f64;
    anchors[lower] + (anchors[upper] - anchors[lower]) * mix
}
