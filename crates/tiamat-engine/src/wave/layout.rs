//! Derived per-slot layout.
//!
//! Layout depends only on the wave count and the slot index; it is memoized
//! by the frame orchestrator and recomputed only when the count changes.

use super::anchors::{
    AMPLITUDE_ANCHORS, BASE_Y_ANCHORS, GRADIENT_STOP_ANCHORS, OPACITY_ANCHORS,
    PHASE_OFFSET_ANCHORS, sample_anchor,
};
use super::config::DEFAULT_OPACITY;

/// Continuous layout ratios for one wave slot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WaveLayout {
    /// Vertical crest center as a fraction of canvas height.
    pub base_y_ratio: f64,
    /// Oscillation amplitude as a fraction of canvas height.
    pub amplitude_ratio: f64,
    /// Base translucency before global scaling.
    pub opacity: f64,
    /// Fraction of canvas height where the fill gradient reaches full
    /// transparency.
    pub gradient_stop: f64,
    /// Radians added to this slot's phase, staggering waves visually.
    pub phase_offset_rad: f64,
}

/// Builds the layout for every active slot.
///
/// A lone wave takes the default opacity rather than the interpolated
/// middle anchor, so it reads at full strength instead of washed out.
pub fn build_layouts(wave_count: usize) -> Vec<WaveLayout> {
    (0..wave_count.max(1))
        .map(|index| WaveLayout {
            base_y_ratio: sample_anchor(&BASE_Y_ANCHORS, wave_count, index),
            amplitude_ratio: sample_anchor(&AMPLITUDE_ANCHORS, wave_count, index),
            opacity: if wave_count == 1 {
                DEFAULT_OPACITY
            } else {
                sample_anchor(&OPACITY_ANCHORS, wave_count, index)
            },
            gradient_stop: sample_anchor(&GRADIENT_STOP_ANCHORS, wave_count, index),
            phase_offset_rad: sample_anchor(&PHASE_OFFSET_ANCHORS, wave_count, index),
        })
        .collect()
}

/// Slot lookup with the index clamped to the last built entry.
pub fn layout_at(layouts: &[WaveLayout], index: usize) -> &WaveLayout {
    &layouts[index.min(layouts.len() - 1)]
}
