//! The wave path builder.
//!
//! Seven variant-specific strategies sample a time-and-position function and
//! assemble the samples into a closed, bottom-anchored outline. The builder
//! owns its scratch arrays, so steady-state construction performs no heap
//! allocation; output goes into an exclusively-owned [`WavePath`] buffer,
//! which keeps the whole routine safe to call from a render thread without
//! synchronization.

use std::f64::consts::{PI, TAU};

use crate::path::WavePath;
use crate::time::AnimationPhase;

use super::variant::PathVariant;

/// Ripple amplitude envelope: full in the center, tapering to this floor at
/// the canvas edges.
const RIPPLE_ENVELOPE_FLOOR: f64 = 0.35;

/// Travel wave: cycles across the span, and unwrapped-phase speed factor.
const TRAVEL_FREQUENCY: f64 = 1.75;
const TRAVEL_SPEED: f64 = 1.4;

/// Pulse bump: peak amplitude scale, and the damped scale at both edges.
const PULSE_PEAK_AMPLITUDE: f64 = 1.8;
const PULSE_EDGE_AMPLITUDE: f64 = 0.3;

/// Variant-dispatched outline builder with reusable scratch buffers.
#[derive(Debug, Default)]
pub struct WavePathBuilder {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl WavePathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrites `path` as the closed outline for one wave at one instant.
    ///
    /// Every variant produces the same outer contract: move to
    /// `(0, height)`, rise to the first crest sample, traverse the crest,
    /// descend to `(width, height)`, close. The enclosed region is always
    /// fillable.
    #[allow(clippy::too_many_arguments)]
    pub fn build(
        &mut self,
        variant: PathVariant,
        path: &mut WavePath,
        width: f32,
        height: f32,
        base_y: f64,
        wave_height: f64,
        phase: &AnimationPhase,
        phase_offset_rad: f64,
    ) {
        path.reset();

        if variant == PathVariant::Pulse {
            build_pulse(path, width, height, base_y, wave_height, phase, phase_offset_rad);
            return;
        }

        let point_count = variant.point_count();
        let segment_width = width as f64 / (point_count - 1) as f64;
        let amplitude = wave_height * variant.amplitude_multiplier();

        self.xs.clear();
        self.ys.clear();
        for i in 0..point_count {
            let x_ratio = i as f64 / (point_count - 1) as f64;
            let progress = variant.phase_progress(i, point_count);
            let sample = sample_wave(variant, phase, phase_offset_rad, progress, x_ratio);
            self.xs.push(i as f64 * segment_width);
            self.ys.push(base_y + sample * amplitude);
        }

        path.move_to(0.0, height);
        path.line_to(self.xs[0] as f32, self.ys[0] as f32);

        match variant {
            PathVariant::Smooth | PathVariant::Ripple | PathVariant::Travel => {
                trace_smooth(path, &self.xs, &self.ys);
            }
            PathVariant::Square => {
                trace_steps(path, &self.xs, &self.ys);
            }
            PathVariant::Choppy => {
                trace_choppy(path, &self.xs, &self.ys);
            }
            PathVariant::Rounded => {
                trace_rounded(path, &self.xs, &self.ys, segment_width, phase.roundness);
            }
            PathVariant::Pulse => unreachable!("handled above"),
        }

        path.line_to(width, height);
        path.close();
    }
}

/// Crest sample in [-1, 1] (before the ripple envelope narrows it).
fn sample_wave(
    variant: PathVariant,
    phase: &AnimationPhase,
    phase_offset_rad: f64,
    progress: f64,
    x_ratio: f64,
) -> f64 {
    let rad = phase.wrapped_rad + progress * TAU + phase_offset_rad;

    match variant {
        PathVariant::Square => {
            if rad.sin() >= 0.0 { 1.0 } else { -1.0 }
        }
        PathVariant::Ripple => {
            let envelope = RIPPLE_ENVELOPE_FLOOR
                + (1.0 - RIPPLE_ENVELOPE_FLOOR) * (1.0 - (x_ratio - 0.5).abs() * 2.0);
            rad.sin() * envelope
        }
        PathVariant::Travel => {
            // Driven by the unwrapped phase: the waveform travels instead of
            // standing, and never snaps at cycle wrap.
            (x_ratio * TAU * TRAVEL_FREQUENCY
                + phase.continuous_rad * TRAVEL_SPEED
                + phase_offset_rad)
                .sin()
        }
        _ => rad.sin(),
    }
}

/// Single high-amplitude bump from two cubic arcs meeting at the peak.
/// Three logical points (left edge, center peak, right edge) keep it legible
/// on very small canvases.
fn build_pulse(
    path: &mut WavePath,
    width: f32,
    height: f32,
    base_y: f64,
    wave_height: f64,
    phase: &AnimationPhase,
    phase_offset_rad: f64,
) {
    let t = phase.wrapped_rad + phase_offset_rad;
    let left_y = base_y + t.sin() * wave_height * PULSE_EDGE_AMPLITUDE;
    let peak_y = base_y + (t + PI * 0.5).sin() * wave_height * PULSE_PEAK_AMPLITUDE;
    let right_y = base_y + (t + PI).sin() * wave_height * PULSE_EDGE_AMPLITUDE;

    let w = width as f64;
    path.move_to(0.0, height);
    path.line_to(0.0, left_y as f32);
    path.cubic_to(
        (w * 0.33) as f32,
        left_y as f32,
        (w * 0.25) as f32,
        peak_y as f32,
        (w * 0.5) as f32,
        peak_y as f32,
    );
    path.cubic_to(
        (w * 0.75) as f32,
        peak_y as f32,
        (w * 0.67) as f32,
        right_y as f32,
        width,
        right_y as f32,
    );
    path.line_to(width, height);
    path.close();
}

/// Catmull-Rom-to-cubic conversion over the sampled crest.
///
/// Tangents at each interior point come from its two neighbors; the ends use
/// phantom neighbors by clamping the index into range.
fn trace_smooth(path: &mut WavePath, xs: &[f64], ys: &[f64]) {
    let last = xs.len() - 1;
    let at = |i: isize| {
        let bounded = i.clamp(0, last as isize) as usize;
        (xs[bounded], ys[bounded])
    };

    for i in 0..last {
        let i = i as isize;
        let p0 = at(i - 1);
        let p1 = at(i);
        let p2 = at(i + 1);
        let p3 = at(i + 2);

        let c1x = p1.0 + ((p2.0 - p0.0) / 6.0) * 2.0;
        let c1y = p1.1 + ((p2.1 - p0.1) / 6.0) * 2.0;
        let c2x = p2.0 - ((p3.0 - p1.0) / 6.0) * 2.0;
        let c2y = p2.1 - ((p3.1 - p1.1) / 6.0) * 2.0;

        path.cubic_to(
            c1x as f32, c1y as f32, c2x as f32, c2y as f32, p2.0 as f32, p2.1 as f32,
        );
    }
}

/// Axis-aligned step joins: hold the previous height to the span midpoint,
/// drop/rise vertically, then run to the next point.
fn trace_steps(path: &mut WavePath, xs: &[f64], ys: &[f64]) {
    for i in 1..xs.len() {
        let mid_x = ((xs[i - 1] + xs[i]) / 2.0) as f32;
        path.line_to(mid_x, ys[i - 1] as f32);
        path.line_to(mid_x, ys[i] as f32);
        path.line_to(xs[i] as f32, ys[i] as f32);
    }
}

/// Two quadratics per span anchored directly on the midpoint column; no
/// handle offset, so transitions stay angular.
fn trace_choppy(path: &mut WavePath, xs: &[f64], ys: &[f64]) {
    for i in 1..xs.len() {
        let (prev_x, prev_y) = (xs[i - 1], ys[i - 1]);
        let (x, y) = (xs[i], ys[i]);
        let cp_x = ((prev_x + x) / 2.0) as f32;

        path.quad_to(cp_x, prev_y as f32, cp_x, ((prev_y + y) / 2.0) as f32);
        path.quad_to(cp_x, y as f32, x as f32, y as f32);
    }
}

/// Two quadratics per span whose control columns sit `roundness × half-span`
/// either side of the midpoint; the breathing roundness softens or sharpens
/// the corners over time.
fn trace_rounded(path: &mut WavePath, xs: &[f64], ys: &[f64], segment_width: f64, roundness: f64) {
    for i in 1..xs.len() {
        let (prev_x, prev_y) = (xs[i - 1], ys[i - 1]);
        let (x, y) = (xs[i], ys[i]);

        let mid_x = (prev_x + x) / 2.0;
        let mid_y = (prev_y + y) / 2.0;
        let handle = segment_width * 0.5 * roundness;

        path.quad_to(
            (mid_x - handle) as f32,
            prev_y as f32,
            mid_x as f32,
            mid_y as f32,
        );
        path.quad_to((mid_x + handle) as f32, y as f32, x as f32, y as f32);
    }
}
