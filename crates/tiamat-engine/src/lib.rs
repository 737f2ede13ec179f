//! Tiamat engine crate.
//!
//! This crate owns the wave-loader geometry core: configuration resolution,
//! per-slot layout, time/phase driving, and the variant path builders.
//! Rendering surfaces live in higher layers; this crate only emits closed
//! outlines plus paint descriptors.

pub mod coords;
pub mod paint;
pub mod path;
pub mod time;
pub mod wave;

pub mod logging;
pub mod presets;
pub mod snippet;
