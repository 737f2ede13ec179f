//! Wave-loader core.
//!
//! Responsibilities:
//! - resolve sparse user configuration into fully-determined per-slot records
//! - interpolate per-slot layout from fixed anchor tables
//! - build each slot's closed outline for the current animation phase
//! - orchestrate the per-frame composition (paths + paint descriptors)

pub mod anchors;
pub mod builder;
pub mod config;
pub mod frame;
pub mod layout;
pub mod variant;

pub use builder::WavePathBuilder;
pub use config::{WaveLoaderConfig, WaveOverride, WaveResolvedConfig};
pub use frame::{WaveLoader, WaveRender};
pub use layout::WaveLayout;
pub use variant::PathVariant;
