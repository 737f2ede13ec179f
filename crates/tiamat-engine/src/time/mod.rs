//! Time subsystem.
//!
//! Provides stable, testable frame timing utilities without coupling to a
//! runtime. Intended usage:
//! - one `FrameClock` per render loop, ticked once per presented frame
//! - `AnimationPhase::at` per wave per frame, fed to the path builder

mod frame_clock;
mod phase;

pub use frame_clock::{FrameClock, FrameTime};
pub use phase::{AnimationPhase, ROUNDNESS_MAX, ROUNDNESS_MIN};
