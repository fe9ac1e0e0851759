//! Clock state engine for cubeclock.
//!
//! The cube assembles over the course of a day. A fixed scramble is restored
//! sticker by sticker across [`STEPS`] steps, and the time of day selects a
//! point between two adjacent steps. Minutes and seconds drive the cube's
//! tilt and a scanning highlight.

mod engine;
mod interpolate;
mod minute;
mod motion;
mod permutation;
mod progress;
mod sequence;

pub use engine::ClockStateEngine;
pub use interpolate::interpolate;
pub use minute::MinuteChangeDetector;
pub use motion::{FrameMotion, glow, rotation, scan};
pub use permutation::{SCRAMBLE_STEP, permute};
pub use progress::{Progress, sample_progress};
pub use sequence::{
    CORRECTION_PRIORITY, STEPS, StateSequence, build_sequence, correction_order, scrambled_state,
};
