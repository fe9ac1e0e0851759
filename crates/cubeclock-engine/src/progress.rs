//! Time of day to sequence position.

use crate::sequence::STEPS;

/// Position between two adjacent states of the sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Earlier state index.
    pub step_a: usize,
    /// Later state index, never past [`STEPS`].
    pub step_b: usize,
    /// How far past `step_a` the clock is (0.0..1.0).
    pub fraction: f32,
}

/// Map an hour and minute onto the sequence.
///
/// The day runs linearly from 00:00 (scrambled) towards 24:00 (solved).
/// Out-of-range inputs are clamped to 23 and 59.
pub fn sample_progress(hour: u32, minute: u32) -> Progress {
    let hour = hour.min(23) as f32;
    let minute = minute.min(59) as f32;

    let progress = ((hour + minute / 60.0) / 24.0).clamp(0.0, 1.0);
    let step_float = progress * STEPS as f32;
    let step_a = (step_float.floor() as usize).min(STEPS);
    let step_b = (step_a + 1).min(STEPS);

    Progress {
        step_a,
        step_b,
        fraction: step_float - step_a as f32,
    }
}
