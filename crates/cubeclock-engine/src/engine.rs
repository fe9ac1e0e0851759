use cubeclock_core::FaceState;

use crate::interpolate::interpolate;
use crate::progress::sample_progress;
use crate::sequence::{StateSequence, build_sequence};

/// Owns the precomputed state sequence and answers per-frame queries.
#[derive(Debug, Clone)]
pub struct ClockStateEngine {
    sequence: StateSequence,
}

impl Default for ClockStateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockStateEngine {
    /// Build the sequence. Done once, before the frame loop starts.
    pub fn new() -> Self {
        Self {
            sequence: build_sequence(),
        }
    }

    /// The full scrambled-to-solved sequence.
    pub fn sequence(&self) -> &StateSequence {
        &self.sequence
    }

    /// State at step `k`, if it exists.
    pub fn state(&self, k: usize) -> Option<&FaceState> {
        self.sequence.get(k)
    }

    /// Cube state to show at the given time of day.
    pub fn state_at(&self, hour: u32, minute: u32) -> FaceState {
        let progress = sample_progress(hour, minute);
        // sample_progress never returns steps past the end of the sequence.
        let a = self.sequence.get(progress.step_a).unwrap_or(self.sequence.last());
        let b = self.sequence.get(progress.step_b).unwrap_or(self.sequence.last());
        interpolate(a, b, progress.fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::STEPS;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_midnight_shows_scramble() {
        let engine = ClockStateEngine::new();
        assert_eq!(&engine.state_at(0, 0), engine.sequence().first());
    }

    #[test]
    fn test_end_of_day_is_solved() {
        let engine = ClockStateEngine::new();
        // 23:59 sits 98% of the way from step 19 to 20.
        assert!(engine.state_at(23, 59).is_solved());
        assert_eq!(engine.state(STEPS), Some(&FaceState::solved()));
    }

    #[test]
    fn test_switches_halfway_between_steps() {
        let engine = ClockStateEngine::new();
        // Each step spans 72 minutes; steps 1 and 2 meet at 01:48.
        assert_ne!(engine.state(1), engine.state(2));
        assert_eq!(Some(&engine.state_at(1, 47)), engine.state(1));
        assert_eq!(Some(&engine.state_at(1, 49)), engine.state(2));
    }

    proptest! {
        #[test]
        fn prop_solved_stickers_only_accumulate(a in 0u32..1440, b in 0u32..1440) {
            let engine = ClockStateEngine::new();
            let (early, late) = if a <= b { (a, b) } else { (b, a) };
            let before: HashSet<_> = engine
                .state_at(early / 60, early % 60)
                .solved_positions()
                .into_iter()
                .collect();
            let after: HashSet<_> = engine
                .state_at(late / 60, late % 60)
                .solved_positions()
                .into_iter()
                .collect();
            prop_assert!(before.is_subset(&after));
        }
    }
}
