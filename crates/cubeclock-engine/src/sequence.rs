//! The scrambled-to-solved state sequence.

use cubeclock_core::{Face, FaceColor, FaceState, STICKERS_PER_FACE, TOTAL_STICKERS};

use crate::permutation::{SCRAMBLE_STEP, permute};

/// Number of restoration steps between scrambled and solved.
pub const STEPS: usize = 20;

/// Order stickers are restored within a face: centre, edges, then corners.
pub const CORRECTION_PRIORITY: [usize; STICKERS_PER_FACE] = [4, 1, 3, 5, 7, 0, 2, 6, 8];

/// Immutable list of `STEPS + 1` states, scrambled first and solved last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSequence {
    states: Vec<FaceState>,
}

impl StateSequence {
    /// State at step `k`, or `None` past the last step.
    pub fn get(&self, k: usize) -> Option<&FaceState> {
        self.states.get(k)
    }

    /// Number of states (always `STEPS + 1`).
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the sequence holds no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate states from scrambled to solved.
    pub fn iter(&self) -> std::slice::Iter<'_, FaceState> {
        self.states.iter()
    }

    /// The scrambled starting state.
    pub fn first(&self) -> &FaceState {
        &self.states[0]
    }

    /// The solved final state.
    pub fn last(&self) -> &FaceState {
        &self.states[STEPS]
    }
}

/// The fixed scrambled state: the solved stickers shuffled by [`permute`].
pub fn scrambled_state() -> FaceState {
    let solved = FaceState::solved().flatten();
    let mut shuffled = [FaceColor::Background; TOTAL_STICKERS];
    for (slot, source) in shuffled
        .iter_mut()
        .zip(permute(TOTAL_STICKERS, SCRAMBLE_STEP))
    {
        *slot = solved[source];
    }
    FaceState::from_flat(shuffled)
}

/// Every visible sticker once, in the order they get restored.
pub fn correction_order() -> Vec<(Face, usize)> {
    Face::ALL
        .into_iter()
        .flat_map(|face| CORRECTION_PRIORITY.into_iter().map(move |idx| (face, idx)))
        .collect()
}

/// Build the full sequence from scrambled (step 0) to solved (step [`STEPS`]).
pub fn build_sequence() -> StateSequence {
    let scrambled = scrambled_state();
    let order = correction_order();

    let states = (0..=STEPS)
        .map(|step| {
            let corrected = step * TOTAL_STICKERS / STEPS;
            let mut state = scrambled;
            for &(face, idx) in &order[..corrected] {
                state.set(face, idx, face.target_color());
            }
            state
        })
        .collect();

    StateSequence { states }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequence_has_21_states() {
        let sequence = build_sequence();
        assert_eq!(sequence.len(), STEPS + 1);
        assert!(sequence.get(STEPS + 1).is_none());
        for state in sequence.iter() {
            assert_eq!(state.flatten().len(), TOTAL_STICKERS);
        }
    }

    #[test]
    fn test_endpoints() {
        let sequence = build_sequence();
        assert_eq!(sequence.first(), &scrambled_state());
        assert_eq!(sequence.last(), &FaceState::solved());
        assert!(!sequence.first().is_solved());
    }

    #[test]
    fn test_scramble_is_fixed() {
        let scrambled = scrambled_state();
        // Flat index 0 takes source 11, which is Front's third sticker.
        assert_eq!(scrambled.sticker(Face::Top, 0), FaceColor::Green);
        // Flat index 1 takes source 22, on Right.
        assert_eq!(scrambled.sticker(Face::Top, 1), FaceColor::Red);
        // Flat index 2 takes source 6, still on Top.
        assert_eq!(scrambled.sticker(Face::Top, 2), FaceColor::White);
        assert_eq!(scrambled, scrambled_state());
    }

    #[test]
    fn test_scramble_keeps_color_counts() {
        let flat = scrambled_state().flatten();
        for face in Face::ALL {
            let count = flat.iter().filter(|c| **c == face.target_color()).count();
            assert_eq!(count, STICKERS_PER_FACE);
        }
    }

    #[test]
    fn test_correction_order_covers_each_sticker_once() {
        let order = correction_order();
        assert_eq!(order.len(), TOTAL_STICKERS);
        let unique: HashSet<_> = order.iter().copied().collect();
        assert_eq!(unique.len(), TOTAL_STICKERS);
        assert_eq!(order[0], (Face::Top, 4));
        assert_eq!(order[9], (Face::Front, 4));
        assert_eq!(order[26], (Face::Right, 8));
    }

    #[test]
    fn test_restoration_is_monotonic() {
        let sequence = build_sequence();
        let solved_sets: Vec<HashSet<_>> = sequence
            .iter()
            .map(|state| state.solved_positions().into_iter().collect())
            .collect();
        for pair in solved_sets.windows(2) {
            assert!(pair[0].is_subset(&pair[1]));
        }
    }

    #[test]
    fn test_step_corrects_prefix_of_order() {
        let sequence = build_sequence();
        let order = correction_order();
        // 10 * 27 / 20 = 13 stickers restored at the halfway step.
        let halfway = sequence.get(10).unwrap();
        for &(face, idx) in &order[..13] {
            assert_eq!(halfway.sticker(face, idx), face.target_color());
        }
        for &(face, idx) in &order[13..] {
            assert_eq!(
                halfway.sticker(face, idx),
                scrambled_state().sticker(face, idx)
            );
        }
    }
}
