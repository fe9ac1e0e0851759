use cubeclock_core::{Face, FaceState, STICKERS_PER_FACE};

/// Pick between two states sticker by sticker.
///
/// Sticker colours are discrete, so there is no blending: below the halfway
/// mark every sticker comes from `a`, from 0.5 on every sticker comes from `b`.
pub fn interpolate(a: &FaceState, b: &FaceState, fraction: f32) -> FaceState {
    let mut out = *a;
    for face in Face::ALL {
        for idx in 0..STICKERS_PER_FACE {
            let color = if fraction < 0.5 {
                a.sticker(face, idx)
            } else {
                b.sticker(face, idx)
            };
            out.set(face, idx, color);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::scrambled_state;

    #[test]
    fn test_below_half_keeps_a() {
        let a = scrambled_state();
        let b = FaceState::solved();
        assert_eq!(interpolate(&a, &b, 0.0), a);
        assert_eq!(interpolate(&a, &b, 0.49), a);
    }

    #[test]
    fn test_half_and_above_takes_b() {
        let a = scrambled_state();
        let b = FaceState::solved();
        assert_eq!(interpolate(&a, &b, 0.5), b);
        assert_eq!(interpolate(&a, &b, 0.99), b);
    }
}
