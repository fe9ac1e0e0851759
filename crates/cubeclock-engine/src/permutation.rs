//! Seedless scramble permutation.

/// Stride used for the scramble. Coprime with 27, so every sticker moves.
pub const SCRAMBLE_STEP: usize = 11;

/// Fixed permutation of `0..n` built from a running modular sum.
///
/// Each index is `(previous + step) % n`, starting from zero, so output `i`
/// is `(step * (i + 1)) % n`. It only visits every position when `step` and
/// `n` are coprime.
pub fn permute(n: usize, step: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }

    let mut indices = Vec::with_capacity(n);
    let mut j = 0;
    for _ in 0..n {
        j = (j + step) % n;
        indices.push(j);
    }
    indices
}
