//! Minute tilt and second scan.

use std::f32::consts::PI;

use cubeclock_core::TimeSample;

/// Tilt at the top of the hour.
const ROTATION_START: f32 = -PI * 0.85;
/// Tilt at the end of the hour.
const ROTATION_END: f32 = PI * 1.15;

/// Brightness multiplier on the scan line.
const GLOW_PEAK: f32 = 1.4;
/// Distance from the scan line where the glow has faded out.
const GLOW_REACH: f32 = 0.25;

/// Cube tilt in radians for the given minute and second.
///
/// Sweeps linearly across the hour; renderers apply a quarter of it.
pub fn rotation(minute: u32, second: u32) -> f32 {
    let t = (minute as f32 + second as f32 / 60.0) / 60.0;
    ROTATION_START + t * (ROTATION_END - ROTATION_START)
}

/// Scan position across the minute (0.0..1.0).
pub fn scan(second: u32, subsec: f32) -> f32 {
    (second as f32 + subsec) / 60.0
}

/// Brightness multiplier for the sticker at `row`, `col` given the scan position.
///
/// The scan line sweeps diagonally from the top-left sticker to the
/// bottom-right one.
pub fn glow(row: usize, col: usize, scan: f32) -> f32 {
    let d = ((row + col) as f32 / 4.0 - scan).abs();
    let t = d / GLOW_REACH;
    (GLOW_PEAK + t * (1.0 - GLOW_PEAK)).clamp(1.0, GLOW_PEAK)
}

/// Per-frame motion values derived from the clock.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameMotion {
    /// Cube tilt in radians.
    pub rotation: f32,
    /// Scan position (0.0..1.0).
    pub scan: f32,
}

impl FrameMotion {
    pub fn from_sample(sample: &TimeSample) -> Self {
        Self {
            rotation: rotation(sample.minute, sample.second),
            scan: scan(sample.second, sample.subsec),
        }
    }
}
