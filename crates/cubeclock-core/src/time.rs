//! Wall-clock samples.

use chrono::Timelike;

/// One reading of the wall clock, taken once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeSample {
    /// Hour of day (0-23).
    pub hour: u32,
    /// Minute (0-59).
    pub minute: u32,
    /// Second (0-59).
    pub second: u32,
    /// Fraction of the current second (0.0 up to but excluding 1.0).
    pub subsec: f32,
}

impl TimeSample {
    /// Build a sample, clamping every field into its natural range.
    pub fn new(hour: u32, minute: u32, second: u32, subsec: f32) -> Self {
        let subsec = if subsec.is_finite() {
            subsec.clamp(0.0, 0.999_999)
        } else {
            0.0
        };
        Self {
            hour: hour.min(23),
            minute: minute.min(59),
            second: second.min(59),
            subsec,
        }
    }

    /// Sample any chrono time value.
    ///
    /// Leap seconds (nanoseconds past one billion) collapse onto the last
    /// instant of the second.
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        let subsec = time.nanosecond() as f32 / 1_000_000_000.0;
        Self::new(time.hour(), time.minute(), time.second(), subsec)
    }
}
