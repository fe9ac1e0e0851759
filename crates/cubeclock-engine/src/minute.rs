/// Reports each new minute value once.
///
/// Owned by the frame loop; call [`observe`](Self::observe) every frame and
/// act only when it returns `true`.
#[derive(Debug, Default, Clone)]
pub struct MinuteChangeDetector {
    last_seen: Option<u32>,
}

impl MinuteChangeDetector {
    /// Create a detector that has seen nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `minute`, returning `true` if it differs from the last one seen.
    pub fn observe(&mut self, minute: u32) -> bool {
        if self.last_seen == Some(minute) {
            return false;
        }
        self.last_seen = Some(minute);
        true
    }

    /// The last minute observed, if any.
    pub fn last_seen(&self) -> Option<u32> {
        self.last_seen
    }
}
