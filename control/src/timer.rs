//! Software countdown measured against a free-running millisecond clock.

/// Countdown of a fixed duration.
///
/// The clock is expected to be monotonic and may wrap around.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Countdown {
    duration: u32,
    started_at: Option<u32>,
}

impl Countdown {
    #[must_use]
    pub const fn new(duration: u32) -> Self {
        Self {
            duration,
            started_at: None,
        }
    }

    pub fn start(&mut self, now: u32) {
        self.started_at = Some(now);
    }

    /// A countdown that was never started never expires.
    #[must_use]
    pub fn expired(&self, now: u32) -> bool {
        self.started_at
            .is_some_and(|started_at| now.wrapping_sub(started_at) >= self.duration)
    }
}
