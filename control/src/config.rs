//! Tuning of inputs and timing of the application.

/// Milliseconds the title screen stays up before instructions are shown.
pub const TITLE_SCREEN_WAIT: u32 = 3000;

/// Milliseconds between two decays of the pet's energy and happiness.
pub const DECAY_INTERVAL: u32 = 3000;

/// Raw readings marking the boundaries of the joystick's dead zone.
///
/// All comparisons against these are strict, a reading sitting exactly on a
/// threshold is still considered to be in the dead zone. The low threshold of
/// each axis is always below the high one, so a reading is never beyond both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Thresholds {
    pub(crate) left: u16,
    pub(crate) right: u16,
    pub(crate) down: u16,
    pub(crate) up: u16,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            left: 3000,
            right: 12000,
            down: 3000,
            up: 12000,
        }
    }
}

impl Thresholds {
    /// Returns `None` unless `left < right` and `down < up`.
    #[must_use]
    pub fn new(left: u16, right: u16, down: u16, up: u16) -> Option<Self> {
        if left < right && down < up {
            Some(Self {
                left,
                right,
                down,
                up,
            })
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_left(&self, x: u16) -> bool {
        x < self.left
    }

    #[must_use]
    pub fn is_right(&self, x: u16) -> bool {
        x > self.right
    }

    #[must_use]
    pub fn is_down(&self, y: u16) -> bool {
        y < self.down
    }

    #[must_use]
    pub fn is_up(&self, y: u16) -> bool {
        y > self.up
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_reading_sits_on_threshold_it_is_not_considered_beyond_it() {
        let thresholds = Thresholds::default();
        assert!(!thresholds.is_up(12000));
        assert!(!thresholds.is_right(12000));
        assert!(!thresholds.is_down(3000));
        assert!(!thresholds.is_left(3000));
        assert!(thresholds.is_up(12001));
        assert!(thresholds.is_right(12001));
        assert!(thresholds.is_down(2999));
        assert!(thresholds.is_left(2999));
    }

    #[test]
    fn when_axis_thresholds_are_inverted_or_equal_they_are_rejected() {
        assert!(Thresholds::new(3000, 12000, 9000, 5000).is_none());
        assert!(Thresholds::new(12000, 3000, 3000, 12000).is_none());
        assert!(Thresholds::new(5000, 5000, 3000, 12000).is_none());
        assert!(Thresholds::new(3000, 12000, 5000, 5000).is_none());
        assert_eq!(
            Thresholds::new(3000, 12000, 3000, 12000),
            Some(Thresholds::default())
        );
    }
}
