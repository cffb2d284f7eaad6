//! Manage button's state.

/// Use this to hold button's state over time.
///
/// Detects tapping and holding. The value passed to `update` is expected to
/// be already debounced.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    pub pressed: bool,
    pub tapped: bool,
    pub held: u32,
}

impl Button {
    pub fn update(&mut self, down: bool) {
        let was_pressed = self.pressed;
        self.pressed = down;
        self.tapped = !was_pressed && self.pressed;
        self.held = if self.pressed {
            self.held.saturating_add(1)
        } else {
            0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_was_up_and_now_is_down_it_is_marked_as_tapped() {
        let mut button = Button::default();
        assert!(!button.tapped);
        button.update(true);
        assert!(button.tapped);
        button.update(true);
        assert!(!button.tapped);
        button.update(false);
        assert!(!button.tapped);
        button.update(true);
        assert!(button.tapped);
    }

    #[test]
    fn when_is_down_it_reports_how_many_cycles() {
        let mut button = Button::default();
        assert_eq!(button.held, 0);
        button.update(false);
        assert_eq!(button.held, 0);
        button.update(true);
        assert_eq!(button.held, 1);
        button.update(true);
        assert_eq!(button.held, 2);
        button.update(false);
        assert_eq!(button.held, 0);
    }

    #[test]
    fn when_held_for_long_the_counter_saturates() {
        let mut button = Button {
            pressed: true,
            tapped: false,
            held: u32::MAX,
        };
        button.update(true);
        assert_eq!(button.held, u32::MAX);
        assert!(!button.tapped);
    }
}
