//! Turn noisy axis readings into stable directional taps.

use crate::config::Thresholds;
use crate::log;

/// Direction the joystick is currently held in.
///
/// Only `Center` can be left towards a direction, and every direction only
/// returns back to `Center`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceState {
    #[default]
    Center,
    Up,
    Down,
    Left,
    Right,
}

/// Directions entered during the last step.
///
/// Each is set only in the step in which its threshold was first crossed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Taps {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Taps {
    #[must_use]
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debounce {
    state: DebounceState,
    thresholds: Thresholds,
}

impl Debounce {
    #[must_use]
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            state: DebounceState::Center,
            thresholds,
        }
    }

    #[must_use]
    pub fn state(&self) -> DebounceState {
        self.state
    }

    #[must_use]
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Advance by exactly one step and return taps registered in it.
    ///
    /// When in `Center`, all four directions are tested one after another
    /// without short-circuiting. A diagonal push therefore reports taps on
    /// both axes and the state ends up in the direction tested last, in the
    /// order up, down, right, left.
    pub fn step(&mut self, x: u16, y: u16) -> Taps {
        let mut taps = Taps::default();
        let thresholds = &self.thresholds;

        match self.state {
            DebounceState::Center => {
                if thresholds.is_up(y) {
                    self.state = DebounceState::Up;
                    taps.up = true;
                }
                if thresholds.is_down(y) {
                    self.state = DebounceState::Down;
                    taps.down = true;
                }
                if thresholds.is_right(x) {
                    self.state = DebounceState::Right;
                    taps.right = true;
                }
                if thresholds.is_left(x) {
                    self.state = DebounceState::Left;
                    taps.left = true;
                }
            }
            DebounceState::Up => {
                if y < thresholds.up {
                    self.state = DebounceState::Center;
                }
            }
            DebounceState::Down => {
                if y > thresholds.down {
                    self.state = DebounceState::Center;
                }
            }
            DebounceState::Right => {
                if x < thresholds.right {
                    self.state = DebounceState::Center;
                }
            }
            DebounceState::Left => {
                if x > thresholds.left {
                    self.state = DebounceState::Center;
                }
            }
        }

        if taps.any() {
            log::debug!("Joystick tapped {:?}, now held {:?}", taps, self.state);
        }

        taps
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::input::sampler::MAX_READING;

    const MIDDLE: u16 = 8192;

    fn step_y(debounce: &mut Debounce, y: u16) -> Taps {
        debounce.step(MIDDLE, y)
    }

    #[test]
    fn when_created_it_starts_in_center() {
        let debounce = Debounce::default();
        assert_eq!(debounce.state(), DebounceState::Center);
    }

    #[test]
    fn when_pushed_up_and_released_it_taps_once() {
        let mut debounce = Debounce::default();
        let mut taps = [Taps::default(); 4];
        let mut states = [DebounceState::Center; 4];

        for (i, y) in [5000, 13000, 13000, 5000].into_iter().enumerate() {
            taps[i] = step_y(&mut debounce, y);
            states[i] = debounce.state();
        }

        assert_eq!(
            taps,
            [
                Taps::default(),
                Taps {
                    up: true,
                    ..Taps::default()
                },
                Taps::default(),
                Taps::default(),
            ]
        );
        assert_eq!(
            states,
            [
                DebounceState::Center,
                DebounceState::Up,
                DebounceState::Up,
                DebounceState::Center,
            ]
        );
    }

    #[test]
    fn when_pushed_down_it_taps_down() {
        let mut debounce = Debounce::default();
        let taps = step_y(&mut debounce, 100);
        assert!(taps.down && !taps.up && !taps.left && !taps.right);
        assert_eq!(debounce.state(), DebounceState::Down);
    }

    #[test]
    fn when_pushed_to_sides_it_taps_left_and_right() {
        let mut debounce = Debounce::default();
        assert!(debounce.step(100, MIDDLE).left);
        assert_eq!(debounce.state(), DebounceState::Left);
        assert!(!debounce.step(MIDDLE, MIDDLE).any());
        assert_eq!(debounce.state(), DebounceState::Center);
        assert!(debounce.step(16000, MIDDLE).right);
        assert_eq!(debounce.state(), DebounceState::Right);
    }

    // Known oddity: a diagonal is not a state of its own. Both axes report a
    // tap and the horizontal direction, tested last, wins the state.
    #[test]
    fn when_pushed_diagonally_from_center_it_taps_both_axes() {
        let mut debounce = Debounce::default();
        let taps = debounce.step(13000, 13000);
        assert!(taps.up);
        assert!(taps.right);
        assert!(!taps.down && !taps.left);
        assert_eq!(debounce.state(), DebounceState::Right);
    }

    #[test]
    fn when_diagonal_is_held_it_returns_to_center_by_the_winning_axis_only() {
        let mut debounce = Debounce::default();
        let _ = debounce.step(1000, 1000);
        assert_eq!(debounce.state(), DebounceState::Left);

        // Releasing the vertical axis does not matter while held left.
        let _ = debounce.step(1000, MIDDLE);
        assert_eq!(debounce.state(), DebounceState::Left);

        let _ = debounce.step(MIDDLE, MIDDLE);
        assert_eq!(debounce.state(), DebounceState::Center);
    }

    #[test]
    fn when_held_in_direction_it_never_taps_again() {
        let mut debounce = Debounce::default();
        assert!(step_y(&mut debounce, 14000).up);
        for _ in 0..100 {
            assert!(!step_y(&mut debounce, 14000).any());
        }
    }

    #[test]
    fn when_held_up_other_axis_is_ignored() {
        let mut debounce = Debounce::default();
        let _ = step_y(&mut debounce, 14000);
        let taps = debounce.step(100, 14000);
        assert!(!taps.any());
        assert_eq!(debounce.state(), DebounceState::Up);
    }

    #[test]
    fn when_reading_sits_exactly_on_threshold_it_does_not_tap() {
        let mut debounce = Debounce::default();
        assert!(!step_y(&mut debounce, 12000).any());
        assert!(!step_y(&mut debounce, 3000).any());
        assert!(!debounce.step(12000, MIDDLE).any());
        assert!(!debounce.step(3000, MIDDLE).any());
        assert_eq!(debounce.state(), DebounceState::Center);
    }

    #[test]
    fn when_released_onto_the_threshold_it_stays_held() {
        let mut debounce = Debounce::default();
        let _ = step_y(&mut debounce, 13000);
        let _ = step_y(&mut debounce, 12000);
        assert_eq!(debounce.state(), DebounceState::Up);
        let _ = step_y(&mut debounce, 11999);
        assert_eq!(debounce.state(), DebounceState::Center);
    }

    #[test]
    fn when_moved_from_up_straight_to_down_it_passes_through_center() {
        let mut debounce = Debounce::default();
        let _ = step_y(&mut debounce, 13000);
        let taps = step_y(&mut debounce, 100);
        assert!(!taps.any());
        assert_eq!(debounce.state(), DebounceState::Center);
        assert!(step_y(&mut debounce, 100).down);
    }

    #[test]
    fn when_custom_thresholds_are_given_they_are_used() {
        let mut debounce = Debounce::new(Thresholds::new(100, 200, 100, 200).unwrap());
        assert!(debounce.step(150, 201).up);
    }

    proptest! {
        #[test]
        fn with_any_valid_thresholds_opposite_directions_never_tap_together(
            (left, right) in (0..MAX_READING).prop_flat_map(|l| (Just(l), l + 1..=MAX_READING)),
            (down, up) in (0..MAX_READING).prop_flat_map(|d| (Just(d), d + 1..=MAX_READING)),
            readings in proptest::collection::vec((0..=MAX_READING, 0..=MAX_READING), 1..32)
        ) {
            let thresholds = Thresholds::new(left, right, down, up).unwrap();
            let mut debounce = Debounce::new(thresholds);
            for (x, y) in readings {
                let taps = debounce.step(x, y);
                prop_assert!(!(taps.up && taps.down));
                prop_assert!(!(taps.left && taps.right));
            }
        }
    }
}
