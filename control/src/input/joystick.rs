//! Two-axis analog joystick.
//!
//! Owns the converter and the debouncing of its readings. The application is
//! expected to call [`Joystick::refresh`] once per iteration of its main
//! loop and then only query the result.

use super::debounce::{Debounce, DebounceState, Taps};
use super::sampler::{PendingFlag, Sampler, MAX_READING};
use crate::config::Thresholds;

/// Reading assumed for an axis until its first conversion is collected.
const RESTING_READING: u16 = MAX_READING / 2 + 1;

pub struct Joystick<'a, S> {
    sampler: S,
    pending: &'a PendingFlag,
    debounce: Debounce,
    x: u16,
    y: u16,
    taps: Taps,
}

impl<'a, S: Sampler> Joystick<'a, S> {
    /// Initialize and start the sampler, with debouncing resting in center.
    ///
    /// The `pending` flag must be the one raised by the sampler's conversion
    /// interrupt.
    pub fn new(sampler: S, pending: &'a PendingFlag) -> Self {
        Self::with_thresholds(sampler, pending, Thresholds::default())
    }

    pub fn with_thresholds(
        mut sampler: S,
        pending: &'a PendingFlag,
        thresholds: Thresholds,
    ) -> Self {
        sampler.initialize();
        sampler.start();
        Self {
            sampler,
            pending,
            debounce: Debounce::new(thresholds),
            x: RESTING_READING,
            y: RESTING_READING,
            taps: Taps::default(),
        }
    }

    /// Collect the latest readings and advance debouncing by one step.
    ///
    /// Axis X is only updated when its conversion interrupt fired since the
    /// last refresh, axis Y is read every time. Taps of the previous refresh
    /// are discarded.
    pub fn refresh(&mut self) {
        if self.pending.take() {
            self.x = self.sampler.read_x();
        }
        self.y = self.sampler.read_y();
        self.taps = self.debounce.step(self.x, self.y);
    }

    #[must_use]
    pub fn x(&self) -> u16 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> u16 {
        self.y
    }

    #[must_use]
    pub fn state(&self) -> DebounceState {
        self.debounce.state()
    }

    #[must_use]
    pub fn taps(&self) -> Taps {
        self.taps
    }

    #[must_use]
    pub fn is_pressed_left(&self) -> bool {
        self.debounce.thresholds().is_left(self.x)
    }

    #[must_use]
    pub fn is_pressed_right(&self) -> bool {
        self.debounce.thresholds().is_right(self.x)
    }

    #[must_use]
    pub fn is_pressed_up(&self) -> bool {
        self.debounce.thresholds().is_up(self.y)
    }

    #[must_use]
    pub fn is_pressed_down(&self) -> bool {
        self.debounce.thresholds().is_down(self.y)
    }

    #[must_use]
    pub fn is_tapped_left(&self) -> bool {
        self.taps.left
    }

    #[must_use]
    pub fn is_tapped_right(&self) -> bool {
        self.taps.right
    }

    #[must_use]
    pub fn is_tapped_up(&self) -> bool {
        self.taps.up
    }

    #[must_use]
    pub fn is_tapped_down(&self) -> bool {
        self.taps.down
    }

    #[cfg(test)]
    pub(crate) fn sampler_mut(&mut self) -> &mut S {
        &mut self.sampler
    }
}
