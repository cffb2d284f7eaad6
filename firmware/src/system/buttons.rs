//! Push buttons of the board, sampled from GPIO.

use pet_control::input::debounced::Debounced;
use pet_control::input::snapshot::Snapshot;

use crate::system::hal::gpio;

/// All buttons are active low, pulled up when released.
pub struct Buttons {
    pins: Pins,
    joystick: Debounced<4>,
    launchpad_1: Debounced<4>,
    launchpad_2: Debounced<4>,
    booster_1: Debounced<4>,
    booster_2: Debounced<4>,
}

pub struct Pins {
    pub joystick: ButtonPin,
    pub launchpad_1: ButtonPin,
    pub launchpad_2: ButtonPin,
    pub booster_1: ButtonPin,
    pub booster_2: ButtonPin,
}

pub type ButtonPin = gpio::ErasedPin<gpio::Input>;

impl Buttons {
    #[must_use]
    pub fn new(pins: Pins) -> Self {
        Self {
            pins,
            joystick: Debounced::new(),
            launchpad_1: Debounced::new(),
            launchpad_2: Debounced::new(),
            booster_1: Debounced::new(),
            booster_2: Debounced::new(),
        }
    }

    /// Feed the current pin levels to debouncing.
    ///
    /// This should be called in a steady pace, slow enough for contact
    /// bouncing to settle within the debouncing window.
    pub fn sample(&mut self) {
        self.joystick.update(self.pins.joystick.is_low());
        self.launchpad_1.update(self.pins.launchpad_1.is_low());
        self.launchpad_2.update(self.pins.launchpad_2.is_low());
        self.booster_1.update(self.pins.booster_1.is_low());
        self.booster_2.update(self.pins.booster_2.is_low());
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            joystick: self.joystick.active(),
            launchpad_1: self.launchpad_1.active(),
            launchpad_2: self.launchpad_2.active(),
            booster_1: self.booster_1.active(),
            booster_2: self.booster_2.active(),
        }
    }

    pub fn active_no_filter(&self) -> Snapshot {
        Snapshot {
            joystick: self.pins.joystick.is_low(),
            launchpad_1: self.pins.launchpad_1.is_low(),
            launchpad_2: self.pins.launchpad_2.is_low(),
            booster_1: self.pins.booster_1.is_low(),
            booster_2: self.pins.booster_2.is_low(),
        }
    }
}
