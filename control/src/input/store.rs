//! Process button snapshots over time.

use super::button::Button;
use super::snapshot::Snapshot;

/// Stateful store of board buttons.
///
/// This struct turns the raw snapshot into a set of buttons with tap
/// detection.
///
/// Note that despite all its attributes are public, they should be only read
/// from.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons {
    pub joystick: Button,
    pub launchpad_1: Button,
    pub launchpad_2: Button,
    pub booster_1: Button,
    pub booster_2: Button,
}

impl Buttons {
    pub fn update(&mut self, snapshot: Snapshot) {
        self.joystick.update(snapshot.joystick);
        self.launchpad_1.update(snapshot.launchpad_1);
        self.launchpad_2.update(snapshot.launchpad_2);
        self.booster_1.update(snapshot.booster_1);
        self.booster_2.update(snapshot.booster_2);
    }
}
