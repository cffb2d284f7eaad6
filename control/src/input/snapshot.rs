//! Structures used to pass the current state of hardware peripherals.

/// The current state of all board buttons.
///
/// `Snapshot` is meant to be passed from the hardware binding to the control
/// package. It carries levels only, with debouncing already done by the
/// caller. Each field is `true` while the button is held down.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub joystick: bool,
    pub launchpad_1: bool,
    pub launchpad_2: bool,
    pub booster_1: bool,
    pub booster_2: bool,
}
