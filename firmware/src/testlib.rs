use pet_control::input::debounce::Taps;
use pet_control::input::joystick::Joystick;
use pet_control::input::sampler::Sampler;

use crate::system::buttons::Buttons;

const MILLISECOND: u32 = 480_000_000 / 1000;

/// Block until the feeding button (BB1) gets pressed down.
///
/// `on_sample` is called on every millisecond of waiting, so other inputs can
/// be kept refreshed meanwhile.
pub fn sample_until_button_is_clicked(buttons: &mut Buttons, mut on_sample: impl FnMut()) {
    loop {
        let was_down = buttons.snapshot().booster_1;
        buttons.sample();
        on_sample();
        let is_down = buttons.snapshot().booster_1;
        if !was_down && is_down {
            break;
        }
        cortex_m::asm::delay(MILLISECOND);
    }
}

/// Keep refreshing the joystick until any tap gets detected.
pub fn refresh_until_joystick_is_tapped<S: Sampler>(joystick: &mut Joystick<'_, S>) -> Taps {
    loop {
        joystick.refresh();
        let taps = joystick.taps();
        if taps.any() {
            return taps;
        }
        cortex_m::asm::delay(MILLISECOND);
    }
}
