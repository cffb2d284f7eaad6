#![no_std]
#![no_main]

use pet_firmware as _; // memory layout + panic handler

#[defmt_test::tests]
mod tests {
    use pet_firmware::system::buttons::Buttons;
    use pet_firmware::system::System;
    use pet_firmware::testlib::sample_until_button_is_clicked;

    #[init]
    fn init() -> Buttons {
        let cp = cortex_m::Peripherals::take().unwrap();
        let dp = daisy::pac::Peripherals::take().unwrap();

        System::init(cp, dp).buttons
    }

    #[test]
    fn released_buttons_read_as_up(buttons: &mut Buttons) {
        defmt::info!("Release all buttons");
        cortex_m::asm::delay(480_000_000 * 2);
        let raw = buttons.active_no_filter();
        defmt::assert!(
            !raw.joystick
                && !raw.launchpad_1
                && !raw.launchpad_2
                && !raw.booster_1
                && !raw.booster_2,
            "Assert failed, actual value: {:?}",
            raw
        );
        defmt::info!("OK");
    }

    #[test]
    fn all_buttons_work(buttons: &mut Buttons) {
        macro_rules! assert_held {
            ($name:expr, $button:ident) => {
                defmt::info!("Hold {}, then click BB1", $name);
                sample_until_button_is_clicked(buttons, || ());
                defmt::assert!(buttons.snapshot().$button);
                defmt::info!("OK");
            };
        }

        assert_held!("the joystick pushed in", joystick);
        assert_held!("LB1", launchpad_1);
        assert_held!("LB2", launchpad_2);
        assert_held!("BB2", booster_2);
    }
}
