#![no_main]
#![no_std]

use pet_firmware as _; // global logger + panicking-behavior

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true)]
mod app {
    use fugit::MillisDurationU64;
    use systick_monotonic::Systick;

    use pet_control::input::joystick::Joystick;
    use pet_control::input::store::Buttons as ButtonsStore;
    use pet_control::pet::App;
    use pet_firmware::system::buttons::Buttons;
    use pet_firmware::system::joystick::{on_conversion_complete, AdcSampler, CONVERSION_PENDING};
    use pet_firmware::system::lcd::Lcd;
    use pet_firmware::system::{LcdDriver, System};

    #[monotonic(binds = SysTick, default = true)]
    type Mono = Systick<1000>; // 1 kHz / 1 ms granularity

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        joystick: Joystick<'static, AdcSampler>,
        buttons: Buttons,
        lcd: Lcd<LcdDriver>,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("INIT");

        let system = System::init(cx.core, cx.device);
        let mono = system.mono;
        let buttons = system.buttons;
        let lcd = system.lcd;
        let joystick = Joystick::new(system.sampler, &CONVERSION_PENDING);

        (
            Shared {},
            Local {
                joystick,
                buttons,
                lcd,
            },
            init::Monotonics(mono),
        )
    }

    #[idle(local = [joystick, buttons, lcd])]
    fn idle(cx: idle::Context) -> ! {
        let joystick = cx.local.joystick;
        let buttons = cx.local.buttons;
        let lcd = cx.local.lcd;

        let mut store = ButtonsStore::default();
        let mut app = App::new(now_millis(), lcd);
        let mut last_sampled = now_millis();

        loop {
            // Sleep until any interrupt: ADC conversion or the monotonic tick.
            cortex_m::asm::wfi();

            let now = now_millis();

            // Buttons are debounced over milliseconds, not over wake-ups.
            if now != last_sampled {
                buttons.sample();
                last_sampled = now;
            }
            store.update(buttons.snapshot());

            joystick.refresh();
            app.update(now, joystick.taps(), &store, lcd);
        }
    }

    #[task(binds = ADC, priority = 2)]
    fn adc(_cx: adc::Context) {
        on_conversion_complete(&CONVERSION_PENDING);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn now_millis() -> u32 {
        let uptime: MillisDurationU64 = monotonics::now().duration_since_epoch();
        // Wraps after ~49 days, timers compare with wrapping arithmetic.
        uptime.to_millis() as u32
    }
}
