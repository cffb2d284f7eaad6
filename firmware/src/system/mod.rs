pub mod buttons;
pub mod joystick;
pub mod lcd;

pub use daisy::hal;

use hal::adc::{AdcSampleTime, Resolution};
use hal::delay::DelayFromCountDownTimer;
use hal::gpio;
use hal::pac::CorePeripherals;
use hal::pac::Peripherals as DevicePeripherals;
use hal::pac::SPI2;
use hal::prelude::*;
use hal::spi;
use st7735_lcd::{Orientation, ST7735};
use systick_monotonic::Systick;

use buttons::{Buttons, Pins as ButtonsPins};
use joystick::{AdcSampler, Pins as JoystickPins};
use lcd::Lcd;

const LCD_SIZE: u32 = 128;

pub type LcdDriver = ST7735<spi::Spi<SPI2, spi::Enabled>, LcdPin, LcdPin>;
type LcdPin = gpio::ErasedPin<gpio::Output>;

pub struct System {
    pub mono: Systick<1000>,
    pub sampler: AdcSampler,
    pub buttons: Buttons,
    pub lcd: Lcd<LcdDriver>,
}

impl System {
    /// Initialize system abstraction
    ///
    /// # Panics
    ///
    /// The system can be initialized only once. It panics otherwise. It also
    /// panics if the LCD fails to initialize.
    #[must_use]
    pub fn init(mut cp: CorePeripherals, dp: DevicePeripherals) -> Self {
        enable_cache(&mut cp);

        let board = daisy::Board::take().unwrap();
        let ccdr = daisy::board_freeze_clocks!(board, dp);
        let pins = daisy::board_split_gpios!(board, ccdr, dp);

        let mut delay = DelayFromCountDownTimer::new(dp.TIM2.timer(
            100.Hz(),
            ccdr.peripheral.TIM2,
            &ccdr.clocks,
        ));

        let (adc_1, adc_2) = {
            let (mut adc_1, mut adc_2) = hal::adc::adc12(
                dp.ADC1,
                dp.ADC2,
                &mut delay,
                ccdr.peripheral.ADC12,
                &ccdr.clocks,
            );
            adc_1.set_resolution(Resolution::FOURTEENBIT);
            adc_1.set_sample_time(AdcSampleTime::T_387);
            adc_2.set_resolution(Resolution::FOURTEENBIT);
            adc_2.set_sample_time(AdcSampleTime::T_387);
            (adc_1.enable(), adc_2.enable())
        };

        let sampler = AdcSampler::new(
            adc_1,
            adc_2,
            JoystickPins {
                x: pins.GPIO.PIN_C7.into_analog(),
                y: pins.GPIO.PIN_C6.into_analog(),
            },
        );

        let buttons = Buttons::new(ButtonsPins {
            joystick: pins.GPIO.PIN_B10.into_pull_up_input().erase(),
            launchpad_1: pins.GPIO.PIN_B9.into_pull_up_input().erase(),
            launchpad_2: pins.GPIO.PIN_A9.into_pull_up_input().erase(),
            booster_1: pins.GPIO.PIN_D9.into_pull_up_input().erase(),
            booster_2: pins.GPIO.PIN_A8.into_pull_up_input().erase(),
        });

        let lcd = {
            let spi = dp.SPI2.spi(
                (
                    pins.GPIO.PIN_D10.into_alternate(),
                    spi::NoMiso,
                    pins.GPIO.PIN_D8.into_alternate(),
                ),
                spi::MODE_0,
                12.MHz(),
                ccdr.peripheral.SPI2,
                &ccdr.clocks,
            );
            let dc = pins.GPIO.PIN_A2.into_push_pull_output().erase();
            let reset = pins.GPIO.PIN_A3.into_push_pull_output().erase();
            let mut driver = ST7735::new(spi, dc, reset, false, false, LCD_SIZE, LCD_SIZE);
            driver.init(&mut delay).unwrap();
            driver.set_orientation(&Orientation::Portrait).unwrap();
            Lcd::new(driver)
        };

        let mono = Systick::new(cp.SYST, 480_000_000);

        Self {
            mono,
            sampler,
            buttons,
            lcd,
        }
    }
}

/// AN5212: Improve application performance when fetching instruction and
/// data, from both internal and external memories.
fn enable_cache(cp: &mut CorePeripherals) {
    cp.SCB.enable_icache();
    // NOTE: This requires cache management around all use of DMA.
    cp.SCB.enable_dcache(&mut cp.CPUID);
}
