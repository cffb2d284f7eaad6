//! Joystick axes sampled by two free-running ADCs.
//!
//! ADC1 converts axis X and raises its end-of-conversion interrupt after every
//! sample. ADC2 converts axis Y and is only read when needed. Both are left in
//! continuous mode with overrun overwriting, so their data registers always
//! hold the latest sample.

use nb::block;
use pet_control::input::sampler::{PendingFlag, Sampler};

use crate::system::hal::adc::{Adc, Enabled};
use crate::system::hal::gpio;
use crate::system::hal::pac::{ADC1, ADC2};

/// Raised by the conversion interrupt of axis X, taken by the main loop.
pub static CONVERSION_PENDING: PendingFlag = PendingFlag::new();

pub struct AdcSampler {
    adc_1: Adc<ADC1, Enabled>,
    adc_2: Adc<ADC2, Enabled>,
    pins: Pins,
}

pub struct Pins {
    pub x: XPin,
    pub y: YPin,
}

pub type XPin = gpio::gpioc::PC0<gpio::Analog>;
pub type YPin = gpio::gpioc::PC1<gpio::Analog>;

impl AdcSampler {
    #[must_use]
    pub fn new(adc_1: Adc<ADC1, Enabled>, adc_2: Adc<ADC2, Enabled>, pins: Pins) -> Self {
        Self { adc_1, adc_2, pins }
    }
}

impl Sampler for AdcSampler {
    fn initialize(&mut self) {
        // A single blocking conversion lets the HAL select and preselect
        // the channel of each ADC. Only then the sequencer can be switched
        // to continuous mode, while no conversion is ongoing.
        self.adc_1.start_conversion(&mut self.pins.x);
        let _: u32 = block!(self.adc_1.read_sample()).unwrap_or_default();
        self.adc_2.start_conversion(&mut self.pins.y);
        let _: u32 = block!(self.adc_2.read_sample()).unwrap_or_default();

        let adc_1 = self.adc_1.inner_mut();
        adc_1.cfgr.modify(|_, w| w.cont().set_bit().ovrmod().set_bit());
        adc_1.isr.write(|w| w.eoc().set_bit());
        adc_1.ier.modify(|_, w| w.eocie().set_bit());

        let adc_2 = self.adc_2.inner_mut();
        adc_2.cfgr.modify(|_, w| w.cont().set_bit().ovrmod().set_bit());

        defmt::info!("Joystick ADCs configured");
    }

    fn start(&mut self) {
        self.adc_1.inner_mut().cr.modify(|_, w| w.adstart().set_bit());
        self.adc_2.inner_mut().cr.modify(|_, w| w.adstart().set_bit());
    }

    #[allow(clippy::cast_possible_truncation)]
    fn read_x(&mut self) -> u16 {
        self.adc_1.inner().dr.read().bits() as u16
    }

    #[allow(clippy::cast_possible_truncation)]
    fn read_y(&mut self) -> u16 {
        self.adc_2.inner().dr.read().bits() as u16
    }
}

/// Body of the ADC interrupt handler.
///
/// Only flags the new sample and acknowledges the interrupt, the sample
/// itself is left in the data register for the main loop.
pub fn on_conversion_complete(pending: &PendingFlag) {
    // SAFETY: The interrupt handler only touches the end-of-conversion bit
    // of ADC1, which is write-one-to-clear. The main loop stops configuring
    // ADC1 interrupts before the interrupt gets unmasked.
    let adc_1 = unsafe { &*ADC1::ptr() };
    if adc_1.isr.read().eoc().bit_is_set() {
        pending.raise();
    }
    adc_1.isr.write(|w| w.eoc().set_bit());
}
