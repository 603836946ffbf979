use super::traits::Led;
use embassy_stm32::gpio::Output;

/// Onboard LED on PC13. The Blue Pill wires it active-low, so `on` drives the
/// pin low.
pub struct GpioLed<'d> {
    pin: Output<'d>,
}

impl<'d> GpioLed<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl Led for GpioLed<'_> {
    fn on(&mut self) {
        self.pin.set_low();
    }

    fn off(&mut self) {
        self.pin.set_high();
    }

    fn toggle(&mut self) {
        self.pin.toggle();
    }
}
