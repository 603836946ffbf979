use debounced_switch::{InputSignal, Level, PullMode};
use embassy_stm32::gpio::{Input, Pull};

/// Push-button input pin, sampled on demand by the debounce core.
pub struct GpioSwitch<'d> {
    pin: Input<'d>,
}

impl<'d> GpioSwitch<'d> {
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl InputSignal for GpioSwitch<'_> {
    fn read(&mut self) -> Level {
        if self.pin.is_high() {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Internal bias to configure for the given switch circuit. With an external
/// pull-down resistor the line already has a defined rest level, so the MCU
/// pull stays disabled.
pub fn input_pull(mode: PullMode) -> Pull {
    match mode {
        PullMode::PullDown => Pull::None,
        PullMode::PullUpInternal => Pull::Up,
    }
}
