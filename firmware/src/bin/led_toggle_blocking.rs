//! STM32 Blue Pill Debounced Button LED Toggle (blocking mode)
//! Same demo as `led_toggle`, but using the blocking reader: the call
//! suspends the whole executor thread for the debounce wait, one window at a
//! time, for as long as the button is held plus one trailing window. Nothing
//! else runs during that time, which is the point being demonstrated — prefer
//! the poll-mode reader whenever other tasks must stay live.
//!
//! Hardware Connections:
//!   - Onboard LED: PC13 (no external connection needed)
//!   - Button: PB1 to GND, no external resistor
//!
//! Expected Behavior:
//!   - LED toggles once per press, after the button is released
//!   - Press events are logged via defmt RTT

#![no_std]
#![no_main]

use bluepill_switch_demo::hardware::{
    clock::SystemClock,
    gpio_led::GpioLed,
    gpio_switch::{GpioSwitch, input_pull},
    traits::Led,
};
use debounced_switch::{DebounceConfig, DebouncedSwitch, PullMode, SwitchCircuit};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Input, Level, Output, Speed};
use embassy_time::Timer;
use panic_probe as _;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());

    let led_pin = Output::new(p.PC13, Level::High, Speed::Low);
    let mut led = GpioLed::new(led_pin);

    let pull = PullMode::PullUpInternal;
    let button = Input::new(p.PB1, input_pull(pull));

    let mut switch = DebouncedSwitch::new(
        GpioSwitch::new(button),
        SystemClock,
        SwitchCircuit::from_pull(pull),
        DebounceConfig::default(),
    );

    defmt::info!("blocking on button on PB1");

    loop {
        // Returns immediately while idle; blocks through the whole press
        // otherwise.
        if switch.read_blocking() {
            defmt::info!("debounced press confirmed");
            led.toggle();
        }
        Timer::after_millis(2).await;
    }
}
