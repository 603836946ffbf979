//! STM32 Blue Pill Debounced Button LED Toggle (poll mode)
//! This program toggles the onboard LED on each debounced button press:
//! 1. Configures onboard LED (PC13) as output
//! 2. Sets up PB1 as input with the internal pull-up (button shorts to ground)
//! 3. Polls the debounce state machine from the main loop, never blocking
//! 4. Toggles LED state on each confirmed press/release cycle
//!
//! Hardware Connections:
//!   - Onboard LED: PC13 (no external connection needed)
//!   - Button: PB1 to GND, no external resistor
//!
//! Expected Behavior:
//!   - LED toggles once per press, bounce is filtered out
//!   - Confirmed presses are logged via defmt RTT

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
use embassy_time::{Duration, Ticker};
use panic_probe as _;

/// How often the main loop samples the button. Must stay well below the
/// debounce window or a short bounce can slip between samples.
const POLL_INTERVAL: Duration = Duration::from_millis(2);

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());

    let led_pin = Output::new(p.PC13, Level::High, Speed::Low);
    let mut led = GpioLed::new(led_pin);

    // Button on PB1: no external resistor, internal pull-up, pressed = low.
    let pull = PullMode::PullUpInternal;
    let button = Input::new(p.PB1, input_pull(pull));

    let mut switch = DebouncedSwitch::new(
        GpioSwitch::new(button),
        SystemClock,
        SwitchCircuit::from_pull(pull),
        DebounceConfig::default(),
    );

    defmt::info!("polling button on PB1");

    let mut ticker = Ticker::every(POLL_INTERVAL);
    loop {
        if switch.poll() {
            defmt::info!("debounced press confirmed");
            led.toggle();
        }
        ticker.next().await;
    }
}
