pub mod clock;
pub mod gpio_led;
pub mod gpio_switch;
pub mod traits;
