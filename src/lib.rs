// High-level overview:
//
// Hardware:            led controller chip              kernel multicolor led class
// Interface:           /dev/i2c-2 registers             /sys/class/leds attribute files
// Backend:             i2c_led::I2cLed                  sysfs_led::SysfsLed
//
// led::open_led probes per led which of the two interfaces the host
// exposes and hands back the matching backend behind the CaseLed trait.

pub mod args;
pub mod bus;
pub mod error;
pub mod i2c_led;
pub mod led;
pub mod sysfs_led;

pub use error::{LedError, Result};
pub use led::{open_led, CaseLed};
