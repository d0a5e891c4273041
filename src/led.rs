use std::path::{Path, PathBuf};

use crate::bus::open_bus;
use crate::error::Result;
use crate::i2c_led::I2cLed;
use crate::sysfs_led::SysfsLed;

/// Root of the kernel led class.
const SYSFS_LEDS: &str = "/sys/class/leds";

/// Uniform control surface over one case led.
///
/// Values are logical intensities in 0-255; the process boundary
/// range-checks before narrowing to `u8`, so the contract itself does not
/// re-validate. Every setter performs a synchronous hardware write.
pub trait CaseLed {
    fn set_red(&mut self, value: u8) -> Result<()>;
    fn set_green(&mut self, value: u8) -> Result<()>;
    fn set_blue(&mut self, value: u8) -> Result<()>;
    fn set_brightness(&mut self, value: u8) -> Result<()>;
}

/// Directory holding the kernel attribute files for led `lednum` (one-based).
pub(crate) fn sysfs_dir(lednum: u8) -> PathBuf {
    Path::new(SYSFS_LEDS).join(format!("case-led{}", lednum))
}

/// Get a handle for case led `lednum` (1-4).
///
/// Probes for the kernel led class interface first: if the brightness
/// attribute for this led exists, the led is driven through sysfs and the
/// kernel handles brightness scaling. Otherwise the led is driven directly
/// over i2c, converting to the zero-based indexing the controller uses.
pub fn open_led(lednum: u8) -> Result<Box<dyn CaseLed>> {
    if sysfs_dir(lednum).join("brightness").is_file() {
        Ok(Box::new(SysfsLed::new(lednum)?))
    } else {
        Ok(Box::new(I2cLed::new(open_bus()?, lednum - 1)?))
    }
}
