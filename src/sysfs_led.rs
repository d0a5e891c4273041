use std::fs;
use std::path::PathBuf;

use crate::error::{LedError, Result};
use crate::led::{sysfs_dir, CaseLed};

/// One case led exposed through the kernel multicolor led class.
///
/// The kernel applies the brightness multiplier itself, so logical channel
/// values are written through unscaled.
pub struct SysfsLed {
    dir: PathBuf,
    red: u8,
    green: u8,
    blue: u8,
    brightness: u8,
}

impl SysfsLed {
    /// Attach to led `lednum` (1-4) under /sys/class/leds.
    pub fn new(lednum: u8) -> Result<Self> {
        Self::open(sysfs_dir(lednum))
    }

    /// Attach to the led whose attribute files live in `dir`, reading the
    /// current hardware state back.
    pub fn open(dir: PathBuf) -> Result<Self> {
        let brightness = fs::read_to_string(dir.join("brightness"))?.trim().parse()?;

        let intensity = fs::read_to_string(dir.join("multi_intensity"))?;
        let fields: Vec<&str> = intensity.trim().split(' ').collect();
        if fields.len() != 3 {
            return Err(LedError::MalformedIntensity(intensity.trim().to_string()));
        }
        let red = fields[0].parse()?;
        let green = fields[1].parse()?;
        let blue = fields[2].parse()?;

        Ok(SysfsLed { dir, red, green, blue, brightness })
    }

    /// Rewrite the full three-value intensity attribute; the kernel
    /// interface has no single-channel update.
    fn write_intensity(&self) -> Result<()> {
        let contents = format!("{} {} {}", self.red, self.green, self.blue);
        fs::write(self.dir.join("multi_intensity"), contents)?;
        Ok(())
    }
}

impl CaseLed for SysfsLed {
    fn set_red(&mut self, value: u8) -> Result<()> {
        self.red = value;
        self.write_intensity()
    }

    fn set_green(&mut self, value: u8) -> Result<()> {
        self.green = value;
        self.write_intensity()
    }

    fn set_blue(&mut self, value: u8) -> Result<()> {
        self.blue = value;
        self.write_intensity()
    }

    fn set_brightness(&mut self, value: u8) -> Result<()> {
        self.brightness = value;
        fs::write(self.dir.join("brightness"), value.to_string())?;
        Ok(())
    }
}
