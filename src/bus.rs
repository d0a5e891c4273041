use i2cdev::core::I2CDevice;
use i2cdev::linux::LinuxI2CDevice;

use crate::error::Result;

/// The host i2c bus the led controller hangs off.
pub const BUS_PATH: &str = "/dev/i2c-2";

/// Fixed address of the led controller on that bus.
pub const CONTROLLER_ADDR: u16 = 0x14;

/// Byte-register access to the led controller.
///
/// The production implementation talks SMBus through the device node;
/// tests substitute an in-memory register file.
pub trait RegisterBus {
    fn read_reg(&mut self, reg: u8) -> Result<u8>;
    fn write_reg(&mut self, reg: u8, value: u8) -> Result<()>;
}

impl RegisterBus for LinuxI2CDevice {
    fn read_reg(&mut self, reg: u8) -> Result<u8> {
        Ok(self.smbus_read_byte_data(reg)?)
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<()> {
        Ok(self.smbus_write_byte_data(reg, value)?)
    }
}

/// Open a fresh connection to the led controller.
///
/// Each handle gets its own connection; invocations are short-lived
/// one-shot processes, so nothing is cached across them.
pub fn open_bus() -> Result<LinuxI2CDevice> {
    Ok(LinuxI2CDevice::new(BUS_PATH, CONTROLLER_ADDR)?)
}
