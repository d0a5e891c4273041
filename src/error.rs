use std::io;
use std::num::ParseIntError;

use i2cdev::linux::LinuxI2CError;

/// Errors surfaced by the led backends.
///
/// Nothing in this crate retries or substitutes a fallback value; every
/// failure propagates to the caller as one of these variants.
#[derive(Debug, thiserror::Error)]
pub enum LedError {
    /// An i2c transaction against the led controller failed.
    #[error("i2c transport error: {0}")]
    Transport(#[from] LinuxI2CError),

    /// A sysfs attribute file could not be read or written.
    #[error("led attribute error: {0}")]
    Attribute(#[from] io::Error),

    /// An attribute file held something other than a decimal value in 0-255.
    #[error("unparseable led attribute: {0}")]
    Parse(#[from] ParseIntError),

    /// The intensity attribute did not hold exactly three fields.
    #[error("malformed intensity attribute: {0:?}")]
    MalformedIntensity(String),
}

pub type Result<T> = std::result::Result<T, LedError>;
