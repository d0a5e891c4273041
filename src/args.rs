use std::str::FromStr;

use clap::Parser;

/// Control the case leds from the command line.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct SetArgs {
    /// The number (1-4) of the led to control.
    pub lednum: i32,

    /// The function to control, <brightness/red/green/blue>.
    pub function: String,

    /// The value (0-255) to write to the function.
    pub value: i32,
}

/// The per-led function a value can be written to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Function {
    Brightness,
    Red,
    Green,
    Blue,
}

impl FromStr for Function {
    type Err = ();

    fn from_str(s: &str) -> Result<Function, ()> {
        match s {
            "brightness" => Ok(Function::Brightness),
            "red" => Ok(Function::Red),
            "green" => Ok(Function::Green),
            "blue" => Ok(Function::Blue),
            _ => Err(()),
        }
    }
}

impl SetArgs {
    /// Range-check the raw arguments before anything touches hardware.
    ///
    /// On rejection, returns the message to print on stdout.
    pub fn validated(&self) -> Result<(u8, Function, u8), &'static str> {
        if !(1..=4).contains(&self.lednum) {
            return Err("Invalid led number");
        }
        let function = self.function.parse().map_err(|_| "Invalid function")?;
        if !(0..=255).contains(&self.value) {
            return Err("Invalid value");
        }
        Ok((self.lednum as u8, function, self.value as u8))
    }
}
