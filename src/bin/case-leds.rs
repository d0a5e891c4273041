use std::process;

use clap::Parser;

use case_leds::args::{Function, SetArgs};

/// Set one function of one case led.
fn main() -> anyhow::Result<()> {
    let args = SetArgs::parse();
    let (lednum, function, value) = match args.validated() {
        Ok(checked) => checked,
        Err(msg) => {
            println!("{}", msg);
            process::exit(1);
        }
    };

    let mut led = case_leds::open_led(lednum)?;
    match function {
        Function::Brightness => led.set_brightness(value)?,
        Function::Red => led.set_red(value)?,
        Function::Green => led.set_green(value)?,
        Function::Blue => led.set_blue(value)?,
    }
    Ok(())
}
