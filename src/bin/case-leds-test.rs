use std::thread;
use std::time::Duration;

use case_leds::CaseLed;

/// How long each color stays lit.
const HOLD: Duration = Duration::from_secs(2);

/// Flash each color across all four case leds, then turn everything off.
fn main() -> anyhow::Result<()> {
    let mut leds: Vec<Box<dyn CaseLed>> = Vec::new();
    for lednum in 1..=4 {
        leds.push(case_leds::open_led(lednum)?);
    }

    for led in &mut leds {
        led.set_brightness(127)?;
    }

    for led in &mut leds {
        led.set_red(255)?;
    }
    thread::sleep(HOLD);
    for led in &mut leds {
        led.set_red(0)?;
    }

    for led in &mut leds {
        led.set_green(255)?;
    }
    thread::sleep(HOLD);
    for led in &mut leds {
        led.set_green(0)?;
    }

    for led in &mut leds {
        led.set_blue(255)?;
    }
    thread::sleep(HOLD);
    for led in &mut leds {
        led.set_blue(0)?;
    }

    for led in &mut leds {
        led.set_brightness(0)?;
    }

    Ok(())
}
