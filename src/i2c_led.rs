use crate::bus::RegisterBus;
use crate::error::Result;
use crate::led::CaseLed;

/// Mode/status register; reads back `MODE_READY` once the chip is set up.
const REG_MODE: u8 = 0x00;
/// Writing `RESET_MAGIC` here soft-resets the whole chip.
const REG_RESET: u8 = 0x17;
/// First byte of the per-led channel register block.
const REG_LED_BASE: u8 = 0x0a;

const MODE_READY: u8 = 0x40;
const RESET_MAGIC: u8 = 0xff;

/// Channel offsets within one led's register triple.
const RED: u8 = 1;
const GREEN: u8 = 2;
const BLUE: u8 = 3;

/// One case led driven through the external controller chip.
///
/// The chip only stores already-scaled channel bytes, so the logical
/// channel values and the master brightness live here and the physical
/// bytes are recomputed on every write.
pub struct I2cLed<B: RegisterBus> {
    bus: B,
    /// Zero-based led index on the chip.
    lednum: u8,
    red: u8,
    green: u8,
    blue: u8,
    brightness: u8,
}

impl<B: RegisterBus> I2cLed<B> {
    /// Attach to led `lednum` (zero-based), resetting the chip on first use.
    ///
    /// A mode register that does not read back `MODE_READY` means the chip
    /// has not been set up since power-up: it is soft-reset and armed, and
    /// the led starts out dark. Otherwise the scaled channel bytes are read
    /// back; the true brightness multiplier cannot be recovered from the
    /// chip, so it is assumed to be 255.
    pub fn new(bus: B, lednum: u8) -> Result<Self> {
        let mut led = I2cLed { bus, lednum, red: 0, green: 0, blue: 0, brightness: 0 };
        if led.bus.read_reg(REG_MODE)? != MODE_READY {
            led.bus.write_reg(REG_RESET, RESET_MAGIC)?;
            led.bus.write_reg(REG_MODE, MODE_READY)?;
        } else {
            led.red = led.bus.read_reg(led.channel_reg(RED))?;
            led.green = led.bus.read_reg(led.channel_reg(GREEN))?;
            led.blue = led.bus.read_reg(led.channel_reg(BLUE))?;
            led.brightness = 255;
        }
        Ok(led)
    }

    fn channel_reg(&self, channel: u8) -> u8 {
        REG_LED_BASE + self.lednum * 3 + channel
    }

    /// floor(brightness / 255 * value), computed in integer arithmetic.
    fn scaled(&self, value: u8) -> u8 {
        (u16::from(self.brightness) * u16::from(value) / 255) as u8
    }

    fn write_channel(&mut self, channel: u8, value: u8) -> Result<()> {
        let scaled = self.scaled(value);
        self.bus.write_reg(self.channel_reg(channel), scaled)
    }
}

impl<B: RegisterBus> CaseLed for I2cLed<B> {
    fn set_red(&mut self, value: u8) -> Result<()> {
        self.red = value;
        self.write_channel(RED, value)
    }

    fn set_green(&mut self, value: u8) -> Result<()> {
        self.green = value;
        self.write_channel(GREEN, value)
    }

    fn set_blue(&mut self, value: u8) -> Result<()> {
        self.blue = value;
        self.write_channel(BLUE, value)
    }

    /// Rewrites all three channel registers with the new multiplier
    /// applied, one transaction each; a concurrent reader could observe a
    /// partially updated color.
    fn set_brightness(&mut self, value: u8) -> Result<()> {
        self.brightness = value;
        self.write_channel(RED, self.red)?;
        self.write_channel(GREEN, self.green)?;
        self.write_channel(BLUE, self.blue)
    }
}

/// Force the controller chip back to its default initialized state.
///
/// Unlike construction this does not look at the mode register first; it
/// always resets, regardless of what the chip currently holds. Used for
/// recovery when the chip's state is suspect.
pub fn reset_controller<B: RegisterBus>(bus: &mut B) -> Result<()> {
    bus.write_reg(REG_RESET, RESET_MAGIC)?;
    bus.write_reg(REG_MODE, MODE_READY)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory register file standing in for the controller chip.
    struct MockBus {
        regs: [u8; 256],
        reads: usize,
        writes: Vec<(u8, u8)>,
    }

    impl MockBus {
        /// A chip fresh from power-up: every register reads zero.
        fn poweron() -> Self {
            MockBus { regs: [0; 256], reads: 0, writes: Vec::new() }
        }

        /// A chip that was already set up by an earlier invocation.
        fn initialized() -> Self {
            let mut bus = Self::poweron();
            bus.regs[REG_MODE as usize] = MODE_READY;
            bus
        }
    }

    impl RegisterBus for &mut MockBus {
        fn read_reg(&mut self, reg: u8) -> Result<u8> {
            self.reads += 1;
            Ok(self.regs[reg as usize])
        }

        fn write_reg(&mut self, reg: u8, value: u8) -> Result<()> {
            self.regs[reg as usize] = value;
            self.writes.push((reg, value));
            Ok(())
        }
    }

    #[test]
    fn poweron_construction_resets_chip() {
        let mut bus = MockBus::poweron();
        let led = I2cLed::new(&mut bus, 0).unwrap();
        assert_eq!((led.red, led.green, led.blue, led.brightness), (0, 0, 0, 0));
        drop(led);

        assert_eq!(bus.reads, 1);
        assert_eq!(bus.writes, vec![(REG_RESET, RESET_MAGIC), (REG_MODE, MODE_READY)]);
    }

    #[test]
    fn warm_construction_reads_channels_back() {
        let mut bus = MockBus::initialized();
        bus.regs[0x0b] = 10;
        bus.regs[0x0c] = 20;
        bus.regs[0x0d] = 30;

        let led = I2cLed::new(&mut bus, 0).unwrap();
        assert_eq!((led.red, led.green, led.blue), (10, 20, 30));
        assert_eq!(led.brightness, 255);
        drop(led);

        // One mode read plus the three channel registers, nothing written.
        assert_eq!(bus.reads, 4);
        assert!(bus.writes.is_empty());
    }

    #[test]
    fn warm_construction_uses_per_led_register_block() {
        let mut bus = MockBus::initialized();
        // Led 2's block starts at 0x0a + 2*3.
        bus.regs[0x11] = 1;
        bus.regs[0x12] = 2;
        bus.regs[0x13] = 3;

        let led = I2cLed::new(&mut bus, 2).unwrap();
        assert_eq!((led.red, led.green, led.blue), (1, 2, 3));
    }

    #[test]
    fn channel_write_is_scaled_by_current_brightness() {
        let cases = [
            (255u8, 255u8, 255u8),
            (255, 200, 200),
            (127, 255, 127),
            (128, 128, 64),
            (1, 1, 0),
            (0, 255, 0),
        ];
        for (brightness, value, physical) in cases {
            let mut bus = MockBus::poweron();
            let mut led = I2cLed::new(&mut bus, 0).unwrap();
            led.set_brightness(brightness).unwrap();
            led.set_red(value).unwrap();
            drop(led);

            assert_eq!(
                bus.writes.last(),
                Some(&(0x0b, physical)),
                "brightness {} value {}",
                brightness,
                value
            );
        }
    }

    #[test]
    fn brightness_write_rescales_all_three_channels() {
        let mut bus = MockBus::initialized();
        bus.regs[0x0b] = 10;
        bus.regs[0x0c] = 20;
        bus.regs[0x0d] = 30;

        let mut led = I2cLed::new(&mut bus, 0).unwrap();
        led.set_brightness(51).unwrap();
        drop(led);

        assert_eq!(bus.writes, vec![(0x0b, 2), (0x0c, 4), (0x0d, 6)]);
    }

    #[test]
    fn interleaved_writes_use_latest_of_both_values() {
        let mut bus = MockBus::initialized();
        let mut led = I2cLed::new(&mut bus, 0).unwrap();

        led.set_red(200).unwrap();
        led.set_brightness(128).unwrap();
        led.set_red(50).unwrap();
        drop(led);

        let red_writes: Vec<u8> =
            bus.writes.iter().filter(|(reg, _)| *reg == 0x0b).map(|(_, v)| *v).collect();
        // 200 at full brightness, 200 rescaled to 128/255, then 50 scaled.
        assert_eq!(red_writes, vec![200, 100, 25]);
    }

    #[test]
    fn reset_is_unconditional() {
        let mut bus = MockBus::initialized();
        reset_controller(&mut (&mut bus)).unwrap();

        assert_eq!(bus.reads, 0);
        assert_eq!(bus.writes, vec![(REG_RESET, RESET_MAGIC), (REG_MODE, MODE_READY)]);
    }
}
