//! LS013B7DH05 driver
//!
//! The panel's chip select is active high, so the driver owns a plain
//! [`SpiBus`] and drives CS itself rather than going through `SpiDevice`.

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use crate::protocol;
use crate::FrameBuffer;

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// SPI clock the board should configure (Hz)
    pub spi_hz: u32,
    /// EXTCOMIN toggle rate expected from the caller (Hz)
    pub extcomin_hz: u8,
    /// CS high to first clock (ns)
    pub cs_setup_ns: u32,
    /// Last clock to CS low (ns)
    pub cs_hold_ns: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spi_hz: 1_000_000,
            extcomin_hz: 1,
            cs_setup_ns: 6_000,
            cs_hold_ns: 2_000,
        }
    }
}

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<SpiErr, PinErr> {
    /// SPI transfer failed
    Spi(SpiErr),
    /// Chip select pin failed
    Cs(PinErr),
    /// DISP pin failed
    Disp(PinErr),
    /// EXTCOMIN pin failed
    ExtCom(PinErr),
    /// Line number outside 1..=168
    InvalidLine(u16),
}

/// Sharp 144x168 memory LCD
#[derive(Debug)]
pub struct Ls013<SPI, CS, DISP, EXTCOM, DELAY> {
    spi: SPI,
    cs: CS,
    disp: DISP,
    extcom: EXTCOM,
    delay: DELAY,
    config: Config,
    extcom_high: bool,
}

impl<SPI, CS, DISP, EXTCOM, DELAY, PinErr> Ls013<SPI, CS, DISP, EXTCOM, DELAY>
where
    SPI: SpiBus<u8>,
    CS: OutputPin<Error = PinErr>,
    DISP: OutputPin<Error = PinErr>,
    EXTCOM: OutputPin<Error = PinErr>,
    DELAY: DelayNs,
{
    pub fn new(spi: SPI, cs: CS, disp: DISP, extcom: EXTCOM, delay: DELAY, config: Config) -> Self {
        Self {
            spi,
            cs,
            disp,
            extcom,
            delay,
            config,
            extcom_high: false,
        }
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// Give back the bus and pins
    pub fn release(self) -> (SPI, CS, DISP, EXTCOM, DELAY) {
        (self.spi, self.cs, self.disp, self.extcom, self.delay)
    }

    /// Clear the panel and switch it on
    pub fn init(&mut self) -> Result<(), Error<SPI::Error, PinErr>> {
        self.cs.set_low().map_err(Error::Cs)?;
        self.clear_all()?;
        self.enable_display()
    }

    pub fn enable_display(&mut self) -> Result<(), Error<SPI::Error, PinErr>> {
        self.disp.set_high().map_err(Error::Disp)
    }

    pub fn disable_display(&mut self) -> Result<(), Error<SPI::Error, PinErr>> {
        self.disp.set_low().map_err(Error::Disp)
    }

    /// Flip EXTCOMIN
    ///
    /// Must be called at [`Config::extcomin_hz`] while the panel is on, or
    /// the liquid crystal takes a DC bias.
    pub fn toggle_extcomin(&mut self) -> Result<(), Error<SPI::Error, PinErr>> {
        self.extcom_high = !self.extcom_high;

        if self.extcom_high {
            self.extcom.set_high().map_err(Error::ExtCom)
        } else {
            self.extcom.set_low().map_err(Error::ExtCom)
        }
    }

    /// Blank the whole panel
    pub fn clear_all(&mut self) -> Result<(), Error<SPI::Error, PinErr>> {
        let packet = protocol::build_clear_packet(false);
        self.transaction(|spi| spi.write(&packet))
    }

    /// Write a single line (1..=168)
    pub fn write_line(
        &mut self,
        line: u16,
        data: &[u8; protocol::LINE_BYTES],
    ) -> Result<(), Error<SPI::Error, PinErr>> {
        let packet = protocol::build_write_line_packet(line, data, false)
            .ok_or(Error::InvalidLine(line))?;
        self.transaction(|spi| spi.write(&packet))
    }

    /// Send the lines changed since the last flush in one transfer
    ///
    /// Returns the number of lines written.
    pub fn flush(&mut self, buffer: &mut FrameBuffer) -> Result<usize, Error<SPI::Error, PinErr>> {
        let count = buffer.dirty_lines().count();
        if count == 0 {
            return Ok(0);
        }

        self.transaction(|spi| {
            spi.write(&[protocol::update_mode_byte(false)])?;
            for line in buffer.dirty_lines() {
                if let Some(block) = buffer
                    .line(line)
                    .and_then(|data| protocol::build_line_block(line, data))
                {
                    spi.write(&block)?;
                }
            }
            spi.write(&[0x00])
        })?;

        buffer.mark_clean();
        Ok(count)
    }

    /// Rewrite every line regardless of change tracking
    pub fn flush_full(&mut self, buffer: &mut FrameBuffer) -> Result<usize, Error<SPI::Error, PinErr>> {
        buffer.mark_all_dirty();
        self.flush(buffer)
    }

    /// Run `f` with CS asserted, always releasing CS afterwards
    fn transaction<F>(&mut self, f: F) -> Result<(), Error<SPI::Error, PinErr>>
    where
        F: FnOnce(&mut SPI) -> Result<(), SPI::Error>,
    {
        self.cs.set_high().map_err(Error::Cs)?;
        self.delay.delay_ns(self.config.cs_setup_ns);

        let result = f(&mut self.spi).and_then(|()| self.spi.flush());

        self.delay.delay_ns(self.config.cs_hold_ns);
        let released = self.cs.set_low().map_err(Error::Cs);

        result.map_err(Error::Spi)?;
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType as PinErrorType;
    use embedded_hal::spi::{ErrorKind, ErrorType as SpiErrorType};

    #[derive(Default)]
    struct MockSpi {
        bytes: Vec<u8>,
        flushes: u32,
        fail: bool,
    }

    impl SpiErrorType for MockSpi {
        type Error = ErrorKind;
    }

    impl SpiBus<u8> for MockSpi {
        fn read(&mut self, words: &mut [u8]) -> Result<(), ErrorKind> {
            words.fill(0);
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), ErrorKind> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            self.bytes.extend_from_slice(words);
            Ok(())
        }

        fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), ErrorKind> {
            read.fill(0);
            self.write(write)
        }

        fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), ErrorKind> {
            let copy = words.to_vec();
            self.write(&copy)
        }

        fn flush(&mut self) -> Result<(), ErrorKind> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockPin {
        levels: Vec<bool>,
    }

    impl PinErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.levels.push(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.levels.push(true);
            Ok(())
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    type TestLcd = Ls013<MockSpi, MockPin, MockPin, MockPin, NoDelay>;

    fn lcd() -> TestLcd {
        Ls013::new(
            MockSpi::default(),
            MockPin::default(),
            MockPin::default(),
            MockPin::default(),
            NoDelay,
            Config::default(),
        )
    }

    #[test]
    fn test_init_clears_then_enables() {
        let mut lcd = lcd();
        lcd.init().unwrap();

        let (spi, cs, disp, _, _) = lcd.release();
        assert_eq!(spi.bytes, vec![0x20, 0x00]);
        assert_eq!(cs.levels, vec![false, true, false]);
        assert_eq!(disp.levels, vec![true]);
    }

    #[test]
    fn test_extcomin_alternates() {
        let mut lcd = lcd();
        for _ in 0..3 {
            lcd.toggle_extcomin().unwrap();
        }

        let (_, _, _, extcom, _) = lcd.release();
        assert_eq!(extcom.levels, vec![true, false, true]);
    }

    #[test]
    fn test_write_line_rejects_bad_line() {
        let mut lcd = lcd();
        let data = [0u8; protocol::LINE_BYTES];

        assert_eq!(lcd.write_line(0, &data), Err(Error::InvalidLine(0)));
        assert_eq!(lcd.write_line(169, &data), Err(Error::InvalidLine(169)));
        assert!(lcd.write_line(168, &data).is_ok());
    }

    #[test]
    fn test_flush_sends_only_dirty_lines() {
        let mut lcd = lcd();
        let mut fb = FrameBuffer::new();
        fb.mark_clean();
        fb.set_pixel(0, 4, true);
        fb.set_pixel(0, 9, true);

        assert_eq!(lcd.flush(&mut fb).unwrap(), 2);
        assert!(!fb.is_dirty());
        assert_eq!(lcd.flush(&mut fb).unwrap(), 0);

        let (spi, cs, _, _, _) = lcd.release();
        let block = protocol::LINE_BLOCK_SIZE;
        assert_eq!(spi.bytes.len(), 1 + 2 * block + 1);
        assert_eq!(spi.bytes[0], 0x80);
        assert_eq!(spi.bytes[1], 5u8.reverse_bits());
        assert_eq!(spi.bytes[2], 0x80);
        assert_eq!(spi.bytes[1 + block], 10u8.reverse_bits());
        assert_eq!(spi.flushes, 1);
        assert_eq!(cs.levels, vec![true, false]);
    }

    #[test]
    fn test_flush_full_writes_every_line() {
        let mut lcd = lcd();
        let mut fb = FrameBuffer::new();
        fb.mark_clean();

        assert_eq!(lcd.flush_full(&mut fb).unwrap(), protocol::HEIGHT);

        let (spi, _, _, _, _) = lcd.release();
        assert_eq!(
            spi.bytes.len(),
            2 + protocol::HEIGHT * protocol::LINE_BLOCK_SIZE
        );
    }

    #[test]
    fn test_spi_failure_releases_cs() {
        let mut lcd = lcd();
        lcd.spi.fail = true;
        let mut fb = FrameBuffer::new();

        assert_eq!(lcd.flush(&mut fb), Err(Error::Spi(ErrorKind::Other)));
        assert!(fb.is_dirty());

        let (_, cs, _, _, _) = lcd.release();
        assert_eq!(cs.levels, vec![true, false]);
    }
}
