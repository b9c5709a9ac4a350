#![cfg_attr(not(test), no_std)]

//! PCD8544 (Nokia 5110, 84x48 monochrome LCD) driver primitives.

mod framebuffer;
pub mod protocol;

#[cfg(feature = "embedded-graphics")]
mod graphics;

pub use framebuffer::FrameBuffer;
pub use protocol::DisplayMode;

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

/// Driver configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// Expected SPI clock in Hz (documented for board glue).
    pub spi_hz: u32,
    /// Operating voltage setting applied at init (0..=127).
    pub contrast: u8,
    /// Bias system setting (0..=7).
    pub bias: u8,
    /// Temperature coefficient (0..=3).
    pub temperature_coefficient: u8,
    /// Width of the RST low pulse.
    pub reset_pulse_us: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spi_hz: 4_000_000,
            contrast: 35,
            bias: 4,
            temperature_coefficient: 0,
            reset_pulse_us: 500,
        }
    }
}

impl Config {
    pub const fn with_contrast(mut self, contrast: u8) -> Self {
        self.contrast = contrast;
        self
    }

    pub const fn with_bias(mut self, bias: u8) -> Self {
        self.bias = bias;
        self
    }

    pub const fn with_spi_hz(mut self, spi_hz: u32) -> Self {
        self.spi_hz = spi_hz;
        self
    }
}

/// Driver errors.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error<SpiErr, DcErr, RstErr> {
    /// SPI transaction failed.
    Spi(SpiErr),
    /// D/C pin operation failed.
    Dc(DcErr),
    /// RST pin operation failed.
    Rst(RstErr),
}

pub type DriverResult<SpiErr, DcErr, RstErr> = Result<(), Error<SpiErr, DcErr, RstErr>>;

/// PCD8544 driver.
///
/// Chip select is owned by the `SpiDevice`; D/C selects command or data mode.
#[derive(Debug)]
pub struct Pcd8544<SPI, DC, RST> {
    spi: SPI,
    dc: DC,
    rst: RST,
    config: Config,
}

impl<SPI, DC, RST> Pcd8544<SPI, DC, RST>
where
    SPI: SpiDevice<u8>,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Creates a new driver instance. Nothing is sent until [`Self::init`].
    pub fn new(spi: SPI, dc: DC, rst: RST, config: Config) -> Self {
        Self {
            spi,
            dc,
            rst,
            config,
        }
    }

    /// Returns current configuration.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Releases owned bus and pins.
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }

    /// Pulses RST low. Controller RAM content is undefined afterwards.
    pub fn reset<D>(&mut self, delay: &mut D) -> DriverResult<SPI::Error, DC::Error, RST::Error>
    where
        D: DelayNs,
    {
        self.rst.set_low().map_err(Error::Rst)?;
        delay.delay_us(self.config.reset_pulse_us);
        self.rst.set_high().map_err(Error::Rst)
    }

    /// Resets the controller and sends the power-up command sequence.
    pub fn init<D>(&mut self, delay: &mut D) -> DriverResult<SPI::Error, DC::Error, RST::Error>
    where
        D: DelayNs,
    {
        self.reset(delay)?;

        let sequence = protocol::build_init_sequence(
            self.config.contrast,
            self.config.temperature_coefficient,
            self.config.bias,
        );
        self.write_commands(&sequence)
    }

    /// Sets the operating voltage. Levels above 127 saturate.
    pub fn set_contrast(&mut self, contrast: u8) -> DriverResult<SPI::Error, DC::Error, RST::Error> {
        self.write_commands(&protocol::build_contrast_sequence(contrast))?;
        self.config.contrast = contrast.min(protocol::MAX_VOP);
        Ok(())
    }

    /// Switches between blank, normal, inverse, and all-on output.
    pub fn set_display_mode(
        &mut self,
        mode: DisplayMode,
    ) -> DriverResult<SPI::Error, DC::Error, RST::Error> {
        self.write_commands(&[protocol::display_control(mode)])
    }

    /// Blanks controller RAM.
    pub fn clear_all(&mut self) -> DriverResult<SPI::Error, DC::Error, RST::Error> {
        self.flush_full(&[0u8; protocol::BUFFER_SIZE])
    }

    /// Flushes a full framebuffer starting at column 0, bank 0.
    pub fn flush_full(
        &mut self,
        buffer: &[u8; protocol::BUFFER_SIZE],
    ) -> DriverResult<SPI::Error, DC::Error, RST::Error> {
        self.write_commands(&protocol::build_home_sequence())?;
        self.dc.set_high().map_err(Error::Dc)?;
        self.spi.write(buffer).map_err(Error::Spi)
    }

    /// Flushes a [`FrameBuffer`].
    pub fn flush_frame(
        &mut self,
        frame: &FrameBuffer,
    ) -> DriverResult<SPI::Error, DC::Error, RST::Error> {
        self.flush_full(frame.bytes())
    }

    fn write_commands(&mut self, commands: &[u8]) -> DriverResult<SPI::Error, DC::Error, RST::Error> {
        self.dc.set_low().map_err(Error::Dc)?;
        self.spi.write(commands).map_err(Error::Spi)
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;
    use std::{cell::RefCell, rc::Rc, vec::Vec};

    use embedded_hal::{
        digital::ErrorType as PinErrorType,
        spi::{ErrorType as SpiErrorType, Operation},
    };

    use super::*;

    #[derive(Default)]
    struct Wire {
        dc_high: bool,
        rst_levels: Vec<bool>,
        // (data mode, bytes) per SPI write.
        writes: Vec<(bool, Vec<u8>)>,
    }

    type SharedWire = Rc<RefCell<Wire>>;

    struct FakeSpi(SharedWire);
    struct FakeDc(SharedWire);
    struct FakeRst(SharedWire);
    struct NoDelay;

    impl SpiErrorType for FakeSpi {
        type Error = Infallible;
    }

    impl SpiDevice<u8> for FakeSpi {
        fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Infallible> {
            let mut wire = self.0.borrow_mut();
            for operation in operations.iter() {
                if let Operation::Write(bytes) = operation {
                    let data_mode = wire.dc_high;
                    wire.writes.push((data_mode, bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    impl PinErrorType for FakeDc {
        type Error = Infallible;
    }

    impl OutputPin for FakeDc {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.0.borrow_mut().dc_high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.0.borrow_mut().dc_high = true;
            Ok(())
        }
    }

    impl PinErrorType for FakeRst {
        type Error = Infallible;
    }

    impl OutputPin for FakeRst {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.0.borrow_mut().rst_levels.push(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.0.borrow_mut().rst_levels.push(true);
            Ok(())
        }
    }

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn make_driver() -> (Pcd8544<FakeSpi, FakeDc, FakeRst>, SharedWire) {
        let wire = SharedWire::default();
        let driver = Pcd8544::new(
            FakeSpi(wire.clone()),
            FakeDc(wire.clone()),
            FakeRst(wire.clone()),
            Config::default(),
        );
        (driver, wire)
    }

    #[test]
    fn init_pulses_reset_then_sends_commands() {
        let (mut driver, wire) = make_driver();

        driver.init(&mut NoDelay).unwrap();

        let wire = wire.borrow();
        assert_eq!(wire.rst_levels, [false, true]);
        assert_eq!(wire.writes.len(), 1);
        let (data_mode, bytes) = &wire.writes[0];
        assert!(!data_mode);
        assert_eq!(bytes.as_slice(), &protocol::build_init_sequence(35, 0, 4));
    }

    #[test]
    fn set_contrast_saturates_and_updates_config() {
        let (mut driver, wire) = make_driver();

        driver.set_contrast(200).unwrap();

        assert_eq!(driver.config().contrast, protocol::MAX_VOP);
        let wire = wire.borrow();
        assert_eq!(wire.writes[0].1.as_slice(), &[0x21, 0xFF, 0x20]);
    }

    #[test]
    fn flush_sends_home_commands_then_frame_data() {
        let (mut driver, wire) = make_driver();
        let mut frame = FrameBuffer::new();
        frame.set_pixel(0, 0, true);

        driver.flush_frame(&frame).unwrap();

        let wire = wire.borrow();
        assert_eq!(wire.writes.len(), 2);
        assert_eq!(wire.writes[0], (false, vec![0x80, 0x40]));
        let (data_mode, bytes) = &wire.writes[1];
        assert!(data_mode);
        assert_eq!(bytes.len(), protocol::BUFFER_SIZE);
        assert_eq!(bytes[0], 0x01);
    }

    #[test]
    fn display_mode_is_a_single_command() {
        let (mut driver, wire) = make_driver();

        driver.set_display_mode(DisplayMode::Inverse).unwrap();
        driver.set_display_mode(DisplayMode::Blank).unwrap();

        let wire = wire.borrow();
        assert_eq!(wire.writes, vec![(false, vec![0x0D]), (false, vec![0x08])]);
    }

    #[test]
    fn clear_all_writes_blank_ram_from_origin() {
        let (mut driver, wire) = make_driver();

        driver.clear_all().unwrap();

        let wire = wire.borrow();
        assert_eq!(wire.writes.len(), 2);
        assert_eq!(wire.writes[0], (false, protocol::build_home_sequence().to_vec()));
        let (data_mode, bytes) = &wire.writes[1];
        assert!(data_mode);
        assert_eq!(bytes.len(), protocol::BUFFER_SIZE);
        assert!(bytes.iter().all(|byte| *byte == 0));
    }
}
