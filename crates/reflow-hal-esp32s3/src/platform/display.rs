use embedded_graphics::prelude::Point;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
use log::{info, warn};
use pcd8544::{FrameBuffer, Pcd8544};
use reflow_core::display::Display;

use crate::render::text;

/// Display operation that hit a transport error.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DisplayFault {
    Begin,
    Flush,
    Contrast,
}

/// Menu display backed by a PCD8544 panel and a local framebuffer.
///
/// Transport errors never reach the menu. The first one is logged and
/// latched until [`NokiaDisplay::take_fault`].
#[derive(Debug)]
pub struct NokiaDisplay<SPI, DC, RST, DELAY> {
    driver: Pcd8544<SPI, DC, RST>,
    delay: DELAY,
    frame: FrameBuffer,
    cursor: Point,
    text_size: u8,
    fault: Option<DisplayFault>,
}

impl<SPI, DC, RST, DELAY> NokiaDisplay<SPI, DC, RST, DELAY>
where
    SPI: SpiDevice<u8>,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    pub fn new(driver: Pcd8544<SPI, DC, RST>, delay: DELAY) -> Self {
        Self {
            driver,
            delay,
            frame: FrameBuffer::new(),
            cursor: Point::zero(),
            text_size: 1,
            fault: None,
        }
    }

    /// Returns and clears the latched fault.
    pub fn take_fault(&mut self) -> Option<DisplayFault> {
        self.fault.take()
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn text_cursor(&self) -> Point {
        self.cursor
    }

    /// Releases the driver and delay provider.
    pub fn release(self) -> (Pcd8544<SPI, DC, RST>, DELAY) {
        (self.driver, self.delay)
    }

    fn record_fault<E>(&mut self, fault: DisplayFault, result: Result<(), E>)
    where
        E: core::fmt::Debug,
    {
        if let Err(err) = result {
            if self.fault.is_none() {
                warn!("display: {:?} failed: {:?}", fault, err);
            }
            self.fault = Some(fault);
        }
    }
}

impl<SPI, DC, RST, DELAY> Display for NokiaDisplay<SPI, DC, RST, DELAY>
where
    SPI: SpiDevice<u8>,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    fn begin(&mut self) {
        let result = self.driver.init(&mut self.delay);
        if result.is_ok() {
            info!(
                "display: pcd8544 init ok contrast={}",
                self.driver.config().contrast
            );
        }
        self.record_fault(DisplayFault::Begin, result);
    }

    fn clear_frame(&mut self) {
        self.frame.clear(false);
        self.cursor = Point::zero();
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Point::new(x, y);
    }

    fn draw_text(&mut self, text: &str) {
        let next = match text::draw_text(&mut self.frame, self.cursor, text, self.text_size) {
            Ok(next) => next,
            Err(never) => match never {},
        };
        self.cursor = next;
    }

    fn flush(&mut self) {
        let result = self.driver.flush_frame(&self.frame);
        self.record_fault(DisplayFault::Flush, result);
    }

    fn set_contrast(&mut self, level: u8) {
        let result = self.driver.set_contrast(level);
        self.record_fault(DisplayFault::Contrast, result);
    }

    fn set_text_size(&mut self, size: u8) {
        self.text_size = size.max(1);
    }
}

#[cfg(test)]
mod tests {
    use core::{cell::RefCell, convert::Infallible};
    use std::rc::Rc;

    use embedded_hal::{
        digital::ErrorType as PinErrorType,
        spi::{ErrorKind, ErrorType as SpiErrorType, Operation},
    };
    use pcd8544::Config;
    use reflow_core::{MenuConfig, MenuController, MenuItem};

    use super::*;

    #[derive(Default)]
    struct Bus {
        fail_writes: bool,
        data_writes: usize,
        command_writes: Vec<Vec<u8>>,
        dc_high: bool,
    }

    type SharedBus = Rc<RefCell<Bus>>;

    struct FakeSpi(SharedBus);
    struct FakePin(SharedBus, bool);
    struct NoDelay;

    impl SpiErrorType for FakeSpi {
        type Error = ErrorKind;
    }

    impl SpiDevice<u8> for FakeSpi {
        fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), ErrorKind> {
            let mut bus = self.0.borrow_mut();
            if bus.fail_writes {
                return Err(ErrorKind::Other);
            }
            for operation in operations.iter() {
                if let Operation::Write(bytes) = operation {
                    if bus.dc_high {
                        bus.data_writes += 1;
                    } else {
                        bus.command_writes.push(bytes.to_vec());
                    }
                }
            }
            Ok(())
        }
    }

    impl PinErrorType for FakePin {
        type Error = Infallible;
    }

    impl OutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            if self.1 {
                self.0.borrow_mut().dc_high = false;
            }
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            if self.1 {
                self.0.borrow_mut().dc_high = true;
            }
            Ok(())
        }
    }

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    type TestDisplay = NokiaDisplay<FakeSpi, FakePin, FakePin, NoDelay>;

    fn make_display() -> (TestDisplay, SharedBus) {
        let bus = SharedBus::default();
        let driver = Pcd8544::new(
            FakeSpi(bus.clone()),
            FakePin(bus.clone(), true),
            FakePin(bus.clone(), false),
            Config::default(),
        );
        (NokiaDisplay::new(driver, NoDelay), bus)
    }

    #[test]
    fn draw_text_advances_cursor_by_glyph_width() {
        let (mut display, _bus) = make_display();

        display.set_cursor(6, 8);
        display.draw_text("Soak");
        assert_eq!(display.text_cursor(), Point::new(30, 8));

        display.set_text_size(2);
        display.draw_text(": ");
        assert_eq!(display.text_cursor(), Point::new(54, 8));
    }

    #[test]
    fn clear_frame_blanks_pixels() {
        let (mut display, _bus) = make_display();
        display.draw_text("*");
        assert!(display.frame().bytes().iter().any(|byte| *byte != 0));

        display.clear_frame();

        assert!(display.frame().bytes().iter().all(|byte| *byte == 0));
    }

    #[test]
    fn menu_refresh_flushes_frame_over_spi() {
        let (display, bus) = make_display();
        let soak = core::cell::Cell::new(150);
        let items = [MenuItem::new("Soak", &soak, "C", 100, 200, 5)];
        let mut menu = MenuController::new(display, MenuConfig::default());
        menu.begin();
        menu.set_contents(&items).unwrap();

        menu.refresh();

        let bus = bus.borrow();
        assert_eq!(bus.data_writes, 1);
        // contrast at construction, init sequence, then home before the frame
        assert_eq!(bus.command_writes[0], vec![0x21, 0x80 | 35, 0x20]);
        assert_eq!(bus.command_writes.last().unwrap(), &vec![0x80, 0x40]);
        assert!(menu.display().frame().bytes().iter().any(|byte| *byte != 0));
        assert_eq!(menu.display_mut().take_fault(), None);
    }

    #[test]
    fn transport_failure_is_latched_not_propagated() {
        let (mut display, bus) = make_display();
        bus.borrow_mut().fail_writes = true;

        display.flush();
        display.flush();

        assert_eq!(display.take_fault(), Some(DisplayFault::Flush));
        assert_eq!(display.take_fault(), None);

        display.set_contrast(40);
        assert_eq!(display.take_fault(), Some(DisplayFault::Contrast));
    }
}
