#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]

use core::cell::Cell;

use embassy_executor::Spawner;
use embassy_time::Timer;
use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::{
    clock::CpuClock,
    delay::Delay,
    gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull},
    spi::master::Spi,
    time::Rate,
    timer::timg::TimerGroup,
};
use log::{LevelFilter, info, warn};
use pcd8544::Pcd8544;
use reflow_core::{InputProvider, MenuConfig, MenuController, MenuItem, Mode};
use reflow_hal_esp32s3::{
    input::buttons::{ButtonConfig, ButtonInput},
    platform::display::NokiaDisplay,
};

const TITLE: &str = "Reflow";
const BUTTON_POLL_INTERVAL_MS: u64 = 2;
const BUTTON_DEBOUNCE_POLLS: u8 = 4;
const DISPLAY_CONTRAST: u8 = 40;

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    esp_println::logger::init_logger(LevelFilter::Info);
    esp_println::println!("boot: reflow starting");

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Nokia 5110 wiring used by this board:
    // CLK=GPIO13, DIN=GPIO14, CE=GPIO15, DC=GPIO16, RST=GPIO17
    let cs = Output::new(peripherals.GPIO15, Level::High, OutputConfig::default());
    let dc = Output::new(peripherals.GPIO16, Level::Low, OutputConfig::default());
    let rst = Output::new(peripherals.GPIO17, Level::High, OutputConfig::default());

    let display_config = pcd8544::Config::default().with_contrast(DISPLAY_CONTRAST);
    let spi_config = esp_hal::spi::master::Config::default()
        .with_frequency(Rate::from_hz(display_config.spi_hz))
        // PCD8544 samples on the rising edge: CPOL=0, CPHA=0.
        .with_mode(esp_hal::spi::Mode::_0);

    let spi = Spi::new(peripherals.SPI2, spi_config)
        .unwrap()
        .with_sck(peripherals.GPIO13)
        .with_mosi(peripherals.GPIO14);
    let spi_device = ExclusiveDevice::new(spi, cs, Delay::new()).unwrap();

    let driver = Pcd8544::new(spi_device, dc, rst, display_config);
    let display = NokiaDisplay::new(driver, Delay::new());

    // Buttons to ground: UP=GPIO10, DOWN=GPIO11, SELECT=GPIO12
    let input_cfg = InputConfig::default().with_pull(Pull::Up);
    let mut input = ButtonInput::new(
        Input::new(peripherals.GPIO10, input_cfg),
        Input::new(peripherals.GPIO11, input_cfg),
        Input::new(peripherals.GPIO12, input_cfg),
        ButtonConfig::default().with_debounce_polls(BUTTON_DEBOUNCE_POLLS),
    )
    .unwrap();

    let soak_temp = Cell::new(150);
    let soak_time = Cell::new(90);
    let peak_temp = Cell::new(235);
    let dwell_time = Cell::new(45);
    let ramp_rate = Cell::new(2);
    let items = [
        MenuItem::new("Soak", &soak_temp, "C", 100, 200, 5),
        MenuItem::new("SoakT", &soak_time, "s", 30, 180, 10),
        MenuItem::new("Peak", &peak_temp, "C", 200, 260, 5),
        MenuItem::new("Dwell", &dwell_time, "s", 10, 90, 5),
        MenuItem::new("Ramp", &ramp_rate, "C/s", 1, 4, 1),
    ];

    let mut menu = MenuController::new(
        display,
        MenuConfig::default().with_contrast(DISPLAY_CONTRAST),
    );
    menu.begin();
    if let Err(err) = menu.set_contents(&items) {
        warn!("menu: contents rejected: {}", err);
    }
    menu.set_header(Some(TITLE));
    menu.refresh();
    info!(
        "menu: ready items={} rows={}",
        menu.item_count(),
        menu.visible_rows()
    );

    loop {
        loop {
            match input.poll_event() {
                Ok(Some(event)) => {
                    let was_editing = menu.mode() == Mode::Editing;
                    menu.handle(event);
                    if was_editing
                        && menu.mode() == Mode::Browsing
                        && let Some(item) = menu.current_item()
                    {
                        info!("menu: {} set to {}{}", item.name, item.value(), item.unit);
                    }
                }
                Ok(None) => break,
                Err(err) => {
                    warn!("input: button read failed: {:?}", err);
                    break;
                }
            }
        }

        if let Some(fault) = menu.display_mut().take_fault() {
            warn!("display: fault {:?}", fault);
        }

        Timer::after_millis(BUTTON_POLL_INTERVAL_MS).await;
    }
}

#[panic_handler]
fn panic(_: &core::panic::PanicInfo) -> ! {
    loop {}
}

// This creates a default app-descriptor required by the esp-idf bootloader.
// For more information see: <https://docs.espressif.com/projects/esp-idf/en/stable/esp32/api-reference/system/app_image_format.html#application-description>
esp_bootloader_esp_idf::esp_app_desc!();
