#![no_std]
#![no_main]
#![deny(clippy::large_stack_frames)]

use embassy_executor::Spawner;
use embassy_usb::class::hid::{HidReader, State};
use embassy_usb::UsbDevice;
use esp_hal::{
    clock::CpuClock,
    gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull},
    otg_fs::{asynch, Usb},
    timer::timg::TimerGroup,
};
use log::{info, LevelFilter};
use padprint_core::{canvas::CanvasBitmap, config::PrinterConfig, printer::Printer};
use padprint_hal_esp32s3::{
    input::reset::ResetPin,
    led::ActivityLed,
    usb::{new_pad_usb, UsbResources},
};
use pokken_pad::{Report, OUT_REPORT_LEN};
use static_cell::StaticCell;

#[path = "main/image_asset.rs"]
mod image_asset;

type UsbBusDriver = asynch::Driver<'static>;

// Wiring used by this build: reprint button on GPIO4 (to GND), activity LED
// on GPIO21. The OTG PHY is fixed to GPIO19 (D-) / GPIO20 (D+).
const RESET_BTN_ACTIVE_LOW: bool = true;

static EP_OUT_BUFFER: StaticCell<[u8; 1024]> = StaticCell::new();
static USB_RESOURCES: StaticCell<UsbResources> = StaticCell::new();
static HID_STATE: StaticCell<State<'static>> = StaticCell::new();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger(LevelFilter::Info);
    esp_println::println!("boot: padprint starting");

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let reset_btn = Input::new(
        peripherals.GPIO4,
        InputConfig::default().with_pull(Pull::Up),
    );
    let led_pin = Output::new(peripherals.GPIO21, Level::High, OutputConfig::default());

    let usb = Usb::new(peripherals.USB0, peripherals.GPIO20, peripherals.GPIO19);
    let ep_out_buffer = EP_OUT_BUFFER.init([0; 1024]);
    let driver = asynch::Driver::new(usb, ep_out_buffer, asynch::Config::default());

    let pad = new_pad_usb(
        driver,
        USB_RESOURCES.init(UsbResources::new()),
        HID_STATE.init(State::new()),
    );
    let (hid_reader, mut hid_writer) = pad.hid.split();
    spawner.spawn(usb_task(pad.device)).unwrap();
    spawner.spawn(hid_out_task(hid_reader)).unwrap();

    let canvas = CanvasBitmap::new(
        &image_asset::IMAGE_DATA,
        image_asset::IMAGE_WIDTH,
        image_asset::IMAGE_HEIGHT,
    )
    .unwrap();
    info!(
        "canvas: {}x{} image, {} bytes",
        canvas.width(),
        canvas.height(),
        image_asset::IMAGE_DATA.len()
    );

    let reset = ResetPin::new(reset_btn, RESET_BTN_ACTIVE_LOW);
    let mut led = ActivityLed::new(led_pin);
    let mut printer = Printer::new(canvas, reset, PrinterConfig::default());

    hid_writer.ready().await;
    info!("usb: host polling, print starting");

    let mut done_logged = false;
    loop {
        // The reset pin read is infallible on this board.
        let report = printer.poll().unwrap_or(Report::neutral());

        // The write resolves when the host polls the IN endpoint; that poll
        // is the printer's tick.
        if hid_writer.write(&report.to_bytes()).await.is_err() {
            // Bus reset or host gone; wait for the endpoint to come back.
            hid_writer.ready().await;
            continue;
        }

        if printer.is_done() {
            if !done_logged {
                done_logged = true;
                let _ = led.set_idle();
                info!("print complete");
            }
        } else {
            let _ = led.toggle();
        }
    }
}

#[embassy_executor::task]
async fn usb_task(mut device: UsbDevice<'static, UsbBusDriver>) -> ! {
    device.run().await
}

/// Drains whatever the host pushes on the OUT endpoint; the content is not
/// part of any exchange the pad takes part in.
#[embassy_executor::task]
async fn hid_out_task(mut reader: HidReader<'static, UsbBusDriver, OUT_REPORT_LEN>) -> ! {
    let mut buf = [0u8; OUT_REPORT_LEN];
    loop {
        let _ = reader.read(&mut buf).await;
    }
}

#[panic_handler]
fn panic(_: &core::panic::PanicInfo) -> ! {
    loop {}
}

// This creates a default app-descriptor required by the esp-idf bootloader.
esp_bootloader_esp_idf::esp_app_desc!();
