//! USB HID device presenting the emulated Pokken pad to the host.

use embassy_usb::class::hid::{Config as HidConfig, HidReaderWriter, State};
use embassy_usb::driver::Driver;
use embassy_usb::{Builder, Config, UsbDevice};
use log::info;

use pokken_pad::descriptor;
use pokken_pad::{OUT_REPORT_LEN, REPORT_LEN};

/// Descriptor and control transfer buffers handed to the device builder.
pub struct UsbResources {
    config_descriptor: [u8; 128],
    bos_descriptor: [u8; 64],
    control_buf: [u8; 64],
}

impl Default for UsbResources {
    fn default() -> Self {
        Self::new()
    }
}

impl UsbResources {
    pub const fn new() -> Self {
        Self {
            config_descriptor: [0; 128],
            bos_descriptor: [0; 64],
            control_buf: [0; 64],
        }
    }
}

/// The built device plus its single HID interface.
pub struct PadUsb<'d, D: Driver<'d>> {
    pub device: UsbDevice<'d, D>,
    pub hid: HidReaderWriter<'d, D, OUT_REPORT_LEN, REPORT_LEN>,
}

/// Assembles the Pokken pad device on the given bus driver.
///
/// The Switch probes the pad as a plain full-speed HID device; class, power,
/// and endpoint parameters follow the HORI hardware it impersonates.
pub fn new_pad_usb<'d, D: Driver<'d>>(
    driver: D,
    resources: &'d mut UsbResources,
    state: &'d mut State<'d>,
) -> PadUsb<'d, D> {
    let mut config = Config::new(descriptor::VENDOR_ID, descriptor::PRODUCT_ID);
    config.manufacturer = Some(descriptor::MANUFACTURER);
    config.product = Some(descriptor::PRODUCT);
    config.serial_number = None;
    config.max_power = 100;
    config.max_packet_size_0 = 64;
    config.device_class = 0x00;
    config.device_sub_class = 0x00;
    config.device_protocol = 0x00;

    let mut builder = Builder::new(
        driver,
        config,
        &mut resources.config_descriptor,
        &mut resources.bos_descriptor,
        &mut [],
        &mut resources.control_buf,
    );

    let hid = HidReaderWriter::new(
        &mut builder,
        state,
        HidConfig {
            report_descriptor: &descriptor::REPORT_DESCRIPTOR,
            request_handler: None,
            poll_ms: descriptor::POLL_MS,
            max_packet_size: descriptor::ENDPOINT_SIZE as u16,
        },
    );

    info!(
        "usb: pokken pad assembled (vid={:04x} pid={:04x} poll={}ms)",
        descriptor::VENDOR_ID,
        descriptor::PRODUCT_ID,
        descriptor::POLL_MS
    );

    PadUsb {
        device: builder.build(),
        hid,
    }
}
