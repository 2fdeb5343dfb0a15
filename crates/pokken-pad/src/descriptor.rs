//! USB identity and HID report descriptor of the emulated pad.

/// HORI CO.,LTD.
pub const VENDOR_ID: u16 = 0x0f0d;
/// POKKEN CONTROLLER.
pub const PRODUCT_ID: u16 = 0x0092;

pub const MANUFACTURER: &str = "HORI CO.,LTD.";
pub const PRODUCT: &str = "POKKEN CONTROLLER";

/// Interrupt endpoint size for both directions.
pub const ENDPOINT_SIZE: u8 = 8;

/// Polling interval requested from the host, in milliseconds.
///
/// The Switch accepts IN reports at an effective 8 ms cadence no matter what
/// is advertised here; the printer's tick arithmetic assumes the same floor.
pub const POLL_MS: u8 = 8;

/// HID report descriptor of the Pokken pad.
///
/// 16 buttons, one 4-bit hat with null state, four 8-bit axes, one vendor
/// input byte, and an 8-byte vendor output report.
pub const REPORT_DESCRIPTOR: [u8; 86] = [
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x05, // Usage (Game Pad)
    0xA1, 0x01, // Collection (Application)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x35, 0x00, //   Physical Minimum (0)
    0x45, 0x01, //   Physical Maximum (1)
    0x75, 0x01, //   Report Size (1)
    0x95, 0x10, //   Report Count (16)
    0x05, 0x09, //   Usage Page (Button)
    0x19, 0x01, //   Usage Minimum (1)
    0x29, 0x10, //   Usage Maximum (16)
    0x81, 0x02, //   Input (Data, Variable, Absolute) - Buttons
    0x05, 0x01, //   Usage Page (Generic Desktop)
    0x25, 0x07, //   Logical Maximum (7)
    0x46, 0x3B, 0x01, // Physical Maximum (315)
    0x75, 0x04, //   Report Size (4)
    0x95, 0x01, //   Report Count (1)
    0x65, 0x14, //   Unit (Degrees)
    0x09, 0x39, //   Usage (Hat Switch)
    0x81, 0x42, //   Input (Data, Variable, Absolute, Null State)
    0x65, 0x00, //   Unit (None)
    0x95, 0x01, //   Report Count (1)
    0x81, 0x01, //   Input (Constant) - Hat padding nibble
    0x26, 0xFF, 0x00, // Logical Maximum (255)
    0x46, 0xFF, 0x00, // Physical Maximum (255)
    0x09, 0x30, //   Usage (X)
    0x09, 0x31, //   Usage (Y)
    0x09, 0x32, //   Usage (Z)
    0x09, 0x35, //   Usage (Rz)
    0x75, 0x08, //   Report Size (8)
    0x95, 0x04, //   Report Count (4)
    0x81, 0x02, //   Input (Data, Variable, Absolute) - Sticks
    0x06, 0x00, 0xFF, // Usage Page (Vendor Defined)
    0x09, 0x20, //   Usage (0x20)
    0x95, 0x01, //   Report Count (1)
    0x81, 0x02, //   Input (Data, Variable, Absolute) - Vendor byte
    0x0A, 0x21, 0x26, // Usage (0x2621)
    0x95, 0x08, //   Report Count (8)
    0x91, 0x02, //   Output (Data, Variable, Absolute)
    0xC0, // End Collection
];
