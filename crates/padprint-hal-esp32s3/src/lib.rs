#![no_std]

//! Board and transport glue for the padprint firmware.
//!
//! Everything here is written against `embedded-hal` and `embassy-usb`
//! traits; the ESP32-S3 peripheral wiring itself lives in the firmware
//! binary, next to the rest of the board constants.

pub mod input;
pub mod led;
pub mod usb;
