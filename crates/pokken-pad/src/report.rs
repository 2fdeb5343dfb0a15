//! Input report layout for the Pokken pad.

use bitflags::bitflags;

/// Size of one device-to-host input report.
pub const REPORT_LEN: usize = 8;
/// Size of one host-to-device output report.
///
/// The Switch occasionally pushes data on the OUT endpoint; the content is
/// not part of any documented exchange and is read only to keep the endpoint
/// drained.
pub const OUT_REPORT_LEN: usize = 8;

/// Analog axis at its minimum deflection.
pub const STICK_MIN: u8 = 0;
/// Analog axis at rest.
pub const STICK_CENTER: u8 = 128;
/// Analog axis at its maximum deflection.
pub const STICK_MAX: u8 = 255;

bitflags! {
    /// Button bitmask, bit order taken from the pad's report descriptor.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Buttons: u16 {
        const Y = 1 << 0;
        const B = 1 << 1;
        const A = 1 << 2;
        const X = 1 << 3;
        const L = 1 << 4;
        const R = 1 << 5;
        const ZL = 1 << 6;
        const ZR = 1 << 7;
        const MINUS = 1 << 8;
        const PLUS = 1 << 9;
        const LCLICK = 1 << 10;
        const RCLICK = 1 << 11;
        const HOME = 1 << 12;
        const CAPTURE = 1 << 13;
    }
}

/// 8-way hat switch value, clockwise from up, with a centered sentinel.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(u8)]
pub enum Hat {
    Up = 0,
    UpRight = 1,
    Right = 2,
    DownRight = 3,
    Down = 4,
    DownLeft = 5,
    Left = 6,
    UpLeft = 7,
    #[default]
    Center = 8,
}

/// One device-to-host input report.
///
/// Wire layout (8 bytes): buttons as little-endian `u16`, hat, left stick
/// X/Y, right stick X/Y, one vendor byte that is always zero.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Report {
    pub buttons: Buttons,
    pub hat: Hat,
    pub left_x: u8,
    pub left_y: u8,
    pub right_x: u8,
    pub right_y: u8,
}

impl Report {
    /// Report with every control at rest.
    pub const fn neutral() -> Self {
        Self {
            buttons: Buttons::empty(),
            hat: Hat::Center,
            left_x: STICK_CENTER,
            left_y: STICK_CENTER,
            right_x: STICK_CENTER,
            right_y: STICK_CENTER,
        }
    }

    /// Serializes the report into its wire layout.
    pub fn to_bytes(&self) -> [u8; REPORT_LEN] {
        let buttons = self.buttons.bits().to_le_bytes();
        [
            buttons[0],
            buttons[1],
            self.hat as u8,
            self.left_x,
            self.left_y,
            self.right_x,
            self.right_y,
            0x00,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_report_bytes_match_wire_layout() {
        let bytes = Report::neutral().to_bytes();
        assert_eq!(bytes, [0x00, 0x00, 0x08, 128, 128, 128, 128, 0x00]);
    }

    #[test]
    fn button_bits_land_in_little_endian_order() {
        let mut report = Report::neutral();
        report.buttons = Buttons::A | Buttons::L | Buttons::R;
        assert_eq!(report.to_bytes()[0], 0x34);
        assert_eq!(report.to_bytes()[1], 0x00);

        report.buttons = Buttons::LCLICK | Buttons::CAPTURE;
        assert_eq!(report.to_bytes()[0], 0x00);
        assert_eq!(report.to_bytes()[1], 0x24);
    }

    #[test]
    fn hat_encoding_is_clockwise_from_up() {
        let mut report = Report::neutral();
        report.hat = Hat::Up;
        assert_eq!(report.to_bytes()[2], 0);
        report.hat = Hat::Right;
        assert_eq!(report.to_bytes()[2], 2);
        report.hat = Hat::Down;
        assert_eq!(report.to_bytes()[2], 4);
        report.hat = Hat::Left;
        assert_eq!(report.to_bytes()[2], 6);
    }

    #[test]
    fn stick_axes_serialize_in_lx_ly_rx_ry_order() {
        let report = Report {
            left_x: STICK_MIN,
            left_y: 10,
            right_x: 20,
            right_y: STICK_MAX,
            ..Report::neutral()
        };
        assert_eq!(&report.to_bytes()[3..7], &[0, 10, 20, 255]);
    }
}
