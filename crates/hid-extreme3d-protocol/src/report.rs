//! Input report layout for the Extreme 3D Pro.
//!
//! Taken from the device's HID report descriptor. Bits are numbered
//! little-endian across the report (bit `n` is bit `n % 8` of byte `n / 8`):
//!
//! ```text
//! bits  0..10  X axis        (10 bit)
//! bits 10..20  Y axis        (10 bit)
//! bits 20..24  hat switch    (4 bit)
//! bits 24..32  twist         (8 bit)
//! bits 32..40  buttons 1-8
//! bits 40..48  slider        (8 bit)
//! bits 48..52  buttons 9-12
//! bits 52..56  padding
//! ```

use flightstick_hid_common::BitField;
use serde::{Deserialize, Serialize};

/// Length of a bare input report (the device uses no report ID).
pub const REPORT_LEN: usize = 7;

/// Number of buttons on the stick and base.
pub const BUTTON_COUNT: usize = 12;

pub const X_AXIS: BitField = BitField::new(0, 0, 10);
pub const Y_AXIS: BitField = BitField::new(1, 2, 10);
pub const HAT_SWITCH: BitField = BitField::new(2, 4, 4);
pub const ROTATION_AXIS: BitField = BitField::new(3, 0, 8);
pub const BUTTONS_LOW: BitField = BitField::new(4, 0, 8);
pub const SLIDER_AXIS: BitField = BitField::new(5, 0, 8);
pub const BUTTONS_HIGH: BitField = BitField::new(6, 0, 4);

pub const STICK_MAX: u16 = 1023;
pub const ROTATION_MAX: u8 = u8::MAX;
pub const SLIDER_MAX: u8 = u8::MAX;

/// Hat nibble sentinel for "no direction".
///
/// The descriptor declares a logical range of 0..=7 with a null state, so
/// every nibble from 8 upwards is centered. The stick itself sends `0x08` at
/// rest.
pub const HAT_CENTERED: u8 = 0x0F;
pub const HAT_REST: u8 = 0x08;

/// Bit position of each button, indexed by `button - 1`.
pub const BUTTON_BITS: [BitField; BUTTON_COUNT] = [
    BitField::new(4, 0, 1),
    BitField::new(4, 1, 1),
    BitField::new(4, 2, 1),
    BitField::new(4, 3, 1),
    BitField::new(4, 4, 1),
    BitField::new(4, 5, 1),
    BitField::new(4, 6, 1),
    BitField::new(4, 7, 1),
    BitField::new(6, 0, 1),
    BitField::new(6, 1, 1),
    BitField::new(6, 2, 1),
    BitField::new(6, 3, 1),
];

/// Named view of the layout, in report order.
pub const LAYOUT: [(&str, BitField); 7] = [
    ("x", X_AXIS),
    ("y", Y_AXIS),
    ("hat", HAT_SWITCH),
    ("rotation", ROTATION_AXIS),
    ("buttons 1-8", BUTTONS_LOW),
    ("slider", SLIDER_AXIS),
    ("buttons 9-12", BUTTONS_HIGH),
];

/// How the report arrives from the transport.
///
/// Some HID stacks prepend the report ID byte (`0x00` for devices without
/// numbered reports) to every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFraming {
    #[default]
    Bare,
    WithReportId,
}

impl ReportFraming {
    /// Bytes preceding the layout above.
    pub const fn offset(self) -> usize {
        match self {
            Self::Bare => 0,
            Self::WithReportId => 1,
        }
    }

    /// Minimum buffer length accepted by the decoder.
    pub const fn required_len(self) -> usize {
        REPORT_LEN + self.offset()
    }
}
