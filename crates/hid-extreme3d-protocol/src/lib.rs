//! HID input report decoding for the Logitech Extreme 3D Pro joystick.
//!
//! The Extreme 3D Pro (VID `0x046D`, PID `0xC215`) sends a 7-byte input
//! report with no report ID. Its stick axes and hat switch are bit-packed
//! across the first four bytes; twist, slider and buttons follow.
//!
//! ## Features
//! - 10-bit X/Y stick axes
//! - 8-bit twist (rotation) and slider (throttle)
//! - 8-way hat switch
//! - 12 buttons
//!
//! ## Design
//! This crate is I/O-free. [`decode`] is a pure function from bytes to a
//! [`JoystickState`] value; opening and polling the device is left to the
//! host HID stack.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod ids;
pub mod input;
pub mod report;
pub mod types;

pub use ids::{EXTREME_3D_PRO, PID_EXTREME_3D_PRO, VENDOR_ID, is_extreme_3d_pro};
pub use input::{decode, decode_with};
pub use report::{BUTTON_COUNT, REPORT_LEN, ReportFraming};
pub use types::{ButtonSet, HatDirection, JoystickState, NormalizedState};

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Malformed report: expected at least {expected} bytes, got {actual}")]
    MalformedReport { expected: usize, actual: usize },
}

pub type DecodeResult<T> = Result<T, DecodeError>;
