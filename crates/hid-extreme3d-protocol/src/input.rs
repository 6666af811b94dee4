//! Extreme 3D Pro input report decoding.
//!
//! All functions are pure; the only allocation is the returned value.

use flightstick_hid_common::{BitField, ReportParser};

use crate::report::{
    BUTTONS_HIGH, BUTTONS_LOW, HAT_SWITCH, ROTATION_AXIS, ReportFraming, SLIDER_AXIS, X_AXIS,
    Y_AXIS,
};
use crate::types::{ButtonSet, HatDirection, JoystickState};
use crate::{DecodeError, DecodeResult};

/// Decode a bare 7-byte input report. Trailing bytes are ignored.
///
/// # Errors
///
/// [`DecodeError::MalformedReport`] if `raw` is shorter than
/// [`REPORT_LEN`](crate::REPORT_LEN).
pub fn decode(raw: &[u8]) -> DecodeResult<JoystickState> {
    decode_with(raw, ReportFraming::Bare)
}

/// Decode an input report delivered with the given framing.
///
/// # Errors
///
/// [`DecodeError::MalformedReport`] if `raw` is shorter than
/// `framing.required_len()`.
pub fn decode_with(raw: &[u8], framing: ReportFraming) -> DecodeResult<JoystickState> {
    let malformed = || DecodeError::MalformedReport {
        expected: framing.required_len(),
        actual: raw.len(),
    };
    if raw.len() < framing.required_len() {
        return Err(malformed());
    }

    let parser = ReportParser::with_offset(raw, framing.offset());
    let field = |f: &BitField| parser.read_field(f).ok().ok_or_else(malformed);

    // Widths are at most 10 bits, so the narrowing below cannot truncate.
    let x = field(&X_AXIS)? as u16;
    let y = field(&Y_AXIS)? as u16;
    let hat = HatDirection::from_nibble(field(&HAT_SWITCH)? as u8);
    let rotation = field(&ROTATION_AXIS)? as u8;
    let slider = field(&SLIDER_AXIS)? as u8;
    let low = field(&BUTTONS_LOW)?;
    let high = field(&BUTTONS_HIGH)?;
    let buttons = ButtonSet::from_bits((low | (high << BUTTONS_LOW.width)) as u16);

    Ok(JoystickState {
        x,
        y,
        rotation,
        slider,
        hat,
        buttons,
    })
}
