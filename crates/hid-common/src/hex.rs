//! Hex text forms of raw reports, as written by capture tools.

use crate::{HidCommonError, HidCommonResult};

/// Parse a hex dump into bytes.
///
/// Accepts whitespace- or comma-separated tokens with an optional `0x`/`0X`
/// prefix (`"0x01 0xFF"`, `"01,ff"`), as well as unseparated runs of digit
/// pairs (`"01ff"`).
pub fn parse_hex_bytes(text: &str) -> HidCommonResult<Vec<u8>> {
    let mut bytes = Vec::new();
    for token in text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        let digits = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        if digits.is_empty() {
            return Err(HidCommonError::InvalidReport(format!(
                "hex token '{token}' has no digits"
            )));
        }
        let decoded = ::hex::decode(digits).map_err(|e| {
            HidCommonError::InvalidReport(format!("invalid hex token '{token}': {e}"))
        })?;
        bytes.extend_from_slice(&decoded);
    }
    Ok(bytes)
}

/// Format bytes the way `hid-capture` does: `0x01 0x02 0x03`.
pub fn format_hex(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("0x{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
