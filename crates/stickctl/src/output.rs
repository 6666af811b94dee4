//! Output formatting for decoded reports

use std::io::Write;

use flightstick_hid_extreme3d_protocol::{JoystickState, NormalizedState};
use serde::Serialize;

use crate::config::{OutputFormat, StickctlConfig};
use crate::error::CliError;

/// One line of output.
#[derive(Debug, Serialize)]
pub struct DecodedRecord {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_us: Option<u64>,
    pub state: JoystickState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<NormalizedState>,
}

impl DecodedRecord {
    pub fn new(
        index: usize,
        timestamp_us: Option<u64>,
        state: JoystickState,
        config: &StickctlConfig,
    ) -> Self {
        Self {
            index,
            timestamp_us,
            state,
            normalized: config.normalized.then(|| state.normalized()),
        }
    }
}

/// Raw device units on one line.
pub fn raw_line(state: &JoystickState) -> String {
    format!(
        "x={} y={} rotation={} slider={} hat={} buttons={}",
        state.x, state.y, state.rotation, state.slider, state.hat, state.buttons
    )
}

pub fn write_record<W: Write>(
    out: &mut W,
    record: &DecodedRecord,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, record)?;
            writeln!(out)?;
        }
        OutputFormat::Human => {
            let body = if record.normalized.is_some() {
                record.state.to_string()
            } else {
                raw_line(&record.state)
            };
            match record.timestamp_us {
                Some(ts) => writeln!(out, "[{:>4}] +{ts}µs {body}", record.index)?,
                None => writeln!(out, "[{:>4}] {body}", record.index)?,
            }
        }
    }
    Ok(())
}
