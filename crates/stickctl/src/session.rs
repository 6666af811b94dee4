//! Pulls reports from a source and decodes them one by one.

use std::io::Write;

use flightstick_hid_common::{HidCommonError, RawReportSource, format_hex};
use flightstick_hid_extreme3d_protocol::{EXTREME_3D_PRO, decode_with};

use crate::config::StickctlConfig;
use crate::error::CliError;
use crate::output::{DecodedRecord, write_record};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub decoded: usize,
    pub skipped: usize,
}

/// Decode every report in `source`, writing one record per report.
///
/// `timestamps`, when non-empty, is indexed in step with the source.
pub fn run<S, W>(
    source: &mut S,
    timestamps: &[u64],
    config: &StickctlConfig,
    out: &mut W,
) -> Result<SessionSummary, CliError>
where
    S: RawReportSource + ?Sized,
    W: Write,
{
    let device = source.device_id();
    if device != EXTREME_3D_PRO {
        tracing::warn!(%device, expected = %EXTREME_3D_PRO, "reports are not from an Extreme 3D Pro");
    }

    let mut summary = SessionSummary::default();
    for index in 0.. {
        let raw = match source.read_report() {
            Ok(raw) => raw,
            Err(HidCommonError::Exhausted) => break,
            Err(e) => return Err(e.into()),
        };

        match decode_with(&raw, config.framing) {
            Ok(state) => {
                tracing::trace!(index, raw = %format_hex(&raw), "decoded report");
                let record =
                    DecodedRecord::new(index, timestamps.get(index).copied(), state, config);
                write_record(out, &record, config.output)?;
                summary.decoded += 1;
            }
            Err(err) if config.skip_malformed => {
                tracing::warn!(index, error = %err, "skipping malformed report");
                summary.skipped += 1;
            }
            Err(err) => return Err(CliError::Malformed { index, source: err }),
        }
    }

    tracing::info!(decoded = summary.decoded, skipped = summary.skipped, "session finished");
    Ok(summary)
}
