//! Capture files written by `hid-capture`.

use std::path::Path;

use flightstick_hid_common::{UsbDeviceId, hid_traits::replay::ReplaySource, parse_hex_bytes};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureReport {
    pub timestamp_us: u64,
    pub report_id: u8,
    pub data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureFile {
    pub vendor_id: String,
    pub product_id: String,
    pub captures: Vec<CaptureReport>,
}

pub fn parse_hex_u16(s: &str) -> Result<u16, String> {
    let s = s.trim_start_matches("0x").trim_start_matches("0X");
    u16::from_str_radix(s, 16).map_err(|e| format!("invalid hex value '{s}': {e}"))
}

impl CaptureFile {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path)?;
        let file: Self = serde_json::from_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            captures = file.captures.len(),
            "loaded capture file"
        );
        Ok(file)
    }

    pub fn device_id(&self) -> Result<UsbDeviceId, CliError> {
        let vid = parse_hex_u16(&self.vendor_id).map_err(CliError::InvalidCapture)?;
        let pid = parse_hex_u16(&self.product_id).map_err(CliError::InvalidCapture)?;
        Ok(UsbDeviceId::new(vid, pid))
    }

    /// Timestamps in capture order, matching the reports of [`Self::into_source`].
    pub fn timestamps(&self) -> Vec<u64> {
        self.captures.iter().map(|c| c.timestamp_us).collect()
    }

    pub fn into_source(self) -> Result<ReplaySource, CliError> {
        let id = self.device_id()?;
        let reports = self
            .captures
            .iter()
            .enumerate()
            .map(|(i, c)| {
                parse_hex_bytes(&c.data)
                    .map_err(|e| CliError::InvalidCapture(format!("capture {i}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ReplaySource::from_reports(id, reports))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flightstick_hid_common::RawReportSource;

    fn sample() -> CaptureFile {
        CaptureFile {
            vendor_id: "0x046D".to_string(),
            product_id: "0xC215".to_string(),
            captures: vec![
                CaptureReport {
                    timestamp_us: 100,
                    report_id: 0x00,
                    data: "0x00 0x02 0x88 0x80 0x00 0x80 0x00".to_string(),
                },
                CaptureReport {
                    timestamp_us: 200,
                    report_id: 0xFF,
                    data: "0xFF 0x03 0x00 0x00 0x01 0xFF 0x08".to_string(),
                },
            ],
        }
    }

    #[test]
    fn given_hex_with_0x_prefix_when_parsed_then_correct_u16_returned() {
        assert_eq!(parse_hex_u16("0x046D"), Ok(0x046D));
        assert_eq!(parse_hex_u16("0XC215"), Ok(0xC215));
        assert_eq!(parse_hex_u16("c215"), Ok(0xC215));
    }

    #[test]
    fn given_invalid_hex_string_when_parsed_then_error_returned() {
        assert!(parse_hex_u16("ZZZZ").is_err());
        assert!(parse_hex_u16("0x10000").is_err());
    }

    #[test]
    fn given_capture_file_when_converted_then_reports_replay_in_order()
    -> Result<(), Box<dyn std::error::Error>> {
        let file = sample();
        assert_eq!(file.timestamps(), vec![100, 200]);

        let mut source = file.into_source()?;
        assert_eq!(source.device_id(), UsbDeviceId::new(0x046D, 0xC215));
        assert_eq!(source.read_report()?, vec![0x00, 0x02, 0x88, 0x80, 0x00, 0x80, 0x00]);
        assert_eq!(source.read_report()?.first(), Some(&0xFF));
        assert!(source.read_report().is_err());
        Ok(())
    }

    #[test]
    fn given_bad_capture_data_when_converted_then_index_reported() {
        let mut file = sample();
        file.captures[1].data = "0xZZ".to_string();
        match file.into_source() {
            Err(CliError::InvalidCapture(msg)) => assert!(msg.starts_with("capture 1")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn given_bad_vendor_id_when_converted_then_error_returned() {
        let mut file = sample();
        file.vendor_id = "logitech".to_string();
        assert!(matches!(file.device_id(), Err(CliError::InvalidCapture(_))));
    }

    #[test]
    fn given_capture_file_when_roundtripped_via_json_then_fields_preserved()
    -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(&sample())?;
        let restored: CaptureFile = serde_json::from_str(&json)?;
        assert_eq!(restored.vendor_id, "0x046D");
        assert_eq!(restored.captures.len(), 2);
        assert_eq!(restored.captures[1].timestamp_us, 200);
        Ok(())
    }
}
