//! Error types for stickctl

use flightstick_hid_common::HidCommonError;
use flightstick_hid_extreme3d_protocol::DecodeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Report {index}: {source}")]
    Malformed {
        index: usize,
        #[source]
        source: DecodeError,
    },

    #[error("Invalid capture file: {0}")]
    InvalidCapture(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("HID error: {0}")]
    Hid(#[from] HidCommonError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}
