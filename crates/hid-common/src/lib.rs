//! Common HID utilities for Flightstick protocol implementations
//!
//! This crate provides the pieces shared by device-specific HID protocol
//! crates: bit-level field extraction over raw input reports, a report
//! builder for fixtures, USB identifiers and the raw report source seam.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod device_info;
pub mod hex;
pub mod hid_traits;
pub mod report_parser;

pub use device_info::*;
pub use hex::{format_hex, parse_hex_bytes};
pub use hid_traits::*;
pub use report_parser::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HidCommonError {
    #[error("Invalid report format: {0}")]
    InvalidReport(String),

    /// A live [`RawReportSource`] failed to poll its device.
    #[error("Failed to read report: {0}")]
    ReadError(String),

    #[error("Report source exhausted")]
    Exhausted,

    /// Transport-level failure surfaced by a [`RawReportSource`].
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type HidCommonResult<T> = Result<T, HidCommonError>;
