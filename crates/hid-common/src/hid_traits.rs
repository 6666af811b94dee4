//! Raw report source seam
//!
//! Opening devices and polling them belongs to the host HID stack. Decoders
//! only ever see the byte buffers a source hands out.

use crate::{HidCommonError, HidCommonResult, UsbDeviceId};

/// Anything that yields raw input reports, one per poll.
pub trait RawReportSource {
    /// Identity of the device the reports come from.
    fn device_id(&self) -> UsbDeviceId;

    /// Next raw report. Returns [`HidCommonError::Exhausted`] once a finite
    /// source has no more reports.
    fn read_report(&mut self) -> HidCommonResult<Vec<u8>>;
}

pub mod replay {
    use super::*;
    use std::collections::VecDeque;

    /// Replays a fixed sequence of previously captured reports.
    #[derive(Debug, Clone, Default)]
    pub struct ReplaySource {
        id: UsbDeviceId,
        queue: VecDeque<Vec<u8>>,
        delivered: usize,
    }

    impl ReplaySource {
        pub fn new(id: UsbDeviceId) -> Self {
            Self {
                id,
                queue: VecDeque::new(),
                delivered: 0,
            }
        }

        pub fn from_reports<I>(id: UsbDeviceId, reports: I) -> Self
        where
            I: IntoIterator<Item = Vec<u8>>,
        {
            Self {
                id,
                queue: reports.into_iter().collect(),
                delivered: 0,
            }
        }

        pub fn push(&mut self, report: Vec<u8>) {
            self.queue.push_back(report);
        }

        /// Reports still waiting to be read.
        pub fn remaining(&self) -> usize {
            self.queue.len()
        }

        pub fn delivered(&self) -> usize {
            self.delivered
        }

        pub fn is_empty(&self) -> bool {
            self.queue.is_empty()
        }
    }

    impl RawReportSource for ReplaySource {
        fn device_id(&self) -> UsbDeviceId {
            self.id
        }

        fn read_report(&mut self) -> HidCommonResult<Vec<u8>> {
            match self.queue.pop_front() {
                Some(report) => {
                    self.delivered = self.delivered.saturating_add(1);
                    tracing::trace!(
                        device = %self.id,
                        index = self.delivered,
                        len = report.len(),
                        "replaying report"
                    );
                    Ok(report)
                }
                None => {
                    tracing::debug!(device = %self.id, delivered = self.delivered, "replay exhausted");
                    Err(HidCommonError::Exhausted)
                }
            }
        }
    }

    impl Iterator for ReplaySource {
        type Item = Vec<u8>;

        fn next(&mut self) -> Option<Self::Item> {
            self.read_report().ok()
        }
    }
}
