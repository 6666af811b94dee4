//! HID report parsing utilities
//!
//! Input reports generated from a HID report descriptor pack fields back to
//! back with no regard for byte boundaries. Bits are numbered
//! little-endian: report bit `n` is bit `n % 8` of byte `n / 8`, and a field
//! that crosses a byte boundary continues in the low bits of the next byte.

use crate::{HidCommonError, HidCommonResult};

/// Location of one packed field inside a raw report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitField {
    /// Index of the byte holding the field's least significant bit.
    pub byte: usize,
    /// Bit offset of the least significant bit within `byte` (0..=7).
    pub bit: u8,
    /// Field width in bits (1..=32).
    pub width: u8,
}

impl BitField {
    pub const fn new(byte: usize, bit: u8, width: u8) -> Self {
        Self { byte, bit, width }
    }

    /// Field starting at absolute report bit `offset`.
    pub const fn at_bit(offset: usize, width: u8) -> Self {
        Self {
            byte: offset / 8,
            bit: (offset % 8) as u8,
            width,
        }
    }

    /// Largest value the field can hold.
    pub const fn max_value(&self) -> u32 {
        if self.width >= 32 {
            u32::MAX
        } else {
            (1u32 << self.width) - 1
        }
    }

    /// Absolute bit offset of the least significant bit.
    pub const fn bit_offset(&self) -> usize {
        self.byte * 8 + self.bit as usize
    }

    /// Number of bytes the field touches.
    pub const fn byte_span(&self) -> usize {
        (self.bit as usize + self.width as usize).div_ceil(8)
    }

    /// One past the last byte the field touches; the minimum report length
    /// that contains it.
    pub const fn end_byte(&self) -> usize {
        self.byte + self.byte_span()
    }

    /// Extract the field from `data`, or `None` if `data` is too short.
    pub fn extract(&self, data: &[u8]) -> Option<u32> {
        let bytes = data.get(self.byte..self.end_byte())?;
        let raw = bytes
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, b)| acc | (u64::from(*b) << (8 * i)));
        u32::try_from((raw >> self.bit) & u64::from(self.max_value())).ok()
    }

    /// Write `value` into the field, masking it to the field width. Bits
    /// outside the field are preserved. Returns `None` if `data` is too short.
    pub fn insert(&self, data: &mut [u8], value: u32) -> Option<()> {
        let bytes = data.get_mut(self.byte..self.end_byte())?;
        let mask = u64::from(self.max_value()) << self.bit;
        let value = (u64::from(value) << self.bit) & mask;
        for (i, slot) in bytes.iter_mut().enumerate() {
            let shift = 8 * i;
            let byte_mask = ((mask >> shift) & 0xFF) as u8;
            let byte_value = ((value >> shift) & 0xFF) as u8;
            *slot = (*slot & !byte_mask) | byte_value;
        }
        Some(())
    }
}

/// Borrowed read-only view over one raw input report.
#[derive(Debug, Clone, Copy)]
pub struct ReportParser<'a> {
    buffer: &'a [u8],
}

impl<'a> ReportParser<'a> {
    pub fn from_slice(data: &'a [u8]) -> Self {
        Self { buffer: data }
    }

    /// View of `data` with the first `offset` bytes skipped, e.g. a leading
    /// report ID.
    pub fn with_offset(data: &'a [u8], offset: usize) -> Self {
        Self {
            buffer: data.get(offset..).unwrap_or_default(),
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Fail unless the report carries at least `expected` bytes.
    pub fn require_len(&self, expected: usize) -> HidCommonResult<()> {
        if self.buffer.len() < expected {
            return Err(HidCommonError::InvalidReport(format!(
                "expected at least {expected} bytes, got {}",
                self.buffer.len()
            )));
        }
        Ok(())
    }

    pub fn read_field(&self, field: &BitField) -> HidCommonResult<u32> {
        field.extract(self.buffer).ok_or_else(|| {
            HidCommonError::InvalidReport(format!(
                "field at bit {} ({} bits) exceeds {}-byte report",
                field.bit_offset(),
                field.width,
                self.buffer.len()
            ))
        })
    }

    pub fn read_flag(&self, byte: usize, bit: u8) -> HidCommonResult<bool> {
        Ok(self.read_field(&BitField::new(byte, bit, 1))? != 0)
    }

    pub fn read_u8(&self, byte: usize) -> HidCommonResult<u8> {
        self.buffer.get(byte).copied().ok_or_else(|| {
            HidCommonError::InvalidReport(format!(
                "byte {byte} exceeds {}-byte report",
                self.buffer.len()
            ))
        })
    }

    pub fn slice(&self) -> &'a [u8] {
        self.buffer
    }
}

/// Builds raw reports field by field, mainly for fixtures and benches.
pub struct ReportBuilder {
    buffer: Vec<u8>,
}

impl ReportBuilder {
    pub fn new(len: usize) -> Self {
        Self {
            buffer: vec![0u8; len],
        }
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            buffer: data.to_vec(),
        }
    }

    /// Set a packed field. Fields beyond the buffer end are ignored.
    pub fn write_field(&mut self, field: &BitField, value: u32) -> &mut Self {
        let _written = field.insert(&mut self.buffer, value);
        self
    }

    pub fn write_flag(&mut self, byte: usize, bit: u8, value: bool) -> &mut Self {
        self.write_field(&BitField::new(byte, bit, 1), u32::from(value))
    }

    pub fn write_u8(&mut self, byte: usize, value: u8) -> &mut Self {
        if let Some(slot) = self.buffer.get_mut(byte) {
            *slot = value;
        }
        self
    }

    /// Prepend a report ID byte.
    pub fn with_report_id(&mut self, report_id: u8) -> &mut Self {
        self.buffer.insert(0, report_id);
        self
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new(64)
    }
}
