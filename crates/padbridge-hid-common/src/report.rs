//! Bounded byte-cursor for HID report parsing.
//!
//! `ReportCursor` reads little-endian fields out of a borrowed report
//! buffer without panicking on short input. Allocation-free on the read
//! path.

use crate::{HidCommonError, HidCommonResult};

/// Forward-only reader over a received report buffer.
pub struct ReportCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ReportCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    fn short_input() -> HidCommonError {
        HidCommonError::InvalidReport("unexpected end of report".to_string())
    }

    pub fn read_u8(&mut self) -> HidCommonResult<u8> {
        let value = self
            .data
            .get(self.position)
            .copied()
            .ok_or_else(Self::short_input)?;
        self.position += 1;
        Ok(value)
    }

    pub fn read_u16_le(&mut self) -> HidCommonResult<u16> {
        let lo = self.read_u8()? as u16;
        let hi = self.read_u8()? as u16;
        Ok(lo | (hi << 8))
    }

    pub fn read_u32_le(&mut self) -> HidCommonResult<u32> {
        let lo = self.read_u16_le()? as u32;
        let hi = self.read_u16_le()? as u32;
        Ok(lo | (hi << 16))
    }

    pub fn read_bytes(&mut self, count: usize) -> HidCommonResult<&'a [u8]> {
        let end = self
            .position
            .checked_add(count)
            .ok_or_else(Self::short_input)?;
        let slice = self
            .data
            .get(self.position..end)
            .ok_or_else(Self::short_input)?;
        self.position = end;
        Ok(slice)
    }

    pub fn peek_u8(&self) -> HidCommonResult<u8> {
        self.data
            .get(self.position)
            .copied()
            .ok_or_else(Self::short_input)
    }

    pub fn skip(&mut self, count: usize) {
        self.position = (self.position + count).min(self.data.len());
    }
}
