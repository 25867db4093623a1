//! Codec for the open-position adaptor argument payload.
//!
//! Four little-endian signed 32-bit integers, 16 bytes total, in the
//! order the adaptor deserializes them. The operation discriminator is
//! prepended by the envelope instruction, not here.

use crate::core::{SdkError, SdkResult};
use crate::protocol::TickRange;

pub const OPEN_POSITION_ARGS_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenPositionArgs {
    pub tick_lower_index: i32,
    pub tick_upper_index: i32,
    pub tick_array_lower_start_index: i32,
    pub tick_array_upper_start_index: i32,
}

impl OpenPositionArgs {
    pub fn from_range(range: &TickRange) -> Self {
        Self {
            tick_lower_index: range.tick_lower,
            tick_upper_index: range.tick_upper,
            tick_array_lower_start_index: range.array_lower_start,
            tick_array_upper_start_index: range.array_upper_start,
        }
    }

    pub fn encode(&self) -> [u8; OPEN_POSITION_ARGS_LEN] {
        let mut data = [0u8; OPEN_POSITION_ARGS_LEN];
        data[0..4].copy_from_slice(&self.tick_lower_index.to_le_bytes());
        data[4..8].copy_from_slice(&self.tick_upper_index.to_le_bytes());
        data[8..12].copy_from_slice(&self.tick_array_lower_start_index.to_le_bytes());
        data[12..16].copy_from_slice(&self.tick_array_upper_start_index.to_le_bytes());
        data
    }

    pub fn decode(data: &[u8]) -> SdkResult<Self> {
        if data.len() != OPEN_POSITION_ARGS_LEN {
            return Err(SdkError::DecodeError(format!(
                "open-position args are {} bytes, expected {}",
                data.len(),
                OPEN_POSITION_ARGS_LEN
            )));
        }

        let int_at = |offset: usize| {
            data[offset..offset + 4]
                .try_into()
                .map(i32::from_le_bytes)
                .map_err(|_| SdkError::DecodeError(format!("bad i32 at offset {}", offset)))
        };

        Ok(Self {
            tick_lower_index: int_at(0)?,
            tick_upper_index: int_at(4)?,
            tick_array_lower_start_index: int_at(8)?,
            tick_array_upper_start_index: int_at(12)?,
        })
    }
}
