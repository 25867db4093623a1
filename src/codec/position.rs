//! Fixed-layout codec for the exchange's per-position record account.
//!
//! Byte layout (281 bytes total, little-endian integers):
//!
//! | offset | size | field                          |
//! |--------|------|--------------------------------|
//! | 0      | 8    | account discriminator          |
//! | 8      | 1    | bump                           |
//! | 9      | 32   | position nft mint              |
//! | 41     | 32   | pool id                        |
//! | 73     | 4    | tick_lower (i32)               |
//! | 77     | 4    | tick_upper (i32)               |
//! | 81     | 16   | liquidity (u128)               |
//! | 97     | 16   | fee growth inside 0, Q64 (u128)|
//! | 113    | 16   | fee growth inside 1, Q64 (u128)|
//! | 129    | 8    | token fees owed 0 (u64)        |
//! | 137    | 8    | token fees owed 1 (u64)        |
//! | 145    | 136  | reward state, epoch, padding   |

use solana_sdk::pubkey::Pubkey;

use crate::core::{SdkError, SdkResult};

pub const PERSONAL_POSITION_DISCRIMINATOR: [u8; 8] = [0x46, 0x6f, 0x96, 0x7e, 0xe6, 0x0f, 0x19, 0x75];
pub const PERSONAL_POSITION_LEN: usize = 281;

/// Decoded on-chain record of a strategy's live position within a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalPosition {
    pub bump: u8,
    pub nft_mint: Pubkey,
    pub pool_id: Pubkey,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity: u128,
    pub fee_growth_inside_0_last_x64: u128,
    pub fee_growth_inside_1_last_x64: u128,
    pub token_fees_owed_0: u64,
    pub token_fees_owed_1: u64,
}

impl PersonalPosition {
    pub fn decode(data: &[u8]) -> SdkResult<Self> {
        if data.len() < PERSONAL_POSITION_LEN {
            return Err(SdkError::DecodeError(format!(
                "position record is {} bytes, expected {}",
                data.len(),
                PERSONAL_POSITION_LEN
            )));
        }
        if data[..8] != PERSONAL_POSITION_DISCRIMINATOR {
            return Err(SdkError::DecodeError(
                "position record discriminator mismatch".to_string(),
            ));
        }

        Ok(Self {
            bump: data[8],
            nft_mint: read_pubkey(data, 9)?,
            pool_id: read_pubkey(data, 41)?,
            tick_lower: read_i32(data, 73)?,
            tick_upper: read_i32(data, 77)?,
            liquidity: read_u128(data, 81)?,
            fee_growth_inside_0_last_x64: read_u128(data, 97)?,
            fee_growth_inside_1_last_x64: read_u128(data, 113)?,
            token_fees_owed_0: read_u64(data, 129)?,
            token_fees_owed_1: read_u64(data, 137)?,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut data = vec![0u8; PERSONAL_POSITION_LEN];
        data[..8].copy_from_slice(&PERSONAL_POSITION_DISCRIMINATOR);
        data[8] = self.bump;
        data[9..41].copy_from_slice(self.nft_mint.as_ref());
        data[41..73].copy_from_slice(self.pool_id.as_ref());
        data[73..77].copy_from_slice(&self.tick_lower.to_le_bytes());
        data[77..81].copy_from_slice(&self.tick_upper.to_le_bytes());
        data[81..97].copy_from_slice(&self.liquidity.to_le_bytes());
        data[97..113].copy_from_slice(&self.fee_growth_inside_0_last_x64.to_le_bytes());
        data[113..129].copy_from_slice(&self.fee_growth_inside_1_last_x64.to_le_bytes());
        data[129..137].copy_from_slice(&self.token_fees_owed_0.to_le_bytes());
        data[137..145].copy_from_slice(&self.token_fees_owed_1.to_le_bytes());
        data
    }
}

fn read_pubkey(data: &[u8], offset: usize) -> SdkResult<Pubkey> {
    Pubkey::try_from(&data[offset..offset + 32])
        .map_err(|_| SdkError::DecodeError(format!("bad pubkey at offset {}", offset)))
}

fn read_i32(data: &[u8], offset: usize) -> SdkResult<i32> {
    Ok(i32::from_le_bytes(
        data[offset..offset + 4]
            .try_into()
            .map_err(|_| SdkError::DecodeError(format!("bad i32 at offset {}", offset)))?,
    ))
}

fn read_u64(data: &[u8], offset: usize) -> SdkResult<u64> {
    Ok(u64::from_le_bytes(
        data[offset..offset + 8]
            .try_into()
            .map_err(|_| SdkError::DecodeError(format!("bad u64 at offset {}", offset)))?,
    ))
}

fn read_u128(data: &[u8], offset: usize) -> SdkResult<u128> {
    Ok(u128::from_le_bytes(
        data[offset..offset + 16]
            .try_into()
            .map_err(|_| SdkError::DecodeError(format!("bad u128 at offset {}", offset)))?,
    ))
}
