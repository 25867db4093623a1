//! Codec for the vault program's strategy-init-receipt account.
//!
//! Byte layout (112 bytes total):
//!
//! | offset | size | field                 |
//! |--------|------|-----------------------|
//! | 0      | 8    | account discriminator |
//! | 8      | 32   | vault                 |
//! | 40     | 32   | strategy (mint id)    |
//! | 72     | 32   | adaptor program       |
//! | 104    | 1    | bump                  |
//! | 105    | 7    | padding               |

use solana_sdk::pubkey::Pubkey;

use crate::core::{SdkError, SdkResult};

pub const STRATEGY_RECEIPT_DISCRIMINATOR: [u8; 8] = [0x33, 0x08, 0xc0, 0xfd, 0x73, 0x4e, 0x70, 0xd6];
pub const STRATEGY_RECEIPT_LEN: usize = 112;

/// Offset of the vault field, used for memcmp-filtered registry scans.
pub const STRATEGY_RECEIPT_VAULT_OFFSET: usize = 8;

/// One initialized strategy of a vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyReceipt {
    pub vault: Pubkey,
    pub strategy: Pubkey,
    pub adaptor_program: Pubkey,
    pub bump: u8,
}

impl StrategyReceipt {
    pub fn decode(data: &[u8]) -> SdkResult<Self> {
        if data.len() < STRATEGY_RECEIPT_LEN {
            return Err(SdkError::DecodeError(format!(
                "strategy receipt is {} bytes, expected {}",
                data.len(),
                STRATEGY_RECEIPT_LEN
            )));
        }
        if data[..8] != STRATEGY_RECEIPT_DISCRIMINATOR {
            return Err(SdkError::DecodeError(
                "strategy receipt discriminator mismatch".to_string(),
            ));
        }

        let pubkey_at = |offset: usize| {
            Pubkey::try_from(&data[offset..offset + 32])
                .map_err(|_| SdkError::DecodeError(format!("bad pubkey at offset {}", offset)))
        };

        Ok(Self {
            vault: pubkey_at(8)?,
            strategy: pubkey_at(40)?,
            adaptor_program: pubkey_at(72)?,
            bump: data[104],
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut data = vec![0u8; STRATEGY_RECEIPT_LEN];
        data[..8].copy_from_slice(&STRATEGY_RECEIPT_DISCRIMINATOR);
        data[8..40].copy_from_slice(self.vault.as_ref());
        data[40..72].copy_from_slice(self.strategy.as_ref());
        data[72..104].copy_from_slice(self.adaptor_program.as_ref());
        data[104] = self.bump;
        data
    }
}
