//! Deterministic address derivation.
//!
//! Pure functions over explicit seed tuples; no I/O. Every seed set is a
//! contract with the owning program — integer seeds are 4-byte big-endian,
//! matching the on-chain derivations byte for byte.

use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address_with_program_id;

use crate::core::constants::{
    POSITION_SEED, STRATEGY_INIT_RECEIPT_SEED, TICK_ARRAY_SEED, VAULT_STRATEGY_SEED,
};
use crate::core::{SdkError, SdkResult};

/// Derivations under the vault management program.
#[derive(Debug, Clone, Copy)]
pub struct VaultPda {
    program_id: Pubkey,
}

impl VaultPda {
    pub fn new(program_id: Pubkey) -> Self {
        Self { program_id }
    }

    /// Authority signing for a vault's strategy; owns the strategy's token accounts.
    pub fn vault_strategy_auth(&self, vault: &Pubkey, strategy: &Pubkey) -> SdkResult<(Pubkey, u8)> {
        derive(
            &[VAULT_STRATEGY_SEED, vault.as_ref(), strategy.as_ref()],
            &self.program_id,
        )
    }

    /// Receipt account marking a strategy of this vault as initialized.
    pub fn strategy_init_receipt(
        &self,
        vault: &Pubkey,
        strategy: &Pubkey,
    ) -> SdkResult<(Pubkey, u8)> {
        derive(
            &[STRATEGY_INIT_RECEIPT_SEED, vault.as_ref(), strategy.as_ref()],
            &self.program_id,
        )
    }
}

/// Derivations under the exchange program.
#[derive(Debug, Clone, Copy)]
pub struct ClmmPda {
    program_id: Pubkey,
}

impl ClmmPda {
    pub fn new(program_id: Pubkey) -> Self {
        Self { program_id }
    }

    /// Tick-array account covering the ticks from `start_index`.
    pub fn tick_array(&self, pool: &Pubkey, start_index: i32) -> SdkResult<(Pubkey, u8)> {
        derive(
            &[TICK_ARRAY_SEED, pool.as_ref(), &start_index.to_be_bytes()],
            &self.program_id,
        )
    }

    /// Per-owner position record, keyed by the position's mint.
    pub fn personal_position(&self, position_mint: &Pubkey) -> SdkResult<(Pubkey, u8)> {
        derive(&[POSITION_SEED, position_mint.as_ref()], &self.program_id)
    }

    /// Pool-wide position record for a tick range.
    pub fn protocol_position(
        &self,
        pool: &Pubkey,
        tick_lower: i32,
        tick_upper: i32,
    ) -> SdkResult<(Pubkey, u8)> {
        derive(
            &[
                POSITION_SEED,
                pool.as_ref(),
                &tick_lower.to_be_bytes(),
                &tick_upper.to_be_bytes(),
            ],
            &self.program_id,
        )
    }
}

/// Associated token address for `mint` held by `owner` under the
/// ownership-tracking (token-2022) program.
pub fn position_token_account(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, &spl_token_2022::ID)
}

fn derive(seeds: &[&[u8]], program_id: &Pubkey) -> SdkResult<(Pubkey, u8)> {
    Pubkey::try_find_program_address(seeds, program_id).ok_or_else(|| {
        SdkError::AddressDerivation(format!(
            "no valid bump for {} seed(s) under {}",
            seeds.len(),
            program_id
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivations_are_deterministic() {
        let pda = ClmmPda::new(Pubkey::new_unique());
        let pool = Pubkey::new_unique();

        let (a, bump_a) = pda.tick_array(&pool, -600).unwrap();
        let (b, bump_b) = pda.tick_array(&pool, -600).unwrap();
        assert_eq!(a, b);
        assert_eq!(bump_a, bump_b);
    }

    #[test]
    fn test_tick_array_start_index_is_part_of_the_seed() {
        let pda = ClmmPda::new(Pubkey::new_unique());
        let pool = Pubkey::new_unique();

        let (neg, _) = pda.tick_array(&pool, -600).unwrap();
        let (pos, _) = pda.tick_array(&pool, 600).unwrap();
        let (zero, _) = pda.tick_array(&pool, 0).unwrap();
        assert_ne!(neg, pos);
        assert_ne!(neg, zero);
        assert_ne!(pos, zero);
    }

    #[test]
    fn test_protocol_position_depends_on_both_bounds() {
        let pda = ClmmPda::new(Pubkey::new_unique());
        let pool = Pubkey::new_unique();

        let (a, _) = pda.protocol_position(&pool, -100, 100).unwrap();
        let (b, _) = pda.protocol_position(&pool, -100, 200).unwrap();
        let (c, _) = pda.protocol_position(&pool, -200, 100).unwrap();
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_strategy_auth_differs_per_strategy() {
        let pda = VaultPda::new(Pubkey::new_unique());
        let vault = Pubkey::new_unique();

        let (a, _) = pda
            .vault_strategy_auth(&vault, &Pubkey::new_unique())
            .unwrap();
        let (b, _) = pda
            .vault_strategy_auth(&vault, &Pubkey::new_unique())
            .unwrap();
        assert_ne!(a, b);
    }
}
