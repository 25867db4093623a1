//! Ordered account lists for the strategy adaptor's CLMM operations.
//!
//! The adaptor deserializes remaining accounts by index, so these lists
//! are a wire contract: any reordering, or a wrong writable/signer flag,
//! makes the on-chain program reject the transaction.

use solana_sdk::instruction::AccountMeta;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::sysvar;

/// Accounts referenced when opening a new position for a strategy.
///
/// `position_mint` is the freshly generated strategy identifier and must
/// co-sign the transaction exactly once.
#[derive(Debug, Clone)]
pub struct OpenPositionAccounts {
    pub clmm_program: Pubkey,
    pub position_mint: Pubkey,
    pub position_token_account: Pubkey,
    pub pool: Pubkey,
    pub protocol_position: Pubkey,
    pub tick_array_lower: Pubkey,
    pub tick_array_upper: Pubkey,
    pub personal_position: Pubkey,
    pub strategy_asset_account: Pubkey,
    pub strategy_output_account: Pubkey,
    pub pool_asset_reserve: Pubkey,
    pub pool_output_reserve: Pubkey,
    pub asset_mint: Pubkey,
    pub output_mint: Pubkey,
}

impl OpenPositionAccounts {
    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new_readonly(self.clmm_program, false),
            AccountMeta::new(self.position_mint, true),
            AccountMeta::new(self.position_token_account, false),
            AccountMeta::new(self.pool, false),
            AccountMeta::new(self.protocol_position, false),
            AccountMeta::new(self.tick_array_lower, false),
            AccountMeta::new(self.tick_array_upper, false),
            AccountMeta::new(self.personal_position, false),
            AccountMeta::new(self.strategy_asset_account, false),
            AccountMeta::new(self.strategy_output_account, false),
            AccountMeta::new(self.pool_asset_reserve, false),
            AccountMeta::new(self.pool_output_reserve, false),
            AccountMeta::new_readonly(sysvar::rent::ID, false),
            AccountMeta::new_readonly(spl_token::ID, false),
            AccountMeta::new_readonly(spl_associated_token_account::ID, false),
            AccountMeta::new_readonly(spl_token_2022::ID, false),
            AccountMeta::new_readonly(self.asset_mint, false),
            AccountMeta::new_readonly(self.output_mint, false),
        ]
    }
}

/// Accounts referenced when adding liquidity to an existing position.
#[derive(Debug, Clone)]
pub struct IncreaseLiquidityAccounts {
    pub clmm_program: Pubkey,
    pub position_token_account: Pubkey,
    pub pool: Pubkey,
    pub protocol_position: Pubkey,
    pub personal_position: Pubkey,
    pub tick_array_lower: Pubkey,
    pub tick_array_upper: Pubkey,
    pub strategy_output_account: Pubkey,
    pub pool_asset_reserve: Pubkey,
    pub pool_output_reserve: Pubkey,
    pub output_mint: Pubkey,
    pub asset_oracle: Pubkey,
    pub output_oracle: Pubkey,
}

impl IncreaseLiquidityAccounts {
    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new_readonly(self.clmm_program, false),
            AccountMeta::new_readonly(self.position_token_account, false),
            AccountMeta::new(self.pool, false),
            AccountMeta::new(self.protocol_position, false),
            AccountMeta::new(self.personal_position, false),
            AccountMeta::new(self.tick_array_lower, false),
            AccountMeta::new(self.tick_array_upper, false),
            AccountMeta::new(self.strategy_output_account, false),
            AccountMeta::new(self.pool_asset_reserve, false),
            AccountMeta::new(self.pool_output_reserve, false),
            AccountMeta::new_readonly(self.output_mint, false),
            AccountMeta::new_readonly(spl_token::ID, false),
            AccountMeta::new_readonly(spl_token_2022::ID, false),
            AccountMeta::new_readonly(self.asset_oracle, false),
            AccountMeta::new_readonly(self.output_oracle, false),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_accounts() -> OpenPositionAccounts {
        OpenPositionAccounts {
            clmm_program: Pubkey::new_unique(),
            position_mint: Pubkey::new_unique(),
            position_token_account: Pubkey::new_unique(),
            pool: Pubkey::new_unique(),
            protocol_position: Pubkey::new_unique(),
            tick_array_lower: Pubkey::new_unique(),
            tick_array_upper: Pubkey::new_unique(),
            personal_position: Pubkey::new_unique(),
            strategy_asset_account: Pubkey::new_unique(),
            strategy_output_account: Pubkey::new_unique(),
            pool_asset_reserve: Pubkey::new_unique(),
            pool_output_reserve: Pubkey::new_unique(),
            asset_mint: Pubkey::new_unique(),
            output_mint: Pubkey::new_unique(),
        }
    }

    #[test]
    fn test_open_position_account_order() {
        let accounts = open_accounts();
        let metas = accounts.to_account_metas();
        assert_eq!(metas.len(), 18);

        let expected = [
            (accounts.clmm_program, false, false),
            (accounts.position_mint, true, true),
            (accounts.position_token_account, false, true),
            (accounts.pool, false, true),
            (accounts.protocol_position, false, true),
            (accounts.tick_array_lower, false, true),
            (accounts.tick_array_upper, false, true),
            (accounts.personal_position, false, true),
            (accounts.strategy_asset_account, false, true),
            (accounts.strategy_output_account, false, true),
            (accounts.pool_asset_reserve, false, true),
            (accounts.pool_output_reserve, false, true),
            (sysvar::rent::ID, false, false),
            (spl_token::ID, false, false),
            (spl_associated_token_account::ID, false, false),
            (spl_token_2022::ID, false, false),
            (accounts.asset_mint, false, false),
            (accounts.output_mint, false, false),
        ];
        for (i, (pubkey, is_signer, is_writable)) in expected.iter().enumerate() {
            assert_eq!(metas[i].pubkey, *pubkey, "pubkey mismatch at index {}", i);
            assert_eq!(metas[i].is_signer, *is_signer, "signer mismatch at index {}", i);
            assert_eq!(
                metas[i].is_writable, *is_writable,
                "writable mismatch at index {}",
                i
            );
        }
    }

    #[test]
    fn test_increase_liquidity_account_order() {
        let accounts = IncreaseLiquidityAccounts {
            clmm_program: Pubkey::new_unique(),
            position_token_account: Pubkey::new_unique(),
            pool: Pubkey::new_unique(),
            protocol_position: Pubkey::new_unique(),
            personal_position: Pubkey::new_unique(),
            tick_array_lower: Pubkey::new_unique(),
            tick_array_upper: Pubkey::new_unique(),
            strategy_output_account: Pubkey::new_unique(),
            pool_asset_reserve: Pubkey::new_unique(),
            pool_output_reserve: Pubkey::new_unique(),
            output_mint: Pubkey::new_unique(),
            asset_oracle: Pubkey::new_unique(),
            output_oracle: Pubkey::new_unique(),
        };
        let metas = accounts.to_account_metas();
        assert_eq!(metas.len(), 15);

        let expected = [
            (accounts.clmm_program, false, false),
            (accounts.position_token_account, false, false),
            (accounts.pool, false, true),
            (accounts.protocol_position, false, true),
            (accounts.personal_position, false, true),
            (accounts.tick_array_lower, false, true),
            (accounts.tick_array_upper, false, true),
            (accounts.strategy_output_account, false, true),
            (accounts.pool_asset_reserve, false, true),
            (accounts.pool_output_reserve, false, true),
            (accounts.output_mint, false, false),
            (spl_token::ID, false, false),
            (spl_token_2022::ID, false, false),
            (accounts.asset_oracle, false, false),
            (accounts.output_oracle, false, false),
        ];
        for (i, (pubkey, is_signer, is_writable)) in expected.iter().enumerate() {
            assert_eq!(metas[i].pubkey, *pubkey, "pubkey mismatch at index {}", i);
            assert_eq!(metas[i].is_signer, *is_signer, "signer mismatch at index {}", i);
            assert_eq!(
                metas[i].is_writable, *is_writable,
                "writable mismatch at index {}",
                i
            );
        }
    }
}
