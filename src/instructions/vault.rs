//! Envelope instructions of the vault management program.
//!
//! The vault program exposes a generic strategy interface: every adaptor
//! operation travels as an 8-byte adaptor opcode plus an opaque argument
//! blob, with the adaptor's accounts appended after the vault program's
//! own. These builders assemble that envelope.

use crate::prelude::*;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::system_program;

use crate::core::constants::{DEPOSIT_STRATEGY_DISCRIMINATOR, INITIALIZE_STRATEGY_DISCRIMINATOR};
use crate::protocol::VaultPda;

/// Arguments of the vault program's `initialize_strategy` instruction.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeStrategyArgs {
    pub instruction_discriminator: [u8; 8],
    pub additional_args: Option<Vec<u8>>,
}

/// Arguments of the vault program's `deposit_strategy` instruction.
/// The adaptor payload rides behind the deposit amount.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct DepositStrategyArgs {
    pub deposit_amount: u64,
    pub instruction_discriminator: [u8; 8],
    pub additional_args: Option<Vec<u8>>,
}

/// Builds vault-program envelope instructions.
#[derive(Debug, Clone, Copy)]
pub struct VaultInstructionBuilder {
    program_id: Pubkey,
    pda: VaultPda,
}

impl VaultInstructionBuilder {
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            program_id,
            pda: VaultPda::new(program_id),
        }
    }

    /// Register a new strategy with the vault and dispatch the adaptor's
    /// open operation. `strategy` is the fresh position mint and signs.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize_strategy(
        &self,
        payer: &Pubkey,
        vault: &Pubkey,
        manager: &Pubkey,
        strategy: &Pubkey,
        adaptor_program: &Pubkey,
        args: InitializeStrategyArgs,
        remaining_accounts: Vec<AccountMeta>,
    ) -> SdkResult<Instruction> {
        let (vault_strategy_auth, _) = self.pda.vault_strategy_auth(vault, strategy)?;
        let (strategy_init_receipt, _) = self.pda.strategy_init_receipt(vault, strategy)?;

        let mut accounts = vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(*vault, false),
            AccountMeta::new_readonly(*manager, true),
            AccountMeta::new_readonly(*strategy, false),
            AccountMeta::new_readonly(vault_strategy_auth, false),
            AccountMeta::new(strategy_init_receipt, false),
            AccountMeta::new_readonly(*adaptor_program, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ];
        accounts.extend(remaining_accounts);

        Ok(Instruction {
            program_id: self.program_id,
            accounts,
            data: encode_instruction_data(&INITIALIZE_STRATEGY_DISCRIMINATOR, &args)?,
        })
    }

    /// Move vault assets into an existing strategy and dispatch the
    /// adaptor's deposit operation.
    #[allow(clippy::too_many_arguments)]
    pub fn deposit_strategy(
        &self,
        manager: &Pubkey,
        vault: &Pubkey,
        vault_asset_mint: &Pubkey,
        asset_token_program: &Pubkey,
        strategy: &Pubkey,
        adaptor_program: &Pubkey,
        args: DepositStrategyArgs,
        remaining_accounts: Vec<AccountMeta>,
    ) -> SdkResult<Instruction> {
        let (vault_strategy_auth, _) = self.pda.vault_strategy_auth(vault, strategy)?;
        let (strategy_init_receipt, _) = self.pda.strategy_init_receipt(vault, strategy)?;

        let mut accounts = vec![
            AccountMeta::new_readonly(*manager, true),
            AccountMeta::new(*vault, false),
            AccountMeta::new_readonly(*strategy, false),
            AccountMeta::new(vault_strategy_auth, false),
            AccountMeta::new(strategy_init_receipt, false),
            AccountMeta::new_readonly(*vault_asset_mint, false),
            AccountMeta::new_readonly(*asset_token_program, false),
            AccountMeta::new_readonly(*adaptor_program, false),
        ];
        accounts.extend(remaining_accounts);

        Ok(Instruction {
            program_id: self.program_id,
            accounts,
            data: encode_instruction_data(&DEPOSIT_STRATEGY_DISCRIMINATOR, &args)?,
        })
    }
}

fn encode_instruction_data<T: AnchorSerialize>(
    discriminator: &[u8; 8],
    args: &T,
) -> SdkResult<Vec<u8>> {
    let mut data = discriminator.to_vec();
    args.serialize(&mut data)
        .map_err(|e| SdkError::Serialization(format!("instruction args: {}", e)))?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::args::OPEN_POSITION_ARGS_LEN;
    use crate::core::constants::OPEN_CLMM_POSITION;

    #[test]
    fn test_initialize_strategy_envelope() {
        let builder = VaultInstructionBuilder::new(Pubkey::new_unique());
        let payer = Pubkey::new_unique();
        let vault = Pubkey::new_unique();
        let manager = Pubkey::new_unique();
        let strategy = Pubkey::new_unique();
        let adaptor = Pubkey::new_unique();
        let remaining = vec![AccountMeta::new(Pubkey::new_unique(), false)];

        let ix = builder
            .initialize_strategy(
                &payer,
                &vault,
                &manager,
                &strategy,
                &adaptor,
                InitializeStrategyArgs {
                    instruction_discriminator: OPEN_CLMM_POSITION,
                    additional_args: Some(vec![0u8; OPEN_POSITION_ARGS_LEN]),
                },
                remaining.clone(),
            )
            .unwrap();

        // 8 envelope accounts, then the adaptor accounts verbatim.
        assert_eq!(ix.accounts.len(), 8 + remaining.len());
        assert_eq!(ix.accounts[0].pubkey, payer);
        assert!(ix.accounts[0].is_signer);
        assert_eq!(ix.accounts[8].pubkey, remaining[0].pubkey);

        // Vault ix discriminator, adaptor opcode, Some-tag, len-prefixed blob.
        assert_eq!(&ix.data[..8], &INITIALIZE_STRATEGY_DISCRIMINATOR);
        assert_eq!(&ix.data[8..16], &OPEN_CLMM_POSITION);
        assert_eq!(ix.data[16], 1);
        assert_eq!(
            u32::from_le_bytes(ix.data[17..21].try_into().unwrap()),
            OPEN_POSITION_ARGS_LEN as u32
        );
    }

    #[test]
    fn test_deposit_strategy_payload_rides_behind_amount() {
        let builder = VaultInstructionBuilder::new(Pubkey::new_unique());
        let route = vec![0xab; 7];

        let ix = builder
            .deposit_strategy(
                &Pubkey::new_unique(),
                &Pubkey::new_unique(),
                &Pubkey::new_unique(),
                &spl_token::ID,
                &Pubkey::new_unique(),
                &Pubkey::new_unique(),
                DepositStrategyArgs {
                    deposit_amount: 100_000,
                    instruction_discriminator: crate::core::constants::INCREASE_CLMM_LIQUIDITY,
                    additional_args: Some(route.clone()),
                },
                vec![],
            )
            .unwrap();

        assert_eq!(&ix.data[..8], &DEPOSIT_STRATEGY_DISCRIMINATOR);
        assert_eq!(
            u64::from_le_bytes(ix.data[8..16].try_into().unwrap()),
            100_000
        );
        assert_eq!(
            &ix.data[16..24],
            &crate::core::constants::INCREASE_CLMM_LIQUIDITY
        );
        assert_eq!(&ix.data[ix.data.len() - route.len()..], route.as_slice());
    }
}
