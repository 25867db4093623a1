use std::sync::Arc;

use solana_client::rpc_filter::{Memcmp, RpcFilterType};
use solana_sdk::pubkey::Pubkey;

use crate::client::BaseClient;
use crate::codec::receipt::{
    StrategyReceipt, STRATEGY_RECEIPT_DISCRIMINATOR, STRATEGY_RECEIPT_LEN,
    STRATEGY_RECEIPT_VAULT_OFFSET,
};
use crate::core::SdkResult;
use crate::protocol::VaultPda;

/// Vault-management collaborator surface: enumerate the initialized
/// strategies of a vault.
#[allow(async_fn_in_trait)]
pub trait StrategyRegistry {
    async fn initialized_strategies(&self, vault: &Pubkey) -> SdkResult<Vec<StrategyReceipt>>;
}

/// Strategy registry backed by the vault program's receipt accounts.
pub struct VaultClient {
    base: Arc<BaseClient>,
    program_id: Pubkey,
    pda: VaultPda,
}

impl VaultClient {
    pub fn new(base: Arc<BaseClient>, program_id: Pubkey) -> Self {
        Self {
            base,
            program_id,
            pda: VaultPda::new(program_id),
        }
    }

    pub fn pda(&self) -> &VaultPda {
        &self.pda
    }
}

impl StrategyRegistry for VaultClient {
    async fn initialized_strategies(&self, vault: &Pubkey) -> SdkResult<Vec<StrategyReceipt>> {
        let filters = vec![
            RpcFilterType::DataSize(STRATEGY_RECEIPT_LEN as u64),
            RpcFilterType::Memcmp(Memcmp::new_raw_bytes(
                0,
                STRATEGY_RECEIPT_DISCRIMINATOR.to_vec(),
            )),
            RpcFilterType::Memcmp(Memcmp::new_raw_bytes(
                STRATEGY_RECEIPT_VAULT_OFFSET,
                vault.to_bytes().to_vec(),
            )),
        ];

        let accounts = self.base.program_accounts(&self.program_id, filters).await?;
        log::debug!(
            "vault {} has {} initialized strategies",
            vault,
            accounts.len()
        );

        accounts
            .iter()
            .map(|(_, account)| StrategyReceipt::decode(&account.data))
            .collect()
    }
}
