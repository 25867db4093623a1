use solana_account_decoder::UiAccountEncoding;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig};
use solana_client::rpc_filter::RpcFilterType;
use solana_sdk::{
    account::Account,
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};

use crate::core::{SdkError, SdkResult};

/// Batched chain-read interface: read N accounts in one round trip,
/// `None` per missing address, output order matching input order.
#[allow(async_fn_in_trait)]
pub trait AccountFetcher {
    async fn fetch_accounts(&self, keys: &[Pubkey]) -> SdkResult<Vec<Option<Account>>>;
}

/// Upper bound the RPC node enforces on one multi-account read.
const MAX_BATCH_KEYS: usize = 100;

/// Thin RPC wrapper shared by all services.
pub struct BaseClient {
    rpc: RpcClient,
}

impl BaseClient {
    pub fn new(rpc_url: &str) -> Self {
        Self {
            rpc: RpcClient::new_with_commitment(rpc_url.to_string(), CommitmentConfig::confirmed()),
        }
    }

    pub fn rpc_url(&self) -> String {
        self.rpc.url()
    }

    /// Scan a program's accounts with server-side filters.
    pub async fn program_accounts(
        &self,
        program_id: &Pubkey,
        filters: Vec<RpcFilterType>,
    ) -> SdkResult<Vec<(Pubkey, Account)>> {
        let config = RpcProgramAccountsConfig {
            filters: Some(filters),
            account_config: RpcAccountInfoConfig {
                encoding: Some(UiAccountEncoding::Base64),
                ..RpcAccountInfoConfig::default()
            },
            ..RpcProgramAccountsConfig::default()
        };

        self.rpc
            .get_program_accounts_with_config(program_id, config)
            .await
            .map_err(|e| SdkError::Rpc(e.to_string()))
    }

    /// Sign and submit a transaction, waiting for confirmation.
    ///
    /// This is the submission boundary: everything upstream is pure
    /// assembly, and failures here leave no partial state behind.
    pub async fn send_transaction(
        &self,
        instructions: &[Instruction],
        payer: &Keypair,
        extra_signers: &[&Keypair],
    ) -> SdkResult<Signature> {
        let recent_blockhash = self
            .rpc
            .get_latest_blockhash()
            .await
            .map_err(|e| SdkError::Rpc(e.to_string()))?;

        let mut signers: Vec<&Keypair> = vec![payer];
        signers.extend_from_slice(extra_signers);

        let tx = Transaction::new_signed_with_payer(
            instructions,
            Some(&payer.pubkey()),
            &signers,
            recent_blockhash,
        );

        self.rpc
            .send_and_confirm_transaction(&tx)
            .await
            .map_err(|e| SdkError::Rpc(e.to_string()))
    }
}

impl AccountFetcher for BaseClient {
    async fn fetch_accounts(&self, keys: &[Pubkey]) -> SdkResult<Vec<Option<Account>>> {
        let mut accounts = Vec::with_capacity(keys.len());
        for chunk in keys.chunks(MAX_BATCH_KEYS) {
            let batch = self
                .rpc
                .get_multiple_accounts(chunk)
                .await
                .map_err(|e| SdkError::Rpc(e.to_string()))?;
            accounts.extend(batch);
        }
        Ok(accounts)
    }
}
