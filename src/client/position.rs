use std::sync::Arc;

use solana_sdk::pubkey::Pubkey;

use crate::client::base::AccountFetcher;
use crate::client::vault::StrategyRegistry;
use crate::codec::token_account::{decode_token_account, holds_position_nft};
use crate::codec::PersonalPosition;
use crate::core::SdkResult;
use crate::protocol::{position_token_account, ClmmPda, VaultPda};

/// Resolves a vault's live positions from chain state.
///
/// Every call re-reads the chain; nothing is cached between invocations.
pub struct PositionService<F, R> {
    fetcher: Arc<F>,
    registry: Arc<R>,
    vault_pda: VaultPda,
    clmm_pda: ClmmPda,
}

impl<F: AccountFetcher, R: StrategyRegistry> PositionService<F, R> {
    pub fn new(
        fetcher: Arc<F>,
        registry: Arc<R>,
        vault_program_id: Pubkey,
        clmm_program_id: Pubkey,
    ) -> Self {
        Self {
            fetcher,
            registry,
            vault_pda: VaultPda::new(vault_program_id),
            clmm_pda: ClmmPda::new(clmm_program_id),
        }
    }

    /// Decode every position currently held by `vault`'s strategies.
    ///
    /// A strategy holds a position iff its authority's token account for
    /// the strategy mint exists and holds exactly one unit; the mint then
    /// keys the position record. Missing accounts are skipped, malformed
    /// ones are fatal.
    pub async fn fetch_all_positions(&self, vault: &Pubkey) -> SdkResult<Vec<PersonalPosition>> {
        let receipts = self.registry.initialized_strategies(vault).await?;
        if receipts.is_empty() {
            return Ok(Vec::new());
        }

        let mut ownership_accounts = Vec::with_capacity(receipts.len());
        for receipt in &receipts {
            let (auth, _) = self.vault_pda.vault_strategy_auth(vault, &receipt.strategy)?;
            ownership_accounts.push(position_token_account(&auth, &receipt.strategy));
        }

        let mut position_mints = Vec::new();
        for account in self
            .fetcher
            .fetch_accounts(&ownership_accounts)
            .await?
            .iter()
            .flatten()
        {
            let info = decode_token_account(&account.data)?;
            if holds_position_nft(&info) {
                position_mints.push(info.mint);
            }
        }
        if position_mints.is_empty() {
            return Ok(Vec::new());
        }

        let mut position_keys = Vec::with_capacity(position_mints.len());
        for mint in &position_mints {
            let (position, _) = self.clmm_pda.personal_position(mint)?;
            position_keys.push(position);
        }

        let mut positions = Vec::new();
        for account in self
            .fetcher
            .fetch_accounts(&position_keys)
            .await?
            .iter()
            .flatten()
        {
            positions.push(PersonalPosition::decode(&account.data)?);
        }

        log::debug!(
            "resolved {} position(s) across {} strategies of vault {}",
            positions.len(),
            receipts.len(),
            vault
        );
        Ok(positions)
    }

    /// Find the unique position of `vault` in `pool_id` with exactly the
    /// given tick bounds. No tolerance and no nearest-match: overlapping
    /// but non-identical ranges are distinct positions.
    pub async fn find_position(
        &self,
        pool_id: &Pubkey,
        vault: &Pubkey,
        tick_lower: i32,
        tick_upper: i32,
    ) -> SdkResult<Option<PersonalPosition>> {
        let positions = self.fetch_all_positions(vault).await?;

        Ok(positions.into_iter().find(|p| {
            p.pool_id == *pool_id && p.tick_lower == tick_lower && p.tick_upper == tick_upper
        }))
    }
}
