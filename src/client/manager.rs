use std::sync::Arc;

use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use spl_associated_token_account::get_associated_token_address_with_program_id;
use spl_associated_token_account::instruction::create_associated_token_account_idempotent;

use crate::client::base::AccountFetcher;
use crate::client::position::PositionService;
use crate::client::vault::StrategyRegistry;
use crate::codec::OpenPositionArgs;
use crate::core::constants::{INCREASE_CLMM_LIQUIDITY, OPEN_CLMM_POSITION};
use crate::core::{SdkConfig, SdkError, SdkResult, TokenConfig};
use crate::instructions::{
    DepositStrategyArgs, IncreaseLiquidityAccounts, InitializeStrategyArgs, OpenPositionAccounts,
    VaultInstructionBuilder,
};
use crate::protocol::{
    asset_is_token_0, position_token_account, ClmmPda, ClmmPool, TickRangeCalculator, VaultPda,
};

/// Swap-route collaborator: produces the opaque deposit payload appended
/// to an increase-liquidity operation. Route construction itself is an
/// external concern.
#[allow(async_fn_in_trait)]
pub trait SwapRouteProvider {
    async fn deposit_route(
        &self,
        vault_strategy_auth: &Pubkey,
        deposit_amount: u64,
        accounts: &[AccountMeta],
    ) -> SdkResult<Vec<u8>>;
}

/// A fully assembled operation, ready for the submission collaborator.
///
/// `strategy_mint` is present for open-position operations: the freshly
/// generated mint keypair must co-sign the transaction once and is never
/// used again.
pub struct PreparedOperation {
    pub instructions: Vec<Instruction>,
    pub strategy_mint: Option<Keypair>,
}

/// Orchestrates position-management operations for one vault and pool.
pub struct ManagerService<F, R> {
    vault: Pubkey,
    asset: TokenConfig,
    output: TokenConfig,
    pool: ClmmPool,
    adaptor_program_id: Pubkey,
    vault_pda: VaultPda,
    clmm_pda: ClmmPda,
    builder: VaultInstructionBuilder,
    fetcher: Arc<F>,
    positions: PositionService<F, R>,
}

impl<F: AccountFetcher, R: StrategyRegistry> ManagerService<F, R> {
    pub fn new(fetcher: Arc<F>, registry: Arc<R>, config: &SdkConfig) -> Self {
        let pool = ClmmPool::from_config(&config.pool);
        Self {
            vault: config.vault,
            asset: config.asset.clone(),
            output: config.output.clone(),
            pool,
            adaptor_program_id: config.adaptor_program_id,
            vault_pda: VaultPda::new(config.vault_program_id),
            clmm_pda: ClmmPda::new(pool.program_id),
            builder: VaultInstructionBuilder::new(config.vault_program_id),
            positions: PositionService::new(
                fetcher.clone(),
                registry,
                config.vault_program_id,
                pool.program_id,
            ),
            fetcher,
        }
    }

    /// Assemble an open-position operation for the given price range.
    ///
    /// Fails with `AlreadyExists` if the vault already holds a position
    /// in this pool with the same tick bounds; nothing is assembled then.
    pub async fn open_position(
        &self,
        payer: &Pubkey,
        manager: &Pubkey,
        start_price: f64,
        end_price: f64,
    ) -> SdkResult<PreparedOperation> {
        let base_in = asset_is_token_0(&self.asset.mint, &self.output.mint);
        let range = TickRangeCalculator::for_pool(&self.pool, base_in)?
            .tick_range(start_price, end_price)?;

        if self
            .positions
            .find_position(&self.pool.id, &self.vault, range.tick_lower, range.tick_upper)
            .await?
            .is_some()
        {
            return Err(SdkError::AlreadyExists {
                pool: self.pool.id,
                tick_lower: range.tick_lower,
                tick_upper: range.tick_upper,
            });
        }

        // The new strategy is identified by a fresh mint that signs once.
        let strategy_mint = Keypair::new();
        let strategy = strategy_mint.pubkey();

        let (auth, _) = self.vault_pda.vault_strategy_auth(&self.vault, &strategy)?;
        let (personal_position, _) = self.clmm_pda.personal_position(&strategy)?;
        let (protocol_position, _) =
            self.clmm_pda
                .protocol_position(&self.pool.id, range.tick_lower, range.tick_upper)?;
        let (tick_array_lower, _) = self
            .clmm_pda
            .tick_array(&self.pool.id, range.array_lower_start)?;
        let (tick_array_upper, _) = self
            .clmm_pda
            .tick_array(&self.pool.id, range.array_upper_start)?;

        let mut instructions = Vec::new();
        let strategy_asset_account = self
            .ensure_token_account(payer, &auth, &self.asset, &mut instructions)
            .await?;
        let strategy_output_account = self
            .ensure_token_account(payer, &auth, &self.output, &mut instructions)
            .await?;

        let (pool_asset_reserve, pool_output_reserve) = self.pool.reserves_for(base_in);

        let accounts = OpenPositionAccounts {
            clmm_program: self.pool.program_id,
            position_mint: strategy,
            position_token_account: position_token_account(&auth, &strategy),
            pool: self.pool.id,
            protocol_position,
            tick_array_lower,
            tick_array_upper,
            personal_position,
            strategy_asset_account,
            strategy_output_account,
            pool_asset_reserve,
            pool_output_reserve,
            asset_mint: self.asset.mint,
            output_mint: self.output.mint,
        };

        let args = OpenPositionArgs::from_range(&range);
        instructions.push(self.builder.initialize_strategy(
            payer,
            &self.vault,
            manager,
            &strategy,
            &self.adaptor_program_id,
            InitializeStrategyArgs {
                instruction_discriminator: OPEN_CLMM_POSITION,
                additional_args: Some(args.encode().to_vec()),
            },
            accounts.to_account_metas(),
        )?);

        log::info!(
            "assembled open position for vault {} pool {} ticks [{}, {}]",
            self.vault,
            self.pool.id,
            range.tick_lower,
            range.tick_upper
        );

        Ok(PreparedOperation {
            instructions,
            strategy_mint: Some(strategy_mint),
        })
    }

    /// Assemble an increase-liquidity operation against the existing
    /// position at the given price range.
    ///
    /// Fails with `NotFound` if the vault holds no position with exactly
    /// these tick bounds in this pool.
    pub async fn increase_liquidity<S: SwapRouteProvider>(
        &self,
        manager: &Pubkey,
        start_price: f64,
        end_price: f64,
        deposit_amount: u64,
        route_provider: &S,
    ) -> SdkResult<PreparedOperation> {
        let base_in = asset_is_token_0(&self.asset.mint, &self.output.mint);
        let range = TickRangeCalculator::for_pool(&self.pool, base_in)?
            .tick_range(start_price, end_price)?;

        let position = self
            .positions
            .find_position(&self.pool.id, &self.vault, range.tick_lower, range.tick_upper)
            .await?
            .ok_or(SdkError::NotFound {
                pool: self.pool.id,
                tick_lower: range.tick_lower,
                tick_upper: range.tick_upper,
            })?;

        let strategy = position.nft_mint;
        let (auth, _) = self.vault_pda.vault_strategy_auth(&self.vault, &strategy)?;
        let (personal_position, _) = self.clmm_pda.personal_position(&strategy)?;
        let (protocol_position, _) =
            self.clmm_pda
                .protocol_position(&self.pool.id, range.tick_lower, range.tick_upper)?;
        let (tick_array_lower, _) = self
            .clmm_pda
            .tick_array(&self.pool.id, range.array_lower_start)?;
        let (tick_array_upper, _) = self
            .clmm_pda
            .tick_array(&self.pool.id, range.array_upper_start)?;

        let mut instructions = Vec::new();
        self.ensure_token_account(manager, &auth, &self.asset, &mut instructions)
            .await?;
        let strategy_output_account = self
            .ensure_token_account(manager, &auth, &self.output, &mut instructions)
            .await?;

        let (pool_asset_reserve, pool_output_reserve) = self.pool.reserves_for(base_in);

        let accounts = IncreaseLiquidityAccounts {
            clmm_program: self.pool.program_id,
            position_token_account: position_token_account(&auth, &strategy),
            pool: self.pool.id,
            protocol_position,
            personal_position,
            tick_array_lower,
            tick_array_upper,
            strategy_output_account,
            pool_asset_reserve,
            pool_output_reserve,
            output_mint: self.output.mint,
            asset_oracle: self.asset.oracle,
            output_oracle: self.output.oracle,
        };
        let account_metas = accounts.to_account_metas();

        let route = route_provider
            .deposit_route(&auth, deposit_amount, &account_metas)
            .await?;

        instructions.push(self.builder.deposit_strategy(
            manager,
            &self.vault,
            &self.asset.mint,
            &self.asset.token_program,
            &strategy,
            &self.adaptor_program_id,
            DepositStrategyArgs {
                deposit_amount,
                instruction_discriminator: INCREASE_CLMM_LIQUIDITY,
                additional_args: Some(route),
            },
            account_metas,
        )?);

        log::info!(
            "assembled liquidity increase of {} for vault {} pool {} ticks [{}, {}]",
            deposit_amount,
            self.vault,
            self.pool.id,
            range.tick_lower,
            range.tick_upper
        );

        Ok(PreparedOperation {
            instructions,
            strategy_mint: None,
        })
    }

    /// Associated token account of `token` for `owner`, with an
    /// idempotent create instruction prepended when it does not exist yet.
    async fn ensure_token_account(
        &self,
        payer: &Pubkey,
        owner: &Pubkey,
        token: &TokenConfig,
        instructions: &mut Vec<Instruction>,
    ) -> SdkResult<Pubkey> {
        let ata =
            get_associated_token_address_with_program_id(owner, &token.mint, &token.token_program);

        let existing = self.fetcher.fetch_accounts(&[ata]).await?;
        if existing.first().map(Option::is_none).unwrap_or(true) {
            instructions.push(create_associated_token_account_idempotent(
                payer,
                owner,
                &token.mint,
                &token.token_program,
            ));
        }

        Ok(ata)
    }
}
