//! Vault CLMM SDK
//!
//! Client-side toolkit for managing a vault's concentrated-liquidity
//! positions on a Solana CLMM exchange through the vault program's
//! generic strategy-adaptor interface. Provides:
//! - deterministic address derivation for every referenced account
//! - price-range to tick-range conversion
//! - on-chain position resolution for a vault's strategies
//! - exact-order instruction assembly for open / increase operations

pub mod client;
pub mod codec;
pub mod core;
pub mod instructions;
pub mod prelude;
pub mod protocol;

pub use client::{
    AccountFetcher, BaseClient, ManagerClient, ManagerService, PositionService, PreparedOperation,
    StrategyRegistry, SwapRouteProvider, VaultClient,
};
pub use codec::{OpenPositionArgs, PersonalPosition, StrategyReceipt, TokenAccountInfo};
pub use core::{PoolConfig, SdkConfig, SdkError, SdkResult, TokenConfig};
pub use instructions::{
    DepositStrategyArgs, IncreaseLiquidityAccounts, InitializeStrategyArgs, OpenPositionAccounts,
    VaultInstructionBuilder,
};
pub use protocol::{
    asset_is_token_0, position_token_account, tick_array_start_index, ClmmPda, ClmmPool, TickRange,
    TickRangeCalculator, VaultPda,
};
