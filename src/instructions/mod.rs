pub mod adaptor;
pub mod vault;

pub use adaptor::{IncreaseLiquidityAccounts, OpenPositionAccounts};
pub use vault::{DepositStrategyArgs, InitializeStrategyArgs, VaultInstructionBuilder};
