pub mod pda;
pub mod pool;
pub mod tick;

pub use pda::{position_token_account, ClmmPda, VaultPda};
pub use pool::{asset_is_token_0, ClmmPool};
pub use tick::{tick_array_start_index, TickRange, TickRangeCalculator};
