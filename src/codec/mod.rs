//! Fixed-layout codecs for the external account and argument formats.
//!
//! Each record type gets a symmetric encode/decode pair with its offsets
//! documented at the definition, so layout drift surfaces in round-trip
//! tests instead of silently corrupting reads.

pub mod args;
pub mod position;
pub mod receipt;
pub mod token_account;

pub use args::OpenPositionArgs;
pub use position::{PersonalPosition, PERSONAL_POSITION_LEN};
pub use receipt::{StrategyReceipt, STRATEGY_RECEIPT_LEN};
pub use token_account::{decode_token_account, holds_position_nft, TokenAccountInfo};
