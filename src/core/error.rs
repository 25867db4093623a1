use thiserror::Error;

use solana_sdk::pubkey::Pubkey;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Invalid pool parameters: {0}")]
    InvalidPoolParameters(String),

    #[error("Position already exists for pool {pool} at ticks [{tick_lower}, {tick_upper}]")]
    AlreadyExists {
        pool: Pubkey,
        tick_lower: i32,
        tick_upper: i32,
    },

    #[error("No position found for pool {pool} at ticks [{tick_lower}, {tick_upper}]")]
    NotFound {
        pool: Pubkey,
        tick_lower: i32,
        tick_upper: i32,
    },

    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Address derivation failed: {0}")]
    AddressDerivation(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type SdkResult<T> = Result<T, SdkError>;
