use std::fs;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::core::{constants, SdkError, SdkResult};

/// SDK configuration loaded from a TOML file.
///
/// Everything the original operator scripts held as ambient globals is an
/// explicit value here, passed into each component at construction.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SdkConfig {
    /// RPC endpoint to connect to
    pub rpc_url: String,

    /// Vault whose strategies are managed
    #[serde(with = "pubkey_serde")]
    pub vault: Pubkey,

    /// Vault management program
    #[serde(with = "pubkey_serde", default = "default_vault_program")]
    pub vault_program_id: Pubkey,

    /// Strategy adaptor program dispatched into by the vault program
    #[serde(with = "pubkey_serde", default = "default_adaptor_program")]
    pub adaptor_program_id: Pubkey,

    /// Asset side of the pair (the vault's deposit asset)
    pub asset: TokenConfig,

    /// Output side of the pair (the asset LP'd against)
    pub output: TokenConfig,

    /// Pool being managed
    pub pool: PoolConfig,

    /// Price range, in output units per 1 asset unit
    pub start_price: f64,
    pub end_price: f64,

    /// Deposit size for liquidity increases, in asset base units
    pub increase_liquidity_amount: u64,
}

/// One side of the managed pair.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    #[serde(with = "pubkey_serde")]
    pub mint: Pubkey,

    /// Owning token program (legacy token or token-2022)
    #[serde(with = "pubkey_serde")]
    pub token_program: Pubkey,

    /// Price oracle account for this token
    #[serde(with = "pubkey_serde")]
    pub oracle: Pubkey,
}

/// Pool parameters.
///
/// Mint ordering, decimals and reserve addresses come from the pool's
/// published metadata; sourcing them is an external concern.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PoolConfig {
    #[serde(with = "pubkey_serde")]
    pub id: Pubkey,

    /// Exchange program owning the pool
    #[serde(with = "pubkey_serde", default = "default_clmm_program")]
    pub program_id: Pubkey,

    pub tick_spacing: u16,

    /// Decimal precision of token0 / token1 (byte-order of the mints)
    pub decimals_0: u8,
    pub decimals_1: u8,

    /// Pool reserve token accounts, token0 / token1 order
    #[serde(with = "pubkey_serde")]
    pub reserve_0: Pubkey,
    #[serde(with = "pubkey_serde")]
    pub reserve_1: Pubkey,
}

fn default_vault_program() -> Pubkey {
    constants::VAULT_PROGRAM_ID
}

fn default_adaptor_program() -> Pubkey {
    constants::CLMM_ADAPTOR_PROGRAM_ID
}

fn default_clmm_program() -> Pubkey {
    constants::CLMM_PROGRAM_ID
}

impl SdkConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &str) -> SdkResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| SdkError::Serialization(format!("failed to read {}: {}", path, e)))?;

        let config: SdkConfig = toml::from_str(&content)
            .map_err(|e| SdkError::Serialization(format!("failed to parse {}: {}", path, e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> SdkResult<()> {
        if self.rpc_url.is_empty() {
            return Err(SdkError::InvalidPoolParameters(
                "rpc_url must not be empty".to_string(),
            ));
        }

        if self.pool.tick_spacing == 0 {
            return Err(SdkError::InvalidPoolParameters(
                "tick_spacing must be non-zero".to_string(),
            ));
        }

        if self.start_price <= 0.0 || self.end_price <= 0.0 {
            return Err(SdkError::InvalidPoolParameters(format!(
                "prices must be positive, got {} and {}",
                self.start_price, self.end_price
            )));
        }

        if self.asset.mint == self.output.mint {
            return Err(SdkError::InvalidPoolParameters(
                "asset and output mints must differ".to_string(),
            ));
        }

        Ok(())
    }
}

// Custom serde module for Pubkey
mod pubkey_serde {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&pubkey.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Pubkey, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Pubkey::from_str(&s).map_err(serde::de::Error::custom)
    }
}
