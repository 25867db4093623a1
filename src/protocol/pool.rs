use solana_sdk::pubkey::Pubkey;

use crate::core::PoolConfig;

/// Parameters of one concentrated-liquidity pool.
///
/// `mint_0`/`mint_1` follow the exchange's canonical ordering: the mint
/// with the lower raw byte sequence is token0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClmmPool {
    pub program_id: Pubkey,
    pub id: Pubkey,
    pub tick_spacing: u16,
    pub decimals_0: u8,
    pub decimals_1: u8,
    pub reserve_0: Pubkey,
    pub reserve_1: Pubkey,
}

impl ClmmPool {
    pub fn from_config(config: &PoolConfig) -> Self {
        Self {
            program_id: config.program_id,
            id: config.id,
            tick_spacing: config.tick_spacing,
            decimals_0: config.decimals_0,
            decimals_1: config.decimals_1,
            reserve_0: config.reserve_0,
            reserve_1: config.reserve_1,
        }
    }

    /// Pool reserves seen from the vault's side: (asset reserve, output reserve).
    pub fn reserves_for(&self, asset_is_token_0: bool) -> (Pubkey, Pubkey) {
        if asset_is_token_0 {
            (self.reserve_0, self.reserve_1)
        } else {
            (self.reserve_1, self.reserve_0)
        }
    }
}

/// Whether `asset` takes the token0 slot when paired with `output`.
///
/// The exchange orders a pool's constituents by comparing the raw bytes of
/// their mint addresses.
pub fn asset_is_token_0(asset_mint: &Pubkey, output_mint: &Pubkey) -> bool {
    asset_mint.to_bytes() < output_mint.to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_ordering_is_byte_order() {
        let low = Pubkey::new_from_array([1u8; 32]);
        let high = Pubkey::new_from_array([2u8; 32]);
        assert!(asset_is_token_0(&low, &high));
        assert!(!asset_is_token_0(&high, &low));
    }

    #[test]
    fn test_reserves_follow_token_ordering() {
        let pool = ClmmPool {
            program_id: Pubkey::new_unique(),
            id: Pubkey::new_unique(),
            tick_spacing: 10,
            decimals_0: 6,
            decimals_1: 9,
            reserve_0: Pubkey::new_from_array([3u8; 32]),
            reserve_1: Pubkey::new_from_array([4u8; 32]),
        };

        assert_eq!(pool.reserves_for(true), (pool.reserve_0, pool.reserve_1));
        assert_eq!(pool.reserves_for(false), (pool.reserve_1, pool.reserve_0));
    }
}
