//! External program identifiers and wire-contract constants.
//!
//! Discriminator values and PDA seed tags are contracts with the deployed
//! programs; a single wrong byte makes derived accounts unreachable or the
//! instruction dispatch fail, so they are pinned here in one place.

use solana_sdk::pubkey;
use solana_sdk::pubkey::Pubkey;

/// CLMM exchange program (mainnet).
pub const CLMM_PROGRAM_ID: Pubkey = pubkey!("CAMMCzo5YL8w4VFF8KVHrK22GGUsp5VTaW7grrKgrWqK");

/// CLMM exchange program (devnet).
pub const CLMM_PROGRAM_ID_DEVNET: Pubkey = pubkey!("DRayAUgENGQBKVaX8owNhgzkEDyoHTGVEGHVJT1E9pfH");

/// Vault management program owning strategies and their receipts.
pub const VAULT_PROGRAM_ID: Pubkey = pubkey!("VauLtProgram1111111111111111111111111111111");

/// Strategy adaptor program the vault program dispatches into.
pub const CLMM_ADAPTOR_PROGRAM_ID: Pubkey = pubkey!("CLMMAdaptor11111111111111111111111111111111");

/// Adaptor opcode: open a new position for a strategy.
pub const OPEN_CLMM_POSITION: [u8; 8] = [0x0e, 0x7d, 0x9c, 0xf5, 0x9c, 0x30, 0xe3, 0x6f];

/// Adaptor opcode: add liquidity to an existing position.
pub const INCREASE_CLMM_LIQUIDITY: [u8; 8] = [0x3b, 0xf7, 0xc9, 0x33, 0xc9, 0x7e, 0x68, 0xfb];

// Vault program instruction discriminators (Anchor sighash convention).
pub const INITIALIZE_STRATEGY_DISCRIMINATOR: [u8; 8] = [0xd0, 0x77, 0x90, 0x91, 0xb2, 0x39, 0x69, 0xfc];
pub const DEPOSIT_STRATEGY_DISCRIMINATOR: [u8; 8] = [0xf6, 0x52, 0x39, 0xe2, 0x83, 0xde, 0xfd, 0xf9];

// PDA seed tags.
pub const VAULT_STRATEGY_SEED: &[u8] = b"vault_strategy";
pub const STRATEGY_INIT_RECEIPT_SEED: &[u8] = b"strategy_init_receipt";
pub const TICK_ARRAY_SEED: &[u8] = b"tick_array";
pub const POSITION_SEED: &[u8] = b"position";

/// Ticks covered by one tick-array account.
pub const TICK_ARRAY_SIZE: i32 = 60;

/// Valid tick bounds of the exchange's fixed-point price range.
pub const MIN_TICK: i32 = -443_636;
pub const MAX_TICK: i32 = 443_636;

/// Base of the exchange's tick exponent: price = TICK_BASE^tick.
pub const TICK_BASE: f64 = 1.0001;
