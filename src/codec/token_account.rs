//! Token-account decode used for position-ownership proofs.
//!
//! Position mints live under the token-2022 program; the base account
//! layout is shared with legacy SPL token, and extensions (if any) ride
//! behind it, so decoding goes through `StateWithExtensions`.

use solana_sdk::pubkey::Pubkey;
use spl_token_2022::extension::StateWithExtensions;
use spl_token_2022::state::Account;

use crate::core::{SdkError, SdkResult};

/// The fields of a token account this crate cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAccountInfo {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
}

pub fn decode_token_account(data: &[u8]) -> SdkResult<TokenAccountInfo> {
    let state = StateWithExtensions::<Account>::unpack(data)
        .map_err(|e| SdkError::DecodeError(format!("token account: {}", e)))?;

    Ok(TokenAccountInfo {
        mint: state.base.mint,
        owner: state.base.owner,
        amount: state.base.amount,
    })
}

/// A single whole unit of a position mint is the ownership proof that the
/// holder controls the corresponding position.
pub fn holds_position_nft(info: &TokenAccountInfo) -> bool {
    info.amount == 1
}

#[cfg(test)]
pub(crate) fn encode_token_account(mint: &Pubkey, owner: &Pubkey, amount: u64) -> Vec<u8> {
    use solana_sdk::program_option::COption;
    use solana_sdk::program_pack::Pack;
    use spl_token_2022::state::AccountState;

    let account = Account {
        mint: *mint,
        owner: *owner,
        amount,
        delegate: COption::None,
        state: AccountState::Initialized,
        is_native: COption::None,
        delegated_amount: 0,
        close_authority: COption::None,
    };
    let mut data = vec![0u8; Account::LEN];
    account.pack_into_slice(&mut data);
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_base_account() {
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let data = encode_token_account(&mint, &owner, 1);

        let info = decode_token_account(&data).unwrap();
        assert_eq!(info.mint, mint);
        assert_eq!(info.owner, owner);
        assert_eq!(info.amount, 1);
        assert!(holds_position_nft(&info));
    }

    #[test]
    fn test_non_unit_balance_is_not_ownership_proof() {
        let data = encode_token_account(&Pubkey::new_unique(), &Pubkey::new_unique(), 2);
        let info = decode_token_account(&data).unwrap();
        assert!(!holds_position_nft(&info));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_token_account(&[0u8; 10]).is_err());
    }
}
