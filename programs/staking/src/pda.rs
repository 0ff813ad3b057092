use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;

use crate::constants::{STAKE_SEED, VAULT_SEED};

/// Seed arrays shared by account constraints and off-chain derivation
pub mod seeds {
    use super::*;

    pub fn vault_seeds(token_mint: &Pubkey) -> [&[u8]; 2] {
        [VAULT_SEED, token_mint.as_ref()]
    }

    pub fn staking_account_seeds<'a>(owner: &'a Pubkey, vault: &'a Pubkey) -> [&'a [u8]; 3] {
        [STAKE_SEED, owner.as_ref(), vault.as_ref()]
    }
}

/// Vault PDA for a mint
pub fn find_vault_address(token_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&seeds::vault_seeds(token_mint), &crate::ID)
}

/// Staking account PDA for an (owner, vault) pair
pub fn find_staking_account_address(owner: &Pubkey, vault: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&seeds::staking_account_seeds(owner, vault), &crate::ID)
}

/// Custody token account: the vault's associated token account for its mint
pub fn find_vault_token_address(vault: &Pubkey, token_mint: &Pubkey) -> Pubkey {
    get_associated_token_address(vault, token_mint)
}
