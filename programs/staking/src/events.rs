use anchor_lang::prelude::*;

/// Event emitted when a vault is created for a mint
#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub token_mint: Pubkey,
    pub vault_token_account: Pubkey,
    pub payer: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when tokens are staked
#[event]
pub struct Deposited {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub balance: u64,
    pub total_staked: u64,
    pub timestamp: i64,
}

/// Event emitted when staked tokens are withdrawn
#[event]
pub struct Withdrawn {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub balance: u64,
    pub total_staked: u64,
    pub timestamp: i64,
}
