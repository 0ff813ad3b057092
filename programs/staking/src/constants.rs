// Constants for the Staking program

/// Seed for vault PDA, keyed by token mint
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed for staking account PDA, keyed by owner and vault
pub const STAKE_SEED: &[u8] = b"stake";

/// Space for Vault account (8 discriminator + 32 token_mint +
/// 32 vault_token_account + 8 total_staked + 1 bump)
pub const VAULT_SIZE: usize = 8 + 32 + 32 + 8 + 1;

/// Space for StakingAccount (8 discriminator + 32 owner + 32 vault +
/// 8 balance + 1 bump)
pub const STAKING_ACCOUNT_SIZE: usize = 8 + 32 + 32 + 8 + 1;
