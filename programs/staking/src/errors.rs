use anchor_lang::prelude::*;

/// Custom error codes for the Staking program
///
/// Clients match on the `InsufficientBalance` message text, keep
/// "Insufficient balance" in it.
#[error_code]
pub enum StakingError {
    #[msg("Vault already initialized for this mint")]
    AlreadyInitialized,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Insufficient funds in user token account")]
    InsufficientFunds,

    #[msg("Insufficient balance for withdrawal")]
    InsufficientBalance,

    #[msg("Arithmetic overflow occurred")]
    ArithmeticOverflow,

    #[msg("Unauthorized access")]
    Unauthorized,

    #[msg("Invalid token mint - does not match vault mint")]
    InvalidMint,

    #[msg("Invalid token account owner")]
    InvalidOwner,

    #[msg("Invalid vault token account")]
    InvalidVaultTokenAccount,
}
