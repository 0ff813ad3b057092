use anchor_lang::prelude::*;

use crate::{constants::VAULT_SEED, errors::StakingError};

/// Per-mint custody record
///
/// The vault PDA is the authority of the custody token account, so only
/// this program can move staked tokens out of it.
#[account]
#[derive(Default)]
pub struct Vault {
    /// Mint of the token accepted by this vault
    pub token_mint: Pubkey,         // 32 bytes

    /// Token account holding every depositor's stake for this mint
    pub vault_token_account: Pubkey, // 32 bytes

    /// Sum of all staking account balances under this vault
    pub total_staked: u64,          // 8 bytes

    /// Bump seed for vault PDA
    pub bump: u8,                   // 1 byte
}

/// Per-depositor ledger entry under a vault
#[account]
#[derive(Default)]
pub struct StakingAccount {
    /// Depositor, fixed on first deposit
    pub owner: Pubkey,              // 32 bytes

    /// Vault this stake belongs to
    pub vault: Pubkey,              // 32 bytes

    /// Amount currently staked, in base units of the vault mint
    pub balance: u64,               // 8 bytes

    /// Bump seed for staking account PDA
    pub bump: u8,                   // 1 byte
}

impl Vault {
    pub fn is_initialized(&self) -> bool {
        self.token_mint != Pubkey::default()
    }

    /// Populate a freshly allocated vault. Fails if the record already
    /// carries a mint.
    pub fn init(
        &mut self,
        token_mint: Pubkey,
        vault_token_account: Pubkey,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), StakingError::AlreadyInitialized);

        self.token_mint = token_mint;
        self.vault_token_account = vault_token_account;
        self.total_staked = 0;
        self.bump = bump;
        Ok(())
    }

    pub fn record_deposit(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(error!(StakingError::ArithmeticOverflow))?;
        Ok(())
    }

    pub fn record_withdrawal(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(error!(StakingError::ArithmeticOverflow))?;
        Ok(())
    }

    /// Signer seeds for CPIs where the vault moves custody funds
    pub fn signer_seeds(&self) -> [&[u8]; 3] {
        [
            VAULT_SEED,
            self.token_mint.as_ref(),
            std::slice::from_ref(&self.bump),
        ]
    }
}

impl StakingAccount {
    pub fn is_open(&self) -> bool {
        self.owner != Pubkey::default()
    }

    /// Open the entry for `signer` on first use, otherwise check that
    /// `signer` is the recorded owner.
    ///
    /// Returns `true` when the entry was opened by this call.
    pub fn open_or_verify(&mut self, signer: Pubkey, vault: Pubkey, bump: u8) -> Result<bool> {
        if self.is_open() {
            self.authorize(&signer)?;
            return Ok(false);
        }

        self.owner = signer;
        self.vault = vault;
        self.balance = 0;
        self.bump = bump;
        Ok(true)
    }

    pub fn authorize(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *signer, StakingError::Unauthorized);
        Ok(())
    }

    /// Add `amount` to the staked balance, returning the new balance
    pub fn credit(&mut self, amount: u64) -> Result<u64> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(error!(StakingError::ArithmeticOverflow))?;
        Ok(self.balance)
    }

    /// Remove `amount` from the staked balance, returning the new balance.
    /// Never wraps: over-withdrawal is rejected before any change.
    pub fn debit(&mut self, amount: u64) -> Result<u64> {
        require!(amount <= self.balance, StakingError::InsufficientBalance);

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(error!(StakingError::ArithmeticOverflow))?;
        Ok(self.balance)
    }
}

/// Depositor must hold at least `amount` in the source token account
pub fn ensure_sufficient_funds(available: u64, amount: u64) -> Result<()> {
    require!(available >= amount, StakingError::InsufficientFunds);
    Ok(())
}
