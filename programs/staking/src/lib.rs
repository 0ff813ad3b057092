// Staking - per-mint token custody vaults with per-depositor balances

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod staking {
    use super::*;

    /// Create the vault PDA for a mint and its custody token account
    ///
    /// - Vault address is derived from ("vault", mint)
    /// - Custody account authority is the vault PDA
    /// - Fails with AlreadyInitialized on a second call for the same mint
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Stake `amount` tokens into the vault
    ///
    /// - Opens the staking account on first deposit
    /// - Checks the depositor holds at least `amount`
    /// - Uses checked math on the staked balance and vault total
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Withdraw `amount` staked tokens back to the owner
    ///
    /// - Only the staking account owner may withdraw
    /// - Rejects amounts above the staked balance
    /// - Custody transfer is signed by the vault PDA
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }
}
