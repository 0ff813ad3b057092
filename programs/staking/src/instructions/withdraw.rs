use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::*, events::*, state::*};

/// Withdraw staked tokens back to the owner
///
/// The staking account is addressed through its stored owner, so a
/// foreign signer fails the owner check with Unauthorized rather than
/// a seeds mismatch.
#[derive(Accounts)]
#[instruction(amount: u64)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [STAKE_SEED, staking_account.owner.as_ref(), vault.key().as_ref()],
        bump = staking_account.bump,
        constraint = staking_account.owner == signer.key() @ StakingError::Unauthorized,
    )]
    pub staking_account: Account<'info, StakingAccount>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.token_mint.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        mut,
        address = vault.vault_token_account @ StakingError::InvalidVaultTokenAccount,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    /// Destination for the withdrawn tokens
    #[account(
        mut,
        constraint = user_token_account.mint == vault.token_mint @ StakingError::InvalidMint,
        constraint = user_token_account.owner == signer.key() @ StakingError::InvalidOwner,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    // CHECKS
    require!(amount > 0, StakingError::ZeroAmount);

    let signer = ctx.accounts.signer.key();
    let staking_account = &mut ctx.accounts.staking_account;
    staking_account.authorize(&signer)?;

    // EFFECTS
    let balance = staking_account.debit(amount)?;
    let vault = &mut ctx.accounts.vault;
    vault.record_withdrawal(amount)?;

    // INTERACTIONS: custody funds move under the vault PDA signature
    let vault_seeds = vault.signer_seeds();
    let signer_seeds = &[&vault_seeds[..]];

    let transfer_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.vault_token_account.to_account_info(),
            to: ctx.accounts.user_token_account.to_account_info(),
            authority: vault.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(transfer_ctx, amount)?;

    emit!(Withdrawn {
        vault: vault.key(),
        owner: signer,
        amount,
        balance,
        total_staked: vault.total_staked,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
