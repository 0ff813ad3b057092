use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::*, events::*, state::*};

/// Stake tokens into a vault
///
/// The staking account is opened on the first deposit for
/// (signer, vault) and reused afterwards.
#[derive(Accounts)]
#[instruction(amount: u64)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init_if_needed,
        payer = signer,
        space = STAKING_ACCOUNT_SIZE,
        seeds = [STAKE_SEED, signer.key().as_ref(), vault.key().as_ref()],
        bump
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

    /// Source of the staked tokens
    #[account(
        mut,
        constraint = user_token_account.mint == vault.token_mint @ StakingError::InvalidMint,
        constraint = user_token_account.owner == signer.key() @ StakingError::InvalidOwner,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    // CHECKS
    require!(amount > 0, StakingError::ZeroAmount);
    ensure_sufficient_funds(ctx.accounts.user_token_account.amount, amount)?;

    let signer = ctx.accounts.signer.key();
    let vault_key = ctx.accounts.vault.key();
    let staking_account = &mut ctx.accounts.staking_account;

    if staking_account.open_or_verify(signer, vault_key, ctx.bumps.staking_account)? {
        msg!("Opened staking account for {}", signer);
    }

    // EFFECTS
    let balance = staking_account.credit(amount)?;
    let vault = &mut ctx.accounts.vault;
    vault.record_deposit(amount)?;

    // INTERACTIONS
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.user_token_account.to_account_info(),
            to: ctx.accounts.vault_token_account.to_account_info(),
            authority: ctx.accounts.signer.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, amount)?;

    emit!(Deposited {
        vault: vault_key,
        owner: signer,
        amount,
        balance,
        total_staked: vault.total_staked,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
