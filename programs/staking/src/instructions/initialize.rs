use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, events::*, state::*};

/// Create the vault and its custody token account for a mint
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Pays for the vault and custody accounts
    #[account(mut)]
    pub signer: Signer<'info>,

    /// Vault PDA
    /// Allocated if needed so a second call reaches the AlreadyInitialized check
    #[account(
        init_if_needed,
        payer = signer,
        space = VAULT_SIZE,
        seeds = [VAULT_SEED, token_mint.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, Vault>,

    pub token_mint: Account<'info, Mint>,

    /// Custody token account, authority is the vault PDA
    #[account(
        init_if_needed,
        payer = signer,
        associated_token::mint = token_mint,
        associated_token::authority = vault,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let vault = &mut ctx.accounts.vault;

    vault.init(
        ctx.accounts.token_mint.key(),
        ctx.accounts.vault_token_account.key(),
        ctx.bumps.vault,
    )?;

    msg!("Vault initialized for mint {}", vault.token_mint);

    emit!(VaultInitialized {
        vault: vault.key(),
        token_mint: vault.token_mint,
        vault_token_account: vault.vault_token_account,
        payer: ctx.accounts.signer.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
