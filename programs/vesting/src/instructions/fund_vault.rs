use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{LEDGER_STATE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::LedgerState;

/// Move tokens from the admin into the vault. Outstanding supply is not
/// affected; anything above it stays sweepable surplus.
pub fn fund_vault_handler(ctx: Context<FundVault>, amount: u64) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let mint = ctx.accounts.ledger_state.mint;
    let funded_total = ctx.accounts.ledger_state.next_funded_total(&admin, amount)?;

    require_keys_eq!(ctx.accounts.admin_token_account.mint, mint, VestingError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.admin_token_account.owner,
        ctx.accounts.admin.key(),
        VestingError::InvalidTokenAccount
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.admin_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        amount,
    )
    .map_err(|_| VestingError::TransferFailed)?;

    ctx.accounts.vault.reload()?;
    ctx.accounts.ledger_state.funded_total = funded_total;

    let vault_balance = ctx.accounts.vault.amount;
    let shortfall = ctx.accounts.ledger_state.funding_shortfall(vault_balance);
    msg!("vault funded: +{} (balance {}, shortfall {})", amount, vault_balance, shortfall);
    emit!(VaultFunded {
        admin,
        amount,
        funded_total,
        vault_balance,
        shortfall,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct FundVault<'info> {
    #[account(mut, seeds = [LEDGER_STATE_SEED], bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        mut,
        seeds = [VAULT_SEED, ledger_state.key().as_ref()],
        bump,
        constraint = vault.mint == ledger_state.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VaultFunded {
    pub admin: Pubkey,
    pub amount: u64,
    pub funded_total: u64,
    pub vault_balance: u64,
    /// Outstanding entitlements the vault still cannot cover.
    pub shortfall: u64,
}
