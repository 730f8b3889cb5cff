use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{LEDGER_STATE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::LedgerState;

/// Return vault surplus (balance above outstanding supply) to the admin once
/// every category has fully vested. Investor entitlements are never touched.
pub fn emergency_sweep_handler(ctx: Context<EmergencySweep>) -> Result<()> {
    let st = &ctx.accounts.ledger_state;
    st.require_privileged(&ctx.accounts.admin.key())?;

    let now = Clock::get()?.unix_timestamp;
    let amount = st.sweepable(ctx.accounts.vault.amount, now)?;

    require_keys_eq!(
        ctx.accounts.admin_destination.owner,
        ctx.accounts.admin.key(),
        VestingError::InvalidTokenAccount
    );

    let signer_seeds: &[&[&[u8]]] = &[&[LEDGER_STATE_SEED, &[ctx.bumps.ledger_state]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.admin_destination.to_account_info(),
                authority: ctx.accounts.ledger_state.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )
    .map_err(|_| VestingError::TransferFailed)?;

    msg!("swept {} surplus tokens", amount);
    emit!(EmergencySwept {
        recipient: ctx.accounts.admin.key(),
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct EmergencySweep<'info> {
    #[account(seeds = [LEDGER_STATE_SEED], bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        mut,
        seeds = [VAULT_SEED, ledger_state.key().as_ref()],
        bump,
        constraint = vault.mint == ledger_state.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = admin_destination.mint == ledger_state.mint @ VestingError::InvalidTokenMint,
    )]
    pub admin_destination: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct EmergencySwept {
    pub recipient: Pubkey,
    pub amount: u64,
}
