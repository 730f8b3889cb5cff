use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{INVESTORS_SEED, LEDGER_STATE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{InvestorRegistry, LedgerState};

/// Transfer everything the signing investor can claim right now.
pub fn withdraw_handler(ctx: Context<Withdraw>) -> Result<()> {
    // Avoid borrow checker conflicts: capture AccountInfos/keys before taking mutable borrows.
    let ledger_state_ai = ctx.accounts.ledger_state.to_account_info();
    let ledger_state_bump = ctx.bumps.ledger_state;
    let identity = ctx.accounts.investor.key();

    let now = Clock::get()?.unix_timestamp;
    let amount = ctx
        .accounts
        .ledger_state
        .withdrawable(&ctx.accounts.investors, &identity, now)?;

    // Ledger state is committed only after the transfer succeeded.
    let signer_seeds: &[&[&[u8]]] = &[&[LEDGER_STATE_SEED, &[ledger_state_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.investor_token_account.to_account_info(),
                authority: ledger_state_ai,
            },
            signer_seeds,
        ),
        amount,
    )
    .map_err(|_| VestingError::TransferFailed)?;

    let st = &mut ctx.accounts.ledger_state;
    st.commit_withdrawal(&mut ctx.accounts.investors, &identity, amount)?;

    emit!(TokensWithdrawn { identity, amount });
    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut, seeds = [LEDGER_STATE_SEED], bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        mut,
        seeds = [INVESTORS_SEED, ledger_state.key().as_ref()],
        bump
    )]
    pub investors: Box<Account<'info, InvestorRegistry>>,

    #[account(
        mut,
        seeds = [VAULT_SEED, ledger_state.key().as_ref()],
        bump,
        constraint = vault.mint == ledger_state.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = investor_token_account.mint == ledger_state.mint @ VestingError::InvalidTokenMint,
        constraint = investor_token_account.owner == investor.key() @ VestingError::InvalidTokenAccount,
    )]
    pub investor_token_account: Account<'info, TokenAccount>,

    pub investor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensWithdrawn {
    pub identity: Pubkey,
    pub amount: u64,
}
