use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{GENESIS_SCHEDULE_VERSION, INVESTORS_SEED, LEDGER_STATE_SEED, VAULT_SEED};
use crate::state::{CategorySchedule, InvestorRegistry, LedgerState, ScheduleTable};

/// Create the ledger, the investor registry and the vault. `schedules`
/// overrides the genesis category table when given.
pub fn initialize_ledger_handler(
    ctx: Context<InitializeLedger>,
    schedules: Option<Vec<CategorySchedule>>,
) -> Result<()> {
    let table = match schedules {
        Some(schedules) => ScheduleTable::from_schedules(GENESIS_SCHEDULE_VERSION, &schedules)?,
        None => ScheduleTable::genesis()?,
    };

    let state = LedgerState::new(
        ctx.accounts.admin.key(),
        ctx.accounts.mint.key(),
        ctx.accounts.vault.key(),
        table,
    )?;
    ctx.accounts.ledger_state.set_inner(state);
    ctx.accounts.investors.entries = Vec::new();

    let st = &ctx.accounts.ledger_state;
    msg!("ledger initialized, schedule v{}", st.schedule.version);
    emit!(LedgerInitialized {
        admin: st.admin,
        mint: st.mint,
        vault: st.vault,
        schedule_version: st.schedule.version,
        schedule_digest: st.schedule.digest(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + LedgerState::SIZE,
        seeds = [LEDGER_STATE_SEED],
        bump
    )]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        init,
        payer = admin,
        space = InvestorRegistry::space(),
        seeds = [INVESTORS_SEED, ledger_state.key().as_ref()],
        bump
    )]
    pub investors: Box<Account<'info, InvestorRegistry>>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = ledger_state,
        seeds = [VAULT_SEED, ledger_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct LedgerInitialized {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub schedule_version: u32,
    pub schedule_digest: [u8; 32],
}
