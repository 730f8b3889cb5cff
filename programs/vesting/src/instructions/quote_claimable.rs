use anchor_lang::prelude::*;

use crate::constants::{INVESTORS_SEED, LEDGER_STATE_SEED};
use crate::error::VestingError;
use crate::state::{InvestorCategory, InvestorRegistry, LedgerState};
use crate::utils::unlock::full_vesting_ts;

/// Publish the current unlock position of `identity` without changing state.
pub fn quote_claimable_handler(ctx: Context<QuoteClaimable>, identity: Pubkey) -> Result<()> {
    let st = &ctx.accounts.ledger_state;
    let record = ctx
        .accounts
        .investors
        .find(&identity)
        .ok_or(VestingError::NotAnInvestor)?;

    let now = Clock::get()?.unix_timestamp;
    let (unlocked_total, claimable) = st.unlock_status(record, now)?;
    let fully_vested_at = st
        .initialization_timestamp
        .map(|start| full_vesting_ts(start, st.schedule.get(record.category)))
        .transpose()?;

    emit!(ClaimableQuote {
        identity,
        category: record.category,
        schedule_version: st.schedule.version,
        total_allocated: record.total_allocated,
        withdrawn: record.withdrawn,
        unlocked_total,
        claimable,
        fully_vested_at,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct QuoteClaimable<'info> {
    #[account(seeds = [LEDGER_STATE_SEED], bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        seeds = [INVESTORS_SEED, ledger_state.key().as_ref()],
        bump
    )]
    pub investors: Box<Account<'info, InvestorRegistry>>,
}

#[event]
pub struct ClaimableQuote {
    pub identity: Pubkey,
    pub category: InvestorCategory,
    pub schedule_version: u32,
    pub total_allocated: u64,
    pub withdrawn: u64,
    pub unlocked_total: u64,
    pub claimable: u64,
    /// `None` until the schedule is locked.
    pub fully_vested_at: Option<i64>,
}
