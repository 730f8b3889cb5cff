use anchor_lang::prelude::*;

use crate::constants::LEDGER_STATE_SEED;
use crate::state::LedgerState;

/// Fix the vesting start. The same call permanently closes registration,
/// whether or not `start_ts` has elapsed yet.
pub fn lock_schedule_handler(ctx: Context<LockSchedule>, start_ts: i64) -> Result<()> {
    let st = &mut ctx.accounts.ledger_state;
    st.require_privileged(&ctx.accounts.admin.key())?;

    let now = Clock::get()?.unix_timestamp;
    st.lock_schedule(start_ts, now)?;

    msg!("schedule locked at {}", start_ts);
    emit!(ScheduleLocked { start_ts });
    Ok(())
}

#[derive(Accounts)]
pub struct LockSchedule<'info> {
    #[account(mut, seeds = [LEDGER_STATE_SEED], bump)]
    pub ledger_state: Account<'info, LedgerState>,

    pub admin: Signer<'info>,
}

#[event]
pub struct ScheduleLocked {
    pub start_ts: i64,
}
