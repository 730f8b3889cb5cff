use anchor_lang::prelude::*;

use crate::constants::LEDGER_STATE_SEED;
use crate::state::{CategorySchedule, LedgerState};

/// Install the next schedule version. Investor records, the start timestamp
/// and the outstanding supply are left as they are.
pub fn upgrade_schedule_handler(ctx: Context<UpgradeSchedule>, schedules: Vec<CategorySchedule>) -> Result<()> {
    let st = &mut ctx.accounts.ledger_state;
    st.require_privileged(&ctx.accounts.admin.key())?;

    let table = *st.upgrade_schedule(&schedules)?;

    msg!("schedule upgraded to v{}", table.version);
    emit!(ScheduleUpgraded {
        version: table.version,
        digest: table.digest(),
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UpgradeSchedule<'info> {
    #[account(mut, seeds = [LEDGER_STATE_SEED], bump)]
    pub ledger_state: Account<'info, LedgerState>,

    pub admin: Signer<'info>,
}

#[event]
pub struct ScheduleUpgraded {
    pub version: u32,
    pub digest: [u8; 32],
}
