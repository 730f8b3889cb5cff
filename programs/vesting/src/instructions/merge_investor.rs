use anchor_lang::prelude::*;

use crate::constants::{INVESTORS_SEED, LEDGER_STATE_SEED};
use crate::state::{InvestorRegistry, LedgerState};

/// One-time correction for a misregistered investor: moves the unclaimed
/// entitlement of `from` onto `to`.
pub fn merge_investor_handler(ctx: Context<MergeInvestor>, from: Pubkey, to: Pubkey) -> Result<()> {
    let st = &mut ctx.accounts.ledger_state;
    st.require_privileged(&ctx.accounts.admin.key())?;

    let amount = st.merge_investors(&mut ctx.accounts.investors, &from, &to)?;

    msg!("investor correction applied");
    emit!(InvestorMerged { from, to, amount });
    Ok(())
}

#[derive(Accounts)]
pub struct MergeInvestor<'info> {
    #[account(mut, seeds = [LEDGER_STATE_SEED], bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        mut,
        seeds = [INVESTORS_SEED, ledger_state.key().as_ref()],
        bump
    )]
    pub investors: Box<Account<'info, InvestorRegistry>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct InvestorMerged {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}
