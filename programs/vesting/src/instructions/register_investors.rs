use anchor_lang::prelude::*;

use crate::constants::{INVESTORS_SEED, LEDGER_STATE_SEED};
use crate::state::{InvestorCategory, InvestorRegistry, LedgerState};

pub fn register_investors_handler(
    ctx: Context<RegisterInvestors>,
    identities: Vec<Pubkey>,
    amounts: Vec<u64>,
    category: InvestorCategory,
) -> Result<()> {
    let st = &mut ctx.accounts.ledger_state;
    st.require_privileged(&ctx.accounts.admin.key())?;

    let investors = &mut ctx.accounts.investors;
    st.register_investors(investors, &identities, &amounts, category)?;

    for (identity, amount) in identities.iter().zip(amounts.iter()) {
        emit!(InvestorRegistered {
            identity: *identity,
            amount: *amount,
            category,
        });
    }

    Ok(())
}

#[derive(Accounts)]
pub struct RegisterInvestors<'info> {
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
pub struct InvestorRegistered {
    pub identity: Pubkey,
    pub amount: u64,
    pub category: InvestorCategory,
}
