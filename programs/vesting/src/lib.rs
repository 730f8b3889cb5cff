use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::{CategorySchedule, InvestorCategory};

declare_id!("7kVgQ2Ldz3xEXcTgWJcbqKe8gyoaZ7uV3fXmwKEWfUsP");

#[program]
pub mod investor_vesting {
    use super::*;

    pub fn initialize_ledger(
        ctx: Context<InitializeLedger>,
        schedules: Option<Vec<CategorySchedule>>,
    ) -> Result<()> {
        instructions::initialize_ledger_handler(ctx, schedules)
    }

    pub fn fund_vault(ctx: Context<FundVault>, amount: u64) -> Result<()> {
        instructions::fund_vault_handler(ctx, amount)
    }

    pub fn register_investors(
        ctx: Context<RegisterInvestors>,
        identities: Vec<Pubkey>,
        amounts: Vec<u64>,
        category: InvestorCategory,
    ) -> Result<()> {
        instructions::register_investors_handler(ctx, identities, amounts, category)
    }

    pub fn lock_schedule(ctx: Context<LockSchedule>, start_ts: i64) -> Result<()> {
        instructions::lock_schedule_handler(ctx, start_ts)
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw_handler(ctx)
    }

    pub fn upgrade_schedule(
        ctx: Context<UpgradeSchedule>,
        schedules: Vec<CategorySchedule>,
    ) -> Result<()> {
        instructions::upgrade_schedule_handler(ctx, schedules)
    }

    pub fn merge_investor(ctx: Context<MergeInvestor>, from: Pubkey, to: Pubkey) -> Result<()> {
        instructions::merge_investor_handler(ctx, from, to)
    }

    pub fn emergency_sweep(ctx: Context<EmergencySweep>) -> Result<()> {
        instructions::emergency_sweep_handler(ctx)
    }

    pub fn quote_claimable(ctx: Context<QuoteClaimable>, identity: Pubkey) -> Result<()> {
        instructions::quote_claimable_handler(ctx, identity)
    }
}
