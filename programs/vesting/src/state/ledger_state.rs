use anchor_lang::prelude::*;

use crate::error::{VestingError, VestingResult};
use crate::state::{
    CategorySchedule, InvestorCategory, InvestorRecord, InvestorRegistry, ScheduleTable,
};
use crate::utils::unlock;

/// Single ledger state PDA.
///
/// Everything except `schedule` is identity-stable: an upgrade swaps the
/// schedule table and leaves investor balances, the start timestamp and the
/// outstanding supply untouched.
#[account]
pub struct LedgerState {
    /// Holder of the privileged capability.
    pub admin: Pubkey,
    /// Token mint being vested.
    pub mint: Pubkey,
    /// Token account owned by this PDA that custodies the pool.
    pub vault: Pubkey,
    /// Vesting start (Unix seconds). Set once by `lock_schedule`.
    pub initialization_timestamp: Option<i64>,
    /// Registration is closed from the moment the start timestamp is set.
    pub registration_locked: bool,
    /// Sum of `total_allocated - withdrawn` over all investor records.
    pub outstanding_supply: u64,
    /// Active, versioned category schedules.
    pub schedule: ScheduleTable,
    /// The one-shot investor correction has been used.
    pub correction_applied: bool,
    /// Running total moved into the vault through `fund_vault`.
    pub funded_total: u64,
}

impl LedgerState {
    pub const SIZE: usize =
        32 + // admin
        32 + // mint
        32 + // vault
        9 +  // initialization_timestamp
        1 +  // registration_locked
        8 +  // outstanding_supply
        ScheduleTable::SIZE +
        1 +  // correction_applied
        8;   // funded_total

    pub fn new(
        admin: Pubkey,
        mint: Pubkey,
        vault: Pubkey,
        schedule: ScheduleTable,
    ) -> VestingResult<Self> {
        if mint == Pubkey::default() {
            return Err(VestingError::ZeroTokenReference);
        }
        Ok(Self {
            admin,
            mint,
            vault,
            initialization_timestamp: None,
            registration_locked: false,
            outstanding_supply: 0,
            schedule,
            correction_applied: false,
            funded_total: 0,
        })
    }

    pub fn require_privileged(&self, caller: &Pubkey) -> VestingResult<()> {
        if *caller != self.admin {
            return Err(VestingError::Unauthorized);
        }
        Ok(())
    }

    /// Funded total after `caller` deposits `amount`. Nothing is written;
    /// the handler stores the result once the transfer has gone through.
    pub fn next_funded_total(&self, caller: &Pubkey, amount: u64) -> VestingResult<u64> {
        self.require_privileged(caller)?;
        if amount == 0 {
            return Err(VestingError::InvalidAllocation);
        }
        self.funded_total
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)
    }

    /// Deposits still needed before the vault covers every outstanding
    /// entitlement, ignoring what has already been paid out.
    pub fn funding_shortfall(&self, vault_balance: u64) -> u64 {
        self.outstanding_supply.saturating_sub(vault_balance)
    }

    pub fn start_ts(&self) -> VestingResult<i64> {
        self.initialization_timestamp
            .ok_or(VestingError::Uninitialized)
    }

    pub fn register_investors(
        &mut self,
        registry: &mut InvestorRegistry,
        identities: &[Pubkey],
        amounts: &[u64],
        category: InvestorCategory,
    ) -> VestingResult<u64> {
        if self.registration_locked {
            return Err(VestingError::SchedulePolicyViolation);
        }
        let outstanding_before = self.outstanding_supply;
        let added = registry.insert_batch(identities, amounts, category)?;
        self.outstanding_supply = outstanding_before
            .checked_add(added)
            .ok_or(VestingError::MathOverflow)?;
        Ok(added)
    }

    /// Fix the vesting start and close registration in one step.
    pub fn lock_schedule(&mut self, start_ts: i64, now: i64) -> VestingResult<()> {
        if self.initialization_timestamp.is_some() {
            return Err(VestingError::AlreadyInitialized);
        }
        if start_ts <= now {
            return Err(VestingError::TimestampNotInFuture);
        }
        self.initialization_timestamp = Some(start_ts);
        self.registration_locked = true;
        Ok(())
    }

    fn schedule_for(&self, record: &InvestorRecord) -> &CategorySchedule {
        self.schedule.get(record.category)
    }

    /// `(unlocked_total, claimable)` for `record` at `now`; zeros while the
    /// schedule is not locked.
    pub fn unlock_status(
        &self,
        record: &InvestorRecord,
        now: i64,
    ) -> VestingResult<(u64, u64)> {
        let Some(start_ts) = self.initialization_timestamp else {
            return Ok((0, 0));
        };
        let schedule = self.schedule_for(record);
        let unlocked = unlock::unlocked_total(now, start_ts, schedule, record.total_allocated)?;
        let claimable = unlock::claimable(now, start_ts, schedule, record)?;
        Ok((unlocked, claimable))
    }

    /// Amount `identity` may withdraw at `now`. Read-only; the caller commits
    /// with `commit_withdrawal` once the transfer went through.
    pub fn withdrawable(
        &self,
        registry: &InvestorRegistry,
        identity: &Pubkey,
        now: i64,
    ) -> VestingResult<u64> {
        let start_ts = self.start_ts()?;
        if now < start_ts {
            return Err(VestingError::VestingNotStarted);
        }
        let record = registry
            .find(identity)
            .ok_or(VestingError::NotAnInvestor)?;
        let amount = unlock::claimable(now, start_ts, self.schedule_for(record), record)?;
        if amount == 0 {
            return Err(VestingError::NothingToClaim);
        }
        Ok(amount)
    }

    pub fn commit_withdrawal(
        &mut self,
        registry: &mut InvestorRegistry,
        identity: &Pubkey,
        amount: u64,
    ) -> VestingResult<()> {
        let record = registry
            .find_mut(identity)
            .ok_or(VestingError::NotAnInvestor)?;
        let withdrawn = record
            .withdrawn
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        if withdrawn > record.total_allocated {
            return Err(VestingError::MathOverflow);
        }
        let outstanding = self
            .outstanding_supply
            .checked_sub(amount)
            .ok_or(VestingError::MathOverflow)?;

        record.withdrawn = withdrawn;
        self.outstanding_supply = outstanding;
        Ok(())
    }

    /// One-shot correction of a misregistered investor. Outstanding supply is
    /// unchanged: the entitlement only moves between records.
    pub fn merge_investors(
        &mut self,
        registry: &mut InvestorRegistry,
        from: &Pubkey,
        to: &Pubkey,
    ) -> VestingResult<u64> {
        if self.correction_applied {
            return Err(VestingError::CorrectionAlreadyApplied);
        }
        let moved = registry.merge(from, to)?;
        self.correction_applied = true;
        Ok(moved)
    }

    /// Surplus the vault holds above what investors are still owed, available
    /// once every category has fully vested.
    pub fn sweepable(&self, held_balance: u64, now: i64) -> VestingResult<u64> {
        let start_ts = self.start_ts()?;
        // Saturates so a far-future start keeps reporting `VestingNotOver`.
        let vesting_end = start_ts.saturating_add(self.schedule.global_vesting_offset()?);
        if now < vesting_end {
            return Err(VestingError::VestingNotOver);
        }
        let surplus = held_balance.saturating_sub(self.outstanding_supply);
        if surplus == 0 {
            return Err(VestingError::ZeroSweepAmount);
        }
        Ok(surplus)
    }

    pub fn upgrade_schedule(
        &mut self,
        schedules: &[CategorySchedule],
    ) -> VestingResult<&ScheduleTable> {
        self.schedule = self.schedule.upgraded(schedules)?;
        Ok(&self.schedule)
    }
}
