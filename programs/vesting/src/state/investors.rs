use anchor_lang::prelude::*;

use crate::constants::{MAX_INVESTORS, MAX_REGISTRATION_BATCH};
use crate::error::{VestingError, VestingResult};
use crate::state::InvestorCategory;

/// A single investor entry stored in the registry PDA.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvestorRecord {
    pub identity: Pubkey,
    pub category: InvestorCategory,
    /// Set at registration; only the correction operation changes it.
    pub total_allocated: u64,
    /// Monotonically non-decreasing, never above `total_allocated`.
    pub withdrawn: u64,
}

impl InvestorRecord {
    pub const SIZE: usize =
        32 + // identity
        1 +  // category
        8 +  // total_allocated
        8;   // withdrawn

    pub fn new(identity: Pubkey, category: InvestorCategory, amount: u64) -> Self {
        Self {
            identity,
            category,
            total_allocated: amount,
            withdrawn: 0,
        }
    }

    /// Entitlement not yet withdrawn.
    pub fn outstanding(&self) -> u64 {
        self.total_allocated.saturating_sub(self.withdrawn)
    }
}

/// PDA holding every investor record, in registration order.
#[account]
pub struct InvestorRegistry {
    pub entries: Vec<InvestorRecord>,
}

impl InvestorRegistry {
    /// Discriminator + vec header + full capacity.
    pub const fn space() -> usize {
        8 + 4 + MAX_INVESTORS * InvestorRecord::SIZE
    }

    pub fn find(&self, identity: &Pubkey) -> Option<&InvestorRecord> {
        self.entries.iter().find(|e| e.identity == *identity)
    }

    pub fn find_mut(&mut self, identity: &Pubkey) -> Option<&mut InvestorRecord> {
        self.entries.iter_mut().find(|e| e.identity == *identity)
    }

    fn position(&self, identity: &Pubkey) -> Option<usize> {
        self.entries.iter().position(|e| e.identity == *identity)
    }

    /// Literal sum of `total_allocated - withdrawn` over all records.
    pub fn outstanding_total(&self) -> VestingResult<u64> {
        let mut sum: u64 = 0;
        for e in self.entries.iter() {
            sum = sum
                .checked_add(e.outstanding())
                .ok_or(VestingError::MathOverflow)?;
        }
        Ok(sum)
    }

    /// Append one record per `(identity, amount)` pair. The whole batch is
    /// validated before any record is written. Returns the batch total.
    pub fn insert_batch(
        &mut self,
        identities: &[Pubkey],
        amounts: &[u64],
        category: InvestorCategory,
    ) -> VestingResult<u64> {
        if identities.len() != amounts.len() {
            return Err(VestingError::ArityMismatch);
        }
        if identities.is_empty() {
            return Err(VestingError::EmptyBatch);
        }
        if identities.len() > MAX_REGISTRATION_BATCH {
            return Err(VestingError::BatchTooLarge);
        }
        if self.entries.len() + identities.len() > MAX_INVESTORS {
            return Err(VestingError::RegistryFull);
        }

        let mut batch_total: u64 = 0;
        for (i, (identity, amount)) in identities.iter().zip(amounts.iter()).enumerate() {
            if *identity == Pubkey::default() {
                return Err(VestingError::InvalidPubkey);
            }
            if *amount == 0 {
                return Err(VestingError::InvalidAllocation);
            }
            // Reject duplicates vs existing registry and within the batch itself.
            if self.find(identity).is_some() || identities[..i].contains(identity) {
                return Err(VestingError::DuplicateInvestor);
            }
            batch_total = batch_total
                .checked_add(*amount)
                .ok_or(VestingError::MathOverflow)?;
        }

        self.entries.extend(
            identities
                .iter()
                .zip(amounts.iter())
                .map(|(identity, amount)| InvestorRecord::new(*identity, category, *amount)),
        );
        Ok(batch_total)
    }

    /// Move the unclaimed entitlement of `from` onto `to`. `from` keeps its
    /// withdrawal history but is left with nothing outstanding. Returns the
    /// amount moved.
    pub fn merge(&mut self, from: &Pubkey, to: &Pubkey) -> VestingResult<u64> {
        if from == to {
            return Err(VestingError::SelfMerge);
        }
        let from_idx = self.position(from).ok_or(VestingError::UnknownInvestor)?;
        let to_idx = self.position(to).ok_or(VestingError::UnknownInvestor)?;

        let moved = self.entries[from_idx].outstanding();
        let to_total = self.entries[to_idx]
            .total_allocated
            .checked_add(moved)
            .ok_or(VestingError::MathOverflow)?;

        self.entries[to_idx].total_allocated = to_total;
        let source = &mut self.entries[from_idx];
        source.total_allocated = source.withdrawn;
        Ok(moved)
    }
}
