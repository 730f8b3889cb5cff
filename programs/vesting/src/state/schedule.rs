use anchor_lang::prelude::*;

use crate::constants::{
    CATEGORY_COUNT, DEFAULT_CLIFF_SECONDS, DEFAULT_VESTING_SECONDS, GENESIS_SCHEDULE_VERSION,
    PRECISION, PRIVATE_INITIAL_RELEASE, SEED_INITIAL_RELEASE,
};
use crate::error::{VestingError, VestingResult};

/// Investor category. The discriminant is the row of the category in every
/// `ScheduleTable`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvestorCategory {
    Seed,
    Private,
}

impl InvestorCategory {
    pub const ALL: [InvestorCategory; CATEGORY_COUNT] =
        [InvestorCategory::Seed, InvestorCategory::Private];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Cliff-plus-linear curve parameters for one category.
///
/// Fractions and rates are fixed-point with `PRECISION` == 100%.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategorySchedule {
    /// Fraction of the allocation released when the cliff ends.
    pub initial_release: u64,
    /// Seconds from vesting start until the cliff ends.
    pub cliff_duration: i64,
    /// Seconds from the cliff end until the allocation is fully unlocked.
    pub vesting_duration: i64,
    /// Fraction of the post-initial remainder released per second.
    pub release_rate: u64,
}

impl CategorySchedule {
    pub const SIZE: usize =
        8 + // initial_release
        8 + // cliff_duration
        8 + // vesting_duration
        8;  // release_rate

    /// Build a schedule whose release rate covers the remainder in exactly
    /// `vesting_duration` seconds (rate truncated to the fixed-point scale).
    pub fn new(
        initial_release: u64,
        cliff_duration: i64,
        vesting_duration: i64,
    ) -> VestingResult<Self> {
        if vesting_duration <= 0 {
            return Err(VestingError::InvalidSchedule);
        }
        let release_rate = u64::try_from(PRECISION / vesting_duration as u128)
            .map_err(|_| VestingError::InvalidSchedule)?;
        let schedule = Self {
            initial_release,
            cliff_duration,
            vesting_duration,
            release_rate,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    pub fn validate(&self) -> VestingResult<()> {
        if self.initial_release as u128 > PRECISION
            || self.cliff_duration < 0
            || self.vesting_duration <= 0
            || self.cliff_duration.checked_add(self.vesting_duration).is_none()
        {
            return Err(VestingError::InvalidSchedule);
        }
        // rate * duration == 100% under truncating division.
        if self.release_rate as u128 != PRECISION / self.vesting_duration as u128 {
            return Err(VestingError::InvalidSchedule);
        }
        Ok(())
    }

    /// Seconds from vesting start until this category is fully unlocked.
    pub fn full_vesting_offset(&self) -> VestingResult<i64> {
        self.cliff_duration
            .checked_add(self.vesting_duration)
            .ok_or(VestingError::MathOverflow)
    }

    /// A replacement may only make the remainder vest faster; the cliff and
    /// initial release stay fixed so no unlocked amount can shrink.
    fn accelerates(&self, current: &CategorySchedule) -> bool {
        self.initial_release == current.initial_release
            && self.cliff_duration == current.cliff_duration
            && self.release_rate >= current.release_rate
            && self.vesting_duration <= current.vesting_duration
    }
}

/// Versioned set of category schedules. This is the only part of the ledger
/// an upgrade replaces.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleTable {
    pub version: u32,
    pub schedules: [CategorySchedule; CATEGORY_COUNT],
}

impl ScheduleTable {
    pub const SIZE: usize = 4 + CATEGORY_COUNT * CategorySchedule::SIZE;

    /// Parameters of the original deployment: Seed 10%, Private 15%,
    /// 10 minute cliff, 600 minute linear release.
    pub fn genesis() -> VestingResult<Self> {
        let seed = CategorySchedule::new(
            SEED_INITIAL_RELEASE,
            DEFAULT_CLIFF_SECONDS,
            DEFAULT_VESTING_SECONDS,
        )?;
        let private = CategorySchedule::new(
            PRIVATE_INITIAL_RELEASE,
            DEFAULT_CLIFF_SECONDS,
            DEFAULT_VESTING_SECONDS,
        )?;
        Self::from_schedules(GENESIS_SCHEDULE_VERSION, &[seed, private])
    }

    /// `schedules` is ordered by `InvestorCategory::index`.
    pub fn from_schedules(
        version: u32,
        schedules: &[CategorySchedule],
    ) -> VestingResult<Self> {
        let schedules: [CategorySchedule; CATEGORY_COUNT] = schedules
            .try_into()
            .map_err(|_| VestingError::InvalidSchedule)?;
        for s in schedules.iter() {
            s.validate()?;
        }
        Ok(Self { version, schedules })
    }

    pub fn get(&self, category: InvestorCategory) -> &CategorySchedule {
        &self.schedules[category.index()]
    }

    /// Validate `schedules` as the successor of this table and return it
    /// tagged with the next version.
    pub fn upgraded(&self, schedules: &[CategorySchedule]) -> VestingResult<Self> {
        let version = self
            .version
            .checked_add(1)
            .ok_or(VestingError::MathOverflow)?;
        let next = Self::from_schedules(version, schedules)?;
        let accelerates = next
            .schedules
            .iter()
            .zip(self.schedules.iter())
            .all(|(new, old)| new.accelerates(old));
        if !accelerates {
            return Err(VestingError::InvalidScheduleUpgrade);
        }
        Ok(next)
    }

    /// Longest `cliff + vesting` across categories.
    pub fn global_vesting_offset(&self) -> VestingResult<i64> {
        let mut longest = 0i64;
        for category in InvestorCategory::ALL {
            longest = longest.max(self.get(category).full_vesting_offset()?);
        }
        Ok(longest)
    }

    /// BLAKE3 fingerprint of the table, published so indexers can tell which
    /// parameter set is active.
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.version.to_le_bytes());
        for s in self.schedules.iter() {
            hasher.update(&s.initial_release.to_le_bytes());
            hasher.update(&s.cliff_duration.to_le_bytes());
            hasher.update(&s.vesting_duration.to_le_bytes());
            hasher.update(&s.release_rate.to_le_bytes());
        }
        *hasher.finalize().as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doubled_rate_schedules(table: &ScheduleTable) -> Vec<CategorySchedule> {
        table
            .schedules
            .iter()
            .map(|s| {
                CategorySchedule::new(s.initial_release, s.cliff_duration, s.vesting_duration / 2)
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn genesis_matches_original_deployment() {
        let table = ScheduleTable::genesis().unwrap();
        assert_eq!(table.version, 1);

        let seed = table.get(InvestorCategory::Seed);
        assert_eq!(seed.initial_release, 100_000_000_000_000_000);
        assert_eq!(seed.cliff_duration, 600);
        assert_eq!(seed.vesting_duration, 36_000);
        assert_eq!(seed.release_rate, 27_777_777_777_777);

        let private = table.get(InvestorCategory::Private);
        assert_eq!(private.initial_release, 150_000_000_000_000_000);
        assert_eq!(table.global_vesting_offset().unwrap(), 36_600);
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        let too_much = (PRECISION + 1) as u64;
        assert!(matches!(
            CategorySchedule::new(too_much, 600, 36_000),
            Err(VestingError::InvalidSchedule)
        ));
        assert!(matches!(
            CategorySchedule::new(0, -1, 36_000),
            Err(VestingError::InvalidSchedule)
        ));
        assert!(matches!(
            CategorySchedule::new(0, 600, 0),
            Err(VestingError::InvalidSchedule)
        ));
        // cliff + vesting must fit in a timestamp offset.
        assert!(matches!(
            CategorySchedule::new(0, i64::MAX, 10),
            Err(VestingError::InvalidSchedule)
        ));
        assert!(CategorySchedule::new(0, i64::MAX - 10, 10).is_ok());

        let mut inconsistent = CategorySchedule::new(0, 600, 36_000).unwrap();
        inconsistent.release_rate += 1;
        assert!(matches!(
            inconsistent.validate(),
            Err(VestingError::InvalidSchedule)
        ));
    }

    #[test]
    fn table_requires_one_schedule_per_category() {
        let seed = CategorySchedule::new(0, 0, 10).unwrap();
        assert!(matches!(
            ScheduleTable::from_schedules(1, &[seed]),
            Err(VestingError::InvalidSchedule)
        ));
        assert!(matches!(
            ScheduleTable::from_schedules(1, &[seed, seed, seed]),
            Err(VestingError::InvalidSchedule)
        ));
    }

    #[test]
    fn upgrade_doubles_rate_and_bumps_version() {
        let table = ScheduleTable::genesis().unwrap();
        let next = table.upgraded(&doubled_rate_schedules(&table)).unwrap();

        assert_eq!(next.version, 2);
        for category in InvestorCategory::ALL {
            let old = table.get(category);
            let new = next.get(category);
            assert_eq!(new.cliff_duration, old.cliff_duration);
            assert_eq!(new.initial_release, old.initial_release);
            assert_eq!(new.vesting_duration, 18_000);
            assert!(new.release_rate > old.release_rate);
        }
        assert_eq!(next.global_vesting_offset().unwrap(), 18_600);
        assert_ne!(next.digest(), table.digest());
    }

    #[test]
    fn upgrade_rejects_slower_or_reshaped_curves() {
        let table = ScheduleTable::genesis().unwrap();

        let slower: Vec<_> = table
            .schedules
            .iter()
            .map(|s| CategorySchedule::new(s.initial_release, s.cliff_duration, 72_000).unwrap())
            .collect();
        assert!(matches!(
            table.upgraded(&slower),
            Err(VestingError::InvalidScheduleUpgrade)
        ));

        let mut longer_cliff = doubled_rate_schedules(&table);
        longer_cliff[0].cliff_duration = 1_200;
        assert!(matches!(
            table.upgraded(&longer_cliff),
            Err(VestingError::InvalidScheduleUpgrade)
        ));

        let mut bigger_initial = doubled_rate_schedules(&table);
        bigger_initial[1].initial_release = 200_000_000_000_000_000;
        assert!(matches!(
            table.upgraded(&bigger_initial),
            Err(VestingError::InvalidScheduleUpgrade)
        ));
    }

    #[test]
    fn digest_is_stable_for_equal_tables() {
        let a = ScheduleTable::genesis().unwrap();
        let b = ScheduleTable::genesis().unwrap();
        assert_eq!(a.digest(), b.digest());
    }
}
