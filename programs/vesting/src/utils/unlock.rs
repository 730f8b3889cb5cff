//! Cliff-plus-linear unlock curve.
//!
//! - nothing unlocks before `start + cliff`
//! - at `start + cliff` the initial release unlocks at once
//! - the remainder then unlocks at `release_rate` per second and is complete
//!   at `start + cliff + vesting_duration`
//!
//! All math is fixed-point on `u128` and truncates, so a curve point is never
//! above the real-valued ideal.

use crate::constants::PRECISION;
use crate::error::{VestingError, VestingResult};
use crate::state::{CategorySchedule, InvestorRecord};

/// Cumulative amount of `total_allocated` unlocked at `now`.
pub fn unlocked_total(
    now: i64,
    start_ts: i64,
    schedule: &CategorySchedule,
    total_allocated: u64,
) -> VestingResult<u64> {
    if now < start_ts {
        return Ok(0);
    }
    let elapsed = now.checked_sub(start_ts).ok_or(VestingError::MathOverflow)?;
    if elapsed < schedule.cliff_duration {
        return Ok(0);
    }
    let post_cliff = elapsed - schedule.cliff_duration;
    if post_cliff >= schedule.vesting_duration {
        return Ok(total_allocated);
    }

    let total = total_allocated as u128;
    let initial = total
        .checked_mul(schedule.initial_release as u128)
        .ok_or(VestingError::MathOverflow)?
        / PRECISION;
    let remainder = total
        .checked_sub(initial)
        .ok_or(VestingError::MathOverflow)?;
    let fraction = (schedule.release_rate as u128)
        .checked_mul(post_cliff as u128)
        .ok_or(VestingError::MathOverflow)?
        .min(PRECISION);
    let linear = remainder
        .checked_mul(fraction)
        .ok_or(VestingError::MathOverflow)?
        / PRECISION;

    let unlocked = initial
        .checked_add(linear)
        .ok_or(VestingError::MathOverflow)?;
    u64::try_from(unlocked).map_err(|_| VestingError::MathOverflow)
}

/// Amount `record` may withdraw at `now`. Records zeroed by a correction
/// have `withdrawn >= unlocked`, which clamps to zero.
pub fn claimable(
    now: i64,
    start_ts: i64,
    schedule: &CategorySchedule,
    record: &InvestorRecord,
) -> VestingResult<u64> {
    let unlocked = unlocked_total(now, start_ts, schedule, record.total_allocated)?;
    Ok(unlocked.saturating_sub(record.withdrawn))
}

/// Timestamp at which `schedule` is fully unlocked for a vesting start,
/// saturating at `i64::MAX`.
pub fn full_vesting_ts(start_ts: i64, schedule: &CategorySchedule) -> VestingResult<i64> {
    Ok(start_ts.saturating_add(schedule.full_vesting_offset()?))
}
