//! Program-wide constants.

/// Fixed-point scale for fractions and rates (1e18 == 100%).
pub const PRECISION: u128 = 1_000_000_000_000_000_000;

/// Number of investor categories carried by every schedule table.
pub const CATEGORY_COUNT: usize = 2;

/// Max investors stored in the registry account.
pub const MAX_INVESTORS: usize = 128;

/// Max identities accepted per `register_investors` call.
pub const MAX_REGISTRATION_BATCH: usize = 20;

/// Schedule version installed by `initialize_ledger`.
pub const GENESIS_SCHEDULE_VERSION: u32 = 1;

pub const LEDGER_STATE_SEED: &[u8] = b"ledger_state";
pub const INVESTORS_SEED: &[u8] = b"investors";
pub const VAULT_SEED: &[u8] = b"vault";

// Genesis curve parameters.
pub const SEED_INITIAL_RELEASE: u64 = 100_000_000_000_000_000; // 10%
pub const PRIVATE_INITIAL_RELEASE: u64 = 150_000_000_000_000_000; // 15%
pub const DEFAULT_CLIFF_SECONDS: i64 = 10 * 60;
pub const DEFAULT_VESTING_SECONDS: i64 = 600 * 60;
