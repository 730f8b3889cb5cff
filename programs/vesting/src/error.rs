use anchor_lang::prelude::*;

/// Error codes for the investor vesting ledger.
#[error_code]
pub enum VestingError {
    // Policy violations.
    #[msg("Unauthorized: admin signature required")]
    Unauthorized,

    #[msg("Schedule start timestamp has already been initialized")]
    AlreadyInitialized,

    #[msg("Registration is closed once the schedule is locked")]
    SchedulePolicyViolation,

    #[msg("Investor already registered")]
    DuplicateInvestor,

    #[msg("Identities and amounts differ in length")]
    ArityMismatch,

    #[msg("Unknown investor")]
    UnknownInvestor,

    #[msg("Cannot merge an investor into itself")]
    SelfMerge,

    #[msg("Investor correction has already been applied")]
    CorrectionAlreadyApplied,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid allocation (must be > 0)")]
    InvalidAllocation,

    #[msg("Empty batch")]
    EmptyBatch,

    #[msg("Batch size too large")]
    BatchTooLarge,

    #[msg("Investor registry is full")]
    RegistryFull,

    #[msg("Invalid category schedule")]
    InvalidSchedule,

    #[msg("Schedule upgrade would slow down or reshape the unlock curve")]
    InvalidScheduleUpgrade,

    #[msg("Token mint must not be the default key")]
    ZeroTokenReference,

    // Temporal preconditions.
    #[msg("Start timestamp must be in the future")]
    TimestampNotInFuture,

    #[msg("Schedule not initialized")]
    Uninitialized,

    #[msg("Vesting has not started")]
    VestingNotStarted,

    #[msg("Vesting is not over")]
    VestingNotOver,

    // Economic preconditions.
    #[msg("Caller is not an investor")]
    NotAnInvestor,

    #[msg("No tokens available to claim")]
    NothingToClaim,

    #[msg("Nothing to sweep: vault holds no surplus")]
    ZeroSweepAmount,

    // Collaborator failures.
    #[msg("Token transfer failed")]
    TransferFailed,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}

/// Result of the pure ledger and unlock logic; lifts into `anchor_lang::Result`
/// with `?`.
pub type VestingResult<T> = core::result::Result<T, VestingError>;
