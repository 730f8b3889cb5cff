pub mod initialize_ledger;
pub mod fund_vault;
pub mod register_investors;
pub mod lock_schedule;
pub mod withdraw;
pub mod upgrade_schedule;
pub mod merge_investor;
pub mod emergency_sweep;
pub mod quote_claimable;

pub use initialize_ledger::*;
pub use fund_vault::*;
pub use register_investors::*;
pub use lock_schedule::*;
pub use withdraw::*;
pub use upgrade_schedule::*;
pub use merge_investor::*;
pub use emergency_sweep::*;
pub use quote_claimable::*;
