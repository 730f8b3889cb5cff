pub mod investors;
pub mod ledger_state;
pub mod schedule;

pub use investors::*;
pub use ledger_state::*;
pub use schedule::*;
