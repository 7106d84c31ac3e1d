//! Trial module
//!
//! Seven-day PRO trial with lazy expiry and the effective tier of an
//! account.

mod account;
mod state;
mod types;

pub use account::{Account, PersistedAccount};
pub use state::{TrialPolicy, TrialState};
pub use types::TrialError;
