//! Entitlement module
//!
//! Access checks for symbols and timeframes, quota ceilings, and upgrade
//! paths. Denials are values, not errors.

mod resolver;
mod types;
mod upgrade;

pub use resolver::EntitlementResolver;
pub use types::{AccessDecision, DenyReason, QuotaDecision, QuotaKind};
pub use upgrade::{can_upgrade, upgrade_path, UpgradeInfo};
