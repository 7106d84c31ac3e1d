//! Pricing module
//!
//! Affiliate discount and commission arithmetic in exact decimals, and the
//! one shared accessor for the externally owned percentages.

mod affiliate;
mod cache;
mod discount;
mod types;

pub use affiliate::AffiliateConfig;
pub use cache::{AffiliateConfigCache, AffiliateConfigSource, StaticConfigSource};
pub use discount::{commission_amount, discounted_price, round_cents};
pub use types::PricingError;
