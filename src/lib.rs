//! tier-gate: Subscription tier entitlements for a charting product
//!
//! This library provides the core components for:
//! - Tier definitions with per-tier limits and the symbol/timeframe catalog
//! - Entitlement checks for symbols, charts and quotas
//! - Trial elevation with lazy expiry
//! - Affiliate discount and commission pricing
//! - Single-use account tokens
//! - Feature permissions by tier, role and affiliate status
//! - Logging and metrics

pub mod cli;
pub mod config;
pub mod entitlement;
pub mod permission;
pub mod pricing;
pub mod telemetry;
pub mod tier;
pub mod token;
pub mod trial;
