//! Pricing errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Pricing configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Percentage outside 0..=100
    #[error("{field} must be between 0 and 100, got {value}")]
    PercentOutOfRange { field: &'static str, value: Decimal },
}
