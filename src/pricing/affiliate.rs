//! Affiliate discount and commission settings

use super::{commission_amount, discounted_price, PricingError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Current affiliate percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateConfig {
    /// Discount given to referred customers
    pub discount_percent: Decimal,
    /// Commission paid to the affiliate
    pub commission_percent: Decimal,
}

impl AffiliateConfig {
    /// Build a config, rejecting percentages outside 0..=100
    pub fn new(discount_percent: Decimal, commission_percent: Decimal) -> Result<Self, PricingError> {
        check_percent("discount_percent", discount_percent)?;
        check_percent("commission_percent", commission_percent)?;
        Ok(Self {
            discount_percent,
            commission_percent,
        })
    }

    /// Base price after the affiliate discount
    pub fn discounted_price(&self, base_price: Decimal) -> Decimal {
        discounted_price(base_price, self.discount_percent)
    }

    /// Commission owed on a charged price
    pub fn commission(&self, charged_price: Decimal) -> Decimal {
        commission_amount(charged_price, self.commission_percent)
    }
}

impl Default for AffiliateConfig {
    fn default() -> Self {
        Self {
            discount_percent: dec!(20),
            commission_percent: dec!(20),
        }
    }
}

fn check_percent(field: &'static str, value: Decimal) -> Result<(), PricingError> {
    if value < Decimal::ZERO || value > dec!(100) {
        return Err(PricingError::PercentOutOfRange { field, value });
    }
    Ok(())
}
