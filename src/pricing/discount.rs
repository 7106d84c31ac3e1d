//! Discount and commission arithmetic

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Round half-up to cents
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `round2(base × (1 − percent/100))`.
///
/// Always apply to the original base price; chaining discounts compounds
/// rounding.
pub fn discounted_price(base_price: Decimal, discount_percent: Decimal) -> Decimal {
    round_cents(base_price * (Decimal::ONE - discount_percent / dec!(100)))
}

/// `round2(price × percent/100)`
pub fn commission_amount(price: Decimal, commission_percent: Decimal) -> Decimal {
    round_cents(price * commission_percent / dec!(100))
}
