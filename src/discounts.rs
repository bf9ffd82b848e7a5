//! Discounts
//!
//! The pure discount-amount computation applied to previewed prices.

use rust_decimal::Decimal;

use crate::coupons::{Coupon, DiscountKind};

/// Compute the discounted preview of a base price under a coupon's rule.
///
/// Percentage kinds subtract `base / 100 × amount`, but only for positive
/// base prices; zero and negative prices pass through unchanged so that a
/// percentage cannot enlarge a negative anomaly. The fixed-amount kind
/// subtracts unconditionally and may yield a negative result; there is no
/// zero floor. Unknown kinds pass the price through.
///
/// Stateless: the same inputs always produce the same output.
#[must_use]
pub fn discounted_price(coupon: &Coupon, base: Decimal) -> Decimal {
    match coupon.kind() {
        DiscountKind::Percent | DiscountKind::PercentPerItem => {
            if base > Decimal::ZERO {
                base - (base / Decimal::ONE_HUNDRED) * coupon.amount()
            } else {
                base
            }
        }
        DiscountKind::FixedAmount => base - coupon.amount(),
        DiscountKind::Other => base,
    }
}
