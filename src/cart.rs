//! Carts
//!
//! The cart contract consumed at checkout. The applicator only ever asks two
//! things of a cart: whether a discount code is already present, and to add
//! one. Failures are surfaced to the end user by the host framework; this
//! crate logs and drops them (one-shot, fire-and-forget commit policy).

use thiserror::Error;

use crate::coupons::CouponCode;

/// Errors a cart can raise when adding a discount.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The cart already carries a discount for this code.
    #[error("discount `{0}` is already applied to the cart")]
    DuplicateDiscount(CouponCode),

    /// The cart rejected the coupon (expired, usage exceeded, minimum spend
    /// not met; the host owns the reason).
    #[error("cart rejected coupon `{code}`: {reason}")]
    Rejected {
        /// The rejected code.
        code: CouponCode,

        /// Host-provided rejection reason.
        reason: String,
    },
}

/// Cart contract consumed by the applicator.
pub trait Cart {
    /// Whether the cart already carries a discount for this exact code.
    fn has_discount(&self, code: &CouponCode) -> bool;

    /// Add a discount to the cart by coupon code.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] when the cart refuses the coupon. The applicator
    /// does not inspect or retry the failure.
    fn add_discount(&mut self, code: &CouponCode) -> Result<(), CartError>;
}

/// In-memory cart recording applied discount codes.
#[derive(Debug, Default)]
pub struct MemoryCart {
    applied: Vec<CouponCode>,
}

impl MemoryCart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discount codes applied so far, in application order.
    #[must_use]
    pub fn applied(&self) -> &[CouponCode] {
        &self.applied
    }
}

impl Cart for MemoryCart {
    fn has_discount(&self, code: &CouponCode) -> bool {
        self.applied.contains(code)
    }

    fn add_discount(&mut self, code: &CouponCode) -> Result<(), CartError> {
        if self.has_discount(code) {
            return Err(CartError::DuplicateDiscount(code.clone()));
        }

        self.applied.push(code.clone());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn add_then_has_discount() -> TestResult {
        let code = CouponCode::try_from("SAVE10".to_owned())?;
        let mut cart = MemoryCart::new();

        assert!(!cart.has_discount(&code));

        cart.add_discount(&code)?;

        assert!(cart.has_discount(&code));
        assert_eq!(cart.applied(), &[code]);

        Ok(())
    }

    #[test]
    fn duplicate_add_is_rejected() -> TestResult {
        let code = CouponCode::try_from("SAVE10".to_owned())?;
        let mut cart = MemoryCart::new();

        cart.add_discount(&code)?;

        assert_eq!(
            cart.add_discount(&code),
            Err(CartError::DuplicateDiscount(code))
        );

        Ok(())
    }
}
