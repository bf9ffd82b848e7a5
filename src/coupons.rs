//! Coupons
//!
//! Sanitized coupon codes, discount kinds, and the coupon record consulted
//! when previewing or committing a discount. Coupon persistence and validity
//! bookkeeping live behind [`crate::catalog::CouponDirectory`].

use std::fmt;

use rust_decimal::Decimal;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::products::{Product, ProductId};

/// Error returned when a coupon code is empty once sanitized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("coupon code is empty after sanitization")]
pub struct EmptyCouponCode;

/// A coupon identifier with unsafe characters stripped.
///
/// Only ASCII alphanumerics, `-` and `_` survive sanitization; a code that is
/// empty afterwards does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CouponCode(String);

impl CouponCode {
    /// Sanitize a raw query-parameter value into a coupon code.
    ///
    /// Returns `None` when nothing survives sanitization.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let cleaned: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
            .collect();

        if cleaned.is_empty() {
            None
        } else {
            Some(Self(cleaned))
        }
    }

    /// Return the sanitized code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CouponCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CouponCode {
    type Error = EmptyCouponCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value).ok_or(EmptyCouponCode)
    }
}

impl From<CouponCode> for String {
    fn from(code: CouponCode) -> Self {
        code.0
    }
}

/// Discount rule kinds this crate knows how to preview.
///
/// Kinds outside the known set deserialize to [`DiscountKind::Other`] and
/// leave prices untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    /// Percentage off the cart total.
    Percent,

    /// Percentage off each qualifying item.
    PercentPerItem,

    /// Fixed amount off each qualifying item.
    FixedAmount,

    /// Any discount kind this crate does not preview.
    #[serde(other)]
    Other,
}

/// A coupon record: code, discount rule, and optional product restriction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    code: CouponCode,
    kind: DiscountKind,
    #[serde(default)]
    amount: Decimal,
    #[serde(default)]
    product_ids: FxHashSet<ProductId>,
}

impl Coupon {
    /// Create an unrestricted coupon.
    #[must_use]
    pub fn new(code: CouponCode, kind: DiscountKind, amount: Decimal) -> Self {
        Self {
            code,
            kind,
            amount,
            product_ids: FxHashSet::default(),
        }
    }

    /// Restrict the coupon to a set of product identifiers.
    #[must_use]
    pub fn restricted_to(mut self, product_ids: impl IntoIterator<Item = ProductId>) -> Self {
        self.product_ids = product_ids.into_iter().collect();
        self
    }

    /// Return the coupon code.
    #[must_use]
    pub fn code(&self) -> &CouponCode {
        &self.code
    }

    /// Return the discount kind.
    #[must_use]
    pub fn kind(&self) -> DiscountKind {
        self.kind
    }

    /// Return the discount amount (a percentage for the percent kinds, a
    /// monetary amount for the fixed kind).
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Return the restricted product-identifier set. Empty means unrestricted.
    #[must_use]
    pub fn restricted_product_ids(&self) -> &FxHashSet<ProductId> {
        &self.product_ids
    }

    /// Whether this coupon applies in the given product context.
    ///
    /// Applies when there is no current product (listing pages, where the
    /// coupon cannot be narrowed), when the restriction set is empty, or when
    /// the set contains the current product's identifier.
    #[must_use]
    pub fn applies_to(&self, product: Option<&Product>) -> bool {
        match product {
            None => true,
            Some(product) => {
                self.product_ids.is_empty() || self.product_ids.contains(&product.id())
            }
        }
    }
}
