//! Products
//!
//! The crate's view of the host framework's product contract: an identifier
//! and the regular-price metadata used for the struck-through display.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of a product or variation, as assigned by the host framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(u64);

impl ProductId {
    /// Wrap a host-assigned product identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Return the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product (or variation) as seen by the discount applicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    regular_price: Decimal,
}

impl Product {
    /// Create a product from its identifier and regular-price metadata.
    #[must_use]
    pub const fn new(id: ProductId, regular_price: Decimal) -> Self {
        Self { id, regular_price }
    }

    /// Return the product identifier.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.id
    }

    /// Return the regular (pre-discount) price metadata.
    #[must_use]
    pub const fn regular_price(&self) -> Decimal {
        self.regular_price
    }
}
