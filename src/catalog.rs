//! Coupon Catalog
//!
//! The coupon-lookup contract consumed by the applicator, plus a static
//! directory that can be built in code or deserialized from YAML. The
//! general-validity predicate (expiry, usage limits) sits behind this seam:
//! the host's coupon engine owns the real answer, and [`StaticCouponDirectory`]
//! approximates it with per-entry bookkeeping for tests and demos.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::coupons::{Coupon, CouponCode};

/// Coupon lookup and validity contract.
pub trait CouponDirectory {
    /// Resolve a coupon record by code.
    fn lookup(&self, code: &CouponCode) -> Option<&Coupon>;

    /// The external general-validity predicate: whether the coupon is
    /// currently redeemable (not expired, usage limit not exhausted, ...).
    fn is_currently_valid(&self, coupon: &Coupon) -> bool;
}

/// A coupon plus the validity bookkeeping the directory consults.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    coupon: Coupon,

    #[serde(default = "enabled_by_default")]
    enabled: bool,

    #[serde(default)]
    usage_limit: Option<u32>,

    #[serde(default)]
    usage_count: u32,
}

fn enabled_by_default() -> bool {
    true
}

impl CatalogEntry {
    /// Create an enabled, unlimited entry for a coupon.
    #[must_use]
    pub fn new(coupon: Coupon) -> Self {
        Self {
            coupon,
            enabled: true,
            usage_limit: None,
            usage_count: 0,
        }
    }

    /// Mark the entry disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Set usage bookkeeping.
    #[must_use]
    pub fn with_usage(mut self, limit: u32, count: u32) -> Self {
        self.usage_limit = Some(limit);
        self.usage_count = count;
        self
    }

    /// Return the coupon record.
    #[must_use]
    pub fn coupon(&self) -> &Coupon {
        &self.coupon
    }

    fn redeemable(&self) -> bool {
        self.enabled
            && self
                .usage_limit
                .is_none_or(|limit| self.usage_count < limit)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    coupons: Vec<CatalogEntry>,
}

/// A static, in-memory coupon directory.
#[derive(Debug, Default)]
pub struct StaticCouponDirectory {
    entries: FxHashMap<CouponCode, CatalogEntry>,
}

impl StaticCouponDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a directory from a YAML document with a top-level `coupons`
    /// sequence. No file I/O happens here; callers own the string.
    ///
    /// # Errors
    ///
    /// Returns the underlying parse error when the document is malformed.
    pub fn from_yaml(document: &str) -> Result<Self, serde_norway::Error> {
        let file: CatalogFile = serde_norway::from_str(document)?;

        let mut directory = Self::new();
        for entry in file.coupons {
            directory.insert(entry);
        }

        Ok(directory)
    }

    /// Insert an entry, replacing any entry with the same code.
    pub fn insert(&mut self, entry: CatalogEntry) {
        self.entries.insert(entry.coupon.code().clone(), entry);
    }

    /// Number of entries in the directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CouponDirectory for StaticCouponDirectory {
    fn lookup(&self, code: &CouponCode) -> Option<&Coupon> {
        self.entries.get(code).map(CatalogEntry::coupon)
    }

    fn is_currently_valid(&self, coupon: &Coupon) -> bool {
        self.entries
            .get(coupon.code())
            .is_some_and(CatalogEntry::redeemable)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::coupons::DiscountKind;
    use crate::products::ProductId;

    use super::*;

    const CATALOG: &str = "\
coupons:
  - code: SAVE10
    kind: percent
    amount: 10
  - code: FIFTY-OFF
    kind: fixed_amount
    amount: 50
    usage_limit: 1
    usage_count: 1
  - code: BUNDLE
    kind: percent
    amount: 15
    product_ids: [10, 20]
";

    #[test]
    fn parses_yaml_catalog() -> TestResult {
        let directory = StaticCouponDirectory::from_yaml(CATALOG)?;

        assert_eq!(directory.len(), 3);

        let code = CouponCode::try_from("BUNDLE".to_owned())?;
        let bundle = directory.lookup(&code);

        assert_eq!(bundle.map(Coupon::kind), Some(DiscountKind::Percent));
        assert_eq!(bundle.map(Coupon::amount), Some(Decimal::from(15)));
        assert!(
            bundle.is_some_and(|c| c.restricted_product_ids().contains(&ProductId::new(20))),
            "BUNDLE must be restricted to products 10 and 20"
        );

        Ok(())
    }

    #[test]
    fn exhausted_usage_limit_fails_validity() -> TestResult {
        let directory = StaticCouponDirectory::from_yaml(CATALOG)?;

        let save10 = CouponCode::try_from("SAVE10".to_owned())?;
        let fifty = CouponCode::try_from("FIFTY-OFF".to_owned())?;

        let valid = directory.lookup(&save10).cloned();
        let exhausted = directory.lookup(&fifty).cloned();

        assert!(
            valid.is_some_and(|c| directory.is_currently_valid(&c)),
            "SAVE10 has no usage limit"
        );
        assert!(
            exhausted.is_some_and(|c| !directory.is_currently_valid(&c)),
            "FIFTY-OFF has used up its single redemption"
        );

        Ok(())
    }

    #[test]
    fn disabled_entry_fails_validity() -> TestResult {
        let code = CouponCode::try_from("PAUSED".to_owned())?;
        let coupon = Coupon::new(code, DiscountKind::Percent, Decimal::from(5));

        let mut directory = StaticCouponDirectory::new();
        directory.insert(CatalogEntry::new(coupon.clone()).disabled());

        assert!(!directory.is_currently_valid(&coupon));

        Ok(())
    }

    #[test]
    fn unknown_coupon_fails_validity() -> TestResult {
        let directory = StaticCouponDirectory::new();

        let code = CouponCode::try_from("GHOST".to_owned())?;
        let coupon = Coupon::new(code, DiscountKind::Percent, Decimal::from(5));

        assert!(directory.lookup(coupon.code()).is_none());
        assert!(!directory.is_currently_valid(&coupon));

        Ok(())
    }
}
