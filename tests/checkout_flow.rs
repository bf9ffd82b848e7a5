//! Integration test for the full coupon-from-URL flow.
//!
//! Walks the applicator through the same lifecycle the host framework
//! drives: a request arrives carrying `?coupon=...`, product pages read
//! prices (previewed, never persisted), and the checkout render commits the
//! coupon to the cart exactly once while emptying the session slot.

use rust_decimal::Decimal;
use testresult::TestResult;

use coupon_link::prelude::*;

const CATALOG: &str = "\
coupons:
  - code: SAVE10
    kind: percent
    amount: 10
  - code: FIFTY-OFF
    kind: fixed_amount
    amount: 50
";

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

fn applicator()
-> TestResult<DiscountApplicator<MemorySession, MemoryCart, StaticCouponDirectory>> {
    init_logging();

    Ok(DiscountApplicator::new(
        MemorySession::new(),
        MemoryCart::new(),
        StaticCouponDirectory::from_yaml(CATALOG)?,
    ))
}

#[test]
fn percentage_coupon_previews_then_commits() -> TestResult {
    let mut applicator = applicator()?;
    let product = Product::new(ProductId::new(7), Decimal::from(200));

    // Request init: ?coupon=SAVE10 lands in the session slot.
    applicator.on_action(
        ActionHook::RequestInit,
        &RequestContext {
            coupon_param: Some("SAVE10"),
            product: Some(&product),
        },
    );
    assert_eq!(applicator.pending_code(), Some(CouponCode::try_from("SAVE10".to_owned())?));

    // Every price read previews 10% off.
    let ctx = PriceContext::storefront(Some(&product));
    assert_eq!(
        applicator.apply_price_filter(PriceHook::ProductPrice, Decimal::from(200), &ctx),
        Decimal::from(180)
    );

    // Checkout render: the coupon becomes binding and the slot empties.
    applicator.on_action(ActionHook::CheckoutRender, &RequestContext::default());
    assert_eq!(applicator.pending_code(), None);

    let (_, cart, _) = applicator.into_parts();
    assert_eq!(cart.applied(), &[CouponCode::try_from("SAVE10".to_owned())?]);

    Ok(())
}

#[test]
fn fixed_coupon_preview_is_not_floored_at_zero() -> TestResult {
    let mut applicator = applicator()?;
    let product = Product::new(ProductId::new(7), Decimal::from(30));

    applicator.capture_from_request(Some("FIFTY-OFF"), Some(&product));

    let ctx = PriceContext::storefront(Some(&product));
    assert_eq!(
        applicator.apply_price_filter(PriceHook::VariationPrice, Decimal::from(30), &ctx),
        Decimal::from(-20),
        "fixed-amount previews keep the negative result"
    );

    Ok(())
}

#[test]
fn rejected_commit_is_not_retried() -> TestResult {
    /// Cart that refuses every discount, like a host cart rejecting an
    /// unknown or expired code.
    #[derive(Debug, Default)]
    struct RejectingCart;

    impl Cart for RejectingCart {
        fn has_discount(&self, _code: &CouponCode) -> bool {
            false
        }

        fn add_discount(&mut self, code: &CouponCode) -> Result<(), CartError> {
            Err(CartError::Rejected {
                code: code.clone(),
                reason: "coupon does not exist".to_owned(),
            })
        }
    }

    init_logging();

    let mut applicator = DiscountApplicator::new(
        MemorySession::new(),
        RejectingCart,
        StaticCouponDirectory::from_yaml(CATALOG)?,
    );

    applicator.capture_from_request(Some("SAVE10"), None);
    applicator.commit_at_checkout();

    // One-shot policy: the slot is empty, so a later checkout render has
    // nothing left to apply.
    assert_eq!(applicator.pending_code(), None);

    Ok(())
}

#[test]
fn preview_touches_no_stored_prices() -> TestResult {
    let mut applicator = applicator()?;
    let product = Product::new(ProductId::new(7), Decimal::from(200));

    applicator.capture_from_request(Some("SAVE10"), Some(&product));

    let ctx = PriceContext::storefront(Some(&product));
    let _previewed = applicator.apply_price_filter(
        PriceHook::ProductRegularPrice,
        product.regular_price(),
        &ctx,
    );

    assert_eq!(
        product.regular_price(),
        Decimal::from(200),
        "the preview must not mutate the product's stored price"
    );

    Ok(())
}
