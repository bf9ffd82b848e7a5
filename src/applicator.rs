//! Discount Applicator
//!
//! The one component of this crate. It owns nothing durable: the session
//! store, cart, and coupon directory are injected at construction, and every
//! operation is invoked by the host framework from the hook points listed in
//! [`crate::hooks::registrations`].
//!
//! Price adjustments are previews; the coupon only becomes economically
//! binding at [`DiscountApplicator::commit_at_checkout`].

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use tracing::debug;

use crate::{
    cart::Cart,
    catalog::CouponDirectory,
    coupons::CouponCode,
    discounts::discounted_price,
    display::discounted_price_html,
    hooks::{ActionHook, PriceContext, PriceHook, RequestContext},
    products::Product,
    session::{COUPON_SLOT, SessionStore},
};

/// Captures a coupon code from the request, previews its discount on price
/// reads, and commits it to the cart at checkout.
#[derive(Debug)]
pub struct DiscountApplicator<S, C, D> {
    session: S,
    cart: C,
    coupons: D,
}

impl<S, C, D> DiscountApplicator<S, C, D>
where
    S: SessionStore,
    C: Cart,
    D: CouponDirectory,
{
    /// Create an applicator over the host's session, cart, and coupon
    /// directory.
    pub fn new(session: S, cart: C, coupons: D) -> Self {
        Self {
            session,
            cart,
            coupons,
        }
    }

    /// Read the pending coupon code from the session slot, establishing the
    /// visitor session first if none exists yet.
    pub fn pending_code(&mut self) -> Option<CouponCode> {
        if !self.session.has_session() {
            self.session.start_session();
        }

        let stored = self.session.get(COUPON_SLOT)?;

        CouponCode::new(&stored)
    }

    /// Capture the `coupon` query parameter into the session slot.
    ///
    /// The raw value is sanitized, checked for applicability against the
    /// current product context, and stored only when no code is already
    /// pending (first seen wins). Everything else is a silent no-op.
    pub fn capture_from_request(&mut self, raw_param: Option<&str>, product: Option<&Product>) {
        let Some(raw) = raw_param else { return };

        let Some(code) = CouponCode::new(raw) else {
            return;
        };

        if !self.coupon_applies_to(&code, product) {
            return;
        }

        if self.pending_code().is_some() {
            // First seen wins; a differing second code is ignored while one
            // is pending.
            return;
        }

        debug!(%code, "storing pending coupon in session");
        self.session.set(COUPON_SLOT, String::from(code));
    }

    /// Commit the pending coupon to the cart and clear the session slot.
    ///
    /// The slot empties whether the discount was newly added, was already
    /// present on the cart, or was rejected by the cart; a failed application
    /// is never retried on a later request.
    pub fn commit_at_checkout(&mut self) {
        let Some(code) = self.pending_code() else {
            return;
        };

        if self.cart.has_discount(&code) {
            debug!(%code, "cart already carries discount; clearing slot");
        } else if let Err(error) = self.cart.add_discount(&code) {
            debug!(%code, %error, "cart rejected coupon; dropping it");
        } else {
            debug!(%code, "applied coupon to cart");
        }

        self.session.unset(COUPON_SLOT);
    }

    /// Whether a coupon code applies in the given product context.
    ///
    /// A code the directory cannot resolve carries no restriction data and
    /// passes; it falls out later at preview (validity) and commit (cart).
    pub fn coupon_applies_to(&self, code: &CouponCode, product: Option<&Product>) -> bool {
        match self.coupons.lookup(code) {
            Some(coupon) => coupon.applies_to(product),
            None => true,
        }
    }

    /// Return the discount-adjusted preview of a base price.
    ///
    /// The underlying stored price is never touched; each call recomputes
    /// from the session and coupon state. The applicability check runs again
    /// here, since session state can outlive the product context that was
    /// valid at capture; this is the authoritative check point.
    pub fn preview_price(&mut self, base: Decimal, product: Option<&Product>) -> Decimal {
        let Some(code) = self.pending_code() else {
            return base;
        };

        let Some(coupon) = self.coupons.lookup(&code) else {
            return base;
        };

        if !self.coupons.is_currently_valid(coupon) {
            return base;
        }

        if !coupon.applies_to(product) {
            return base;
        }

        discounted_price(coupon, base)
    }

    /// Compose the price display HTML while a coupon is pending.
    ///
    /// Purely presentational: the regular price is struck through next to
    /// the host-rendered discounted markup. Without a pending coupon the
    /// original markup passes through unchanged.
    pub fn price_html(
        &mut self,
        original: &str,
        product: &Product,
        currency: &'static Currency,
    ) -> String {
        if self.pending_code().is_none() {
            return original.to_owned();
        }

        let regular = Money::from_decimal(product.regular_price(), currency);

        discounted_price_html(original, &regular)
    }

    /// Dispatch a lifecycle action from the host.
    pub fn on_action(&mut self, hook: ActionHook, request: &RequestContext<'_>) {
        match hook {
            ActionHook::RequestInit => {
                self.capture_from_request(request.coupon_param, request.product);
            }
            ActionHook::CheckoutRender => self.commit_at_checkout(),
        }
    }

    /// Dispatch a numeric price filter from the host.
    ///
    /// Every [`PriceHook`] routes to the same preview computation; prices on
    /// non-storefront requests pass through untouched.
    pub fn apply_price_filter(
        &mut self,
        _hook: PriceHook,
        base: Decimal,
        ctx: &PriceContext<'_>,
    ) -> Decimal {
        if !ctx.storefront {
            return base;
        }

        self.preview_price(base, ctx.product)
    }

    /// Dispatch the price-display HTML filter from the host.
    pub fn apply_price_html_filter(
        &mut self,
        original: &str,
        product: &Product,
        currency: &'static Currency,
        ctx: &PriceContext<'_>,
    ) -> String {
        if !ctx.storefront {
            return original.to_owned();
        }

        self.price_html(original, product, currency)
    }

    /// Consume the applicator and return its collaborators.
    pub fn into_parts(self) -> (S, C, D) {
        (self.session, self.cart, self.coupons)
    }
}
