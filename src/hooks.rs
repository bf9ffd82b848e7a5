//! Lifecycle Hooks
//!
//! The host framework drives every entry point of this crate from its own
//! lifecycle. Rather than registering callbacks in a global hook table, the
//! mapping is explicit: [`registrations`] lists the hook points and the
//! priorities the applicator expects, and the host dispatches each one to
//! the matching [`crate::applicator::DiscountApplicator`] method.
//!
//! Price filters register late ([`AFTER_DEFAULT_PRICING`]) so they observe
//! the host's post-default price instead of a pre-discount intermediate.

use smallvec::{SmallVec, smallvec};

use crate::products::Product;

/// Priority for price filters, after the host's default price processing.
pub const AFTER_DEFAULT_PRICING: u8 = 99;

/// Priority for lifecycle actions, at the host default.
pub const DEFAULT_ACTION_PRIORITY: u8 = 10;

/// Lifecycle actions the applicator handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionHook {
    /// Once per incoming request, before any page content is produced.
    RequestInit,

    /// Once, when the checkout view is about to render.
    CheckoutRender,
}

/// Price-read filters the applicator handles.
///
/// All of them route to the same preview computation; the host invokes a
/// separate filter per product kind and price flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceHook {
    /// Active price of a simple, grouped, or external product.
    ProductPrice,

    /// Regular price of a simple, grouped, or external product.
    ProductRegularPrice,

    /// Active price of a variation.
    VariationPrice,

    /// Regular price of a variation.
    VariationRegularPrice,

    /// Active price bound of a variable product's price range.
    VariationRangePrice,

    /// Regular price bound of a variable product's price range.
    VariationRangeRegularPrice,
}

/// A hook point the applicator responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookPoint {
    /// A lifecycle action.
    Action(ActionHook),

    /// A numeric price filter.
    Price(PriceHook),

    /// The price-display HTML filter.
    PriceHtml,
}

/// A hook point paired with the priority it must be registered at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookRegistration {
    /// The hook point.
    pub point: HookPoint,

    /// Registration priority relative to the host's own handlers.
    pub priority: u8,
}

/// The full registration table for the applicator.
#[must_use]
pub fn registrations() -> SmallVec<[HookRegistration; 9]> {
    smallvec![
        HookRegistration {
            point: HookPoint::Action(ActionHook::RequestInit),
            priority: DEFAULT_ACTION_PRIORITY,
        },
        HookRegistration {
            point: HookPoint::Action(ActionHook::CheckoutRender),
            priority: DEFAULT_ACTION_PRIORITY,
        },
        HookRegistration {
            point: HookPoint::Price(PriceHook::ProductPrice),
            priority: AFTER_DEFAULT_PRICING,
        },
        HookRegistration {
            point: HookPoint::Price(PriceHook::ProductRegularPrice),
            priority: AFTER_DEFAULT_PRICING,
        },
        HookRegistration {
            point: HookPoint::Price(PriceHook::VariationPrice),
            priority: AFTER_DEFAULT_PRICING,
        },
        HookRegistration {
            point: HookPoint::Price(PriceHook::VariationRegularPrice),
            priority: AFTER_DEFAULT_PRICING,
        },
        HookRegistration {
            point: HookPoint::Price(PriceHook::VariationRangePrice),
            priority: AFTER_DEFAULT_PRICING,
        },
        HookRegistration {
            point: HookPoint::Price(PriceHook::VariationRangeRegularPrice),
            priority: AFTER_DEFAULT_PRICING,
        },
        HookRegistration {
            point: HookPoint::PriceHtml,
            priority: AFTER_DEFAULT_PRICING,
        },
    ]
}

/// Request context handed to [`ActionHook::RequestInit`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext<'a> {
    /// Raw value of the `coupon` query parameter, if present.
    pub coupon_param: Option<&'a str>,

    /// Current product context, absent on listing pages.
    pub product: Option<&'a Product>,
}

/// Context handed to every price filter.
#[derive(Debug, Clone, Copy)]
pub struct PriceContext<'a> {
    /// Current product context, absent on listing pages.
    pub product: Option<&'a Product>,

    /// Whether the request renders a storefront page. Prices on
    /// non-storefront requests pass through unfiltered.
    pub storefront: bool,
}

impl<'a> PriceContext<'a> {
    /// Context for a storefront page render.
    #[must_use]
    pub fn storefront(product: Option<&'a Product>) -> Self {
        Self {
            product,
            storefront: true,
        }
    }
}
