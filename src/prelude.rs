//! Coupon Link prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    applicator::DiscountApplicator,
    cart::{Cart, CartError, MemoryCart},
    catalog::{CatalogEntry, CouponDirectory, StaticCouponDirectory},
    coupons::{Coupon, CouponCode, DiscountKind, EmptyCouponCode},
    discounts::discounted_price,
    display::discounted_price_html,
    hooks::{
        ActionHook, HookPoint, HookRegistration, PriceContext, PriceHook, RequestContext,
        registrations,
    },
    products::{Product, ProductId},
    session::{COUPON_SLOT, MemorySession, SessionStore},
};
