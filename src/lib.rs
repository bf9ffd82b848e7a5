//! Coupon Link
//!
//! Coupon Link captures a coupon code supplied through a request query
//! parameter, previews the discount on displayed product prices, and commits
//! the coupon to the cart exactly once at checkout.
//!
//! The host commerce framework owns the session store, the cart, and the
//! coupon records; this crate consumes them through the
//! [`session::SessionStore`], [`cart::Cart`] and [`catalog::CouponDirectory`]
//! traits and exposes a single [`applicator::DiscountApplicator`] whose entry
//! points the host invokes from its lifecycle hooks (see [`hooks`]).

pub mod applicator;
pub mod cart;
pub mod catalog;
pub mod coupons;
pub mod discounts;
pub mod display;
pub mod hooks;
pub mod prelude;
pub mod products;
pub mod session;
