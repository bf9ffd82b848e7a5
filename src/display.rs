//! Price Display
//!
//! Composition of the price HTML shown while a coupon is pending: the
//! regular price struck through, followed by the host-rendered discounted
//! price with a "Now:" label spliced in front of its `<ins>` markup.

use rusty_money::{Money, iso::Currency};

/// Compose the pending-coupon price HTML.
///
/// `original` is the host-rendered price markup (already reflecting the
/// previewed discount); `regular` is the product's regular price.
#[must_use]
pub fn discounted_price_html(original: &str, regular: &Money<'_, Currency>) -> String {
    format!(
        "<del>{regular}</del> {}",
        original.replace("<ins>", " Now:<ins>")
    )
}
