//! Capability contracts a product variant may support.
//!
//! Not every product supports every capability; callers ask the product
//! (`Product::as_perishable`, `Product::as_shippable`) instead of inspecting its type.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

/// Items with an expiration date.
pub trait Perishable {
    /// Calendar date after which the item is considered expired.
    fn expiration_date(&self) -> NaiveDate;

    /// True iff the expiration date is strictly before `today`.
    fn is_expired_on(&self, today: NaiveDate) -> bool {
        self.expiration_date() < today
    }

    /// Same as [`Perishable::is_expired_on`] evaluated against the local date.
    fn is_expired(&self) -> bool {
        self.is_expired_on(Local::now().date_naive())
    }
}

/// Items that can be shipped.
pub trait Shippable {
    /// Non-negative shipping cost, rounded to two decimals (half-up).
    fn calculate_shipping_cost(&self) -> Decimal;

    /// Weight in kilograms.
    fn weight(&self) -> f64;
}
