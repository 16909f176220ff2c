//! Products domain module.
//!
//! This crate contains the catalog model: case-normalized categories (with a
//! flyweight cache), the `Perishable` / `Shippable` capability contracts, and the
//! product variants with their shipping rules. Pure domain logic (no IO, no storage).

pub mod capability;
pub mod category;
pub mod money;
pub mod product;

pub use capability::{Perishable, Shippable};
pub use category::{Category, CategoryCache};
pub use money::round_money;
pub use product::{Electronics, Food, Product, ProductKind};
