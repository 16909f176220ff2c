use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use warehouse_core::{DomainError, DomainResult, Entity, ProductId};

use crate::capability::{Perishable, Shippable};
use crate::category::Category;
use crate::money::round_money;

/// Flat shipping cost for electronics.
const ELECTRONICS_BASE_SHIPPING: u32 = 79;
/// Surcharge for electronics heavier than [`ELECTRONICS_HEAVY_THRESHOLD_KG`].
const ELECTRONICS_HEAVY_SURCHARGE: u32 = 49;
const ELECTRONICS_HEAVY_THRESHOLD_KG: u32 = 5;
/// Food ships at a fixed rate per kilogram.
const FOOD_SHIPPING_PER_KG: u32 = 50;

fn ensure_price(price: Decimal) -> DomainResult<()> {
    if price < Decimal::ZERO {
        return Err(DomainError::invalid_argument("Price cannot be negative."));
    }
    Ok(())
}

fn ensure_weight(weight: Decimal) -> DomainResult<()> {
    if weight < Decimal::ZERO {
        return Err(DomainError::invalid_argument("Weight cannot be negative."));
    }
    Ok(())
}

fn weight_as_f64(weight: Decimal) -> f64 {
    weight.to_f64().unwrap_or_default()
}

/// Electronics-specific attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Electronics {
    warranty_months: u32,
    weight: Decimal,
}

impl Electronics {
    pub fn new(warranty_months: i32, weight: Decimal) -> DomainResult<Self> {
        let warranty_months = u32::try_from(warranty_months)
            .map_err(|_| DomainError::invalid_argument("Warranty months cannot be negative."))?;
        ensure_weight(weight)?;
        Ok(Self {
            warranty_months,
            weight,
        })
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }

    pub fn weight_kg(&self) -> Decimal {
        self.weight
    }
}

impl Shippable for Electronics {
    /// 79 flat, plus 49 when the item weighs more than 5 kg.
    fn calculate_shipping_cost(&self) -> Decimal {
        let mut cost = Decimal::from(ELECTRONICS_BASE_SHIPPING);
        if self.weight > Decimal::from(ELECTRONICS_HEAVY_THRESHOLD_KG) {
            cost += Decimal::from(ELECTRONICS_HEAVY_SURCHARGE);
        }
        round_money(cost)
    }

    fn weight(&self) -> f64 {
        weight_as_f64(self.weight)
    }
}

/// Food-specific attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Food {
    expiration_date: NaiveDate,
    weight: Decimal,
}

impl Food {
    pub fn new(expiration_date: NaiveDate, weight: Decimal) -> DomainResult<Self> {
        ensure_weight(weight)?;
        if weight.checked_mul(Decimal::from(FOOD_SHIPPING_PER_KG)).is_none() {
            return Err(DomainError::invalid_argument("Weight is too large to ship."));
        }
        Ok(Self {
            expiration_date,
            weight,
        })
    }

    pub fn weight_kg(&self) -> Decimal {
        self.weight
    }
}

impl Perishable for Food {
    fn expiration_date(&self) -> NaiveDate {
        self.expiration_date
    }
}

impl Shippable for Food {
    /// 50 per kilogram.
    fn calculate_shipping_cost(&self) -> Decimal {
        let cost = self
            .weight
            .checked_mul(Decimal::from(FOOD_SHIPPING_PER_KG))
            .unwrap_or(Decimal::MAX);
        round_money(cost)
    }

    fn weight(&self) -> f64 {
        weight_as_f64(self.weight)
    }
}

/// Variant-specific part of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProductKind {
    Electronics(Electronics),
    Food(Food),
}

/// A catalog product: shared identity/pricing fields plus its variant.
///
/// Identity, name and category are fixed at construction; only the price changes,
/// through [`Product::update_price`]. Equality and hashing use the id alone.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: Category,
    price: Decimal,
    #[serde(flatten)]
    kind: ProductKind,
}

impl Product {
    /// Build a product from an already-validated variant.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: Category,
        price: Decimal,
        kind: ProductKind,
    ) -> DomainResult<Self> {
        ensure_price(price)?;
        Ok(Self {
            id,
            name: name.into(),
            category,
            price,
            kind,
        })
    }

    /// Build an electronics product. Checks price, then warranty, then weight.
    pub fn electronics(
        id: ProductId,
        name: impl Into<String>,
        category: Category,
        price: Decimal,
        warranty_months: i32,
        weight: Decimal,
    ) -> DomainResult<Self> {
        ensure_price(price)?;
        let kind = ProductKind::Electronics(Electronics::new(warranty_months, weight)?);
        Self::new(id, name, category, price, kind)
    }

    /// Build a food product. Checks price, then weight.
    pub fn food(
        id: ProductId,
        name: impl Into<String>,
        category: Category,
        price: Decimal,
        expiration_date: NaiveDate,
        weight: Decimal,
    ) -> DomainResult<Self> {
        ensure_price(price)?;
        let kind = ProductKind::Food(Food::new(expiration_date, weight)?);
        Self::new(id, name, category, price, kind)
    }

    pub fn uuid(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    /// Replace the price. A negative price is rejected and the old one kept.
    pub fn update_price(&mut self, new_price: Decimal) -> DomainResult<()> {
        ensure_price(new_price)?;
        self.price = new_price;
        Ok(())
    }

    /// Human-readable one-line summary.
    pub fn product_details(&self) -> String {
        match &self.kind {
            ProductKind::Electronics(e) => format!(
                "Electronics: {}, Warranty: {} months",
                self.name, e.warranty_months
            ),
            ProductKind::Food(f) => {
                format!("Food: {}, Expires: {}", self.name, f.expiration_date)
            }
        }
    }

    pub fn as_perishable(&self) -> Option<&dyn Perishable> {
        match &self.kind {
            ProductKind::Food(food) => Some(food),
            ProductKind::Electronics(_) => None,
        }
    }

    pub fn as_shippable(&self) -> Option<&dyn Shippable> {
        match &self.kind {
            ProductKind::Electronics(electronics) => Some(electronics),
            ProductKind::Food(food) => Some(food),
        }
    }

    pub fn is_perishable(&self) -> bool {
        self.as_perishable().is_some()
    }

    pub fn is_shippable(&self) -> bool {
        self.as_shippable().is_some()
    }

    /// Weight in kilograms.
    pub fn weight(&self) -> Decimal {
        match &self.kind {
            ProductKind::Electronics(e) => e.weight,
            ProductKind::Food(f) => f.weight,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl core::hash::Hash for Product {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str) -> Category {
        Category::parse(name).unwrap()
    }

    fn dec(num: i64, scale: u32) -> Decimal {
        Decimal::new(num, scale)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn laptop(weight: Decimal) -> Product {
        Product::electronics(
            ProductId::new(),
            "Laptop",
            category("electronics"),
            dec(12999, 0),
            24,
            weight,
        )
        .unwrap()
    }

    fn milk(expiration_date: NaiveDate, weight: Decimal) -> Product {
        Product::food(
            ProductId::new(),
            "Milk",
            category("dairy"),
            dec(1590, 2),
            expiration_date,
            weight,
        )
        .unwrap()
    }

    #[test]
    fn electronics_details_mention_warranty() {
        let product = laptop(dec(2, 0));
        assert_eq!(
            product.product_details(),
            "Electronics: Laptop, Warranty: 24 months"
        );
    }

    #[test]
    fn food_details_use_iso_date() {
        let product = milk(date(2025, 1, 7), dec(1, 0));
        assert_eq!(product.product_details(), "Food: Milk, Expires: 2025-01-07");
    }

    #[test]
    fn light_electronics_ship_at_base_cost() {
        let cost = laptop(dec(3, 0)).as_shippable().unwrap().calculate_shipping_cost();
        assert_eq!(cost, dec(7900, 2));
        assert_eq!(cost.to_string(), "79.00");
    }

    #[test]
    fn heavy_electronics_pay_surcharge() {
        let cost = laptop(dec(6, 0)).as_shippable().unwrap().calculate_shipping_cost();
        assert_eq!(cost, dec(12800, 2));
    }

    #[test]
    fn surcharge_starts_strictly_above_five_kilograms() {
        let at_limit = laptop(dec(5, 0)).as_shippable().unwrap().calculate_shipping_cost();
        let just_over = laptop(dec(5001, 3)).as_shippable().unwrap().calculate_shipping_cost();
        assert_eq!(at_limit, dec(79, 0));
        assert_eq!(just_over, dec(128, 0));
    }

    #[test]
    fn food_ships_per_kilogram() {
        let product = milk(date(2030, 1, 1), dec(2, 0));
        let cost = product.as_shippable().unwrap().calculate_shipping_cost();
        assert_eq!(cost, dec(10000, 2));
        assert_eq!(cost.to_string(), "100.00");
    }

    #[test]
    fn food_shipping_rounds_half_up() {
        // 0.0101 kg * 50 = 0.505
        let product = milk(date(2030, 1, 1), dec(101, 4));
        let cost = product.as_shippable().unwrap().calculate_shipping_cost();
        assert_eq!(cost, dec(51, 2));
    }

    #[test]
    fn weight_is_exposed_as_float() {
        let product = milk(date(2030, 1, 1), dec(25, 1));
        assert_eq!(product.as_shippable().unwrap().weight(), 2.5);
        assert_eq!(product.weight(), dec(25, 1));
    }

    #[test]
    fn capabilities_follow_the_variant() {
        let electronics = laptop(dec(1, 0));
        let food = milk(date(2030, 1, 1), dec(1, 0));

        assert!(electronics.is_shippable());
        assert!(!electronics.is_perishable());
        assert!(food.is_shippable());
        assert!(food.is_perishable());
    }

    #[test]
    fn food_expiry_is_relative_to_the_given_day() {
        let food = milk(date(2024, 5, 1), dec(1, 0));
        let perishable = food.as_perishable().unwrap();
        assert_eq!(perishable.expiration_date(), date(2024, 5, 1));
        assert!(perishable.is_expired_on(date(2024, 5, 2)));
        assert!(!perishable.is_expired_on(date(2024, 5, 1)));
    }

    #[test]
    fn past_food_is_expired_and_future_food_is_not() {
        let today = chrono::Local::now().date_naive();
        let old = milk(today - chrono::Duration::days(3), dec(1, 0));
        let fresh = milk(today + chrono::Duration::days(3), dec(1, 0));
        assert!(old.as_perishable().unwrap().is_expired());
        assert!(!fresh.as_perishable().unwrap().is_expired());
    }

    #[test]
    fn negative_price_is_rejected_at_construction() {
        let err = Product::electronics(
            ProductId::new(),
            "Phone",
            category("electronics"),
            dec(-1, 0),
            12,
            dec(1, 0),
        )
        .unwrap_err();
        assert_eq!(err, DomainError::invalid_argument("Price cannot be negative."));
    }

    #[test]
    fn negative_warranty_is_rejected() {
        let err = Product::electronics(
            ProductId::new(),
            "Phone",
            category("electronics"),
            dec(100, 0),
            -1,
            dec(1, 0),
        )
        .unwrap_err();
        assert_eq!(
            err,
            DomainError::invalid_argument("Warranty months cannot be negative.")
        );
    }

    #[test]
    fn negative_weight_is_rejected_for_both_variants() {
        let expected = DomainError::invalid_argument("Weight cannot be negative.");

        let electronics = Product::electronics(
            ProductId::new(),
            "Phone",
            category("electronics"),
            dec(100, 0),
            12,
            dec(-1, 1),
        );
        assert_eq!(electronics.unwrap_err(), expected);

        let food = Product::food(
            ProductId::new(),
            "Bread",
            category("bakery"),
            dec(100, 0),
            date(2030, 1, 1),
            dec(-2, 0),
        );
        assert_eq!(food.unwrap_err(), expected);
    }

    #[test]
    fn price_is_checked_before_warranty_and_weight() {
        let err = Product::electronics(
            ProductId::new(),
            "Phone",
            category("electronics"),
            dec(-5, 0),
            -1,
            dec(-1, 0),
        )
        .unwrap_err();
        assert_eq!(err.message(), "Price cannot be negative.");
    }

    #[test]
    fn negative_price_is_rejected_for_food() {
        let err = Product::food(
            ProductId::new(),
            "Bread",
            category("bakery"),
            dec(-1, 2),
            date(2030, 1, 1),
            dec(1, 0),
        )
        .unwrap_err();
        assert_eq!(err, DomainError::invalid_argument("Price cannot be negative."));
    }

    #[test]
    fn negative_price_is_rejected_for_prebuilt_kind() {
        let kind = ProductKind::Food(Food::new(date(2030, 1, 1), dec(1, 0)).unwrap());
        let err = Product::new(ProductId::new(), "Bread", category("bakery"), dec(-3, 0), kind)
            .unwrap_err();
        assert_eq!(err, DomainError::invalid_argument("Price cannot be negative."));
    }

    #[test]
    fn food_weight_that_overflows_shipping_is_rejected() {
        let err = Product::food(
            ProductId::new(),
            "Grain silo",
            category("bulk"),
            dec(1, 0),
            date(2030, 1, 1),
            Decimal::MAX,
        )
        .unwrap_err();
        assert_eq!(err, DomainError::invalid_argument("Weight is too large to ship."));
    }

    #[test]
    fn heaviest_accepted_food_still_ships() {
        let weight = Decimal::MAX / Decimal::from(FOOD_SHIPPING_PER_KG);
        let product = Product::food(
            ProductId::new(),
            "Grain silo",
            category("bulk"),
            dec(1, 0),
            date(2030, 1, 1),
            weight,
        )
        .unwrap();
        let cost = product.as_shippable().unwrap().calculate_shipping_cost();
        assert!(cost > Decimal::ZERO);
    }

    #[test]
    fn zero_values_are_accepted() {
        let product = Product::electronics(
            ProductId::new(),
            "Cable",
            category("electronics"),
            Decimal::ZERO,
            0,
            Decimal::ZERO,
        )
        .unwrap();
        assert_eq!(product.price(), Decimal::ZERO);
    }

    #[test]
    fn rejected_price_update_keeps_old_price() {
        let mut product = laptop(dec(1, 0));
        let before = product.price();

        let err = product.update_price(dec(-1, 0)).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(product.price(), before);

        product.update_price(dec(9999, 0)).unwrap();
        assert_eq!(product.price(), dec(9999, 0));
    }

    #[test]
    fn equality_is_by_id() {
        let id = ProductId::new();
        let a = Product::electronics(id, "A", category("x"), dec(1, 0), 1, dec(1, 0)).unwrap();
        let b = Product::food(id, "B", category("y"), dec(2, 0), date(2030, 1, 1), dec(1, 0))
            .unwrap();
        assert_eq!(a, b);
        assert_ne!(a, laptop(dec(1, 0)));
        assert_eq!(a.uuid(), *Entity::id(&a));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let product = milk(date(2030, 1, 1), dec(1, 0));
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["kind"], "food");
        assert_eq!(json["category"], "Dairy");
        assert_eq!(json["expiration_date"], "2030-01-01");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: a product's price never goes negative, whatever updates are attempted.
            #[test]
            fn price_stays_non_negative(updates in prop::collection::vec(-10_000i64..10_000i64, 1..20)) {
                let mut product = laptop(dec(1, 0));
                for cents in updates {
                    let before = product.price();
                    let result = product.update_price(dec(cents, 2));
                    if cents < 0 {
                        prop_assert!(result.is_err());
                        prop_assert_eq!(product.price(), before);
                    } else {
                        prop_assert!(result.is_ok());
                        prop_assert_eq!(product.price(), dec(cents, 2));
                    }
                    prop_assert!(product.price() >= Decimal::ZERO);
                }
            }

            /// Property: food shipping is weight * 50 at two decimals.
            #[test]
            fn food_shipping_matches_formula(grams in 0i64..1_000_000i64) {
                let weight = dec(grams, 3);
                let product = milk(date(2030, 1, 1), weight);
                let cost = product.as_shippable().unwrap().calculate_shipping_cost();
                prop_assert_eq!(cost, round_money(weight * Decimal::from(50)));
                prop_assert_eq!(cost.scale(), 2);
                prop_assert!(cost >= Decimal::ZERO);
            }

            /// Property: electronics shipping is one of two fixed amounts.
            #[test]
            fn electronics_shipping_is_base_or_surcharged(grams in 0i64..50_000i64) {
                let weight = dec(grams, 3);
                let cost = laptop(weight).as_shippable().unwrap().calculate_shipping_cost();
                if grams > 5_000 {
                    prop_assert_eq!(cost, dec(128, 0));
                } else {
                    prop_assert_eq!(cost, dec(79, 0));
                }
            }
        }
    }
}
