//! JSON-renderable summary of a warehouse.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use warehouse_core::ProductId;
use warehouse_products::Product;

use crate::warehouse::Warehouse;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductLine {
    pub id: ProductId,
    pub details: String,
    pub price: Decimal,
}

impl From<&Product> for ProductLine {
    fn from(product: &Product) -> Self {
        Self {
            id: product.uuid(),
            details: product.product_details(),
            price: product.price(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShippingLine {
    pub id: ProductId,
    pub name: String,
    pub weight_kg: f64,
    pub cost: Decimal,
}

/// Point-in-time view of a warehouse. Every list is sorted so output is stable
/// across runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarehouseReport {
    pub warehouse: String,
    pub as_of: NaiveDate,
    pub product_count: usize,
    pub categories: BTreeMap<String, Vec<ProductLine>>,
    pub shipping: Vec<ShippingLine>,
    pub total_shipping_cost: Decimal,
    pub expired: Vec<ProductLine>,
    pub changed: Vec<ProductLine>,
}

impl WarehouseReport {
    pub fn build(warehouse: &Warehouse, as_of: NaiveDate) -> Self {
        let categories = warehouse
            .products_grouped_by_categories()
            .into_iter()
            .map(|(category, products)| (category.name().to_string(), lines(&products)))
            .collect();

        let mut shipping: Vec<ShippingLine> = warehouse
            .shippable_products()
            .iter()
            .filter_map(|product| {
                let shippable = product.as_shippable()?;
                Some(ShippingLine {
                    id: product.uuid(),
                    name: product.name().to_string(),
                    weight_kg: shippable.weight(),
                    cost: shippable.calculate_shipping_cost(),
                })
            })
            .collect();
        shipping.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        let total_shipping_cost = shipping
            .iter()
            .try_fold(Decimal::ZERO, |total, line| total.checked_add(line.cost))
            .unwrap_or(Decimal::MAX);

        Self {
            warehouse: warehouse.name().to_string(),
            as_of,
            product_count: warehouse.len(),
            categories,
            shipping,
            total_shipping_cost,
            expired: lines(&warehouse.expired_products_on(as_of)),
            changed: lines(&warehouse.changed_products()),
        }
    }
}

fn lines(products: &[Product]) -> Vec<ProductLine> {
    let mut lines: Vec<ProductLine> = products.iter().map(ProductLine::from).collect();
    lines.sort_by(|a, b| a.details.cmp(&b.details).then(a.id.cmp(&b.id)));
    lines
}
