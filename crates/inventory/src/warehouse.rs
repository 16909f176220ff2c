use std::collections::{HashMap, HashSet};

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use warehouse_core::{DomainError, DomainResult, ProductId};
use warehouse_products::{Category, Product};

/// A named product store with price-change tracking.
///
/// Products are keyed by id (adding the same id twice keeps the last one). Every
/// id in the changed-set is also present in the main store; removing or clearing
/// products drops them from both.
#[derive(Debug, Clone)]
pub struct Warehouse {
    name: String,
    products: HashMap<ProductId, Product>,
    changed: HashSet<ProductId>,
}

impl Warehouse {
    /// Create a standalone, empty warehouse.
    ///
    /// Use [`crate::WarehouseRegistry::get_instance`] to share one instance per name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            products: HashMap::new(),
            changed: HashSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert a product, replacing any stored product with the same id.
    pub fn add_product(&mut self, product: Product) {
        let id = product.uuid();
        let replaced = self.products.insert(id, product).is_some();
        tracing::debug!(warehouse = %self.name, product_id = %id, replaced, "product added");
    }

    /// Snapshot of every stored product (order unspecified).
    pub fn products(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    pub fn product_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Update a stored product's price and record it as changed.
    ///
    /// Unknown ids fail with `NotFound`; negative prices fail with `InvalidArgument`
    /// and leave both the price and the changed-set untouched.
    pub fn update_product_price(&mut self, id: ProductId, new_price: Decimal) -> DomainResult<()> {
        let Some(product) = self.products.get_mut(&id) else {
            tracing::warn!(warehouse = %self.name, product_id = %id, "price update for unknown product");
            return Err(DomainError::not_found(format!(
                "Product not found with id: {id}"
            )));
        };

        product.update_price(new_price)?;
        self.changed.insert(id);
        tracing::debug!(warehouse = %self.name, product_id = %id, price = %new_price, "price updated");
        Ok(())
    }

    /// Snapshot of the products whose price was updated since the last clear.
    pub fn changed_products(&self) -> Vec<Product> {
        self.changed
            .iter()
            .filter_map(|id| self.products.get(id))
            .cloned()
            .collect()
    }

    /// Perishable products whose expiration date is before today (local date).
    pub fn expired_products(&self) -> Vec<Product> {
        self.expired_products_on(Local::now().date_naive())
    }

    /// Perishable products whose expiration date is before `today`.
    pub fn expired_products_on(&self, today: NaiveDate) -> Vec<Product> {
        self.products
            .values()
            .filter(|product| {
                product
                    .as_perishable()
                    .is_some_and(|perishable| perishable.is_expired_on(today))
            })
            .cloned()
            .collect()
    }

    /// Every product that can be shipped, expired or not.
    pub fn shippable_products(&self) -> Vec<Product> {
        self.products
            .values()
            .filter(|product| product.is_shippable())
            .cloned()
            .collect()
    }

    /// Remove a product from the store and the changed-set. Unknown ids are ignored.
    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        self.changed.remove(&id);
        let removed = self.products.remove(&id);
        if removed.is_some() {
            tracing::debug!(warehouse = %self.name, product_id = %id, "product removed");
        }
        removed
    }

    pub fn clear_products(&mut self) {
        self.products.clear();
        self.changed.clear();
        tracing::debug!(warehouse = %self.name, "products cleared");
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Partition the current products by category.
    pub fn products_grouped_by_categories(&self) -> HashMap<Category, Vec<Product>> {
        let mut groups: HashMap<Category, Vec<Product>> = HashMap::new();
        for product in self.products.values() {
            groups
                .entry(product.category().clone())
                .or_default()
                .push(product.clone());
        }
        groups
    }
}
