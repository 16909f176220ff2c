use std::collections::HashMap;

use crate::warehouse::Warehouse;

/// Name-keyed warehouse registry: one shared [`Warehouse`] per name, created lazily.
#[derive(Debug, Default)]
pub struct WarehouseRegistry {
    warehouses: HashMap<String, Warehouse>,
}

impl WarehouseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the warehouse registered under `name`, creating it on first request.
    pub fn get_instance(&mut self, name: &str) -> &mut Warehouse {
        if !self.warehouses.contains_key(name) {
            tracing::debug!(warehouse = %name, "warehouse created");
        }
        self.warehouses
            .entry(name.to_owned())
            .or_insert_with_key(|key| Warehouse::new(key.as_str()))
    }

    /// Look up a warehouse without creating it.
    pub fn get(&self, name: &str) -> Option<&Warehouse> {
        self.warehouses.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.warehouses.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.warehouses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warehouses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use warehouse_core::ProductId;
    use warehouse_products::{Category, Product};

    fn phone() -> Product {
        Product::electronics(
            ProductId::new(),
            "Phone",
            Category::parse("electronics").unwrap(),
            Decimal::new(5999, 0),
            12,
            Decimal::new(2, 1),
        )
        .unwrap()
    }

    #[test]
    fn same_name_returns_same_instance() {
        let mut registry = WarehouseRegistry::new();
        let first: *const Warehouse = registry.get_instance("A");
        let second: *const Warehouse = registry.get_instance("A");
        assert!(std::ptr::eq(first, second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn contents_survive_between_lookups() {
        let mut registry = WarehouseRegistry::new();
        let product = phone();
        let id = product.uuid();

        registry.get_instance("A").add_product(product);
        assert!(registry.get_instance("A").product_by_id(id).is_some());
    }

    #[test]
    fn different_names_get_distinct_warehouses() {
        let mut registry = WarehouseRegistry::new();
        registry.get_instance("A").add_product(phone());

        let b = registry.get_instance("B");
        assert_eq!(b.name(), "B");
        assert!(b.is_empty());

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("A").map(Warehouse::len), Some(1));
    }

    #[test]
    fn get_does_not_create() {
        let registry = WarehouseRegistry::new();
        assert!(registry.get("missing").is_none());
        assert!(!registry.contains("missing"));
        assert!(registry.is_empty());
    }
}
