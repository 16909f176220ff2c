//! Process-scoped catalog context.

use warehouse_core::DomainResult;
use warehouse_products::{Category, CategoryCache};

use crate::registry::WarehouseRegistry;
use crate::warehouse::Warehouse;

/// Owns the category cache and the warehouse registry.
///
/// Callers create one context and pass it explicitly instead of relying on global
/// state. Access from several threads needs external synchronization (e.g. a
/// `Mutex<CatalogContext>`).
#[derive(Debug, Default)]
pub struct CatalogContext {
    categories: CategoryCache,
    warehouses: WarehouseRegistry,
}

impl CatalogContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical category for `name` (see [`CategoryCache::of`]).
    pub fn category(&mut self, name: &str) -> DomainResult<Category> {
        self.categories.of(name)
    }

    /// Shared warehouse for `name` (see [`WarehouseRegistry::get_instance`]).
    pub fn warehouse(&mut self, name: &str) -> &mut Warehouse {
        self.warehouses.get_instance(name)
    }

    pub fn categories(&self) -> &CategoryCache {
        &self.categories
    }

    pub fn warehouses(&self) -> &WarehouseRegistry {
        &self.warehouses
    }
}
