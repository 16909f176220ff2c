//! Inventory domain module.
//!
//! Named warehouses holding catalog products, the registry that hands out one
//! warehouse per name, and the context object owning both the registry and the
//! category cache. Pure in-memory logic (no IO, no storage).

pub mod config;
pub mod context;
pub mod registry;
pub mod report;
pub mod warehouse;

pub use config::ReportConfig;
pub use context::CatalogContext;
pub use registry::WarehouseRegistry;
pub use report::WarehouseReport;
pub use warehouse::Warehouse;
