//! Report binary configuration (environment-driven).

/// Default warehouse populated by the report binary.
pub const DEFAULT_WAREHOUSE_NAME: &str = "main";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Warehouse to populate and report on (`WAREHOUSE_NAME`).
    pub warehouse_name: String,
}

impl ReportConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; blank values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let warehouse_name = lookup("WAREHOUSE_NAME")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_WAREHOUSE_NAME.to_string());

        Self { warehouse_name }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
