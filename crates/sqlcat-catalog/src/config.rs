//! Catalog build configuration.

use serde::{Deserialize, Serialize};

/// Default schema for unqualified names.
pub const DEFAULT_SCHEMA: &str = "main";

/// Options for building a catalog.
///
/// Derives serde traits so a host tool can embed it in its own configuration
/// file; reading that file is up to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Schema that unqualified names resolve to. The catalog is seeded with
    /// an empty schema of this name.
    pub default_schema: String,

    /// Name recorded on the built catalog.
    pub catalog_name: Option<String>,

    /// Reject `CREATE TABLE` of an existing table with `42P07` instead of
    /// appending a second table of the same name.
    pub reject_duplicate_tables: bool,
}

impl CatalogConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default schema (e.g. `"public"` for PostgreSQL).
    pub fn with_default_schema(mut self, schema: impl Into<String>) -> Self {
        self.default_schema = schema.into();
        self
    }

    /// Set the catalog name.
    pub fn with_catalog_name(mut self, name: impl Into<String>) -> Self {
        self.catalog_name = Some(name.into());
        self
    }

    /// Fail on duplicate `CREATE TABLE` instead of appending.
    pub fn with_reject_duplicate_tables(mut self, reject: bool) -> Self {
        self.reject_duplicate_tables = reject;
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_schema: DEFAULT_SCHEMA.to_string(),
            catalog_name: None,
            reject_duplicate_tables: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.default_schema, "main");
        assert!(config.catalog_name.is_none());
        assert!(!config.reject_duplicate_tables);
    }

    #[test]
    fn test_builder_chain() {
        let config = CatalogConfig::new()
            .with_default_schema("public")
            .with_catalog_name("app")
            .with_reject_duplicate_tables(true);

        assert_eq!(config.default_schema, "public");
        assert_eq!(config.catalog_name.as_deref(), Some("app"));
        assert!(config.reject_duplicate_tables);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: CatalogConfig =
            serde_json::from_str(r#"{ "default_schema": "public" }"#).unwrap();
        assert_eq!(config.default_schema, "public");
        assert!(!config.reject_duplicate_tables);
    }
}
