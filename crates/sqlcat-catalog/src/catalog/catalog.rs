//! The catalog root and name resolution.

use super::{Schema, Table, Type};
use crate::config::CatalogConfig;
use crate::error::{Error, SqlError};
use rkyv::{Archive, Deserialize, Serialize};
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};
use sqlcat_ast::{TableName, TypeName};

/// The schema catalog of one logical database.
///
/// All lookups are linear scans; catalogs hold tens to low hundreds of
/// objects and keep creation order for enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize, SerdeSerialize, SerdeDeserialize)]
pub struct Catalog {
    /// Catalog name.
    pub name: Option<String>,
    /// Schemas in creation order.
    pub schemas: Vec<Schema>,
    /// Comment.
    pub comment: Option<String>,
    /// Schema used for unqualified names.
    pub default_schema: String,
}

impl Catalog {
    /// Create a catalog seeded with an empty default schema.
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            name: config.catalog_name.clone(),
            schemas: vec![Schema::new(config.default_schema.clone())],
            comment: None,
            default_schema: config.default_schema.clone(),
        }
    }

    /// Resolve an optional schema qualifier to a schema name.
    pub fn schema_name_for<'a>(&'a self, schema: Option<&'a str>) -> &'a str {
        match schema {
            Some(s) if !s.is_empty() => s,
            _ => &self.default_schema,
        }
    }

    /// Position of a schema by name.
    pub fn schema_index(&self, name: &str) -> Result<usize, SqlError> {
        self.schemas
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| SqlError::schema_not_found(name))
    }

    /// Look up a schema by name.
    pub fn get_schema(&self, name: &str) -> Result<&Schema, SqlError> {
        let idx = self.schema_index(name)?;
        Ok(&self.schemas[idx])
    }

    /// Look up a schema by name for mutation.
    pub fn get_schema_mut(&mut self, name: &str) -> Result<&mut Schema, SqlError> {
        let idx = self.schema_index(name)?;
        Ok(&mut self.schemas[idx])
    }

    /// Look up a table, defaulting the schema.
    pub fn get_table(&self, name: &TableName) -> Result<&Table, SqlError> {
        let ns = self.schema_name_for(name.schema());
        self.get_schema(ns)?.get_table(&name.name)
    }

    /// Look up a table for mutation, defaulting the schema.
    pub fn get_table_mut(&mut self, name: &TableName) -> Result<&mut Table, SqlError> {
        let ns = self.schema_name_for(name.schema()).to_string();
        self.get_schema_mut(&ns)?.get_table_mut(&name.name)
    }

    /// Resolve a table to `(schema index, table index)`.
    pub fn table_position(&self, name: &TableName) -> Result<(usize, usize), SqlError> {
        let ns = self.schema_name_for(name.schema());
        let schema_idx = self.schema_index(ns)?;
        let table_idx = self.schemas[schema_idx].table_index(&name.name)?;
        Ok((schema_idx, table_idx))
    }

    /// Look up a type, defaulting the schema.
    pub fn get_type(&self, name: &TypeName) -> Result<&Type, SqlError> {
        let ns = self.schema_name_for(name.schema());
        self.get_schema(ns)?.get_type(&name.name)
    }

    /// Look up a type for mutation, defaulting the schema.
    pub fn get_type_mut(&mut self, name: &TypeName) -> Result<&mut Type, SqlError> {
        let ns = self.schema_name_for(name.schema()).to_string();
        self.get_schema_mut(&ns)?.get_type_mut(&name.name)
    }

    /// Schema names in creation order.
    pub fn schema_names(&self) -> impl Iterator<Item = &str> {
        self.schemas.iter().map(|s| s.name.as_str())
    }

    /// Every table, schema by schema.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.schemas.iter().flat_map(|s| s.tables.iter())
    }

    /// Encode the catalog as an rkyv snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        rkyv::to_bytes::<rkyv::rancor::Error>(self)
            .map(|v| v.to_vec())
            .map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Decode a catalog from an rkyv snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        rkyv::from_bytes::<Self, rkyv::rancor::Error>(bytes)
            .map_err(|e| Error::Deserialization(e.to_string()))
    }

    /// Encode the catalog as JSON for downstream generators.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Decode a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::Deserialization(e.to_string()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(&CatalogConfig::default())
    }
}
