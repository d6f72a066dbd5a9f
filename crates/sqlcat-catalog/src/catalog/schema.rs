//! Schemas: named namespaces of tables and types.

use super::{Table, Type};
use crate::error::SqlError;
use rkyv::{Archive, Deserialize, Serialize};
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A named namespace holding tables and types.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize, SerdeSerialize, SerdeDeserialize)]
pub struct Schema {
    /// Schema name (unique within the catalog).
    pub name: String,
    /// Tables in creation order.
    pub tables: Vec<Table>,
    /// Types in creation order.
    pub types: Vec<Type>,
    /// Comment.
    pub comment: Option<String>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: Vec::new(),
            types: Vec::new(),
            comment: None,
        }
    }

    /// Add a table.
    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    /// Add a type.
    pub fn with_type(mut self, typ: impl Into<Type>) -> Self {
        self.types.push(typ.into());
        self
    }

    /// Position of the first table named `name`.
    pub fn table_index(&self, name: &str) -> Result<usize, SqlError> {
        self.tables
            .iter()
            .position(|t| t.rel.name == name)
            .ok_or_else(|| SqlError::relation_not_found(name))
    }

    /// Look up a table by unqualified name.
    pub fn get_table(&self, name: &str) -> Result<&Table, SqlError> {
        let idx = self.table_index(name)?;
        Ok(&self.tables[idx])
    }

    /// Look up a table by unqualified name for mutation.
    pub fn get_table_mut(&mut self, name: &str) -> Result<&mut Table, SqlError> {
        let idx = self.table_index(name)?;
        Ok(&mut self.tables[idx])
    }

    /// Position of the type named `name`.
    pub fn type_index(&self, name: &str) -> Result<usize, SqlError> {
        self.types
            .iter()
            .position(|t| match t {
                Type::Enum(e) => e.name == name,
            })
            .ok_or_else(|| SqlError::type_not_found(name))
    }

    /// Look up a type by unqualified name.
    pub fn get_type(&self, name: &str) -> Result<&Type, SqlError> {
        let idx = self.type_index(name)?;
        Ok(&self.types[idx])
    }

    /// Look up a type by unqualified name for mutation.
    pub fn get_type_mut(&mut self, name: &str) -> Result<&mut Type, SqlError> {
        let idx = self.type_index(name)?;
        Ok(&mut self.types[idx])
    }

    /// Table names in creation order.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.rel.name.as_str())
    }

    /// Type names in creation order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(Type::name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Column, Enum};
    use sqlcat_ast::{TableName, TypeName};

    fn sample_schema() -> Schema {
        Schema::new("main")
            .with_table(
                Table::new(TableName::qualified("main", "users"))
                    .with_column(Column::new("id", TypeName::new("integer"))),
            )
            .with_table(Table::new(TableName::qualified("main", "posts")))
            .with_type(Enum::new("mood", ["sad", "happy"]))
    }

    #[test]
    fn test_table_lookup() {
        let schema = sample_schema();
        assert_eq!(schema.table_index("posts").unwrap(), 1);
        assert_eq!(schema.get_table("users").unwrap().columns.len(), 1);

        let err = schema.get_table("comments").unwrap_err();
        assert_eq!(err.code, "42P01");
    }

    #[test]
    fn test_type_lookup() {
        let schema = sample_schema();
        assert_eq!(schema.get_type("mood").unwrap().name(), "mood");

        let err = schema.get_type("color").unwrap_err();
        assert_eq!(err.code, "42704");
        assert_eq!(err.to_string(), "type \"color\" does not exist");
    }

    #[test]
    fn test_types_do_not_resolve_as_tables() {
        let schema = sample_schema();
        assert!(schema.get_table("mood").is_err());
        assert!(schema.get_type("users").is_err());
    }

    #[test]
    fn test_names_in_order() {
        let schema = sample_schema();
        assert_eq!(schema.table_names().collect::<Vec<_>>(), vec!["users", "posts"]);
        assert_eq!(schema.type_names().collect::<Vec<_>>(), vec!["mood"]);
    }
}
