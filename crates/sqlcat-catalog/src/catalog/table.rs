//! Tables and columns.

use crate::error::SqlError;
use rkyv::{Archive, Deserialize, Serialize};
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};
use sqlcat_ast::{ColumnDef, TableName, TypeName};

/// A table definition.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize, SerdeSerialize, SerdeDeserialize)]
pub struct Table {
    /// Qualified name; the schema is always resolved.
    pub rel: TableName,
    /// Columns in physical order.
    pub columns: Vec<Column>,
    /// Comment.
    pub comment: Option<String>,
}

/// A column definition.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize, SerdeSerialize, SerdeDeserialize)]
pub struct Column {
    /// Column name (unique within the table).
    pub name: String,
    /// Declared type, as written in the DDL.
    pub type_name: TypeName,
    /// `NOT NULL` constraint.
    pub is_not_null: bool,
    /// Array column.
    pub is_array: bool,
    /// Comment.
    pub comment: Option<String>,
}

impl Table {
    /// Create a table with no columns.
    pub fn new(rel: TableName) -> Self {
        Self {
            rel,
            columns: Vec::new(),
            comment: None,
        }
    }

    /// Add a column.
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Add multiple columns.
    pub fn with_columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Unqualified table name.
    pub fn name(&self) -> &str {
        &self.rel.name
    }

    /// Position of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Look up a column by name.
    pub fn get_column(&self, name: &str) -> Result<&Column, SqlError> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| SqlError::column_not_found(&self.rel.name, name))
    }

    /// Look up a column by name for mutation.
    pub fn get_column_mut(&mut self, name: &str) -> Result<&mut Column, SqlError> {
        let rel = &self.rel.name;
        self.columns
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| SqlError::column_not_found(rel, name))
    }

    /// Column names in physical order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}

impl Column {
    /// Create a nullable, non-array column.
    pub fn new(name: impl Into<String>, type_name: TypeName) -> Self {
        Self {
            name: name.into(),
            type_name,
            is_not_null: false,
            is_array: false,
            comment: None,
        }
    }

    /// Mark the column `NOT NULL`.
    pub fn not_null(mut self) -> Self {
        self.is_not_null = true;
        self
    }
}

impl From<&ColumnDef> for Column {
    fn from(def: &ColumnDef) -> Self {
        Self {
            name: def.colname.clone(),
            type_name: def.type_name.clone(),
            is_not_null: def.is_not_null,
            is_array: def.is_array,
            comment: None,
        }
    }
}
