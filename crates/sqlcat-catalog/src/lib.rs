//! sqlcat catalog - schema model built from DDL.
//!
//! Replays an ordered sequence of DDL statements (from [`sqlcat_ast`]) into an
//! in-memory [`Catalog`] of schemas, tables, columns and enum types. Query
//! analysis and code generation resolve names against the result.
//!
//! Conflicts and missing objects are reported with the SQLSTATE codes
//! PostgreSQL uses:
//!
//! | Object   | Already exists | Does not exist |
//! |----------|----------------|----------------|
//! | column   | `42701`        | `42703`        |
//! | relation | `42P07`        | `42P01`        |
//! | schema   | `42P06`        | `3F000`        |
//! | type     | `42710`        | `42704`        |
//!
//! # Example
//!
//! ```rust
//! use sqlcat_ast::{ColumnDef, CreateTableStmt, Statement, TableName, TypeName};
//!
//! let stmts = vec![Statement::from(
//!     CreateTableStmt::new(TableName::new("users"))
//!         .with_column(ColumnDef::new("id", TypeName::new("integer")).not_null()),
//! )];
//!
//! let catalog = sqlcat_catalog::build(&stmts).unwrap();
//! let users = catalog.get_table(&TableName::qualified("main", "users")).unwrap();
//! assert_eq!(users.columns.len(), 1);
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
mod ddl;
pub mod error;

pub use builder::{build, CatalogBuilder};
pub use catalog::{Catalog, Column, Enum, Schema, Table, Type};
pub use config::{CatalogConfig, DEFAULT_SCHEMA};
pub use error::{Error, ErrorKind, SqlError};

/// Re-export of the statement types.
pub use sqlcat_ast as ast;
