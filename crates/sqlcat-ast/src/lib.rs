//! sqlcat DDL nodes
//!
//! The statement shapes a SQL parser produces for the schema catalog. The
//! catalog never parses SQL itself; a front end lowers its own syntax tree
//! into these nodes and hands over an ordered `Vec<Statement>`.
//!
//! # Example
//!
//! ```rust
//! use sqlcat_ast::{ColumnDef, CreateTableStmt, Statement, TableName, TypeName};
//!
//! let stmt = Statement::from(
//!     CreateTableStmt::new(TableName::qualified("main", "users"))
//!         .with_column(ColumnDef::new("id", TypeName::new("integer")).not_null())
//!         .with_column(ColumnDef::new("email", TypeName::new("text"))),
//! );
//! assert_eq!(stmt.node().unwrap().kind(), "CreateTable");
//! ```

pub mod ast;
pub mod name;

pub use ast::{
    AlterTableCmd, AlterTableSetSchemaStmt, AlterTableStmt, AlterTableType, AlterTypeAddValueStmt,
    AlterTypeRenameValueStmt, ColumnDef, CommentOnColumnStmt, CommentOnSchemaStmt,
    CommentOnTableStmt, CommentOnTypeStmt, CreateEnumStmt, CreateSchemaStmt, CreateTableStmt,
    DropSchemaStmt, DropTableStmt, DropTypeStmt, Node, RawStmt, RenameColumnStmt, RenameTableStmt,
    Statement,
};
pub use name::{TableName, TypeName};
