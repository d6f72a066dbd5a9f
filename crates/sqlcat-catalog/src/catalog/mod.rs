//! Entity model of the schema catalog.
//!
//! Ownership is a strict tree: a [`Catalog`] owns its schemas, a [`Schema`]
//! owns its tables and types, a [`Table`] owns its columns.

mod catalog;
mod schema;
mod table;
mod types;

pub use catalog::Catalog;
pub use schema::Schema;
pub use table::{Column, Table};
pub use types::{Enum, Type};
