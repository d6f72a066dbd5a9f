//! Per-statement catalog mutations.
//!
//! Each handler is an `impl Catalog` method that validates against the
//! current state and mutates in place. Handlers stop at the first failure;
//! changes made before it stay applied.

mod alter;
mod comment;
mod enums;
mod schema;
mod table;
