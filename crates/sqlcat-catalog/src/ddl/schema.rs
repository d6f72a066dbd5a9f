//! CREATE SCHEMA / DROP SCHEMA.

use crate::catalog::{Catalog, Schema};
use crate::error::{Error, SqlError};
use sqlcat_ast::{CreateSchemaStmt, DropSchemaStmt};
use tracing::{debug, trace};

impl Catalog {
    pub(crate) fn create_schema(&mut self, stmt: &CreateSchemaStmt) -> Result<(), Error> {
        let name = match stmt.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => return Err(Error::invalid("create schema: empty name")),
        };
        if self.schema_index(name).is_ok() {
            if stmt.if_not_exists {
                trace!(schema = name, "schema exists, skipping");
                return Ok(());
            }
            return Err(SqlError::schema_exists(name).into());
        }
        self.schemas.push(Schema::new(name));
        debug!(schema = name, "created schema");
        Ok(())
    }

    pub(crate) fn drop_schema(&mut self, stmt: &DropSchemaStmt) -> Result<(), Error> {
        // Quadratic in the number of names; fine at catalog scale.
        for name in &stmt.schemas {
            match self.schema_index(name) {
                Ok(idx) => {
                    self.schemas.remove(idx);
                    debug!(schema = %name, "dropped schema");
                }
                Err(_) if stmt.missing_ok => {
                    trace!(schema = %name, "schema missing, skipping");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}
