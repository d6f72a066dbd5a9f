//! CREATE TYPE ... AS ENUM, DROP TYPE and ALTER TYPE label changes.

use crate::catalog::{Catalog, Enum, Type};
use crate::error::{Error, SqlError};
use sqlcat_ast::{AlterTypeAddValueStmt, AlterTypeRenameValueStmt, CreateEnumStmt, DropTypeStmt};
use tracing::{debug, trace};

impl Catalog {
    pub(crate) fn create_enum(&mut self, stmt: &CreateEnumStmt) -> Result<(), Error> {
        let ns = self.schema_name_for(stmt.type_name.schema()).to_string();
        let schema = self.get_schema_mut(&ns)?;
        let name = &stmt.type_name.name;
        // A table's row type lives in the type namespace, so the name clash
        // is reported against the relation.
        if schema.table_index(name).is_ok() {
            return Err(SqlError::relation_exists(name).into());
        }
        if schema.type_index(name).is_ok() {
            return Err(SqlError::type_exists(name).into());
        }
        schema
            .types
            .push(Type::Enum(Enum::new(name.clone(), stmt.vals.iter().cloned())));
        debug!(schema = %ns, type_name = %name, labels = stmt.vals.len(), "created enum");
        Ok(())
    }

    pub(crate) fn drop_type(&mut self, stmt: &DropTypeStmt) -> Result<(), Error> {
        for name in &stmt.types {
            let ns = self.schema_name_for(name.schema()).to_string();
            let schema = match self.get_schema_mut(&ns) {
                Ok(schema) => schema,
                Err(_) if stmt.if_exists => continue,
                Err(e) => return Err(e.into()),
            };
            let idx = match schema.type_index(&name.name) {
                Ok(idx) => idx,
                Err(_) if stmt.if_exists => {
                    trace!(type_name = %name, "type missing, skipping");
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            schema.types.remove(idx);
            debug!(type_name = %name, "dropped type");
        }
        Ok(())
    }

    pub(crate) fn alter_type_add_value(&mut self, stmt: &AlterTypeAddValueStmt) -> Result<(), Error> {
        let Type::Enum(e) = self.get_type_mut(&stmt.type_name)?;
        if e.value_index(&stmt.new_value).is_some() {
            if stmt.skip_if_new_val_exists {
                return Ok(());
            }
            return Err(Error::enum_label(
                &e.name,
                format!("already has value \"{}\"", stmt.new_value),
            ));
        }
        let idx = match stmt.new_val_neighbor.as_deref() {
            None => e.vals.len(),
            Some(neighbor) => {
                let pos = e.value_index(neighbor).ok_or_else(|| {
                    Error::enum_label(
                        &e.name,
                        format!(
                            "unable to find existing neighbor value \"{}\" for new value \"{}\"",
                            neighbor, stmt.new_value
                        ),
                    )
                })?;
                if stmt.new_val_is_after {
                    pos + 1
                } else {
                    pos
                }
            }
        };
        e.vals.insert(idx, stmt.new_value.clone());
        Ok(())
    }

    pub(crate) fn alter_type_rename_value(
        &mut self,
        stmt: &AlterTypeRenameValueStmt,
    ) -> Result<(), Error> {
        let Type::Enum(e) = self.get_type_mut(&stmt.type_name)?;
        let idx = e.value_index(&stmt.old_value).ok_or_else(|| {
            Error::enum_label(&e.name, format!("does not have value \"{}\"", stmt.old_value))
        })?;
        if e.value_index(&stmt.new_value).is_some() {
            return Err(Error::enum_label(
                &e.name,
                format!("already has value \"{}\"", stmt.new_value),
            ));
        }
        e.vals[idx] = stmt.new_value.clone();
        Ok(())
    }
}
