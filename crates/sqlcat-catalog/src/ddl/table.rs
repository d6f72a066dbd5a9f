//! CREATE TABLE, DROP TABLE, and the table-level ALTER TABLE forms
//! (RENAME, RENAME COLUMN, SET SCHEMA).

use crate::catalog::{Catalog, Column, Table};
use crate::config::CatalogConfig;
use crate::error::{Error, SqlError};
use sqlcat_ast::{
    AlterTableSetSchemaStmt, CreateTableStmt, DropTableStmt, RenameColumnStmt, RenameTableStmt,
    TableName,
};
use tracing::{debug, trace, warn};

impl Catalog {
    pub(crate) fn create_table(
        &mut self,
        stmt: &CreateTableStmt,
        config: &CatalogConfig,
    ) -> Result<(), Error> {
        let ns = self.schema_name_for(stmt.name.schema()).to_string();
        let schema = self.get_schema_mut(&ns)?;
        if schema.table_index(&stmt.name.name).is_ok() {
            if stmt.if_not_exists {
                trace!(table = %stmt.name, "table exists, skipping");
                return Ok(());
            }
            if config.reject_duplicate_tables {
                return Err(SqlError::relation_exists(&stmt.name.name).into());
            }
            warn!(table = %stmt.name, "table already exists, appending a duplicate");
        }
        let table = Table::new(TableName::qualified(ns, stmt.name.name.clone()))
            .with_columns(stmt.cols.iter().map(Column::from));
        debug!(table = %table.rel, columns = table.columns.len(), "created table");
        schema.tables.push(table);
        Ok(())
    }

    pub(crate) fn drop_table(&mut self, stmt: &DropTableStmt) -> Result<(), Error> {
        for name in &stmt.tables {
            let ns = self.schema_name_for(name.schema()).to_string();
            let schema = match self.get_schema_mut(&ns) {
                Ok(schema) => schema,
                Err(_) if stmt.if_exists => continue,
                Err(e) => return Err(e.into()),
            };
            let idx = match schema.table_index(&name.name) {
                Ok(idx) => idx,
                Err(_) if stmt.if_exists => {
                    trace!(table = %name, "table missing, skipping");
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            schema.tables.remove(idx);
            debug!(table = %name, "dropped table");
        }
        Ok(())
    }

    pub(crate) fn rename_table(&mut self, stmt: &RenameTableStmt) -> Result<(), Error> {
        let Some((schema_idx, table_idx)) = self.locate_table(&stmt.table, stmt.missing_ok)?
        else {
            return Ok(());
        };
        let schema = &mut self.schemas[schema_idx];
        // Tables and types share one namespace per schema.
        if schema.table_index(&stmt.new_name).is_ok()
            || schema.type_index(&stmt.new_name).is_ok()
        {
            return Err(SqlError::relation_exists(&stmt.new_name).into());
        }
        let table = &mut schema.tables[table_idx];
        debug!(from = %table.rel, to = %stmt.new_name, "renamed table");
        table.rel.name = stmt.new_name.clone();
        Ok(())
    }

    pub(crate) fn rename_column(&mut self, stmt: &RenameColumnStmt) -> Result<(), Error> {
        let Some((schema_idx, table_idx)) = self.locate_table(&stmt.table, stmt.missing_ok)?
        else {
            return Ok(());
        };
        let table = &mut self.schemas[schema_idx].tables[table_idx];
        let idx = table
            .column_index(&stmt.col)
            .ok_or_else(|| SqlError::column_not_found(&table.rel.name, &stmt.col))?;
        if table.column_index(&stmt.new_name).is_some() {
            return Err(SqlError::column_exists(&table.rel.name, &stmt.new_name).into());
        }
        table.columns[idx].name = stmt.new_name.clone();
        Ok(())
    }

    pub(crate) fn set_table_schema(&mut self, stmt: &AlterTableSetSchemaStmt) -> Result<(), Error> {
        let Some((from_idx, table_idx)) = self.locate_table(&stmt.table, stmt.missing_ok)? else {
            return Ok(());
        };
        let to_idx = self.schema_index(&stmt.new_schema)?;
        if to_idx == from_idx {
            trace!(table = %stmt.table, "table already in target schema");
            return Ok(());
        }
        let target = &self.schemas[to_idx];
        if target.table_index(&stmt.table.name).is_ok()
            || target.type_index(&stmt.table.name).is_ok()
        {
            return Err(SqlError::relation_exists(&stmt.table.name).into());
        }
        let mut table = self.schemas[from_idx].tables.remove(table_idx);
        table.rel.schema = Some(stmt.new_schema.clone());
        debug!(table = %table.rel, "moved table");
        self.schemas[to_idx].tables.push(table);
        Ok(())
    }

    /// Resolve a table for an `ALTER TABLE [IF EXISTS]` form. `Ok(None)` means
    /// the table (or its schema) is missing and `missing_ok` was set.
    fn locate_table(
        &self,
        name: &TableName,
        missing_ok: bool,
    ) -> Result<Option<(usize, usize)>, Error> {
        match self.table_position(name) {
            Ok(pos) => Ok(Some(pos)),
            Err(_) if missing_ok => {
                trace!(table = %name, "table missing, skipping");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
