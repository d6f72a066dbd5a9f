//! ALTER TABLE column commands.

use crate::catalog::{Catalog, Column, Table};
use crate::error::{Error, SqlError};
use sqlcat_ast::{AlterTableCmd, AlterTableStmt, AlterTableType, ColumnDef};
use tracing::trace;

/// Whether the catalog applies this subtype. Everything else (constraints,
/// defaults, storage options) leaves the catalog untouched.
fn is_implemented(subtype: AlterTableType) -> bool {
    matches!(
        subtype,
        AlterTableType::AddColumn
            | AlterTableType::AlterColumnType
            | AlterTableType::DropColumn
            | AlterTableType::DropNotNull
            | AlterTableType::SetNotNull
    )
}

impl Catalog {
    pub(crate) fn alter_table(&mut self, stmt: &AlterTableStmt) -> Result<(), Error> {
        if !stmt.cmds.iter().any(|cmd| is_implemented(cmd.subtype)) {
            trace!(table = %stmt.table, "no catalog-relevant commands, skipping");
            return Ok(());
        }
        let table = self.get_table_mut(&stmt.table)?;

        for cmd in &stmt.cmds {
            match cmd.subtype {
                AlterTableType::AddColumn => {
                    let def = column_def(cmd)?;
                    if table.column_index(&def.colname).is_some() {
                        return Err(SqlError::column_exists(&table.rel.name, &def.colname).into());
                    }
                    table.columns.push(Column::from(def));
                }
                AlterTableType::AlterColumnType => {
                    let Some(idx) = resolve_column(table, cmd)? else {
                        continue;
                    };
                    let def = column_def(cmd)?;
                    let column = &mut table.columns[idx];
                    column.type_name = def.type_name.clone();
                    column.is_array = def.is_array;
                }
                AlterTableType::DropColumn => {
                    let Some(idx) = resolve_column(table, cmd)? else {
                        continue;
                    };
                    table.columns.remove(idx);
                }
                AlterTableType::DropNotNull => {
                    let Some(idx) = resolve_column(table, cmd)? else {
                        continue;
                    };
                    table.columns[idx].is_not_null = false;
                }
                AlterTableType::SetNotNull => {
                    let Some(idx) = resolve_column(table, cmd)? else {
                        continue;
                    };
                    table.columns[idx].is_not_null = true;
                }
                other => {
                    trace!(table = %table.rel, subtype = ?other, "unsupported alter command");
                }
            }
        }
        Ok(())
    }
}

/// Index of the column a command addresses. `Ok(None)` when it is missing and
/// the command tolerates that.
fn resolve_column(table: &Table, cmd: &AlterTableCmd) -> Result<Option<usize>, Error> {
    let name = cmd.name.as_deref().ok_or_else(|| {
        Error::invalid(format!(
            "alter table {}: {:?} without a column name",
            table.rel, cmd.subtype
        ))
    })?;
    match table.column_index(name) {
        Some(idx) => Ok(Some(idx)),
        None if cmd.missing_ok => Ok(None),
        None => Err(SqlError::column_not_found(&table.rel.name, name).into()),
    }
}

fn column_def(cmd: &AlterTableCmd) -> Result<&ColumnDef, Error> {
    cmd.def.as_ref().ok_or_else(|| {
        Error::invalid(format!(
            "alter table: {:?} without a column definition",
            cmd.subtype
        ))
    })
}
