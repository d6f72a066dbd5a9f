//! Replays DDL statements into a catalog.

use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::error::Error;
use sqlcat_ast::{Node, Statement};
use tracing::{debug, instrument, trace};

/// Build a catalog with the default configuration.
pub fn build(stmts: &[Statement]) -> Result<Catalog, Error> {
    CatalogBuilder::default().build(stmts)
}

/// Builds catalogs from statement sequences.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    config: CatalogConfig,
}

impl CatalogBuilder {
    /// Create a builder with the given configuration.
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    /// The builder's configuration.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Replay `stmts` in order into a fresh catalog.
    ///
    /// Empty statements and statement kinds the catalog does not model are
    /// skipped. The first failing statement aborts the replay; its error is
    /// returned with the statement's source location attached.
    #[instrument(skip_all, fields(statements = stmts.len()))]
    pub fn build(&self, stmts: &[Statement]) -> Result<Catalog, Error> {
        let mut catalog = Catalog::new(&self.config);
        for stmt in stmts {
            let Some(raw) = &stmt.raw else {
                continue;
            };
            self.apply(&mut catalog, &raw.stmt)
                .map_err(|e| e.with_location(raw.stmt_location))?;
        }
        debug!(
            schemas = catalog.schemas.len(),
            tables = catalog.tables().count(),
            "catalog built"
        );
        Ok(catalog)
    }

    /// Apply a single statement to an existing catalog.
    pub fn apply(&self, catalog: &mut Catalog, node: &Node) -> Result<(), Error> {
        debug!(kind = node.kind(), "applying statement");
        match node {
            Node::AlterTable(stmt) => catalog.alter_table(stmt),
            Node::AlterTableSetSchema(stmt) => catalog.set_table_schema(stmt),
            Node::AlterTypeAddValue(stmt) => catalog.alter_type_add_value(stmt),
            Node::AlterTypeRenameValue(stmt) => catalog.alter_type_rename_value(stmt),
            Node::CommentOnColumn(stmt) => catalog.comment_on_column(stmt),
            Node::CommentOnSchema(stmt) => catalog.comment_on_schema(stmt),
            Node::CommentOnTable(stmt) => catalog.comment_on_table(stmt),
            Node::CommentOnType(stmt) => catalog.comment_on_type(stmt),
            Node::CreateEnum(stmt) => catalog.create_enum(stmt),
            Node::CreateSchema(stmt) => catalog.create_schema(stmt),
            Node::CreateTable(stmt) => catalog.create_table(stmt, &self.config),
            Node::DropSchema(stmt) => catalog.drop_schema(stmt),
            Node::DropTable(stmt) => catalog.drop_table(stmt),
            Node::DropType(stmt) => catalog.drop_type(stmt),
            Node::RenameColumn(stmt) => catalog.rename_column(stmt),
            Node::RenameTable(stmt) => catalog.rename_table(stmt),
            Node::Unsupported(kind) => {
                trace!(kind = %kind, "skipping unsupported statement");
                Ok(())
            }
        }
    }
}
