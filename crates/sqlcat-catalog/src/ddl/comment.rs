//! COMMENT ON {SCHEMA | TABLE | COLUMN | TYPE}.

use crate::catalog::Catalog;
use crate::error::Error;
use sqlcat_ast::{CommentOnColumnStmt, CommentOnSchemaStmt, CommentOnTableStmt, CommentOnTypeStmt};

impl Catalog {
    pub(crate) fn comment_on_schema(&mut self, stmt: &CommentOnSchemaStmt) -> Result<(), Error> {
        self.get_schema_mut(&stmt.schema)?.comment = stmt.comment.clone();
        Ok(())
    }

    pub(crate) fn comment_on_table(&mut self, stmt: &CommentOnTableStmt) -> Result<(), Error> {
        self.get_table_mut(&stmt.table)?.comment = stmt.comment.clone();
        Ok(())
    }

    pub(crate) fn comment_on_column(&mut self, stmt: &CommentOnColumnStmt) -> Result<(), Error> {
        let table = self.get_table_mut(&stmt.table)?;
        table.get_column_mut(&stmt.col)?.comment = stmt.comment.clone();
        Ok(())
    }

    pub(crate) fn comment_on_type(&mut self, stmt: &CommentOnTypeStmt) -> Result<(), Error> {
        self.get_type_mut(&stmt.type_name)?
            .set_comment(stmt.comment.clone());
        Ok(())
    }
}
