//! DDL statement nodes.
//!
//! These are the shapes an external SQL parser hands to the catalog. Only the
//! fields the catalog reads are modelled; anything else the parser knows about
//! a statement stays on its side of the boundary.

use crate::name::{TableName, TypeName};
use serde::{Deserialize, Serialize};

/// One entry of a parsed SQL file.
///
/// `raw` is `None` for entries that carry no statement (comments, blank
/// input between semicolons); the catalog skips them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Statement {
    /// The parsed statement, if any.
    pub raw: Option<RawStmt>,
}

impl Statement {
    /// Create a statement carrying `node` at source offset 0.
    pub fn new(node: impl Into<Node>) -> Self {
        Self {
            raw: Some(RawStmt::new(node)),
        }
    }

    /// Create an empty statement.
    pub fn empty() -> Self {
        Self { raw: None }
    }

    /// Set the source location of the wrapped statement.
    pub fn at(mut self, location: usize, len: usize) -> Self {
        if let Some(raw) = self.raw.as_mut() {
            raw.stmt_location = location;
            raw.stmt_len = len;
        }
        self
    }

    /// The wrapped node, if any.
    pub fn node(&self) -> Option<&Node> {
        self.raw.as_ref().map(|raw| &raw.stmt)
    }
}

/// A statement together with its position in the source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawStmt {
    /// The statement node.
    pub stmt: Node,
    /// Byte offset of the statement in the source.
    pub stmt_location: usize,
    /// Length of the statement in bytes.
    pub stmt_len: usize,
}

impl RawStmt {
    /// Wrap a node with a zero location.
    pub fn new(node: impl Into<Node>) -> Self {
        Self {
            stmt: node.into(),
            stmt_location: 0,
            stmt_len: 0,
        }
    }
}

/// The concrete kind of a DDL statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// `ALTER TABLE ... <commands>`.
    AlterTable(AlterTableStmt),
    /// `ALTER TABLE ... SET SCHEMA ...`.
    AlterTableSetSchema(AlterTableSetSchemaStmt),
    /// `ALTER TYPE ... ADD VALUE ...`.
    AlterTypeAddValue(AlterTypeAddValueStmt),
    /// `ALTER TYPE ... RENAME VALUE ... TO ...`.
    AlterTypeRenameValue(AlterTypeRenameValueStmt),
    /// `COMMENT ON COLUMN ...`.
    CommentOnColumn(CommentOnColumnStmt),
    /// `COMMENT ON SCHEMA ...`.
    CommentOnSchema(CommentOnSchemaStmt),
    /// `COMMENT ON TABLE ...`.
    CommentOnTable(CommentOnTableStmt),
    /// `COMMENT ON TYPE ...`.
    CommentOnType(CommentOnTypeStmt),
    /// `CREATE TYPE ... AS ENUM (...)`.
    CreateEnum(CreateEnumStmt),
    /// `CREATE SCHEMA ...`.
    CreateSchema(CreateSchemaStmt),
    /// `CREATE TABLE ...`.
    CreateTable(CreateTableStmt),
    /// `DROP SCHEMA ...`.
    DropSchema(DropSchemaStmt),
    /// `DROP TABLE ...`.
    DropTable(DropTableStmt),
    /// `DROP TYPE ...`.
    DropType(DropTypeStmt),
    /// `ALTER TABLE ... RENAME COLUMN ... TO ...`.
    RenameColumn(RenameColumnStmt),
    /// `ALTER TABLE ... RENAME TO ...`.
    RenameTable(RenameTableStmt),
    /// Any statement the catalog does not model, named by its kind
    /// (e.g. `"CreateFunctionStmt"`).
    Unsupported(String),
}

impl Node {
    /// Short name of the statement kind, for diagnostics.
    pub fn kind(&self) -> &str {
        match self {
            Node::AlterTable(_) => "AlterTable",
            Node::AlterTableSetSchema(_) => "AlterTableSetSchema",
            Node::AlterTypeAddValue(_) => "AlterTypeAddValue",
            Node::AlterTypeRenameValue(_) => "AlterTypeRenameValue",
            Node::CommentOnColumn(_) => "CommentOnColumn",
            Node::CommentOnSchema(_) => "CommentOnSchema",
            Node::CommentOnTable(_) => "CommentOnTable",
            Node::CommentOnType(_) => "CommentOnType",
            Node::CreateEnum(_) => "CreateEnum",
            Node::CreateSchema(_) => "CreateSchema",
            Node::CreateTable(_) => "CreateTable",
            Node::DropSchema(_) => "DropSchema",
            Node::DropTable(_) => "DropTable",
            Node::DropType(_) => "DropType",
            Node::RenameColumn(_) => "RenameColumn",
            Node::RenameTable(_) => "RenameTable",
            Node::Unsupported(kind) => kind,
        }
    }
}

macro_rules! impl_from_stmt {
    ($($stmt:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$stmt> for Node {
                fn from(stmt: $stmt) -> Self {
                    Node::$variant(stmt)
                }
            }

            impl From<$stmt> for Statement {
                fn from(stmt: $stmt) -> Self {
                    Statement::new(stmt)
                }
            }
        )*
    };
}

impl_from_stmt! {
    AlterTableStmt => AlterTable,
    AlterTableSetSchemaStmt => AlterTableSetSchema,
    AlterTypeAddValueStmt => AlterTypeAddValue,
    AlterTypeRenameValueStmt => AlterTypeRenameValue,
    CommentOnColumnStmt => CommentOnColumn,
    CommentOnSchemaStmt => CommentOnSchema,
    CommentOnTableStmt => CommentOnTable,
    CommentOnTypeStmt => CommentOnType,
    CreateEnumStmt => CreateEnum,
    CreateSchemaStmt => CreateSchema,
    CreateTableStmt => CreateTable,
    DropSchemaStmt => DropSchema,
    DropTableStmt => DropTable,
    DropTypeStmt => DropType,
    RenameColumnStmt => RenameColumn,
    RenameTableStmt => RenameTable,
}

impl From<Node> for Statement {
    fn from(node: Node) -> Self {
        Statement::new(node)
    }
}

/// A column definition inside `CREATE TABLE` or `ADD COLUMN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Column name.
    pub colname: String,
    /// Declared type.
    pub type_name: TypeName,
    /// `NOT NULL` was declared.
    pub is_not_null: bool,
    /// The type carries array bounds (`text[]`).
    pub is_array: bool,
}

impl ColumnDef {
    /// Create a nullable, non-array column.
    pub fn new(colname: impl Into<String>, type_name: TypeName) -> Self {
        Self {
            colname: colname.into(),
            type_name,
            is_not_null: false,
            is_array: false,
        }
    }

    /// Mark the column `NOT NULL`.
    pub fn not_null(mut self) -> Self {
        self.is_not_null = true;
        self
    }

    /// Mark the column as an array.
    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }
}

/// `CREATE SCHEMA [IF NOT EXISTS] name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSchemaStmt {
    /// Schema name; parsers leave this empty for `AUTHORIZATION`-only forms.
    pub name: Option<String>,
    pub if_not_exists: bool,
}

impl CreateSchemaStmt {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            if_not_exists: false,
        }
    }

    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }
}

/// `DROP SCHEMA [IF EXISTS] a, b, ...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropSchemaStmt {
    pub schemas: Vec<String>,
    pub missing_ok: bool,
}

impl DropSchemaStmt {
    pub fn new<I, S>(schemas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            schemas: schemas.into_iter().map(Into::into).collect(),
            missing_ok: false,
        }
    }

    pub fn missing_ok(mut self) -> Self {
        self.missing_ok = true;
        self
    }
}

/// `CREATE TABLE [IF NOT EXISTS] name (columns...)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTableStmt {
    pub if_not_exists: bool,
    pub name: TableName,
    /// Column definitions in declaration order.
    pub cols: Vec<ColumnDef>,
}

impl CreateTableStmt {
    pub fn new(name: TableName) -> Self {
        Self {
            if_not_exists: false,
            name,
            cols: Vec::new(),
        }
    }

    /// Append a column definition.
    pub fn with_column(mut self, col: ColumnDef) -> Self {
        self.cols.push(col);
        self
    }

    /// Append several column definitions.
    pub fn with_columns(mut self, cols: impl IntoIterator<Item = ColumnDef>) -> Self {
        self.cols.extend(cols);
        self
    }

    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }
}

/// `DROP TABLE [IF EXISTS] a, b, ...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropTableStmt {
    pub if_exists: bool,
    pub tables: Vec<TableName>,
}

impl DropTableStmt {
    pub fn new(tables: impl IntoIterator<Item = TableName>) -> Self {
        Self {
            if_exists: false,
            tables: tables.into_iter().collect(),
        }
    }

    pub fn if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }
}

/// Subcommand kind of an `ALTER TABLE` command.
///
/// Mirrors the subtype tags common SQL parsers emit. Only the first five are
/// applied to the catalog; the rest exist so parsers can report them faithfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlterTableType {
    AddColumn,
    AlterColumnType,
    DropColumn,
    DropNotNull,
    SetNotNull,
    ColumnDefault,
    AddConstraint,
    DropConstraint,
    AddIndex,
    SetStatistics,
    SetStorage,
    ChangeOwner,
}

/// One command of an `ALTER TABLE` statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlterTableCmd {
    pub subtype: AlterTableType,
    /// Target column for column-addressed subtypes.
    pub name: Option<String>,
    /// Column definition for `ADD COLUMN` and `ALTER COLUMN ... TYPE`.
    pub def: Option<ColumnDef>,
    /// `IF EXISTS` on the column (`DROP COLUMN IF EXISTS c`).
    pub missing_ok: bool,
}

impl AlterTableCmd {
    fn new(subtype: AlterTableType) -> Self {
        Self {
            subtype,
            name: None,
            def: None,
            missing_ok: false,
        }
    }

    /// `ADD COLUMN <def>`.
    pub fn add_column(def: ColumnDef) -> Self {
        Self {
            def: Some(def),
            ..Self::new(AlterTableType::AddColumn)
        }
    }

    /// `ALTER COLUMN <name> TYPE <type>`.
    pub fn alter_column_type(name: impl Into<String>, type_name: TypeName) -> Self {
        let name = name.into();
        Self {
            def: Some(ColumnDef::new(name.clone(), type_name)),
            name: Some(name),
            ..Self::new(AlterTableType::AlterColumnType)
        }
    }

    /// `DROP COLUMN <name>`.
    pub fn drop_column(name: impl Into<String>) -> Self {
        Self::column(AlterTableType::DropColumn, name)
    }

    /// `ALTER COLUMN <name> DROP NOT NULL`.
    pub fn drop_not_null(name: impl Into<String>) -> Self {
        Self::column(AlterTableType::DropNotNull, name)
    }

    /// `ALTER COLUMN <name> SET NOT NULL`.
    pub fn set_not_null(name: impl Into<String>) -> Self {
        Self::column(AlterTableType::SetNotNull, name)
    }

    /// A command of any subtype addressed at a column.
    pub fn column(subtype: AlterTableType, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(subtype)
        }
    }

    /// A command that carries no column, such as `ADD CONSTRAINT`.
    pub fn other(subtype: AlterTableType) -> Self {
        Self::new(subtype)
    }

    /// Tolerate a missing target column.
    pub fn missing_ok(mut self) -> Self {
        self.missing_ok = true;
        self
    }
}

/// `ALTER TABLE name <cmd>, <cmd>, ...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlterTableStmt {
    pub table: TableName,
    pub cmds: Vec<AlterTableCmd>,
}

impl AlterTableStmt {
    pub fn new(table: TableName) -> Self {
        Self {
            table,
            cmds: Vec::new(),
        }
    }

    pub fn with_cmd(mut self, cmd: AlterTableCmd) -> Self {
        self.cmds.push(cmd);
        self
    }
}

/// `ALTER TABLE [IF EXISTS] name RENAME TO new_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameTableStmt {
    pub table: TableName,
    pub new_name: String,
    pub missing_ok: bool,
}

impl RenameTableStmt {
    pub fn new(table: TableName, new_name: impl Into<String>) -> Self {
        Self {
            table,
            new_name: new_name.into(),
            missing_ok: false,
        }
    }

    pub fn missing_ok(mut self) -> Self {
        self.missing_ok = true;
        self
    }
}

/// `ALTER TABLE [IF EXISTS] name RENAME COLUMN col TO new_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameColumnStmt {
    pub table: TableName,
    pub col: String,
    pub new_name: String,
    pub missing_ok: bool,
}

impl RenameColumnStmt {
    pub fn new(table: TableName, col: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self {
            table,
            col: col.into(),
            new_name: new_name.into(),
            missing_ok: false,
        }
    }

    pub fn missing_ok(mut self) -> Self {
        self.missing_ok = true;
        self
    }
}

/// `ALTER TABLE [IF EXISTS] name SET SCHEMA new_schema`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlterTableSetSchemaStmt {
    pub table: TableName,
    pub new_schema: String,
    pub missing_ok: bool,
}

impl AlterTableSetSchemaStmt {
    pub fn new(table: TableName, new_schema: impl Into<String>) -> Self {
        Self {
            table,
            new_schema: new_schema.into(),
            missing_ok: false,
        }
    }

    pub fn missing_ok(mut self) -> Self {
        self.missing_ok = true;
        self
    }
}

/// `CREATE TYPE name AS ENUM ('a', 'b', ...)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEnumStmt {
    pub type_name: TypeName,
    /// Labels in declaration order.
    pub vals: Vec<String>,
}

impl CreateEnumStmt {
    pub fn new<I, S>(type_name: TypeName, vals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            type_name,
            vals: vals.into_iter().map(Into::into).collect(),
        }
    }
}

/// `DROP TYPE [IF EXISTS] a, b, ...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropTypeStmt {
    pub if_exists: bool,
    pub types: Vec<TypeName>,
}

impl DropTypeStmt {
    pub fn new(types: impl IntoIterator<Item = TypeName>) -> Self {
        Self {
            if_exists: false,
            types: types.into_iter().collect(),
        }
    }

    pub fn if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }
}

/// `ALTER TYPE name ADD VALUE [IF NOT EXISTS] 'v' [{BEFORE | AFTER} 'n']`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlterTypeAddValueStmt {
    pub type_name: TypeName,
    pub new_value: String,
    /// Existing label to position the new one against.
    pub new_val_neighbor: Option<String>,
    /// Insert after the neighbor rather than before it.
    pub new_val_is_after: bool,
    pub skip_if_new_val_exists: bool,
}

impl AlterTypeAddValueStmt {
    /// Append `new_value` to the end of the label list.
    pub fn new(type_name: TypeName, new_value: impl Into<String>) -> Self {
        Self {
            type_name,
            new_value: new_value.into(),
            new_val_neighbor: None,
            new_val_is_after: false,
            skip_if_new_val_exists: false,
        }
    }

    pub fn before(mut self, neighbor: impl Into<String>) -> Self {
        self.new_val_neighbor = Some(neighbor.into());
        self.new_val_is_after = false;
        self
    }

    pub fn after(mut self, neighbor: impl Into<String>) -> Self {
        self.new_val_neighbor = Some(neighbor.into());
        self.new_val_is_after = true;
        self
    }

    pub fn if_not_exists(mut self) -> Self {
        self.skip_if_new_val_exists = true;
        self
    }
}

/// `ALTER TYPE name RENAME VALUE 'old' TO 'new'`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlterTypeRenameValueStmt {
    pub type_name: TypeName,
    pub old_value: String,
    pub new_value: String,
}

impl AlterTypeRenameValueStmt {
    pub fn new(
        type_name: TypeName,
        old_value: impl Into<String>,
        new_value: impl Into<String>,
    ) -> Self {
        Self {
            type_name,
            old_value: old_value.into(),
            new_value: new_value.into(),
        }
    }
}

/// `COMMENT ON SCHEMA name IS ...`. A `None` comment means `IS NULL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentOnSchemaStmt {
    pub schema: String,
    pub comment: Option<String>,
}

/// `COMMENT ON TABLE name IS ...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentOnTableStmt {
    pub table: TableName,
    pub comment: Option<String>,
}

/// `COMMENT ON COLUMN table.col IS ...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentOnColumnStmt {
    pub table: TableName,
    pub col: String,
    pub comment: Option<String>,
}

/// `COMMENT ON TYPE name IS ...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentOnTypeStmt {
    pub type_name: TypeName,
    pub comment: Option<String>,
}
