//! Integration tests replaying DDL sequences through the public API.

use pretty_assertions::assert_eq;
use sqlcat_catalog::ast::{
    AlterTableCmd, AlterTableSetSchemaStmt, AlterTableStmt, AlterTableType,
    AlterTypeAddValueStmt, ColumnDef, CommentOnColumnStmt, CreateEnumStmt, CreateSchemaStmt,
    CreateTableStmt, DropSchemaStmt, DropTableStmt, Node, RenameColumnStmt, Statement,
    TableName, TypeName,
};
use sqlcat_catalog::{build, Catalog, CatalogBuilder, CatalogConfig, Error, ErrorKind};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn col(name: &str, typ: &str) -> ColumnDef {
    ColumnDef::new(name, TypeName::new(typ))
}

fn create_table(schema: &str, name: &str, cols: &[&str]) -> Statement {
    Statement::from(
        CreateTableStmt::new(TableName::qualified(schema, name))
            .with_columns(cols.iter().map(|c| col(c, "text"))),
    )
}

fn alter(schema: &str, name: &str, cmd: AlterTableCmd) -> Statement {
    Statement::from(AlterTableStmt::new(TableName::qualified(schema, name)).with_cmd(cmd))
}

fn column_names(catalog: &Catalog, schema: &str, table: &str) -> Vec<String> {
    catalog
        .get_table(&TableName::qualified(schema, table))
        .unwrap()
        .column_names()
        .map(String::from)
        .collect()
}

/// A schema file touching every supported statement kind.
fn blog_schema() -> Vec<Statement> {
    vec![
        Statement::from(CreateSchemaStmt::new("blog")),
        Statement::from(CreateEnumStmt::new(
            TypeName::qualified("blog", "status"),
            ["draft", "published"],
        )),
        Statement::from(
            CreateTableStmt::new(TableName::qualified("blog", "authors"))
                .with_column(col("id", "bigserial").not_null())
                .with_column(col("name", "text").not_null())
                .with_column(col("bio", "text")),
        ),
        Statement::from(
            CreateTableStmt::new(TableName::qualified("blog", "posts"))
                .with_column(col("id", "bigserial").not_null())
                .with_column(col("author_id", "bigint").not_null())
                .with_column(col("title", "text"))
                .with_column(col("state", "status"))
                .with_column(col("tags", "text").array()),
        ),
        Statement::empty(),
        Statement::new(Node::Unsupported("CreateIndexStmt".into())),
        alter("blog", "posts", AlterTableCmd::set_not_null("title")),
        alter("blog", "posts", AlterTableCmd::other(AlterTableType::AddConstraint)),
        Statement::from(AlterTypeAddValueStmt::new(
            TypeName::qualified("blog", "status"),
            "archived",
        )),
        Statement::from(RenameColumnStmt::new(
            TableName::qualified("blog", "posts"),
            "state",
            "status",
        )),
        Statement::from(CommentOnColumnStmt {
            table: TableName::qualified("blog", "posts"),
            col: "status".into(),
            comment: Some("publication state".into()),
        }),
        Statement::from(CreateTableStmt::new(TableName::new("scratch"))),
        Statement::from(DropTableStmt::new([TableName::new("scratch")])),
    ]
}

#[test]
fn test_build_blog_schema() {
    init_tracing();
    let catalog = build(&blog_schema()).unwrap();

    assert_eq!(
        catalog.schema_names().collect::<Vec<_>>(),
        vec!["main", "blog"]
    );
    assert!(catalog.get_schema("main").unwrap().tables.is_empty());

    let blog = catalog.get_schema("blog").unwrap();
    assert_eq!(blog.table_names().collect::<Vec<_>>(), vec!["authors", "posts"]);

    let posts = blog.get_table("posts").unwrap();
    assert_eq!(
        column_names(&catalog, "blog", "posts"),
        vec!["id", "author_id", "title", "status", "tags"]
    );
    assert!(posts.columns[2].is_not_null);
    assert!(posts.columns[4].is_array);
    assert_eq!(posts.columns[3].type_name, TypeName::new("status"));
    assert_eq!(posts.columns[3].comment.as_deref(), Some("publication state"));

    let status = blog.get_type("status").unwrap().as_enum().unwrap();
    assert_eq!(status.vals, vec!["draft", "published", "archived"]);
}

#[test]
fn test_replay_is_prefix_compatible() {
    let stmts = blog_schema();
    let builder = CatalogBuilder::default();
    for n in 0..stmts.len() {
        let mut expected = builder.build(&stmts[..n]).unwrap();
        if let Some(node) = stmts[n].node() {
            builder.apply(&mut expected, node).unwrap();
        }
        assert_eq!(builder.build(&stmts[..=n]).unwrap(), expected, "prefix {}", n);
    }
}

#[test]
fn test_duplicate_schema() {
    let stmts = vec![
        Statement::from(CreateSchemaStmt::new("s")),
        Statement::from(CreateSchemaStmt::new("s")),
    ];
    let err = build(&stmts).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::AlreadyExists));
    assert_eq!(err.code(), Some("42P06"));
    assert_eq!(err.to_string(), "schema \"s\" already exists");
}

#[test]
fn test_schema_if_not_exists_twice() {
    let stmts = vec![
        Statement::from(CreateSchemaStmt::new("s").if_not_exists()),
        Statement::from(CreateSchemaStmt::new("s").if_not_exists()),
    ];
    let catalog = build(&stmts).unwrap();
    assert_eq!(catalog.schema_names().filter(|n| *n == "s").count(), 1);
}

#[test]
fn test_add_column_keeps_order() {
    let stmts = vec![
        create_table("main", "t", &["id"]),
        alter("main", "t", AlterTableCmd::add_column(col("name", "text"))),
    ];
    let catalog = build(&stmts).unwrap();
    assert_eq!(column_names(&catalog, "main", "t"), vec!["id", "name"]);
}

#[test]
fn test_add_duplicate_column() {
    let stmts = vec![
        create_table("main", "t", &["id"]),
        alter("main", "t", AlterTableCmd::add_column(col("id", "int"))),
    ];
    let err = build(&stmts).unwrap_err();
    assert!(err.is_already_exists());
    assert_eq!(err.code(), Some("42701"));

    // The catalog as of the failing statement still has a single column.
    let mut catalog = build(&stmts[..1]).unwrap();
    let builder = CatalogBuilder::default();
    assert!(builder.apply(&mut catalog, stmts[1].node().unwrap()).is_err());
    assert_eq!(column_names(&catalog, "main", "t"), vec!["id"]);
}

#[test]
fn test_drop_missing_table() {
    let err = build(&[Statement::from(DropTableStmt::new([TableName::qualified(
        "main", "missing",
    )]))])
    .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.code(), Some("42P01"));

    let catalog = build(&[Statement::from(
        DropTableStmt::new([TableName::qualified("main", "missing")]).if_exists(),
    )])
    .unwrap();
    assert_eq!(catalog, Catalog::default());
}

#[test]
fn test_enum_clashes_with_table() {
    let stmts = vec![
        create_table("main", "color", &[]),
        Statement::from(CreateEnumStmt::new(
            TypeName::qualified("main", "color"),
            ["red", "green"],
        )),
    ];
    let err = build(&stmts).unwrap_err();
    assert!(err.is_already_exists());
    assert_eq!(err.code(), Some("42P07"));
    assert_eq!(err.to_string(), "relation \"color\" already exists");
}

#[test]
fn test_ordering_survives_unrelated_changes() {
    let stmts = vec![
        Statement::from(CreateSchemaStmt::new("a")),
        Statement::from(CreateSchemaStmt::new("b")),
        Statement::from(CreateSchemaStmt::new("c")),
        create_table("a", "t1", &["x", "y", "z"]),
        create_table("a", "t2", &[]),
        create_table("a", "t3", &[]),
        Statement::from(DropSchemaStmt::new(["b"])),
        Statement::from(DropTableStmt::new([TableName::qualified("a", "t2")])),
        alter("a", "t1", AlterTableCmd::drop_column("y")),
        alter("a", "t1", AlterTableCmd::add_column(col("w", "int"))),
        alter(
            "a",
            "t1",
            AlterTableCmd::alter_column_type("x", TypeName::new("bigint")),
        ),
    ];
    let catalog = build(&stmts).unwrap();
    assert_eq!(
        catalog.schema_names().collect::<Vec<_>>(),
        vec!["main", "a", "c"]
    );
    assert_eq!(
        catalog
            .get_schema("a")
            .unwrap()
            .table_names()
            .collect::<Vec<_>>(),
        vec!["t1", "t3"]
    );
    assert_eq!(column_names(&catalog, "a", "t1"), vec!["x", "z", "w"]);
}

#[test]
fn test_set_schema_then_lookup() {
    let stmts = vec![
        Statement::from(CreateSchemaStmt::new("archive")),
        create_table("main", "logs", &["at"]),
        Statement::from(AlterTableSetSchemaStmt::new(
            TableName::new("logs"),
            "archive",
        )),
        alter("archive", "logs", AlterTableCmd::add_column(col("msg", "text"))),
    ];
    let catalog = build(&stmts).unwrap();
    assert_eq!(column_names(&catalog, "archive", "logs"), vec!["at", "msg"]);
    assert!(catalog.get_schema("main").unwrap().tables.is_empty());
}

#[test]
fn test_dropped_default_schema_breaks_unqualified_names() {
    let stmts = vec![
        Statement::from(DropSchemaStmt::new(["main"])),
        Statement::from(CreateTableStmt::new(TableName::new("t"))).at(20, 16),
    ];
    let err = build(&stmts).unwrap_err();
    assert_eq!(err.code(), Some("3F000"));
    assert_eq!(err.location(), Some(20));
}

#[test]
fn test_uncoded_error_passes_through() {
    let stmts = vec![Statement::from(Node::CreateSchema(CreateSchemaStmt {
        name: None,
        if_not_exists: true,
    }))
    .at(7, 10)];
    let err = build(&stmts).unwrap_err();
    assert_eq!(err, Error::InvalidStatement("create schema: empty name".into()));
    assert_eq!(err.location(), None);
}

#[test]
fn test_postgres_style_config() {
    let config = CatalogConfig::new()
        .with_default_schema("public")
        .with_catalog_name("app");
    let catalog = CatalogBuilder::new(config)
        .build(&[create_table("public", "users", &["id"])])
        .unwrap();
    assert_eq!(catalog.name.as_deref(), Some("app"));
    assert_eq!(column_names(&catalog, "public", "users"), vec!["id"]);
}

#[test]
fn test_snapshot_of_built_catalog() {
    let catalog = build(&blog_schema()).unwrap();
    let decoded = Catalog::from_bytes(&catalog.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded, catalog);
}
