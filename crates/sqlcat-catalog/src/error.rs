//! Catalog error types.
//!
//! Conflicts and missing objects are reported as [`SqlError`], which carries a
//! PostgreSQL SQLSTATE code and one of two classifications. Malformed input
//! that no real database would accept is reported through the other
//! [`Error`] variants and carries no code.

use std::fmt;
use thiserror::Error;

/// Classification shared by every coded catalog error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The object being created is already present.
    AlreadyExists,
    /// The object being referenced is absent.
    DoesNotExist,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::AlreadyExists => write!(f, "already exists"),
            ErrorKind::DoesNotExist => write!(f, "does not exist"),
        }
    }
}

/// A coded error about a schema object.
///
/// Renders as `<message> <kind>`, e.g. `relation "users" already exists`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} {kind}")]
pub struct SqlError {
    /// Classification of the error.
    pub kind: ErrorKind,
    /// Five-character SQLSTATE code.
    pub code: &'static str,
    /// Description of the object, without the classification suffix.
    pub message: String,
    /// Byte offset of the statement that raised the error.
    pub location: usize,
}

impl SqlError {
    fn new(kind: ErrorKind, code: &'static str, message: String) -> Self {
        Self {
            kind,
            code,
            message,
            location: 0,
        }
    }

    /// `42701 duplicate_column`.
    pub fn column_exists(rel: &str, col: &str) -> Self {
        Self::new(
            ErrorKind::AlreadyExists,
            "42701",
            format!("column \"{}\" of relation \"{}\"", col, rel),
        )
    }

    /// `42703 undefined_column`.
    pub fn column_not_found(rel: &str, col: &str) -> Self {
        Self::new(
            ErrorKind::DoesNotExist,
            "42703",
            format!("column \"{}\" of relation \"{}\"", col, rel),
        )
    }

    /// `42P07 duplicate_table`.
    pub fn relation_exists(rel: &str) -> Self {
        Self::new(
            ErrorKind::AlreadyExists,
            "42P07",
            format!("relation \"{}\"", rel),
        )
    }

    /// `42P01 undefined_table`.
    pub fn relation_not_found(rel: &str) -> Self {
        Self::new(
            ErrorKind::DoesNotExist,
            "42P01",
            format!("relation \"{}\"", rel),
        )
    }

    /// `42P06 duplicate_schema`.
    pub fn schema_exists(name: &str) -> Self {
        Self::new(
            ErrorKind::AlreadyExists,
            "42P06",
            format!("schema \"{}\"", name),
        )
    }

    /// `3F000 invalid_schema_name`.
    pub fn schema_not_found(name: &str) -> Self {
        Self::new(
            ErrorKind::DoesNotExist,
            "3F000",
            format!("schema \"{}\"", name),
        )
    }

    /// `42710 duplicate_object`.
    pub fn type_exists(typ: &str) -> Self {
        Self::new(
            ErrorKind::AlreadyExists,
            "42710",
            format!("type \"{}\"", typ),
        )
    }

    /// `42704 undefined_object`.
    pub fn type_not_found(typ: &str) -> Self {
        Self::new(
            ErrorKind::DoesNotExist,
            "42704",
            format!("type \"{}\"", typ),
        )
    }

    /// Attach the byte offset of the failing statement.
    pub fn with_location(mut self, location: usize) -> Self {
        self.location = location;
        self
    }
}

/// Errors raised while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A classified, coded error about a schema object.
    #[error(transparent)]
    Sql(#[from] SqlError),

    /// The statement is missing data the catalog needs (e.g. a schema name).
    #[error("{0}")]
    InvalidStatement(String),

    /// An enum label operation could not be applied.
    #[error("enum {type_name}: {reason}")]
    EnumLabel {
        /// Name of the enum type.
        type_name: String,
        /// What went wrong.
        reason: String,
    },

    /// Snapshot encoding failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Snapshot decoding failed.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl Error {
    /// Classification of this error, if it is a coded one.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Sql(e) => Some(e.kind),
            _ => None,
        }
    }

    /// SQLSTATE code of this error, if it is a coded one.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Error::Sql(e) => Some(e.code),
            _ => None,
        }
    }

    /// Whether this is an `AlreadyExists` error.
    pub fn is_already_exists(&self) -> bool {
        self.kind() == Some(ErrorKind::AlreadyExists)
    }

    /// Whether this is a `DoesNotExist` error.
    pub fn is_not_found(&self) -> bool {
        self.kind() == Some(ErrorKind::DoesNotExist)
    }

    /// Source location of a coded error.
    pub fn location(&self) -> Option<usize> {
        match self {
            Error::Sql(e) => Some(e.location),
            _ => None,
        }
    }

    /// Stamp a coded error with the location of the statement that raised it.
    /// Uncoded errors are returned unchanged.
    pub fn with_location(self, location: usize) -> Self {
        match self {
            Error::Sql(e) => Error::Sql(e.with_location(location)),
            other => other,
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidStatement(message.into())
    }

    pub(crate) fn enum_label(type_name: &str, reason: impl Into<String>) -> Self {
        Error::EnumLabel {
            type_name: type_name.to_string(),
            reason: reason.into(),
        }
    }
}
