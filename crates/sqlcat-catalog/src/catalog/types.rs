//! User-defined types.

use rkyv::{Archive, Deserialize, Serialize};
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A user-defined type in a schema.
///
/// Types share a namespace with tables: a type may not take the name of a
/// table in the same schema.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize, SerdeSerialize, SerdeDeserialize)]
pub enum Type {
    /// `CREATE TYPE ... AS ENUM`.
    Enum(Enum),
}

impl Type {
    /// Type name (unqualified).
    pub fn name(&self) -> &str {
        match self {
            Type::Enum(e) => &e.name,
        }
    }

    /// Comment set by `COMMENT ON TYPE`.
    pub fn comment(&self) -> Option<&str> {
        match self {
            Type::Enum(e) => e.comment.as_deref(),
        }
    }

    /// Replace the comment.
    pub fn set_comment(&mut self, comment: Option<String>) {
        match self {
            Type::Enum(e) => e.comment = comment,
        }
    }

    /// The enum definition, if this type is an enum.
    pub fn as_enum(&self) -> Option<&Enum> {
        match self {
            Type::Enum(e) => Some(e),
        }
    }
}

impl From<Enum> for Type {
    fn from(e: Enum) -> Self {
        Type::Enum(e)
    }
}

/// An enumerated type.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize, SerdeSerialize, SerdeDeserialize)]
pub struct Enum {
    /// Type name.
    pub name: String,
    /// Labels in declaration order.
    pub vals: Vec<String>,
    /// Comment.
    pub comment: Option<String>,
}

impl Enum {
    /// Create an enum with the given labels.
    pub fn new<I, S>(name: impl Into<String>, vals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            vals: vals.into_iter().map(Into::into).collect(),
            comment: None,
        }
    }

    /// Position of a label.
    pub fn value_index(&self, val: &str) -> Option<usize> {
        self.vals.iter().position(|v| v == val)
    }
}
