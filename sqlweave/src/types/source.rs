//! Projection and source definitions: fields, tables, joins, sorts

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Filter, Subquery};

/// Projected column or expression.
///
/// Exactly one of `column` (optionally qualified by `table`) or `query` must
/// be set. The compiler rejects any other combination.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Field {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Subquery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl Field {
    pub fn column(column: impl Into<String>) -> Self {
        Self {
            column: Some(column.into()),
            ..Default::default()
        }
    }

    pub fn qualified(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            column: Some(column.into()),
            ..Default::default()
        }
    }

    pub fn subquery(query: Subquery) -> Self {
        Self {
            query: Some(query),
            ..Default::default()
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl From<&str> for Field {
    fn from(column: &str) -> Self {
        Self::column(column)
    }
}

impl From<String> for Field {
    fn from(column: String) -> Self {
        Self::column(column)
    }
}

/// FROM / JOIN source: a named table or an embedded statement
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Table {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Subquery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl Table {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn subquery(query: Subquery) -> Self {
        Self {
            query: Some(query),
            ..Default::default()
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl From<&str> for Table {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for Table {
    fn from(name: String) -> Self {
        Self::named(name)
    }
}

/// Represents different types of SQL JOINs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinType {
    #[default]
    Inner,
    Left,
    Right,
}

impl JoinType {
    pub fn as_sql(&self) -> &'static str {
        match self {
            JoinType::Inner => "INNER JOIN",
            JoinType::Left => "LEFT JOIN",
            JoinType::Right => "RIGHT JOIN",
        }
    }
}

/// Represents a SQL JOIN clause
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Join {
    #[serde(default, rename = "type")]
    pub join_type: JoinType,
    pub table: Table,
    pub on: Filter,
}

impl Join {
    /// Create an INNER JOIN
    pub fn inner(table: impl Into<Table>, on: Filter) -> Self {
        Self {
            join_type: JoinType::Inner,
            table: table.into(),
            on,
        }
    }

    /// Create a LEFT JOIN
    pub fn left(table: impl Into<Table>, on: Filter) -> Self {
        Self {
            join_type: JoinType::Left,
            table: table.into(),
            on,
        }
    }

    /// Create a RIGHT JOIN
    pub fn right(table: impl Into<Table>, on: Filter) -> Self {
        Self {
            join_type: JoinType::Right,
            table: table.into(),
            on,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    #[serde(alias = "ASC")]
    Asc,
    #[serde(alias = "DESC")]
    Desc,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Asc => write!(f, "ASC"),
            Direction::Desc => write!(f, "DESC"),
        }
    }
}

/// ORDER BY entry
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Sort {
    pub field: Field,
    #[serde(default)]
    pub direction: Direction,
}

impl Sort {
    pub fn asc(field: impl Into<Field>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(field: impl Into<Field>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }
}
