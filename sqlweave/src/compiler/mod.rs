//! Statement compiler
//!
//! One [`Compiler`] is shared by all four dialects; the dialect only supplies
//! the capability set in [`SqlDialect`]. Every compilation allocates its own
//! [`SqlParams`], which is threaded by `&mut` through clauses, nested filter
//! groups and subqueries so placeholder numbering stays global to the
//! statement.
//!
//! ## Modules
//!
//! - `filter` - recursive filter tree compilation
//! - `value` - right-hand side encoding for conditions
//! - `splice` - subquery and raw SQL splicing
//! - `clauses` - field list, table, join, group and order clauses
//! - `params` - argument accumulator with its placeholder cursor

mod clauses;
mod filter;
mod params;
mod splice;
mod value;

pub use params::SqlParams;
pub use splice::{rewrite_placeholders, splice_raw};

use crate::dialect::{Dialect, SqlDialect};
use crate::error::Result;
use crate::types::{Field, Subquery};

/// Compiles statement requests for one dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compiler {
    dialect: Dialect,
}

impl Compiler {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Resolve a dialect tag before touching any clause
    pub fn for_tag(tag: &str) -> Result<Self> {
        Ok(Self::new(tag.parse()?))
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn sql_dialect(&self) -> &'static dyn SqlDialect {
        self.dialect.dialect()
    }

    /// Fresh accumulator for one statement
    pub fn new_params(&self) -> SqlParams {
        SqlParams::new(self.sql_dialect().placeholder_style())
    }
}

/// Validated shape of a [`Field`]
enum FieldShape<'a> {
    Column {
        table: Option<&'a str>,
        column: &'a str,
    },
    Query(&'a Subquery),
}

impl<'a> FieldShape<'a> {
    /// Classify a field, rejecting anything but exactly one legal alternative
    fn of(field: &'a Field) -> std::result::Result<Self, String> {
        match (&field.table, &field.column, &field.query) {
            (table, Some(column), None) if !column.trim().is_empty() => Ok(Self::Column {
                table: table.as_deref().filter(|t| !t.trim().is_empty()),
                column,
            }),
            (None, None, Some(query)) => Ok(Self::Query(query)),
            (_, Some(_), Some(_)) => {
                Err("field sets both a column and a subquery".to_string())
            }
            (Some(table), None, None) => Err(format!("field on table {} has no column", table)),
            (Some(_), None, Some(_)) => {
                Err("a subquery field cannot be qualified by a table".to_string())
            }
            _ => Err("field sets neither a column nor a subquery".to_string()),
        }
    }
}

/// `table.column`, or bare `column` without a table
fn qualify(table: Option<&str>, column: &str) -> String {
    match table {
        Some(table) => format!("{}.{}", table, column),
        None => column.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BuildError;

    #[test]
    fn test_for_tag() {
        assert_eq!(
            Compiler::for_tag("postgresql").unwrap().dialect(),
            Dialect::Postgres
        );
        assert_eq!(
            Compiler::for_tag("db2"),
            Err(BuildError::UnsupportedDialect("db2".to_string()))
        );
    }

    #[test]
    fn test_field_shapes() {
        assert!(matches!(
            FieldShape::of(&Field::qualified("u", "id")),
            Ok(FieldShape::Column {
                table: Some("u"),
                column: "id"
            })
        ));
        assert!(matches!(
            FieldShape::of(&Field::subquery(Subquery::raw("SELECT 1", vec![]))),
            Ok(FieldShape::Query(_))
        ));
        assert!(FieldShape::of(&Field::default()).is_err());
        assert!(FieldShape::of(&Field::column("  ")).is_err());

        let table_only = Field {
            table: Some("u".into()),
            ..Default::default()
        };
        assert!(FieldShape::of(&table_only).is_err());

        let both = Field {
            column: Some("id".into()),
            query: Some(Subquery::raw("SELECT 1", vec![])),
            ..Default::default()
        };
        assert!(FieldShape::of(&both).is_err());
    }

    #[test]
    fn test_qualify() {
        assert_eq!(qualify(Some("u"), "id"), "u.id");
        assert_eq!(qualify(None, "id"), "id");
    }
}
