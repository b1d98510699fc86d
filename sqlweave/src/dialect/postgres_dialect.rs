//! PostgreSQL SQL dialect implementation

use super::SqlDialect;
use crate::placeholder::PlaceholderStyle;
use crate::types::Operator;

/// PostgreSQL SQL dialect
pub struct PostgresDialect;

impl SqlDialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::OneBased("$")
    }

    fn operator_sql(&self, operator: Operator) -> &'static str {
        match operator {
            Operator::Like => "ILIKE",
            Operator::NotLike => "NOT ILIKE",
            other => other.as_sql(),
        }
    }
}
