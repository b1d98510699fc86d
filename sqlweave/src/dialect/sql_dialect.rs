//! SQL dialect trait for multi-database support
//!
//! This trait defines the capability set that differs between databases.
//! The compiler itself is shared; only these hooks vary per dialect.

use crate::compiler::SqlParams;
use crate::placeholder::PlaceholderStyle;
use crate::types::Operator;

/// SQL dialect trait for generating database-specific SQL
///
/// Different databases have different syntax for:
/// - Parameter placeholders (`?` vs `$1` vs `@p0`)
/// - Case-insensitive pattern matching
/// - Limit/offset clauses
pub trait SqlDialect: Send + Sync {
    /// Get the dialect name
    fn name(&self) -> &'static str;

    /// Placeholder strategy
    ///
    /// - MySQL/SQLite: `?`
    /// - PostgreSQL: `$1`, `$2`, ...
    /// - SQL Server: `@p0`, `@p1`, ...
    fn placeholder_style(&self) -> PlaceholderStyle;

    /// SQL text for a filter operator
    ///
    /// PostgreSQL rewrites LIKE to ILIKE for case-insensitive matching.
    fn operator_sql(&self, operator: Operator) -> &'static str {
        operator.as_sql()
    }

    /// Generate the pagination clause, binding `take`/`skip` through the
    /// shared cursor in textual order. Returns an empty string when neither
    /// is set.
    ///
    /// Most databases use `LIMIT x OFFSET y`, but syntax may vary.
    fn limit_offset(&self, take: Option<u64>, skip: Option<u64>, params: &mut SqlParams) -> String {
        let mut parts = Vec::new();
        if let Some(take) = take {
            parts.push(format!("LIMIT {}", params.bind(take.into())));
        }
        if let Some(skip) = skip {
            parts.push(format!("OFFSET {}", params.bind(skip.into())));
        }
        parts.join(" ")
    }

    /// Whether OFFSET is only valid after an ORDER BY
    fn requires_order_for_offset(&self) -> bool {
        false
    }
}
