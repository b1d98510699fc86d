//! sqlweave
//!
//! Compiles structured statement descriptions (field lists, tables, joins,
//! nested AND/OR filter trees, embedded subqueries and raw SQL fragments)
//! into a single SQL string plus an ordered argument list for MySQL, SQLite,
//! PostgreSQL or SQL Server.
//!
//! Every compilation threads one placeholder cursor through all clauses, so
//! the i-th placeholder in the output always corresponds to the i-th
//! argument, including placeholders that arrive inside raw SQL.
//!
//! ```
//! use sqlweave::{Dialect, Filter, SelectBuilder};
//!
//! let query = SelectBuilder::new("users")
//!     .select(["id", "name"])
//!     .filter(Filter::or(vec![
//!         Filter::eq("role", "admin"),
//!         Filter::and(vec![Filter::gt("age", 30), Filter::like("name", "son")]),
//!     ]))
//!     .to_sql(Dialect::Postgres)
//!     .unwrap();
//!
//! assert_eq!(
//!     query.sql,
//!     "SELECT id, name FROM users WHERE role = $1 OR (age > $2 AND name ILIKE $3)"
//! );
//! assert_eq!(query.args.len(), 3);
//! ```

pub mod builder;
pub mod compiler;
pub mod dialect;
pub mod error;
pub mod parser;
pub mod placeholder;
mod statement;
pub mod types;

pub use builder::{DeleteBuilder, InsertBuilder, SelectBuilder, UpdateBuilder};
pub use compiler::{Compiler, SqlParams};
pub use dialect::{Dialect, SqlDialect};
pub use error::{BuildError, Result};
pub use parser::{DEFAULT_MAX_REQUEST_BYTES, parse_statement};
pub use placeholder::{Cursor, PlaceholderStyle};
pub use types::{
    Arg, Assignment, CompiledQuery, DeleteRequest, Direction, Field, Filter, FilterValue,
    InsertRequest, Join, JoinType, Logic, Operator, RawSql, SelectRequest, Sort, Statement,
    Subquery, Table, UpdateRequest,
};

/// Compile `statement` for the dialect named by `dialect_tag`.
///
/// The tag is resolved before any clause is compiled, so an unknown dialect
/// fails with [`BuildError::UnsupportedDialect`] and nothing else.
pub fn compile(dialect_tag: &str, statement: &Statement) -> Result<CompiledQuery> {
    Compiler::for_tag(dialect_tag)?.compile(statement)
}
