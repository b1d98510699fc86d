//! Statement description types
//!
//! All types are immutable value descriptions. The compiler only reads them.

mod filter;
mod source;
mod statement;

pub use filter::{Filter, FilterValue, Logic, Operator};
pub use source::{Direction, Field, Join, JoinType, Sort, Table};
pub use statement::{
    Assignment, CompiledQuery, DeleteRequest, InsertRequest, RawSql, SelectRequest, Statement,
    Subquery, UpdateRequest,
};

/// Opaque positional argument bound to a placeholder
pub type Arg = serde_json::Value;
