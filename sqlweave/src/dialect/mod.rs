//! SQL abstraction layer for multi-database support
//!
//! This module provides the per-database capability sets used by the
//! compiler (MySQL, SQLite, PostgreSQL, SQL Server).

mod mssql_dialect;
mod mysql_dialect;
mod postgres_dialect;
mod sql_dialect;
mod sqlite_dialect;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BuildError;

pub use mssql_dialect::MssqlDialect;
pub use mysql_dialect::MysqlDialect;
pub use postgres_dialect::PostgresDialect;
pub use sql_dialect::SqlDialect;
pub use sqlite_dialect::SqliteDialect;

/// Database dialect identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Mysql,
    Sqlite,
    #[default]
    Postgres,
    Mssql,
}

impl Dialect {
    /// Every supported dialect, in display order
    pub const ALL: [Dialect; 4] = [
        Dialect::Mysql,
        Dialect::Sqlite,
        Dialect::Postgres,
        Dialect::Mssql,
    ];

    /// Get the SQL dialect for this identifier
    pub fn dialect(&self) -> &'static dyn SqlDialect {
        match self {
            Dialect::Mysql => &MysqlDialect,
            Dialect::Sqlite => &SqliteDialect,
            Dialect::Postgres => &PostgresDialect,
            Dialect::Mssql => &MssqlDialect,
        }
    }

    /// Get the dialect name
    pub fn name(&self) -> &'static str {
        self.dialect().name()
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Dialect {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mysql" => Ok(Dialect::Mysql),
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "mssql" | "sqlserver" => Ok(Dialect::Mssql),
            _ => Err(BuildError::UnsupportedDialect(s.to_string())),
        }
    }
}
