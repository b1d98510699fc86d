//! SQLite SQL dialect implementation

use super::SqlDialect;
use crate::compiler::SqlParams;
use crate::placeholder::PlaceholderStyle;

/// SQLite SQL dialect
pub struct SqliteDialect;

impl SqlDialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::Static("?")
    }

    fn limit_offset(&self, take: Option<u64>, skip: Option<u64>, params: &mut SqlParams) -> String {
        match (take, skip) {
            (Some(take), Some(skip)) => {
                let limit = params.bind(take.into());
                let offset = params.bind(skip.into());
                format!("LIMIT {} OFFSET {}", limit, offset)
            }
            (Some(take), None) => format!("LIMIT {}", params.bind(take.into())),
            // SQLite only accepts OFFSET after LIMIT; -1 means no limit
            (None, Some(skip)) => format!("LIMIT -1 OFFSET {}", params.bind(skip.into())),
            (None, None) => String::new(),
        }
    }
}
