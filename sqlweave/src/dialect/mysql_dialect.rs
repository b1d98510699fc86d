//! MySQL SQL dialect implementation

use super::SqlDialect;
use crate::compiler::SqlParams;
use crate::placeholder::PlaceholderStyle;

/// Largest row count MySQL accepts, used when only an offset is requested
const MYSQL_MAX_ROWS: &str = "18446744073709551615";

/// MySQL SQL dialect
pub struct MysqlDialect;

impl SqlDialect for MysqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
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
            (None, Some(skip)) => {
                format!("LIMIT {} OFFSET {}", MYSQL_MAX_ROWS, params.bind(skip.into()))
            }
            (None, None) => String::new(),
        }
    }
}
