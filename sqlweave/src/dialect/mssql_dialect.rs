//! SQL Server dialect implementation

use super::SqlDialect;
use crate::compiler::SqlParams;
use crate::placeholder::PlaceholderStyle;

/// SQL Server dialect
pub struct MssqlDialect;

impl SqlDialect for MssqlDialect {
    fn name(&self) -> &'static str {
        "mssql"
    }

    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::ZeroBased("@p")
    }

    fn limit_offset(&self, take: Option<u64>, skip: Option<u64>, params: &mut SqlParams) -> String {
        if take.is_none() && skip.is_none() {
            return String::new();
        }

        // OFFSET precedes FETCH in the text, so it is bound first
        let offset = match skip {
            Some(skip) => params.bind(skip.into()),
            None => "0".to_string(),
        };
        let mut sql = format!("OFFSET {} ROWS", offset);
        if let Some(take) = take {
            sql.push_str(&format!(" FETCH NEXT {} ROWS ONLY", params.bind(take.into())));
        }
        sql
    }

    fn requires_order_for_offset(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_placeholder() {
        let dialect = MssqlDialect;
        assert_eq!(dialect.placeholder_style().token(0), "@p0");
        assert_eq!(dialect.placeholder_style().token(3), "@p3");
    }

    #[test]
    fn test_offset_fetch_binds_skip_first() {
        let dialect = MssqlDialect;
        let mut params = SqlParams::new(dialect.placeholder_style());
        params.bind(json!(1));

        let sql = dialect.limit_offset(Some(10), Some(20), &mut params);
        assert_eq!(sql, "OFFSET @p1 ROWS FETCH NEXT @p2 ROWS ONLY");
        assert_eq!(params.values, vec![json!(1), json!(20), json!(10)]);
    }

    #[test]
    fn test_take_only() {
        let dialect = MssqlDialect;
        let mut params = SqlParams::new(dialect.placeholder_style());
        let sql = dialect.limit_offset(Some(5), None, &mut params);
        assert_eq!(sql, "OFFSET 0 ROWS FETCH NEXT @p0 ROWS ONLY");
        assert_eq!(params.values, vec![json!(5)]);
    }
}
