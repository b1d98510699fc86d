//! Filter value encoding
//!
//! Turns the right-hand side of a condition into a SQL fragment, binding its
//! arguments through the shared [`SqlParams`].

use super::{Compiler, SqlParams, qualify};
use crate::error::{BuildError, Result};
use crate::types::{Arg, FilterValue, Operator};

impl Compiler {
    /// Encode a condition value for `operator`.
    ///
    /// Returns `None` for NULL checks, which take no value segment. Rules are
    /// applied in order: column reference, NULL check, IN list, LIKE pattern,
    /// subquery, plain argument.
    pub fn encode_value(
        &self,
        operator: Operator,
        value: Option<&FilterValue>,
        params: &mut SqlParams,
    ) -> Result<Option<String>> {
        if let Some(FilterValue::Column { table, column }) = value {
            return Ok(Some(qualify(table.as_deref(), column)));
        }

        if operator.is_null_check() {
            if let Some(value) = value
                && !value.is_null()
            {
                return Err(BuildError::invalid_filter(format!(
                    "{} does not take a value",
                    operator
                )));
            }
            return Ok(None);
        }

        if operator.is_list() {
            let items = match value {
                Some(FilterValue::Literal(Arg::Array(items))) => items,
                _ => {
                    return Err(BuildError::OperatorRequiresArray {
                        operator: operator.as_sql(),
                    });
                }
            };
            if items.is_empty() {
                return Err(BuildError::OperatorRequiresNonEmptyArray {
                    operator: operator.as_sql(),
                });
            }
            let placeholders: Vec<String> =
                items.iter().map(|item| params.bind(item.clone())).collect();
            return Ok(Some(format!("({})", placeholders.join(", "))));
        }

        if operator.is_like() {
            let Some(FilterValue::Literal(Arg::String(pattern))) = value else {
                return Err(BuildError::LikeValueTypeMismatch {
                    operator: operator.as_sql(),
                });
            };
            return Ok(Some(params.bind(Arg::String(format!("%{}%", pattern)))));
        }

        if let Some(FilterValue::Query(query)) = value {
            let sql = self.compile_subquery(query, params)?;
            return Ok(Some(format!("({})", sql)));
        }

        let arg = match value {
            Some(FilterValue::Literal(arg)) => arg.clone(),
            _ => Arg::Null,
        };
        Ok(Some(params.bind(arg)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Dialect;
    use crate::types::Subquery;
    use serde_json::json;

    fn encode(
        dialect: Dialect,
        operator: Operator,
        value: Option<FilterValue>,
    ) -> (Result<Option<String>>, SqlParams) {
        let compiler = Compiler::new(dialect);
        let mut params = compiler.new_params();
        let result = compiler.encode_value(operator, value.as_ref(), &mut params);
        (result, params)
    }

    #[test]
    fn column_reference_binds_nothing() {
        let (sql, params) = encode(
            Dialect::Postgres,
            Operator::In,
            Some(FilterValue::qualified("u", "id")),
        );
        assert_eq!(sql.unwrap().as_deref(), Some("u.id"));
        assert!(params.is_empty());
        assert_eq!(params.cursor().position(), 1);
    }

    #[test]
    fn null_check_takes_no_value() {
        let (sql, params) = encode(Dialect::Postgres, Operator::IsNull, None);
        assert_eq!(sql.unwrap(), None);
        assert!(params.is_empty());

        let (sql, _) = encode(Dialect::Postgres, Operator::IsNotNull, Some(FilterValue::Null));
        assert_eq!(sql.unwrap(), None);
    }

    #[test]
    fn null_check_rejects_value() {
        let (sql, _) = encode(
            Dialect::Postgres,
            Operator::IsNull,
            Some(FilterValue::literal(1)),
        );
        assert!(matches!(sql, Err(BuildError::InvalidFilter(_))));
    }

    #[test]
    fn in_list_binds_each_element() {
        let (sql, params) = encode(
            Dialect::Postgres,
            Operator::In,
            Some(FilterValue::literal(json!([1, 2, 3]))),
        );
        assert_eq!(sql.unwrap().as_deref(), Some("($1, $2, $3)"));
        assert_eq!(params.values, vec![json!(1), json!(2), json!(3)]);
        assert_eq!(params.cursor().position(), 4);
    }

    #[test]
    fn in_list_errors() {
        let (sql, _) = encode(
            Dialect::Postgres,
            Operator::In,
            Some(FilterValue::literal(json!([]))),
        );
        assert_eq!(
            sql,
            Err(BuildError::OperatorRequiresNonEmptyArray { operator: "IN" })
        );

        let (sql, _) = encode(
            Dialect::Postgres,
            Operator::NotIn,
            Some(FilterValue::literal(5)),
        );
        assert_eq!(
            sql,
            Err(BuildError::OperatorRequiresArray { operator: "NOT IN" })
        );
    }

    #[test]
    fn like_wraps_wildcards() {
        let (sql, params) = encode(
            Dialect::Sqlite,
            Operator::Like,
            Some(FilterValue::literal("smith")),
        );
        assert_eq!(sql.unwrap().as_deref(), Some("?"));
        assert_eq!(params.values, vec![json!("%smith%")]);
    }

    #[test]
    fn like_rejects_non_string() {
        let (sql, params) = encode(
            Dialect::Sqlite,
            Operator::NotLike,
            Some(FilterValue::literal(42)),
        );
        assert_eq!(
            sql,
            Err(BuildError::LikeValueTypeMismatch {
                operator: "NOT LIKE"
            })
        );
        assert!(params.is_empty());
    }

    #[test]
    fn subquery_is_parenthesized_without_own_placeholder() {
        let (sql, params) = encode(
            Dialect::Mssql,
            Operator::Eq,
            Some(FilterValue::Query(Subquery::raw(
                "SELECT MAX(id) FROM t WHERE k = @p0",
                vec![json!("x")],
            ))),
        );
        assert_eq!(
            sql.unwrap().as_deref(),
            Some("(SELECT MAX(id) FROM t WHERE k = @p0)")
        );
        assert_eq!(params.values, vec![json!("x")]);
        assert_eq!(params.cursor().position(), 1);
    }

    #[test]
    fn scalar_binds_single_placeholder() {
        let (sql, params) = encode(Dialect::Mssql, Operator::Gte, Some(FilterValue::literal(7)));
        assert_eq!(sql.unwrap().as_deref(), Some("@p0"));
        assert_eq!(params.values, vec![json!(7)]);
    }

    #[test]
    fn missing_value_binds_null() {
        let (sql, params) = encode(Dialect::Mysql, Operator::Eq, None);
        assert_eq!(sql.unwrap().as_deref(), Some("?"));
        assert_eq!(params.values, vec![Arg::Null]);
    }
}
