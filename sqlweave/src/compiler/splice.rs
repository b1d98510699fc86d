//! Subquery and raw SQL splicing
//!
//! Structured subqueries are compiled with the parent's [`SqlParams`], so
//! their placeholders continue the parent's sequence directly. Raw SQL
//! arrives with placeholders numbered locally; those are rewritten to the
//! parent's cursor before the text is spliced in.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::{Compiler, SqlParams};
use crate::error::{BuildError, Result};
use crate::placeholder::PlaceholderStyle;
use crate::types::{RawSql, Subquery};

fn dollar_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$(\d+)\b").expect("Invalid regex"))
}

fn at_p_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"@p(\d+)\b").expect("Invalid regex"))
}

/// Pattern matching indexed placeholders of a style, `None` for static styles
fn indexed_pattern(style: PlaceholderStyle) -> Option<Regex> {
    match style {
        PlaceholderStyle::Static(_) => None,
        PlaceholderStyle::OneBased("$") | PlaceholderStyle::ZeroBased("$") => {
            Some(dollar_pattern().clone())
        }
        PlaceholderStyle::OneBased("@p") | PlaceholderStyle::ZeroBased("@p") => {
            Some(at_p_pattern().clone())
        }
        PlaceholderStyle::OneBased(prefix) | PlaceholderStyle::ZeroBased(prefix) => Some(
            Regex::new(&format!(r"{}(\d+)\b", regex::escape(prefix))).expect("Invalid regex"),
        ),
    }
}

/// Renumber the indexed placeholders in `sql` so local index `style.start()`
/// becomes `offset`.
///
/// The rewrite is keyed by the original index value: every occurrence of the
/// same original index maps to the same new index, and original indices may
/// appear in any order. Every local index must address one of the fragment's
/// `arg_count` arguments. Static styles are returned unchanged.
pub fn rewrite_placeholders(
    sql: &str,
    style: PlaceholderStyle,
    offset: usize,
    arg_count: usize,
) -> Result<String> {
    let Some(pattern) = indexed_pattern(style) else {
        return Ok(sql.to_string());
    };

    let base = style.start();
    let mut mapping: BTreeMap<usize, String> = BTreeMap::new();
    for caps in pattern.captures_iter(sql) {
        let invalid = || BuildError::InvalidPlaceholder {
            token: caps[0].to_string(),
        };
        let original: usize = caps[1].parse().map_err(|_| invalid())?;
        let index = original
            .checked_sub(base)
            .filter(|local| *local < arg_count)
            .and_then(|local| offset.checked_add(local))
            .ok_or_else(invalid)?;
        mapping
            .entry(original)
            .or_insert_with(|| style.token(index));
    }

    if mapping.is_empty() {
        return Ok(sql.to_string());
    }

    tracing::trace!(offset, mapping = ?mapping, "Rewriting raw SQL placeholders");

    let rewritten = pattern.replace_all(sql, |caps: &Captures<'_>| {
        caps[1]
            .parse::<usize>()
            .ok()
            .and_then(|original| mapping.get(&original))
            .cloned()
            .unwrap_or_else(|| caps[0].to_string())
    });
    Ok(rewritten.into_owned())
}

/// Splice raw SQL at the current cursor, appending its arguments.
///
/// The cursor advances by the number of arguments, not by the number of
/// placeholder occurrences, since one index may appear several times.
pub fn splice_raw(raw: &RawSql, params: &mut SqlParams) -> Result<String> {
    let offset = params.cursor().position();
    let sql = rewrite_placeholders(&raw.sql, params.style(), offset, raw.args.len())?;
    params.extend_prebound(&raw.args);
    Ok(sql)
}

impl Compiler {
    /// Compile an embedded statement into the parent's parameter stream.
    /// The returned text is not parenthesized.
    pub fn compile_subquery(&self, query: &Subquery, params: &mut SqlParams) -> Result<String> {
        match query {
            Subquery::Select(request) => self.select_sql(request, params),
            Subquery::Raw(raw) => splice_raw(raw, params),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Dialect;
    use crate::types::{Field, Filter, SelectRequest, Table};
    use serde_json::json;

    const AT_P: PlaceholderStyle = PlaceholderStyle::ZeroBased("@p");
    const DOLLAR: PlaceholderStyle = PlaceholderStyle::OneBased("$");

    #[test]
    fn test_rewrite_repeated_index_maps_once() {
        let sql = rewrite_placeholders("id = @p0 OR parent_id = @p0", AT_P, 5, 1).unwrap();
        assert_eq!(sql, "id = @p5 OR parent_id = @p5");
    }

    #[test]
    fn test_rewrite_out_of_order_indices() {
        let sql = rewrite_placeholders("b = @p1 AND a = @p0", AT_P, 3, 2).unwrap();
        assert_eq!(sql, "b = @p4 AND a = @p3");
    }

    #[test]
    fn test_rewrite_one_based() {
        let sql = rewrite_placeholders("a = $1 AND b = $2 AND c = $1", DOLLAR, 4, 2).unwrap();
        assert_eq!(sql, "a = $4 AND b = $5 AND c = $4");

        let sql = rewrite_placeholders("a = $1", DOLLAR, 1, 1).unwrap();
        assert_eq!(sql, "a = $1");
    }

    #[test]
    fn test_rewrite_multi_digit_indices() {
        let sql = rewrite_placeholders("x IN (@p9, @p10)", AT_P, 2, 11).unwrap();
        assert_eq!(sql, "x IN (@p11, @p12)");
    }

    #[test]
    fn test_rewrite_leaves_static_markers() {
        let style = PlaceholderStyle::Static("?");
        let sql = rewrite_placeholders("a = ? AND b = ?", style, 7, 2).unwrap();
        assert_eq!(sql, "a = ? AND b = ?");
    }

    #[test]
    fn test_rewrite_rejects_index_below_base() {
        let err = rewrite_placeholders("a = $0", DOLLAR, 1, 1).unwrap_err();
        assert_eq!(
            err,
            BuildError::InvalidPlaceholder {
                token: "$0".to_string()
            }
        );
    }

    #[test]
    fn test_rewrite_rejects_index_beyond_arguments() {
        let err = rewrite_placeholders("a = @p0 AND b = @p1", AT_P, 0, 1).unwrap_err();
        assert_eq!(
            err,
            BuildError::InvalidPlaceholder {
                token: "@p1".to_string()
            }
        );

        let err = rewrite_placeholders("a = $2", DOLLAR, 1, 1).unwrap_err();
        assert_eq!(
            err,
            BuildError::InvalidPlaceholder {
                token: "$2".to_string()
            }
        );
    }

    #[test]
    fn test_rewrite_huge_index_is_an_error() {
        let err = rewrite_placeholders("a = @p18446744073709551615", AT_P, 1, 1).unwrap_err();
        assert_eq!(
            err,
            BuildError::InvalidPlaceholder {
                token: "@p18446744073709551615".to_string()
            }
        );

        let err = rewrite_placeholders("a = @p1", AT_P, usize::MAX, 2).unwrap_err();
        assert!(matches!(err, BuildError::InvalidPlaceholder { .. }));

        let err =
            rewrite_placeholders("a = $99999999999999999999999", DOLLAR, 1, 1).unwrap_err();
        assert!(matches!(err, BuildError::InvalidPlaceholder { .. }));
    }

    #[test]
    fn test_splice_raw_with_missing_argument_fails() {
        let compiler = Compiler::new(Dialect::Mssql);
        let mut params = compiler.new_params();
        let filter = Filter::and(vec![
            Filter::raw("a = @p0 AND b = @p1", vec![json!(1)]),
            Filter::eq("c", 3),
        ]);
        let result = compiler.compile_filter(Some(&filter), &mut params, true);
        assert_eq!(
            result,
            Err(BuildError::InvalidPlaceholder {
                token: "@p1".to_string()
            })
        );
    }

    #[test]
    fn test_rewrite_shift_is_uniform() {
        let raw = "a = @p0 AND b IN (@p1, @p2) OR c = @p1";
        let at_zero = rewrite_placeholders(raw, AT_P, 0, 3).unwrap();
        let at_five = rewrite_placeholders(raw, AT_P, 5, 3).unwrap();
        assert_eq!(at_zero, raw);
        assert_eq!(at_five, "a = @p5 AND b IN (@p6, @p7) OR c = @p6");
    }

    #[test]
    fn test_splice_raw_advances_by_argument_count() {
        let mut params = SqlParams::new(AT_P);
        for n in 0..4 {
            params.bind(json!(n));
        }
        let raw = RawSql::new("id = @p0 OR parent_id = @p0", vec![json!(123)]);
        let sql = splice_raw(&raw, &mut params).unwrap();

        assert_eq!(sql, "id = @p4 OR parent_id = @p4");
        assert_eq!(params.cursor().position(), 5);
        assert_eq!(params.values[4], json!(123));
    }

    #[test]
    fn test_structured_subquery_shares_cursor() {
        let compiler = Compiler::new(Dialect::Postgres);
        let mut params = compiler.new_params();
        params.bind(json!("outer"));

        let inner = SelectRequest {
            fields: vec![Field::column("user_id")],
            table: Some(Table::named("orders")),
            filter: Some(Filter::gt("total", 100)),
            ..Default::default()
        };
        let sql = compiler
            .compile_subquery(&Subquery::select(inner), &mut params)
            .unwrap();

        assert_eq!(sql, "SELECT user_id FROM orders WHERE total > $2");
        assert_eq!(params.values, vec![json!("outer"), json!(100)]);
    }

    #[test]
    fn test_structured_and_raw_paths_agree() {
        let compiler = Compiler::new(Dialect::Mssql);

        let mut structured = compiler.new_params();
        structured.bind(json!(0));
        let inner = SelectRequest {
            fields: vec![Field::column("id")],
            table: Some(Table::named("t")),
            filter: Some(Filter::eq("a", 1)),
            ..Default::default()
        };
        let from_request = compiler
            .compile_subquery(&Subquery::select(inner), &mut structured)
            .unwrap();

        let mut raw = compiler.new_params();
        raw.bind(json!(0));
        let from_raw = compiler
            .compile_subquery(
                &Subquery::raw("SELECT id FROM t WHERE a = @p0", vec![json!(1)]),
                &mut raw,
            )
            .unwrap();

        assert_eq!(from_request, from_raw);
        assert_eq!(structured.values, raw.values);
    }
}
