//! Filter tree compilation
//!
//! Builds SQL boolean expressions from [`Filter`] trees. Groups reached below
//! the root are parenthesized so nesting preserves precedence; the root group
//! is emitted bare.

use super::splice::splice_raw;
use super::{Compiler, FieldShape, SqlParams, qualify};
use crate::error::{BuildError, Result};
use crate::types::{Field, Filter, FilterValue, Logic, Operator};

impl Compiler {
    /// Compile an optional filter into a boolean expression.
    ///
    /// `None` compiles to an empty string with no side effects, which callers
    /// use to omit WHERE / HAVING entirely.
    pub fn compile_filter(
        &self,
        filter: Option<&Filter>,
        params: &mut SqlParams,
        is_root: bool,
    ) -> Result<String> {
        let Some(filter) = filter else {
            return Ok(String::new());
        };

        match filter {
            Filter::Group { logic, filters } => {
                self.compile_group(*logic, filters, params, is_root)
            }
            Filter::Condition {
                field,
                operator,
                value,
            } => self.compile_condition(field, *operator, value.as_ref(), params),
            Filter::Raw(raw) => {
                let sql = splice_raw(raw, params)?;
                let sql = sql.trim();
                if sql.is_empty() || is_root {
                    Ok(sql.to_string())
                } else {
                    Ok(format!("({})", sql))
                }
            }
        }
    }

    fn compile_group(
        &self,
        logic: Logic,
        filters: &[Filter],
        params: &mut SqlParams,
        is_root: bool,
    ) -> Result<String> {
        let mut parts = Vec::with_capacity(filters.len());
        for child in filters {
            let sql = self.compile_filter(Some(child), params, false)?;
            let sql = sql.trim();
            if !sql.is_empty() {
                parts.push(sql.to_string());
            }
        }

        if parts.is_empty() {
            return Err(BuildError::FiltersRequired);
        }

        let joined = parts.join(&format!(" {} ", logic.as_sql()));
        if is_root {
            Ok(joined)
        } else {
            Ok(format!("({})", joined))
        }
    }

    fn compile_condition(
        &self,
        field: &Field,
        operator: Operator,
        value: Option<&FilterValue>,
        params: &mut SqlParams,
    ) -> Result<String> {
        let field_sql = match FieldShape::of(field).map_err(BuildError::invalid_filter)? {
            FieldShape::Column { table, column } => qualify(table, column),
            FieldShape::Query(query) => format!("({})", self.compile_subquery(query, params)?),
        };
        let operator_sql = self.sql_dialect().operator_sql(operator);

        match self.encode_value(operator, value, params)? {
            Some(value_sql) => Ok(format!("{} {} {}", field_sql, operator_sql, value_sql)),
            None => Ok(format!("{} {}", field_sql, operator_sql)),
        }
    }
}
