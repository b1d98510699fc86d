//! Clause assemblers: projection, sources, joins, grouping and ordering
//!
//! Each produces one clause body (without its keyword where the keyword is
//! optional) and binds through the shared [`SqlParams`].

use super::{Compiler, FieldShape, SqlParams, qualify};
use crate::error::{BuildError, Result};
use crate::types::{Field, Join, Sort, Table};

impl Compiler {
    /// Projected field with its alias. A subquery without an explicit alias
    /// falls back to the embedded select's own alias.
    pub fn compile_field(&self, field: &Field, params: &mut SqlParams) -> Result<String> {
        let shape = FieldShape::of(field).map_err(BuildError::invalid_field)?;
        let (sql, fallback_alias) = match shape {
            FieldShape::Column { table, column } => (qualify(table, column), None),
            FieldShape::Query(query) => (
                format!("({})", self.compile_subquery(query, params)?),
                query.alias(),
            ),
        };

        match field.alias.as_deref().or(fallback_alias) {
            Some(alias) => Ok(format!("{} AS {}", sql, alias)),
            None => Ok(sql),
        }
    }

    /// Comma-separated projection list
    pub fn compile_fields(&self, fields: &[Field], params: &mut SqlParams) -> Result<String> {
        if fields.is_empty() {
            return Err(BuildError::FieldsRequired);
        }
        let parts = fields
            .iter()
            .map(|field| self.compile_field(field, params))
            .collect::<Result<Vec<_>>>()?;
        Ok(parts.join(", "))
    }

    /// Field used as an expression (GROUP BY, ORDER BY); aliases are dropped
    fn compile_field_ref(&self, field: &Field, params: &mut SqlParams) -> Result<String> {
        match FieldShape::of(field).map_err(BuildError::invalid_field)? {
            FieldShape::Column { table, column } => Ok(qualify(table, column)),
            FieldShape::Query(query) => Ok(format!("({})", self.compile_subquery(query, params)?)),
        }
    }

    /// FROM / JOIN source
    pub fn compile_table(&self, table: &Table, params: &mut SqlParams) -> Result<String> {
        let name = table.name.as_deref().filter(|name| !name.trim().is_empty());
        let (sql, fallback_alias) = match (name, &table.query) {
            (Some(name), None) => (name.to_string(), None),
            (None, Some(query)) => (
                format!("({})", self.compile_subquery(query, params)?),
                query.alias(),
            ),
            (Some(_), Some(_)) => {
                return Err(BuildError::invalid_table(
                    "table sets both a name and a subquery",
                ));
            }
            (None, None) => {
                return Err(BuildError::invalid_table(
                    "table sets neither a name nor a subquery",
                ));
            }
        };

        match table.alias.as_deref().or(fallback_alias) {
            Some(alias) => Ok(format!("{} AS {}", sql, alias)),
            None => Ok(sql),
        }
    }

    /// `<TYPE> JOIN <source> ON <condition>`
    pub fn compile_join(&self, join: &Join, params: &mut SqlParams) -> Result<String> {
        let table = self.compile_table(&join.table, params)?;
        let on = self.compile_filter(Some(&join.on), params, true)?;
        if on.is_empty() {
            return Err(BuildError::FiltersRequired);
        }
        Ok(format!("{} {} ON {}", join.join_type.as_sql(), table, on))
    }

    /// GROUP BY body
    pub fn compile_group_by(&self, fields: &[Field], params: &mut SqlParams) -> Result<String> {
        let parts = fields
            .iter()
            .map(|field| self.compile_field_ref(field, params))
            .collect::<Result<Vec<_>>>()?;
        Ok(parts.join(", "))
    }

    /// ORDER BY body
    pub fn compile_order_by(&self, sorts: &[Sort], params: &mut SqlParams) -> Result<String> {
        let parts = sorts
            .iter()
            .map(|sort| {
                let field = self.compile_field_ref(&sort.field, params)?;
                Ok(format!("{} {}", field, sort.direction))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(parts.join(", "))
    }
}
