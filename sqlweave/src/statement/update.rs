use super::target_table;
use crate::compiler::{Compiler, SqlParams};
use crate::error::{BuildError, Result};
use crate::types::{Operator, UpdateRequest};

impl Compiler {
    /// `UPDATE t SET c = p, ... [WHERE f]`
    pub(crate) fn update_sql(
        &self,
        request: &UpdateRequest,
        params: &mut SqlParams,
    ) -> Result<String> {
        let table = target_table(&request.table)?;
        if request.set.is_empty() {
            return Err(BuildError::ValuesRequired);
        }

        let mut assignments = Vec::with_capacity(request.set.len());
        for assignment in &request.set {
            let value = self
                .encode_value(Operator::Eq, Some(&assignment.value), params)?
                .unwrap_or_default();
            assignments.push(format!("{} = {}", assignment.column, value));
        }

        let mut sql = format!("UPDATE {} SET {}", table, assignments.join(", "));
        let where_sql = self.compile_filter(request.filter.as_ref(), params, true)?;
        if !where_sql.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&where_sql);
        }
        Ok(sql)
    }
}

#[cfg(test)]
mod tests {
    use crate::compiler::Compiler;
    use crate::dialect::Dialect;
    use crate::error::BuildError;
    use crate::types::{Assignment, Filter, FilterValue, Statement, Subquery, UpdateRequest};
    use serde_json::json;

    #[test]
    fn test_update_with_filter() {
        let statement = Statement::Update(UpdateRequest {
            table: "accounts".into(),
            set: vec![
                Assignment::new("balance", FilterValue::literal(0)),
                Assignment::new("updated_at", FilterValue::column("created_at")),
                Assignment::new(
                    "tier",
                    FilterValue::Query(Subquery::raw(
                        "SELECT id FROM tiers WHERE name = $1",
                        vec![json!("basic")],
                    )),
                ),
            ],
            filter: Some(Filter::in_list("id", [4, 5])),
        });
        let compiled = Compiler::new(Dialect::Postgres).compile(&statement).unwrap();
        assert_eq!(
            compiled.sql,
            "UPDATE accounts SET balance = $1, updated_at = created_at, \
             tier = (SELECT id FROM tiers WHERE name = $2) WHERE id IN ($3, $4)"
        );
        assert_eq!(compiled.args, vec![json!(0), json!("basic"), json!(4), json!(5)]);
    }

    #[test]
    fn test_update_requires_assignments() {
        let statement = Statement::Update(UpdateRequest {
            table: "accounts".into(),
            ..Default::default()
        });
        assert_eq!(
            Compiler::new(Dialect::Sqlite).compile(&statement),
            Err(BuildError::ValuesRequired)
        );
    }
}
