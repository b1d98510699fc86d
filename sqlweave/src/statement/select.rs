use crate::compiler::{Compiler, SqlParams};
use crate::error::{BuildError, Result};
use crate::types::{CompiledQuery, SelectRequest};

impl Compiler {
    /// Compile a SELECT on its own
    pub fn compile_select(&self, request: &SelectRequest) -> Result<CompiledQuery> {
        let mut params = self.new_params();
        let sql = self.select_sql(request, &mut params)?;
        Ok(CompiledQuery {
            sql,
            args: params.into_values(),
        })
    }

    /// Assemble a SELECT into an existing parameter stream.
    ///
    /// Clauses are compiled in textual order (fields, table, joins, WHERE,
    /// GROUP BY, HAVING, ORDER BY, pagination) so placeholders are allocated in
    /// the order they appear.
    pub(crate) fn select_sql(
        &self,
        request: &SelectRequest,
        params: &mut SqlParams,
    ) -> Result<String> {
        if request.fields.is_empty() {
            return Err(BuildError::FieldsRequired);
        }
        let table = request.table.as_ref().ok_or(BuildError::TableRequired)?;

        let mut sql = String::from("SELECT ");
        if request.distinct {
            sql.push_str("DISTINCT ");
        }
        sql.push_str(&self.compile_fields(&request.fields, params)?);

        sql.push_str(" FROM ");
        sql.push_str(&self.compile_table(table, params)?);

        for join in &request.joins {
            sql.push(' ');
            sql.push_str(&self.compile_join(join, params)?);
        }

        let where_sql = self.compile_filter(request.filter.as_ref(), params, true)?;
        if !where_sql.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&where_sql);
        }

        if !request.group_by.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&self.compile_group_by(&request.group_by, params)?);
        }

        let having_sql = self.compile_filter(request.having.as_ref(), params, true)?;
        if !having_sql.is_empty() {
            sql.push_str(" HAVING ");
            sql.push_str(&having_sql);
        }

        let paginated = request.take.is_some() || request.skip.is_some();
        if !request.sorts.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.compile_order_by(&request.sorts, params)?);
        } else if paginated && self.sql_dialect().requires_order_for_offset() {
            sql.push_str(" ORDER BY (SELECT NULL)");
        }

        let pagination = self
            .sql_dialect()
            .limit_offset(request.take, request.skip, params);
        if !pagination.is_empty() {
            sql.push(' ');
            sql.push_str(&pagination);
        }

        Ok(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Dialect;
    use crate::types::{Field, Filter, FilterValue, Join, Operator, Sort, Subquery, Table};
    use serde_json::json;

    fn users_request() -> SelectRequest {
        SelectRequest {
            fields: vec![Field::qualified("u", "id"), Field::qualified("u", "name")],
            table: Some(Table::named("users").with_alias("u")),
            joins: vec![Join::inner(
                Table::named("teams").with_alias("t"),
                Filter::and(vec![
                    Filter::column_eq(
                        Field::qualified("t", "id"),
                        FilterValue::qualified("u", "team_id"),
                    ),
                    Filter::eq("t.active", true),
                ]),
            )],
            filter: Some(Filter::or(vec![
                Filter::eq("u.role", "admin"),
                Filter::and(vec![Filter::gt("u.age", 30), Filter::like("u.name", "son")]),
            ])),
            sorts: vec![Sort::asc("u.name")],
            take: Some(10),
            skip: Some(20),
            ..Default::default()
        }
    }

    #[test]
    fn test_full_select_postgres() {
        let compiled = Compiler::new(Dialect::Postgres)
            .compile_select(&users_request())
            .unwrap();
        assert_eq!(
            compiled.sql,
            "SELECT u.id, u.name FROM users AS u \
             INNER JOIN teams AS t ON t.id = u.team_id AND t.active = $1 \
             WHERE u.role = $2 OR (u.age > $3 AND u.name ILIKE $4) \
             ORDER BY u.name ASC LIMIT $5 OFFSET $6"
        );
        assert_eq!(
            compiled.args,
            vec![json!(true), json!("admin"), json!(30), json!("%son%"), json!(10), json!(20)]
        );
    }

    #[test]
    fn test_full_select_mssql() {
        let compiled = Compiler::new(Dialect::Mssql)
            .compile_select(&users_request())
            .unwrap();
        assert_eq!(
            compiled.sql,
            "SELECT u.id, u.name FROM users AS u \
             INNER JOIN teams AS t ON t.id = u.team_id AND t.active = @p0 \
             WHERE u.role = @p1 OR (u.age > @p2 AND u.name LIKE @p3) \
             ORDER BY u.name ASC OFFSET @p4 ROWS FETCH NEXT @p5 ROWS ONLY"
        );
        assert_eq!(
            compiled.args,
            vec![json!(true), json!("admin"), json!(30), json!("%son%"), json!(20), json!(10)]
        );
    }

    #[test]
    fn test_full_select_sqlite() {
        let compiled = Compiler::new(Dialect::Sqlite)
            .compile_select(&users_request())
            .unwrap();
        assert!(compiled.sql.ends_with("ORDER BY u.name ASC LIMIT ? OFFSET ?"));
        assert_eq!(compiled.sql.matches('?').count(), compiled.args.len());
    }

    #[test]
    fn test_mssql_pagination_without_sorts() {
        let request = SelectRequest {
            fields: vec![Field::column("id")],
            table: Some(Table::named("events")),
            take: Some(5),
            ..Default::default()
        };
        let compiled = Compiler::new(Dialect::Mssql).compile_select(&request).unwrap();
        assert_eq!(
            compiled.sql,
            "SELECT id FROM events ORDER BY (SELECT NULL) OFFSET 0 ROWS FETCH NEXT @p0 ROWS ONLY"
        );
    }

    #[test]
    fn test_group_by_having() {
        let request = SelectRequest {
            distinct: true,
            fields: vec![Field::column("status"), Field::column("COUNT(*)").with_alias("n")],
            table: Some(Table::named("orders")),
            filter: Some(Filter::gte("created_at", "2024-01-01")),
            group_by: vec![Field::column("status")],
            having: Some(Filter::gt("COUNT(*)", 3)),
            ..Default::default()
        };
        let compiled = Compiler::new(Dialect::Postgres).compile_select(&request).unwrap();
        assert_eq!(
            compiled.sql,
            "SELECT DISTINCT status, COUNT(*) AS n FROM orders WHERE created_at >= $1 \
             GROUP BY status HAVING COUNT(*) > $2"
        );
        assert_eq!(compiled.args, vec![json!("2024-01-01"), json!(3)]);
    }

    #[test]
    fn test_subquery_table_and_filter_share_cursor() {
        let recent = SelectRequest {
            fields: vec![Field::column("user_id")],
            table: Some(Table::named("logins")),
            filter: Some(Filter::gt("at", "2024-06-01")),
            take: Some(100),
            alias: Some("recent".into()),
            ..Default::default()
        };
        let banned = Subquery::raw(
            "SELECT MAX(score) FROM scores WHERE kind = $1",
            vec![json!("ban")],
        );
        let request = SelectRequest {
            fields: vec![Field::qualified("recent", "user_id")],
            table: Some(Table::subquery(Subquery::select(recent))),
            filter: Some(Filter::and(vec![
                Filter::eq("recent.region", "eu"),
                Filter::condition("recent.score", Operator::Lt, FilterValue::Query(banned)),
            ])),
            take: Some(5),
            ..Default::default()
        };
        let compiled = Compiler::new(Dialect::Postgres).compile_select(&request).unwrap();
        assert_eq!(
            compiled.sql,
            "SELECT recent.user_id \
             FROM (SELECT user_id FROM logins WHERE at > $1 LIMIT $2) AS recent \
             WHERE recent.region = $3 \
             AND recent.score < (SELECT MAX(score) FROM scores WHERE kind = $4) \
             LIMIT $5"
        );
        assert_eq!(
            compiled.args,
            vec![json!("2024-06-01"), json!(100), json!("eu"), json!("ban"), json!(5)]
        );
    }

    #[test]
    fn test_required_parts() {
        let compiler = Compiler::new(Dialect::Postgres);
        let no_fields = SelectRequest {
            table: Some(Table::named("t")),
            ..Default::default()
        };
        assert_eq!(
            compiler.compile_select(&no_fields),
            Err(BuildError::FieldsRequired)
        );

        let no_table = SelectRequest {
            fields: vec![Field::column("id")],
            ..Default::default()
        };
        assert_eq!(
            compiler.compile_select(&no_table),
            Err(BuildError::TableRequired)
        );
    }
}
