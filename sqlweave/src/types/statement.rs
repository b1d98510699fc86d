//! Statement requests and compiled output

use serde::{Deserialize, Serialize};

use super::{Arg, Field, Filter, FilterValue, Join, Sort, Table};

/// Pre-rendered SQL text with its own, already ordered arguments.
///
/// Indexed placeholders in `sql` are numbered locally from the dialect's first
/// index (`$1` or `@p0`) and are renumbered when spliced into a statement.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawSql {
    pub sql: String,
    #[serde(default)]
    pub args: Vec<Arg>,
}

impl RawSql {
    pub fn new(sql: impl Into<String>, args: Vec<Arg>) -> Self {
        Self {
            sql: sql.into(),
            args,
        }
    }
}

/// Statement embedded in a field, table or filter value
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Subquery {
    /// Compiled recursively, sharing the parent's placeholder cursor
    Select(Box<SelectRequest>),
    /// Spliced with its placeholders renumbered from the parent's cursor
    Raw(RawSql),
}

impl Subquery {
    pub fn select(request: SelectRequest) -> Self {
        Self::Select(Box::new(request))
    }

    pub fn raw(sql: impl Into<String>, args: Vec<Arg>) -> Self {
        Self::Raw(RawSql::new(sql, args))
    }

    /// Alias carried by an embedded select, used when the embedding field or
    /// table does not set its own
    pub fn alias(&self) -> Option<&str> {
        match self {
            Self::Select(request) => request.alias.as_deref(),
            Self::Raw(_) => None,
        }
    }
}

/// Structured SELECT description
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SelectRequest {
    pub distinct: bool,
    pub fields: Vec<Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<Table>,
    pub joins: Vec<Join>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    pub group_by: Vec<Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub having: Option<Filter>,
    pub sorts: Vec<Sort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u64>,
    /// Alias used when this request is embedded as a subquery
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// INSERT of one or more rows
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct InsertRequest {
    pub table: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Arg>>,
}

/// Single `column = value` assignment of an UPDATE
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Assignment {
    pub column: String,
    pub value: FilterValue,
}

impl Assignment {
    pub fn new(column: impl Into<String>, value: FilterValue) -> Self {
        Self {
            column: column.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UpdateRequest {
    pub table: String,
    pub set: Vec<Assignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DeleteRequest {
    pub table: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
}

/// Any statement the compiler accepts
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
    Select(SelectRequest),
    Insert(InsertRequest),
    Update(UpdateRequest),
    Delete(DeleteRequest),
    Raw(RawSql),
}

impl From<SelectRequest> for Statement {
    fn from(request: SelectRequest) -> Self {
        Self::Select(request)
    }
}

impl From<InsertRequest> for Statement {
    fn from(request: InsertRequest) -> Self {
        Self::Insert(request)
    }
}

impl From<UpdateRequest> for Statement {
    fn from(request: UpdateRequest) -> Self {
        Self::Update(request)
    }
}

impl From<DeleteRequest> for Statement {
    fn from(request: DeleteRequest) -> Self {
        Self::Delete(request)
    }
}

/// SQL text plus the positional arguments bound to its placeholders
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompiledQuery {
    pub sql: String,
    pub args: Vec<Arg>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_select_request_defaults() {
        let request: SelectRequest =
            serde_json::from_str(r#"{"fields": [{"column": "id"}], "table": {"name": "users"}}"#)
                .unwrap();
        assert!(!request.distinct);
        assert!(request.joins.is_empty());
        assert!(request.filter.is_none());
        assert_eq!(request.take, None);
    }

    #[test]
    fn test_statement_tagging() {
        let statement: Statement = serde_json::from_value(json!({
            "raw": {"sql": "SELECT 1 WHERE a = @p0", "args": [5]}
        }))
        .unwrap();
        assert_eq!(
            statement,
            Statement::Raw(RawSql::new("SELECT 1 WHERE a = @p0", vec![json!(5)]))
        );
    }

    #[test]
    fn test_subquery_alias() {
        let request = SelectRequest {
            alias: Some("recent".into()),
            ..Default::default()
        };
        assert_eq!(Subquery::select(request).alias(), Some("recent"));
        assert_eq!(Subquery::raw("SELECT 1", vec![]).alias(), None);
    }
}
