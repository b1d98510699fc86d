//! Filter tree definitions
//!
//! A [`Filter`] is either a single condition, an AND/OR group of child
//! filters, or a literal SQL condition carrying its own arguments.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Arg, Field, RawSql, Subquery};

/// Comparison operator of a filter condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Operator {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "<>")]
    Ne,
    #[serde(rename = "!=")]
    NotEq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Lte,
    #[serde(rename = "in", alias = "IN")]
    In,
    #[serde(rename = "not in", alias = "NOT IN")]
    NotIn,
    #[serde(rename = "like", alias = "LIKE")]
    Like,
    #[serde(rename = "not like", alias = "NOT LIKE")]
    NotLike,
    #[serde(rename = "is null", alias = "IS NULL")]
    IsNull,
    #[serde(rename = "is not null", alias = "IS NOT NULL")]
    IsNotNull,
}

impl Operator {
    /// Dialect-neutral SQL text
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::NotEq => "!=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::IsNull => "IS NULL",
            Self::IsNotNull => "IS NOT NULL",
        }
    }

    /// IS NULL / IS NOT NULL take no value
    pub fn is_null_check(&self) -> bool {
        matches!(self, Self::IsNull | Self::IsNotNull)
    }

    /// IN / NOT IN take an array value
    pub fn is_list(&self) -> bool {
        matches!(self, Self::In | Self::NotIn)
    }

    /// LIKE / NOT LIKE take a string value
    pub fn is_like(&self) -> bool {
        matches!(self, Self::Like | Self::NotLike)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Boolean connective of a filter group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Logic {
    #[default]
    #[serde(alias = "AND")]
    And,
    #[serde(alias = "OR")]
    Or,
}

impl Logic {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Right-hand side of a filter condition
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterValue {
    /// Reference to another column; never binds an argument
    Column {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        table: Option<String>,
        column: String,
    },
    /// Embedded statement, spliced in parentheses
    Query(Subquery),
    /// Scalar or array argument
    Literal(Arg),
    Null,
}

impl FilterValue {
    pub fn column(column: impl Into<String>) -> Self {
        Self::Column {
            table: None,
            column: column.into(),
        }
    }

    pub fn qualified(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::Column {
            table: Some(table.into()),
            column: column.into(),
        }
    }

    pub fn literal(value: impl Into<Arg>) -> Self {
        Self::Literal(value.into())
    }

    /// True for [`FilterValue::Null`] and for a JSON `null` literal
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null | Self::Literal(Arg::Null))
    }
}

impl From<Subquery> for FilterValue {
    fn from(query: Subquery) -> Self {
        Self::Query(query)
    }
}

/// Node of a boolean filter tree
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Filter {
    /// `field operator value`
    Condition {
        field: Field,
        operator: Operator,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<FilterValue>,
    },
    /// Children joined by `logic`; must not be empty
    Group { logic: Logic, filters: Vec<Filter> },
    /// Literal SQL condition with its own arguments
    Raw(RawSql),
}

impl Filter {
    pub fn condition(field: impl Into<Field>, operator: Operator, value: FilterValue) -> Self {
        Self::Condition {
            field: field.into(),
            operator,
            value: Some(value),
        }
    }

    fn compare(field: impl Into<Field>, operator: Operator, value: impl Into<Arg>) -> Self {
        Self::condition(field, operator, FilterValue::Literal(value.into()))
    }

    pub fn eq(field: impl Into<Field>, value: impl Into<Arg>) -> Self {
        Self::compare(field, Operator::Eq, value)
    }

    pub fn ne(field: impl Into<Field>, value: impl Into<Arg>) -> Self {
        Self::compare(field, Operator::Ne, value)
    }

    pub fn gt(field: impl Into<Field>, value: impl Into<Arg>) -> Self {
        Self::compare(field, Operator::Gt, value)
    }

    pub fn gte(field: impl Into<Field>, value: impl Into<Arg>) -> Self {
        Self::compare(field, Operator::Gte, value)
    }

    pub fn lt(field: impl Into<Field>, value: impl Into<Arg>) -> Self {
        Self::compare(field, Operator::Lt, value)
    }

    pub fn lte(field: impl Into<Field>, value: impl Into<Arg>) -> Self {
        Self::compare(field, Operator::Lte, value)
    }

    pub fn in_list<I, V>(field: impl Into<Field>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Arg>,
    {
        let values: Vec<Arg> = values.into_iter().map(Into::into).collect();
        Self::compare(field, Operator::In, Arg::Array(values))
    }

    pub fn not_in<I, V>(field: impl Into<Field>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Arg>,
    {
        let values: Vec<Arg> = values.into_iter().map(Into::into).collect();
        Self::compare(field, Operator::NotIn, Arg::Array(values))
    }

    /// Substring match; the value is wrapped in `%` wildcards when compiled
    pub fn like(field: impl Into<Field>, value: impl Into<String>) -> Self {
        Self::compare(field, Operator::Like, value.into())
    }

    pub fn not_like(field: impl Into<Field>, value: impl Into<String>) -> Self {
        Self::compare(field, Operator::NotLike, value.into())
    }

    pub fn is_null(field: impl Into<Field>) -> Self {
        Self::Condition {
            field: field.into(),
            operator: Operator::IsNull,
            value: None,
        }
    }

    pub fn is_not_null(field: impl Into<Field>) -> Self {
        Self::Condition {
            field: field.into(),
            operator: Operator::IsNotNull,
            value: None,
        }
    }

    /// `left = right` between two columns, e.g. a join condition
    pub fn column_eq(left: impl Into<Field>, right: FilterValue) -> Self {
        Self::condition(left, Operator::Eq, right)
    }

    pub fn and(filters: Vec<Filter>) -> Self {
        Self::Group {
            logic: Logic::And,
            filters,
        }
    }

    pub fn or(filters: Vec<Filter>) -> Self {
        Self::Group {
            logic: Logic::Or,
            filters,
        }
    }

    pub fn raw(sql: impl Into<String>, args: Vec<Arg>) -> Self {
        Self::Raw(RawSql::new(sql, args))
    }

    /// Combine with another filter under AND, extending an existing AND group
    /// rather than nesting it
    pub fn and_with(self, other: Filter) -> Self {
        match self {
            Self::Group {
                logic: Logic::And,
                mut filters,
            } => {
                filters.push(other);
                Self::and(filters)
            }
            current => Self::and(vec![current, other]),
        }
    }
}
