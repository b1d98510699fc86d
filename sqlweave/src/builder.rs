//! Fluent builders
//!
//! Chainable constructors for the request types. Builders only assemble
//! descriptions; all validation happens when the request is compiled.

use crate::compiler::Compiler;
use crate::dialect::Dialect;
use crate::error::Result;
use crate::types::{
    Arg, Assignment, CompiledQuery, DeleteRequest, Field, Filter, FilterValue, InsertRequest,
    Join, SelectRequest, Sort, Statement, Table, UpdateRequest,
};

/// Add `filter` to an optional root filter under AND
fn and_into(slot: &mut Option<Filter>, filter: Filter) {
    *slot = Some(match slot.take() {
        Some(current) => current.and_with(filter),
        None => filter,
    });
}

/// Builder for SELECT statements
#[derive(Debug, Clone, Default)]
pub struct SelectBuilder {
    request: SelectRequest,
}

impl SelectBuilder {
    /// Start a SELECT from the given table
    pub fn new(table: impl Into<Table>) -> Self {
        Self {
            request: SelectRequest {
                table: Some(table.into()),
                ..Default::default()
            },
        }
    }

    /// Replace the projection
    pub fn select<F: Into<Field>>(mut self, fields: impl IntoIterator<Item = F>) -> Self {
        self.request.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Append one projected field
    pub fn field(mut self, field: impl Into<Field>) -> Self {
        self.request.fields.push(field.into());
        self
    }

    pub fn distinct(mut self) -> Self {
        self.request.distinct = true;
        self
    }

    pub fn join(mut self, join: Join) -> Self {
        self.request.joins.push(join);
        self
    }

    pub fn inner_join(self, table: impl Into<Table>, on: Filter) -> Self {
        self.join(Join::inner(table, on))
    }

    pub fn left_join(self, table: impl Into<Table>, on: Filter) -> Self {
        self.join(Join::left(table, on))
    }

    pub fn right_join(self, table: impl Into<Table>, on: Filter) -> Self {
        self.join(Join::right(table, on))
    }

    /// Add a WHERE condition; repeated calls are combined with AND
    pub fn filter(mut self, filter: Filter) -> Self {
        and_into(&mut self.request.filter, filter);
        self
    }

    pub fn group_by(mut self, field: impl Into<Field>) -> Self {
        self.request.group_by.push(field.into());
        self
    }

    /// Add a HAVING condition; repeated calls are combined with AND
    pub fn having(mut self, filter: Filter) -> Self {
        and_into(&mut self.request.having, filter);
        self
    }

    pub fn order_asc(mut self, field: impl Into<Field>) -> Self {
        self.request.sorts.push(Sort::asc(field));
        self
    }

    pub fn order_desc(mut self, field: impl Into<Field>) -> Self {
        self.request.sorts.push(Sort::desc(field));
        self
    }

    pub fn take(mut self, take: u64) -> Self {
        self.request.take = Some(take);
        self
    }

    pub fn skip(mut self, skip: u64) -> Self {
        self.request.skip = Some(skip);
        self
    }

    /// Alias used when the built request is embedded as a subquery
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.request.alias = Some(alias.into());
        self
    }

    pub fn build(self) -> SelectRequest {
        self.request
    }

    pub fn to_sql(&self, dialect: Dialect) -> Result<CompiledQuery> {
        Compiler::new(dialect).compile_select(&self.request)
    }
}

/// Builder for INSERT statements
#[derive(Debug, Clone, Default)]
pub struct InsertBuilder {
    request: InsertRequest,
}

impl InsertBuilder {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            request: InsertRequest {
                table: table.into(),
                ..Default::default()
            },
        }
    }

    pub fn columns<C: Into<String>>(mut self, columns: impl IntoIterator<Item = C>) -> Self {
        self.request.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Append one row of values, in column order
    pub fn row<V: Into<Arg>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.request
            .rows
            .push(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> InsertRequest {
        self.request
    }

    pub fn to_sql(&self, dialect: Dialect) -> Result<CompiledQuery> {
        Compiler::new(dialect).compile(&Statement::Insert(self.request.clone()))
    }
}

/// Builder for UPDATE statements
#[derive(Debug, Clone, Default)]
pub struct UpdateBuilder {
    request: UpdateRequest,
}

impl UpdateBuilder {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            request: UpdateRequest {
                table: table.into(),
                ..Default::default()
            },
        }
    }

    /// Assign a bound value
    pub fn set(self, column: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.set_value(column, FilterValue::literal(value))
    }

    /// Assign any value form: literal, column reference or subquery
    pub fn set_value(mut self, column: impl Into<String>, value: FilterValue) -> Self {
        self.request.set.push(Assignment::new(column, value));
        self
    }

    /// Add a WHERE condition; repeated calls are combined with AND
    pub fn filter(mut self, filter: Filter) -> Self {
        and_into(&mut self.request.filter, filter);
        self
    }

    pub fn build(self) -> UpdateRequest {
        self.request
    }

    pub fn to_sql(&self, dialect: Dialect) -> Result<CompiledQuery> {
        Compiler::new(dialect).compile(&Statement::Update(self.request.clone()))
    }
}

/// Builder for DELETE statements
#[derive(Debug, Clone, Default)]
pub struct DeleteBuilder {
    request: DeleteRequest,
}

impl DeleteBuilder {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            request: DeleteRequest {
                table: table.into(),
                filter: None,
            },
        }
    }

    /// Add a WHERE condition; repeated calls are combined with AND
    pub fn filter(mut self, filter: Filter) -> Self {
        and_into(&mut self.request.filter, filter);
        self
    }

    pub fn build(self) -> DeleteRequest {
        self.request
    }

    pub fn to_sql(&self, dialect: Dialect) -> Result<CompiledQuery> {
        Compiler::new(dialect).compile(&Statement::Delete(self.request.clone()))
    }
}
