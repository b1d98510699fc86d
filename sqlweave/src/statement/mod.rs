//! Statement assembly
//!
//! Concatenates compiled clauses into complete SELECT / INSERT / UPDATE /
//! DELETE statements. All clauses of one statement share a single
//! [`SqlParams`](crate::compiler::SqlParams).

mod delete;
mod insert;
mod select;
mod update;

use crate::compiler::{Compiler, splice_raw};
use crate::error::{BuildError, Result};
use crate::types::{CompiledQuery, Statement};

impl Compiler {
    /// Compile any statement into SQL text and its ordered arguments
    pub fn compile(&self, statement: &Statement) -> Result<CompiledQuery> {
        let mut params = self.new_params();
        let sql = match statement {
            Statement::Select(request) => self.select_sql(request, &mut params)?,
            Statement::Insert(request) => self.insert_sql(request, &mut params)?,
            Statement::Update(request) => self.update_sql(request, &mut params)?,
            Statement::Delete(request) => self.delete_sql(request, &mut params)?,
            Statement::Raw(raw) => splice_raw(raw, &mut params)?,
        };

        tracing::debug!(
            dialect = %self.dialect(),
            args = params.len(),
            "Compiled statement"
        );

        Ok(CompiledQuery {
            sql,
            args: params.into_values(),
        })
    }
}

/// Plain table name required by INSERT / UPDATE / DELETE
fn target_table(table: &str) -> Result<&str> {
    let table = table.trim();
    if table.is_empty() {
        return Err(BuildError::TableRequired);
    }
    Ok(table)
}
