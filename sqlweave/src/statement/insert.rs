use super::target_table;
use crate::compiler::{Compiler, SqlParams};
use crate::error::{BuildError, Result};
use crate::types::InsertRequest;

impl Compiler {
    /// `INSERT INTO t (c1, c2) VALUES (p, p), (p, p)`
    pub(crate) fn insert_sql(
        &self,
        request: &InsertRequest,
        params: &mut SqlParams,
    ) -> Result<String> {
        let table = target_table(&request.table)?;
        if request.columns.is_empty() {
            return Err(BuildError::ColumnsRequired);
        }
        if request.rows.is_empty() {
            return Err(BuildError::ValuesRequired);
        }

        let expected = request.columns.len();
        let mut rows = Vec::with_capacity(request.rows.len());
        for (index, row) in request.rows.iter().enumerate() {
            if row.len() != expected {
                return Err(BuildError::RowLengthMismatch {
                    row: index,
                    expected,
                    actual: row.len(),
                });
            }
            let placeholders: Vec<String> =
                row.iter().map(|value| params.bind(value.clone())).collect();
            rows.push(format!("({})", placeholders.join(", ")));
        }

        Ok(format!(
            "INSERT INTO {} ({}) VALUES {}",
            table,
            request.columns.join(", "),
            rows.join(", ")
        ))
    }
}
