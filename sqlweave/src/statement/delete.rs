use super::target_table;
use crate::compiler::{Compiler, SqlParams};
use crate::error::Result;
use crate::types::DeleteRequest;

impl Compiler {
    /// `DELETE FROM t [WHERE f]`
    pub(crate) fn delete_sql(
        &self,
        request: &DeleteRequest,
        params: &mut SqlParams,
    ) -> Result<String> {
        let table = target_table(&request.table)?;
        let mut sql = format!("DELETE FROM {}", table);
        let where_sql = self.compile_filter(request.filter.as_ref(), params, true)?;
        if !where_sql.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&where_sql);
        }
        Ok(sql)
    }
}
