//! Label row editing. Indices are zero-based; errors report one-based rows.

use super::LabelSession;
use crate::error::DesignerResult;
use crate::model::LabelRow;
use labelkit_core::ValidationError;

impl LabelSession {
    /// Append an empty row and return its index.
    pub fn add_row(&mut self) -> DesignerResult<usize> {
        self.transact(|s| {
            s.rows.push(LabelRow::new());
            Ok(s.rows.len() - 1)
        })
    }

    /// Edit one field of a row. Non-digit edits of numeric fields are
    /// rejected and the previous value is kept.
    pub fn set_row_field(&mut self, index: usize, key: &str, value: &str) -> DesignerResult<()> {
        self.transact(|s| {
            let row = s
                .rows
                .get_mut(index)
                .ok_or(ValidationError::UnknownRow { row: index + 1 })?;
            if !row.set(key, value) {
                return Err(ValidationError::NotDigits {
                    row: index + 1,
                    field: key.to_string(),
                    value: value.to_string(),
                }
                .into());
            }
            Ok(())
        })
    }

    pub fn remove_row(&mut self, index: usize) -> DesignerResult<LabelRow> {
        self.transact(|s| {
            if index >= s.rows.len() {
                return Err(ValidationError::UnknownRow { row: index + 1 }.into());
            }
            Ok(s.rows.remove(index))
        })
    }
}
