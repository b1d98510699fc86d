//! Per-compilation argument accumulator

use crate::placeholder::{Cursor, PlaceholderStyle};
use crate::types::Arg;

/// Collects SQL parameters during query building (maintains insertion order)
///
/// One instance is created per statement and passed by `&mut` through every
/// clause and every nested subquery, so the argument list and the placeholder
/// cursor stay aligned across the whole statement.
#[derive(Debug, Clone)]
pub struct SqlParams {
    pub values: Vec<Arg>,
    cursor: Cursor,
}

impl SqlParams {
    pub fn new(style: PlaceholderStyle) -> Self {
        Self {
            values: Vec::new(),
            cursor: Cursor::new(style),
        }
    }

    /// Append an argument and return the placeholder that binds it
    pub fn bind(&mut self, value: Arg) -> String {
        self.values.push(value);
        self.cursor.next()
    }

    /// Append pre-bound arguments whose placeholders are already present in
    /// spliced text, advancing the cursor by the argument count
    pub fn extend_prebound(&mut self, values: &[Arg]) {
        self.values.extend_from_slice(values);
        self.cursor.advance(values.len());
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn style(&self) -> PlaceholderStyle {
        self.cursor.style()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> Vec<Arg> {
        self.values
    }
}
