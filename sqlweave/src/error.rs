//! Error type for statement compilation
//!
//! Compilation stops at the first structural violation. Errors raised deep
//! inside nested groups or subqueries reach the caller unchanged.

use thiserror::Error;

/// Errors produced while compiling a statement request into SQL
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A projected, grouped or sorted field names none (or more than one) of
    /// its legal alternatives
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// A filter condition is malformed (no usable field, or a value supplied
    /// to a NULL check)
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// A table source names neither (or both) of a table name and a subquery
    #[error("Invalid table: {0}")]
    InvalidTable(String),

    /// IN / NOT IN used with a value that is not an array
    #[error("Operator {operator} requires an array value")]
    OperatorRequiresArray { operator: &'static str },

    /// IN / NOT IN used with an empty array
    #[error("Operator {operator} requires a non-empty array value")]
    OperatorRequiresNonEmptyArray { operator: &'static str },

    /// LIKE / NOT LIKE used with a value that is not a string
    #[error("Operator {operator} requires a string value")]
    LikeValueTypeMismatch { operator: &'static str },

    /// Dialect tag not recognized
    #[error("Unsupported dialect: {0}")]
    UnsupportedDialect(String),

    /// A filter group has no children that produce SQL
    #[error("Filter group requires at least one filter")]
    FiltersRequired,

    /// SELECT without projected fields
    #[error("At least one field is required")]
    FieldsRequired,

    /// Statement without a source table
    #[error("A table is required")]
    TableRequired,

    /// INSERT without columns
    #[error("At least one column is required")]
    ColumnsRequired,

    /// INSERT without rows, or UPDATE without assignments
    #[error("At least one value is required")]
    ValuesRequired,

    /// INSERT row whose length differs from the column list
    #[error("Row {row} has {actual} values, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Raw SQL references a placeholder below the dialect's first index
    #[error("Invalid placeholder {token} in raw SQL")]
    InvalidPlaceholder { token: String },

    /// Request document exceeds the configured size limit
    #[error("Request exceeds maximum size of {limit} bytes")]
    RequestTooLarge { limit: usize },

    /// Request document could not be decoded
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl BuildError {
    /// Create an invalid field error
    pub fn invalid_field(reason: impl Into<String>) -> Self {
        Self::InvalidField(reason.into())
    }

    /// Create an invalid filter error
    pub fn invalid_filter(reason: impl Into<String>) -> Self {
        Self::InvalidFilter(reason.into())
    }

    /// Create an invalid table error
    pub fn invalid_table(reason: impl Into<String>) -> Self {
        Self::InvalidTable(reason.into())
    }

    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidField(_) => "INVALID_FIELD",
            Self::InvalidFilter(_) => "INVALID_FILTER",
            Self::InvalidTable(_) => "INVALID_TABLE",
            Self::OperatorRequiresArray { .. } => "OPERATOR_REQUIRES_ARRAY",
            Self::OperatorRequiresNonEmptyArray { .. } => "OPERATOR_REQUIRES_NON_EMPTY_ARRAY",
            Self::LikeValueTypeMismatch { .. } => "LIKE_VALUE_TYPE_MISMATCH",
            Self::UnsupportedDialect(_) => "UNSUPPORTED_DIALECT",
            Self::FiltersRequired => "FILTERS_REQUIRED",
            Self::FieldsRequired => "FIELDS_REQUIRED",
            Self::TableRequired => "TABLE_REQUIRED",
            Self::ColumnsRequired => "COLUMNS_REQUIRED",
            Self::ValuesRequired => "VALUES_REQUIRED",
            Self::RowLengthMismatch { .. } => "ROW_LENGTH_MISMATCH",
            Self::InvalidPlaceholder { .. } => "INVALID_PLACEHOLDER",
            Self::RequestTooLarge { .. } => "REQUEST_TOO_LARGE",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, BuildError>;
