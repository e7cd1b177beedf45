//! The calculation-widget contract: typed input records, JSON coercion,
//! and renderer-agnostic view models.
//!
//! Every tool declares a static `FormSchema`; `validate` turns a raw JSON
//! object (browser forms submit strings and numbers interchangeably) into
//! typed `Inputs` or a `FormError` naming the offending field.

pub mod field;
pub mod schema;
pub mod view;

pub use field::{FieldSpec, FieldType, FieldValue, Inputs};
pub use schema::FormSchema;
pub use view::{format_currency, format_percent, ResultItem, ResultKind, ViewModel};

use thiserror::Error;

/// Validation and computation failure for a single widget request.
/// Never panics out of a handler; converted to an HTTP 4xx by `AppError`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("invalid value for '{field}': {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },

    /// A domain rule rejected otherwise well-typed inputs
    /// (e.g. a zero denominator).
    #[error("{0}")]
    Rule(String),
}

impl FormError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        FormError::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    pub fn rule(message: impl Into<String>) -> Self {
        FormError::Rule(message.into())
    }
}
