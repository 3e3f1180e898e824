//! Error types for the query builder core
//!
//! Two failure families exist and they never mix: configuration problems
//! surface at construction time, and invariant violations mean a bug in the
//! caller (a field set reached the parameter builder without passing
//! validation). Recoverable filter-set conflicts are not errors in this
//! sense; they live in [`crate::filter::Conflict`].

use crate::fields::Field;
use crate::shape::QueryShape;
use thiserror::Error;

/// Main error type for query builder operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryBuilderError {
    /// The host configuration disabled every query shape.
    #[error("No genomic query types are enabled in the configuration")]
    NoShapesEnabled,

    /// The parameter builder received a field value that validation should
    /// have rejected. Programming error, never shown to the user.
    #[error("Invariant violation building {shape} params: field {field} = {value:?}: {msg}")]
    InvariantViolation {
        shape: QueryShape,
        field: Field,
        value: String,
        msg: String,
    },

    /// Host configuration could not be parsed.
    #[error("Configuration error: {msg}")]
    Config { msg: String },
}

impl QueryBuilderError {
    /// Invariant-violation constructor used by the parameter builder.
    pub(crate) fn invariant(
        shape: QueryShape,
        field: Field,
        value: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        QueryBuilderError::InvariantViolation {
            shape,
            field,
            value: value.into(),
            msg: msg.into(),
        }
    }

    /// Configuration error from any underlying message.
    pub fn config(msg: impl Into<String>) -> Self {
        QueryBuilderError::Config { msg: msg.into() }
    }
}
