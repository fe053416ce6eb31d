//! Mapping error types.

use std::any::TypeId;

use thiserror::Error;

use crate::convert::ConvertError;
use crate::tag::TagIndex;
use crate::types::{FieldKind, ScalarKind};

/// Errors returned by a mapping call. Every variant aborts the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BindError {
    /// Dynamic target is not a registered record type
    #[error("Target type {type_id:?} is not a registered record type")]
    NotARecord { type_id: TypeId },

    /// Field is a nested record, a reference wrapper, or has no converter
    #[error("Field '{field}' has unsupported type {kind}")]
    UnsupportedFieldType {
        field: &'static str,
        kind: FieldKind,
    },

    /// Annotation index is malformed or beyond the input
    #[error("Field '{field}' index {index} out of range for input of length {len}")]
    IndexOutOfRange {
        field: &'static str,
        index: TagIndex,
        len: usize,
    },

    /// Input token failed to convert to the field's kind
    #[error("Field '{field}' could not parse '{token}': {source}")]
    Parse {
        field: &'static str,
        token: String,
        #[source]
        source: ConvertError,
    },

    /// Assignment hook has no field of that name
    #[error("Record has no field '{field}'")]
    UnknownField { field: &'static str },

    /// Assignment received a value of another kind
    #[error("Field '{field}' type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        field: &'static str,
        expected: FieldKind,
        got: ScalarKind,
    },
}
