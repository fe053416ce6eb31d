//! Text-to-scalar converters.
//!
//! Every [`ScalarKind`] owns exactly one conversion. Integers are base 10 and
//! range-checked against the target width, booleans accept the usual keyword
//! literals, floats use the standard literal grammar.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use crate::types::{ScalarKind, ScalarValue};

/// Failure to convert a single text token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Malformed or out-of-range integer literal.
    #[error("invalid integer: {0}")]
    Int(#[from] ParseIntError),

    /// Malformed float literal.
    #[error("invalid float: {0}")]
    Float(#[from] ParseFloatError),

    /// Token is not a recognized boolean literal.
    #[error("invalid boolean literal '{token}'")]
    Bool { token: String },

    /// Finite float literal that does not fit the target width.
    #[error("float literal '{token}' out of range for {kind}")]
    FloatOutOfRange { token: String, kind: ScalarKind },
}

impl ScalarKind {
    /// Converts `token` into a value of this kind.
    pub fn convert(self, token: &str) -> Result<ScalarValue, ConvertError> {
        let value = match self {
            ScalarKind::Bool => ScalarValue::Bool(parse_bool(token)?),
            ScalarKind::String => ScalarValue::String(token.to_owned()),
            ScalarKind::I8 => ScalarValue::I8(token.parse()?),
            ScalarKind::I16 => ScalarValue::I16(token.parse()?),
            ScalarKind::I32 => ScalarValue::I32(token.parse()?),
            ScalarKind::I64 => ScalarValue::I64(token.parse()?),
            ScalarKind::Isize => ScalarValue::Isize(token.parse()?),
            ScalarKind::U8 => ScalarValue::U8(token.parse()?),
            ScalarKind::U16 => ScalarValue::U16(token.parse()?),
            ScalarKind::U32 => ScalarValue::U32(token.parse()?),
            ScalarKind::U64 => ScalarValue::U64(token.parse()?),
            ScalarKind::Usize => ScalarValue::Usize(token.parse()?),
            ScalarKind::F32 => {
                let value: f32 = token.parse()?;
                check_float_range(token, value.is_infinite(), self)?;
                ScalarValue::F32(value)
            }
            ScalarKind::F64 => {
                let value: f64 = token.parse()?;
                check_float_range(token, value.is_infinite(), self)?;
                ScalarValue::F64(value)
            }
        };
        Ok(value)
    }
}

fn parse_bool(token: &str) -> Result<bool, ConvertError> {
    match token {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ConvertError::Bool {
            token: token.to_owned(),
        }),
    }
}

/// Rust float parsing saturates to infinity; only an explicit infinity
/// literal may produce one.
fn check_float_range(token: &str, infinite: bool, kind: ScalarKind) -> Result<(), ConvertError> {
    if infinite && !is_infinity_literal(token) {
        return Err(ConvertError::FloatOutOfRange {
            token: token.to_owned(),
            kind,
        });
    }
    Ok(())
}

fn is_infinity_literal(token: &str) -> bool {
    let unsigned = token
        .strip_prefix('+')
        .or_else(|| token.strip_prefix('-'))
        .unwrap_or(token);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
