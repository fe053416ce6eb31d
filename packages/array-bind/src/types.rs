//! Scalar kinds, converted values and field kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A converted input token.
///
/// Each variant corresponds to a [`ScalarKind`] and holds a value already
/// narrowed to that kind's width.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    /// Boolean value
    Bool(bool),
    /// UTF-8 string
    String(String),
    /// 8-bit signed integer
    I8(i8),
    /// 16-bit signed integer
    I16(i16),
    /// 32-bit signed integer
    I32(i32),
    /// 64-bit signed integer
    I64(i64),
    /// Pointer-width signed integer
    Isize(isize),
    /// 8-bit unsigned integer
    U8(u8),
    /// 16-bit unsigned integer
    U16(u16),
    /// 32-bit unsigned integer
    U32(u32),
    /// 64-bit unsigned integer
    U64(u64),
    /// Pointer-width unsigned integer
    Usize(usize),
    /// 32-bit floating point number
    F32(f32),
    /// 64-bit floating point number
    F64(f64),
}

impl ScalarValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ScalarKind {
        match self {
            ScalarValue::Bool(_) => ScalarKind::Bool,
            ScalarValue::String(_) => ScalarKind::String,
            ScalarValue::I8(_) => ScalarKind::I8,
            ScalarValue::I16(_) => ScalarKind::I16,
            ScalarValue::I32(_) => ScalarKind::I32,
            ScalarValue::I64(_) => ScalarKind::I64,
            ScalarValue::Isize(_) => ScalarKind::Isize,
            ScalarValue::U8(_) => ScalarKind::U8,
            ScalarValue::U16(_) => ScalarKind::U16,
            ScalarValue::U32(_) => ScalarKind::U32,
            ScalarValue::U64(_) => ScalarKind::U64,
            ScalarValue::Usize(_) => ScalarKind::Usize,
            ScalarValue::F32(_) => ScalarKind::F32,
            ScalarValue::F64(_) => ScalarKind::F64,
        }
    }
}

/// Scalar field types that can be converted from a text token.
///
/// The set is closed: every variant carries its own converter
/// (see [`ScalarKind::convert`](crate::convert)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    /// Boolean value
    Bool,
    /// UTF-8 string
    String,
    /// 8-bit signed integer
    I8,
    /// 16-bit signed integer
    I16,
    /// 32-bit signed integer
    I32,
    /// 64-bit signed integer
    I64,
    /// Pointer-width signed integer
    Isize,
    /// 8-bit unsigned integer
    U8,
    /// 16-bit unsigned integer
    U16,
    /// 32-bit unsigned integer
    U32,
    /// 64-bit unsigned integer
    U64,
    /// Pointer-width unsigned integer
    Usize,
    /// 32-bit floating point number
    F32,
    /// 64-bit floating point number
    F64,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarKind::Bool => write!(f, "bool"),
            ScalarKind::String => write!(f, "string"),
            ScalarKind::I8 => write!(f, "i8"),
            ScalarKind::I16 => write!(f, "i16"),
            ScalarKind::I32 => write!(f, "i32"),
            ScalarKind::I64 => write!(f, "i64"),
            ScalarKind::Isize => write!(f, "isize"),
            ScalarKind::U8 => write!(f, "u8"),
            ScalarKind::U16 => write!(f, "u16"),
            ScalarKind::U32 => write!(f, "u32"),
            ScalarKind::U64 => write!(f, "u64"),
            ScalarKind::Usize => write!(f, "usize"),
            ScalarKind::F32 => write!(f, "f32"),
            ScalarKind::F64 => write!(f, "f64"),
        }
    }
}

/// Shape of a record field as seen by the mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "type", rename_all = "lowercase")]
pub enum FieldKind {
    /// A scalar field with a converter.
    Scalar(ScalarKind),
    /// A nested record. Never recursed into.
    Record,
    /// A pointer-like wrapper (`Box`, `Rc`, `Arc`, `Option`, references).
    Reference,
    /// A leaf type without a converter, named for diagnostics.
    Opaque(&'static str),
}

impl FieldKind {
    /// Returns the scalar kind, if this field has one.
    pub fn scalar(&self) -> Option<ScalarKind> {
        match self {
            FieldKind::Scalar(kind) => Some(*kind),
            _ => None,
        }
    }

    /// Returns `true` for nested records and reference wrappers.
    pub fn is_composite(&self) -> bool {
        matches!(self, FieldKind::Record | FieldKind::Reference)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Scalar(kind) => write!(f, "{kind}"),
            FieldKind::Record => write!(f, "record"),
            FieldKind::Reference => write!(f, "reference"),
            FieldKind::Opaque(name) => write!(f, "{name}"),
        }
    }
}
