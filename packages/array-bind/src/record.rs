//! Record descriptors and the `array_record!` macro.
//!
//! A record exposes a static table of [`FieldDescriptor`]s in declaration
//! order plus an assignment hook. The mapper only ever walks that table; it
//! never inspects a live value.

use std::rc::Rc;
use std::sync::Arc;

use crate::error::BindError;
use crate::types::{FieldKind, ScalarKind, ScalarValue};

/// Static description of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name
    pub name: &'static str,
    /// Shape of the field's type
    pub kind: FieldKind,
    /// Annotation string, if the field is bound to an input position
    pub tag: Option<&'static str>,
}

impl FieldDescriptor {
    /// Creates a descriptor for a field bound by `tag`.
    pub const fn tagged(name: &'static str, kind: FieldKind, tag: &'static str) -> Self {
        Self {
            name,
            kind,
            tag: Some(tag),
        }
    }

    /// Creates a descriptor for a field the mapper leaves untouched.
    pub const fn untagged(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            tag: None,
        }
    }
}

/// A record type the mapper can populate.
///
/// Implemented by [`array_record!`](crate::array_record) or by hand. A manual
/// implementation must list every field in [`FIELDS`](ArrayRecord::FIELDS) and
/// route each name to its slot in [`assign`](ArrayRecord::assign), usually via
/// [`assign_scalar`].
pub trait ArrayRecord {
    /// Field descriptors in declaration order.
    const FIELDS: &'static [FieldDescriptor];

    /// Stores a converted value into the field called `field`.
    fn assign(&mut self, field: &'static str, value: ScalarValue) -> Result<(), BindError>;
}

/// A type that can appear as a record field.
pub trait FieldType: Sized {
    /// How the mapper treats fields of this type.
    const KIND: FieldKind;

    /// Unwraps a converted value, or `None` if it is of another kind.
    fn from_scalar(value: ScalarValue) -> Option<Self>;
}

/// Writes `value` into `slot`, checking that its kind matches the slot type.
pub fn assign_scalar<T: FieldType>(
    slot: &mut T,
    field: &'static str,
    value: ScalarValue,
) -> Result<(), BindError> {
    let got = value.kind();
    *slot = T::from_scalar(value).ok_or(BindError::TypeMismatch {
        field,
        expected: T::KIND,
        got,
    })?;
    Ok(())
}

macro_rules! scalar_field_types {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FieldType for $ty {
                const KIND: FieldKind = FieldKind::Scalar(ScalarKind::$variant);

                fn from_scalar(value: ScalarValue) -> Option<Self> {
                    match value {
                        ScalarValue::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

scalar_field_types! {
    bool => Bool,
    String => String,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
}

macro_rules! opaque_field_types {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl FieldType for $ty {
                const KIND: FieldKind = FieldKind::Opaque($name);

                fn from_scalar(_value: ScalarValue) -> Option<Self> {
                    None
                }
            }
        )*
    };
}

opaque_field_types! {
    char => "char",
    i128 => "i128",
    u128 => "u128",
    () => "()",
}

impl<T> FieldType for Vec<T> {
    const KIND: FieldKind = FieldKind::Opaque("Vec");

    fn from_scalar(_value: ScalarValue) -> Option<Self> {
        None
    }
}

macro_rules! reference_field_types {
    ($($wrapper:ident),* $(,)?) => {
        $(
            impl<T: ?Sized> FieldType for $wrapper<T> {
                const KIND: FieldKind = FieldKind::Reference;

                fn from_scalar(_value: ScalarValue) -> Option<Self> {
                    None
                }
            }
        )*
    };
}

reference_field_types!(Box, Rc, Arc);

impl<T> FieldType for Option<T> {
    const KIND: FieldKind = FieldKind::Reference;

    fn from_scalar(_value: ScalarValue) -> Option<Self> {
        None
    }
}

/// Declares a struct and implements [`ArrayRecord`] for it.
///
/// A field is bound by appending `= "<annotation>"` after its type. Unbound
/// fields are left untouched by the mapper. The declared type also becomes a
/// [`FieldKind::Record`] field type, so nesting it inside another record is
/// rejected at mapping time.
///
/// ```
/// array_bind::array_record! {
///     #[derive(Debug, Default, PartialEq)]
///     pub struct Row {
///         pub name: String = "[0]",
///         pub count: i64 = "[1]",
///         pub active: bool = "[5], omitempty",
///         pub note: String,
///     }
/// }
///
/// let mut row = Row::default();
/// array_bind::parse(&["widget", "3"], &mut row).unwrap();
/// assert_eq!(row.name, "widget");
/// assert_eq!(row.count, 3);
/// assert!(!row.active);
/// ```
#[macro_export]
macro_rules! array_record {
    (@tag) => {
        ::core::option::Option::None
    };
    (@tag $tag:literal) => {
        ::core::option::Option::Some($tag)
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty $(= $tag:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )*
        }

        impl $crate::record::ArrayRecord for $name {
            const FIELDS: &'static [$crate::record::FieldDescriptor] = &[
                $(
                    $crate::record::FieldDescriptor {
                        name: ::core::stringify!($field),
                        kind: <$ty as $crate::record::FieldType>::KIND,
                        tag: $crate::array_record!(@tag $($tag)?),
                    },
                )*
            ];

            fn assign(
                &mut self,
                field: &'static str,
                value: $crate::types::ScalarValue,
            ) -> ::core::result::Result<(), $crate::error::BindError> {
                $(
                    if field == ::core::stringify!($field) {
                        return $crate::record::assign_scalar(&mut self.$field, field, value);
                    }
                )*
                ::core::result::Result::Err($crate::error::BindError::UnknownField { field })
            }
        }

        impl $crate::record::FieldType for $name {
            const KIND: $crate::types::FieldKind = $crate::types::FieldKind::Record;

            fn from_scalar(_value: $crate::types::ScalarValue) -> ::core::option::Option<Self> {
                ::core::option::Option::None
            }
        }
    };
}
