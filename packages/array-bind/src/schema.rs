//! Binding layout of a record, for inspection and diagnostics.

use serde::Serialize;

use crate::record::ArrayRecord;
use crate::tag::parse_tag;
use crate::types::FieldKind;

/// How one field is bound to the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldBinding {
    /// Field name
    pub name: &'static str,
    /// Shape of the field's type
    pub kind: FieldKind,
    /// Raw annotation, if any
    pub tag: Option<&'static str>,
    /// Input position; `None` when unannotated or the index clause is malformed
    pub index: Option<usize>,
    /// Whether the field may stay unset when its index is absent
    pub omit_empty: bool,
}

/// Describes how the fields of `T` bind to input positions.
pub fn describe<T: ArrayRecord>() -> Vec<FieldBinding> {
    T::FIELDS
        .iter()
        .map(|field| {
            let (index, omit_empty) = match field.tag {
                Some(tag) => {
                    let (index, options) = parse_tag(tag);
                    (index.position(), options.omit_empty())
                }
                None => (None, false),
            };
            FieldBinding {
                name: field.name,
                kind: field.kind,
                tag: field.tag,
                index,
                omit_empty,
            }
        })
        .collect()
}
