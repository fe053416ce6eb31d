//! Field mapper.
//!
//! Walks a record's descriptor table in declaration order, resolves each
//! annotated field against the input and converts the token to the field's
//! scalar kind. Any failure aborts the whole call.

use std::any::{type_name, Any};

use crate::config::{CommitPolicy, MapperConfig};
use crate::error::BindError;
use crate::record::{ArrayRecord, FieldDescriptor};
use crate::registry::RecordRegistry;
use crate::tag::{parse_tag, TagIndex};
use crate::types::ScalarValue;

/// Populates records from ordered string tokens.
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    config: MapperConfig,
}

impl Mapper {
    /// Creates a mapper with the given configuration.
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    /// Returns the mapper configuration.
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Maps `input` into `target`.
    ///
    /// # Errors
    /// - [`BindError::UnsupportedFieldType`] for nested record or reference
    ///   fields (checked before any field is resolved), and for annotated
    ///   fields without a converter
    /// - [`BindError::IndexOutOfRange`] when an index is malformed or beyond the
    ///   input and the field is not marked `omitempty`
    /// - [`BindError::Parse`] when a token does not convert
    /// - [`BindError::TypeMismatch`] / [`BindError::UnknownField`] when the
    ///   record's `assign` hook rejects a value
    ///
    /// Under [`CommitPolicy::Atomic`], field-kind, index and conversion failures
    /// leave `target` unchanged. A rejecting `assign` hook fails during commit,
    /// so fields committed before it stay written.
    pub fn parse<T, S>(&self, input: &[S], target: &mut T) -> Result<(), BindError>
    where
        T: ArrayRecord,
        S: AsRef<str>,
    {
        tracing::debug!(
            "Mapping {} tokens into {} ({:?})",
            input.len(),
            type_name::<T>(),
            self.config.commit_policy
        );

        let result = self.bind(input, target);
        if let Err(e) = &result {
            tracing::debug!("Mapping into {} failed: {}", type_name::<T>(), e);
        }
        result
    }

    /// Maps `input` into a type-erased target.
    ///
    /// The target's concrete type must have been registered with `registry`;
    /// otherwise the call fails with [`BindError::NotARecord`] before any field
    /// is touched.
    pub fn parse_dyn<S: AsRef<str>>(
        &self,
        input: &[S],
        target: &mut dyn Any,
        registry: &RecordRegistry,
    ) -> Result<(), BindError> {
        let type_id = (*target).type_id();
        let binder = registry
            .binder(type_id)
            .ok_or(BindError::NotARecord { type_id })?;

        let tokens: Vec<&str> = input.iter().map(AsRef::as_ref).collect();
        binder(self, &tokens, target)
    }

    fn bind<T, S>(&self, input: &[S], target: &mut T) -> Result<(), BindError>
    where
        T: ArrayRecord,
        S: AsRef<str>,
    {
        check_field_kinds(T::FIELDS)?;

        let mut staged = Vec::new();

        for field in T::FIELDS {
            let Some(value) = resolve_field(field, input)? else {
                continue;
            };

            match self.config.commit_policy {
                CommitPolicy::Atomic => staged.push((field.name, value)),
                CommitPolicy::Incremental => target.assign(field.name, value)?,
            }
        }

        for (name, value) in staged {
            target.assign(name, value)?;
        }

        Ok(())
    }
}

/// Rejects nested record and reference fields, annotated or not.
fn check_field_kinds(fields: &[FieldDescriptor]) -> Result<(), BindError> {
    match fields.iter().find(|field| field.kind.is_composite()) {
        Some(field) => Err(BindError::UnsupportedFieldType {
            field: field.name,
            kind: field.kind,
        }),
        None => Ok(()),
    }
}

/// Resolves and converts a single field.
///
/// Returns `Ok(None)` when the field is skipped: no annotation, or an absent
/// index under `omitempty`.
fn resolve_field<S: AsRef<str>>(
    field: &FieldDescriptor,
    input: &[S],
) -> Result<Option<ScalarValue>, BindError> {
    let Some(tag) = field.tag else {
        tracing::trace!("Field '{}' has no annotation, skipping", field.name);
        return Ok(None);
    };

    let (index, options) = parse_tag(tag);
    if index == TagIndex::Invalid {
        tracing::warn!(
            "Field '{}' has malformed index clause in annotation '{}'",
            field.name,
            tag
        );
    }

    let Some(position) = index.resolve(input.len()) else {
        if options.omit_empty() {
            tracing::trace!(
                "Field '{}' index {} absent from input, omitted",
                field.name,
                index
            );
            return Ok(None);
        }
        return Err(BindError::IndexOutOfRange {
            field: field.name,
            index,
            len: input.len(),
        });
    };

    let kind = field
        .kind
        .scalar()
        .ok_or(BindError::UnsupportedFieldType {
            field: field.name,
            kind: field.kind,
        })?;

    let token = input[position].as_ref();
    let value = kind.convert(token).map_err(|source| BindError::Parse {
        field: field.name,
        token: token.to_owned(),
        source,
    })?;

    tracing::trace!("Field '{}' bound to input {} as {}", field.name, position, kind);
    Ok(Some(value))
}

/// Maps `input` into `target` with the default configuration.
///
/// See [`Mapper::parse`].
pub fn parse<T, S>(input: &[S], target: &mut T) -> Result<(), BindError>
where
    T: ArrayRecord,
    S: AsRef<str>,
{
    Mapper::default().parse(input, target)
}
