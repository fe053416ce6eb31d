//! Registry of record types for type-erased mapping.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::BindError;
use crate::mapper::Mapper;
use crate::record::ArrayRecord;

/// Type-erased entry point for one registered record type.
pub type BindFn = fn(&Mapper, &[&str], &mut dyn Any) -> Result<(), BindError>;

/// Error type for record registration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Record type '{type_name}' already registered")]
    AlreadyRegistered { type_name: &'static str },

    #[error("Record registry lock poisoned")]
    LockPoisoned,
}

#[derive(Debug, Clone, Copy)]
struct RecordEntry {
    type_name: &'static str,
    bind: BindFn,
}

/// Registry of record types.
///
/// Lets callers hand the mapper a `&mut dyn Any` and have it dispatch to the
/// right descriptor table. Provides thread-safe registration and lookup.
#[derive(Debug, Default)]
pub struct RecordRegistry {
    records: RwLock<HashMap<TypeId, RecordEntry>>,
}

impl RecordRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Registers record type `T`.
    ///
    /// # Returns
    /// `Ok(())` if successful, `Err(RegistryError)` if `T` is already registered.
    pub fn register<T: ArrayRecord + 'static>(&self) -> Result<(), RegistryError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RegistryError::LockPoisoned)?;

        let type_name = type_name::<T>();
        if records.contains_key(&TypeId::of::<T>()) {
            return Err(RegistryError::AlreadyRegistered { type_name });
        }

        records.insert(
            TypeId::of::<T>(),
            RecordEntry {
                type_name,
                bind: bind_erased::<T>,
            },
        );
        tracing::debug!("Registered record type {}", type_name);
        Ok(())
    }

    /// Checks if `T` is registered.
    pub fn contains<T: 'static>(&self) -> bool {
        let records = match self.records.read() {
            Ok(guard) => guard,
            Err(_) => return false,
        };
        records.contains_key(&TypeId::of::<T>())
    }

    /// Returns the names of all registered record types, sorted.
    pub fn type_names(&self) -> Vec<&'static str> {
        let records = match self.records.read() {
            Ok(guard) => guard,
            Err(_) => return Vec::new(),
        };
        let mut names: Vec<_> = records.values().map(|entry| entry.type_name).collect();
        names.sort_unstable();
        names
    }

    /// Returns the entry point for the record type with id `type_id`.
    pub fn binder(&self, type_id: TypeId) -> Option<BindFn> {
        let records = self.records.read().ok()?;
        records.get(&type_id).map(|entry| entry.bind)
    }
}

fn bind_erased<T: ArrayRecord + 'static>(
    mapper: &Mapper,
    input: &[&str],
    target: &mut dyn Any,
) -> Result<(), BindError> {
    let record = target
        .downcast_mut::<T>()
        .ok_or(BindError::NotARecord {
            type_id: TypeId::of::<T>(),
        })?;
    mapper.parse(input, record)
}
