//! Annotation-driven binding of ordered string tokens into typed records.
//!
//! A record declares, per field, which input position feeds it and how
//! absent positions are handled. The mapper resolves each position, converts
//! the token to the field's scalar type and assigns it.

pub mod config;
pub mod convert;
pub mod error;
pub mod mapper;
pub mod record;
pub mod registry;
pub mod schema;
pub mod tag;
pub mod types;

pub use config::{CommitPolicy, MapperConfig};
pub use error::BindError;
pub use mapper::{parse, Mapper};
pub use record::{ArrayRecord, FieldDescriptor, FieldType};
pub use registry::RecordRegistry;
pub use schema::describe;
