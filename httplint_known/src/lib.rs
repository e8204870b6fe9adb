// Internal modules
pub mod cardinality;
pub mod citation;
pub mod entry;
pub mod error;
pub mod field;
pub mod registry;
pub mod schema;
pub mod table;

// Re-export key types for library consumers
pub use cardinality::{reduce_instances, CardinalityViolation, Reduction, Rule};
pub use citation::Citation;
pub use entry::{EntrySpec, HeaderEntry, IanaStatus};
pub use error::{RegistryBuildError, RegistryResult};
pub use field::FieldName;
pub use registry::KnownHeaders;
pub use schema::{declared_schema, AttrKey, AttrValue};
