//! Registry construction errors
//!
//! All failure modes are detected while the table is folded into the
//! registry; lookups themselves never fail. Each variant carries the
//! offending header name so a bad row is easy to find in the table.

use crate::field::FieldName;
use crate::schema::AttrKey;
use thiserror::Error;

/// Stable diagnostic codes for registry failures.
pub mod codes {
    pub use httplint_syntax::codes::Code;

    pub const DUPLICATE_FIELD: Code = Code::new("K001");
    pub const UNDECLARED_ATTRIBUTE: Code = Code::new("K002");
    pub const ATTRIBUTE_KIND_MISMATCH: Code = Code::new("K003");
    pub const DUPLICATE_ATTRIBUTE: Code = Code::new("K004");
    pub const SINGLE_HEADER_REPEATED: Code = Code::new("K005");
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryBuildError {
    #[error("duplicate header field '{name}' in registry table")]
    DuplicateField { name: FieldName },

    #[error("header '{name}' uses attribute '{key}' not declared in the schema")]
    UndeclaredAttribute { name: FieldName, key: AttrKey },

    #[error("header '{name}' stores a {kind} value under attribute '{key}'")]
    AttributeKindMismatch {
        name: FieldName,
        key: AttrKey,
        kind: &'static str,
    },

    #[error("header '{name}' declares attribute '{key}' more than once")]
    DuplicateAttribute { name: FieldName, key: AttrKey },
}

impl RegistryBuildError {
    pub fn duplicate_field(name: FieldName) -> Self {
        RegistryBuildError::DuplicateField { name }
    }

    pub fn undeclared_attribute(name: FieldName, key: AttrKey) -> Self {
        RegistryBuildError::UndeclaredAttribute { name, key }
    }

    pub fn attribute_kind_mismatch(name: FieldName, key: AttrKey, kind: &'static str) -> Self {
        RegistryBuildError::AttributeKindMismatch { name, key, kind }
    }

    pub fn duplicate_attribute(name: FieldName, key: AttrKey) -> Self {
        RegistryBuildError::DuplicateAttribute { name, key }
    }

    pub fn code(&self) -> codes::Code {
        match self {
            RegistryBuildError::DuplicateField { .. } => codes::DUPLICATE_FIELD,
            RegistryBuildError::UndeclaredAttribute { .. } => codes::UNDECLARED_ATTRIBUTE,
            RegistryBuildError::AttributeKindMismatch { .. } => codes::ATTRIBUTE_KIND_MISMATCH,
            RegistryBuildError::DuplicateAttribute { .. } => codes::DUPLICATE_ATTRIBUTE,
        }
    }

    /// The header name the error is about.
    pub fn field_name(&self) -> &FieldName {
        match self {
            RegistryBuildError::DuplicateField { name }
            | RegistryBuildError::UndeclaredAttribute { name, .. }
            | RegistryBuildError::AttributeKindMismatch { name, .. }
            | RegistryBuildError::DuplicateAttribute { name, .. } => name,
        }
    }
}

pub type RegistryResult<T> = Result<T, RegistryBuildError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_carry_codes_and_names() {
        let err = RegistryBuildError::duplicate_field(FieldName::from("Accept"));
        assert_eq!(err.code(), codes::DUPLICATE_FIELD);
        assert_eq!(err.field_name().as_str(), "Accept");

        let err = RegistryBuildError::attribute_kind_mismatch(
            FieldName::from("ETag"),
            AttrKey::Rule,
            "flag",
        );
        assert_eq!(err.code(), codes::ATTRIBUTE_KIND_MISMATCH);
        assert!(err.to_string().contains("ETag"));
        assert!(err.to_string().contains("rule"));
    }
}
