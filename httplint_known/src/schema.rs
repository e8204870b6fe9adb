//! The fixed attribute schema
//!
//! Every attribute a table row may carry is declared here, together
//! with the value kind it admits. The registry builder rejects rows
//! that use a key outside this list or pair a key with the wrong kind
//! of value, so schema mistakes surface when the table is built rather
//! than at lookup time.

use crate::cardinality::Rule;
use crate::entry::IanaStatus;
use httplint_syntax::Grammar;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A declared attribute key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttrKey {
    BadForConnection,
    BadForTrailer,
    ForRequest,
    ForResponse,
    IanaStatus,
    Parser,
    Precondition,
    ProactiveConneg,
    RepresentationMetadata,
    Rule,
}

impl AttrKey {
    pub const ALL: [AttrKey; 10] = [
        AttrKey::BadForConnection,
        AttrKey::BadForTrailer,
        AttrKey::ForRequest,
        AttrKey::ForResponse,
        AttrKey::IanaStatus,
        AttrKey::Parser,
        AttrKey::Precondition,
        AttrKey::ProactiveConneg,
        AttrKey::RepresentationMetadata,
        AttrKey::Rule,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttrKey::BadForConnection => "bad_for_connection",
            AttrKey::BadForTrailer => "bad_for_trailer",
            AttrKey::ForRequest => "for_request",
            AttrKey::ForResponse => "for_response",
            AttrKey::IanaStatus => "iana_status",
            AttrKey::Parser => "parser",
            AttrKey::Precondition => "precondition",
            AttrKey::ProactiveConneg => "proactive_conneg",
            AttrKey::RepresentationMetadata => "representation_metadata",
            AttrKey::Rule => "rule",
        }
    }

    /// Whether a value of the given kind may be stored under this key.
    pub fn admits(&self, value: &AttrValue) -> bool {
        match self {
            AttrKey::IanaStatus => matches!(value, AttrValue::Status(_)),
            AttrKey::Parser => matches!(value, AttrValue::Parser(_)),
            AttrKey::Rule => matches!(value, AttrValue::Rule(_)),
            _ => matches!(value, AttrValue::Flag(_)),
        }
    }
}

impl fmt::Display for AttrKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An attribute value, one variant per admissible kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    Flag(bool),
    Status(IanaStatus),
    Rule(Rule),
    Parser(Grammar),
}

impl AttrValue {
    pub fn kind(&self) -> &'static str {
        match self {
            AttrValue::Flag(_) => "flag",
            AttrValue::Status(_) => "status",
            AttrValue::Rule(_) => "rule",
            AttrValue::Parser(_) => "parser",
        }
    }
}

/// The schema the standard registry is built against.
pub fn declared_schema() -> Vec<AttrKey> {
    AttrKey::ALL.to_vec()
}
