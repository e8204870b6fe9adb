//! Registry entry records
//!
//! `EntrySpec` is the literal form a table row is written in: a name,
//! citations, and an open list of attribute key/value pairs that the
//! registry builder checks against the declared schema. `HeaderEntry`
//! is the typed record the registry stores after that check: every
//! declared attribute has a slot, and each slot is tri-valued — `None`
//! means the attribute was never supplied, which callers must treat as
//! distinct from an explicit `Some(false)`.

use crate::cardinality::Rule;
use crate::citation::Citation;
use crate::field::FieldName;
use crate::schema::{AttrKey, AttrValue};
use httplint_syntax::Grammar;
use serde::{Deserialize, Serialize};
use std::fmt;

/// IANA registration status of a header field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IanaStatus {
    Standard,
    Informational,
    Experimental,
    Deprecated,
    Obsoleted,
    Reserved,
}

impl IanaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IanaStatus::Standard => "standard",
            IanaStatus::Informational => "informational",
            IanaStatus::Experimental => "experimental",
            IanaStatus::Deprecated => "deprecated",
            IanaStatus::Obsoleted => "obsoleted",
            IanaStatus::Reserved => "reserved",
        }
    }
}

impl fmt::Display for IanaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One literal table row, before schema validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntrySpec {
    pub name: FieldName,
    pub citations: Vec<Citation>,
    pub attrs: Vec<(AttrKey, AttrValue)>,
}

impl EntrySpec {
    pub fn new(name: &str, citations: Vec<Citation>) -> Self {
        Self {
            name: FieldName::from(name),
            citations,
            attrs: Vec::new(),
        }
    }

    /// Attach a boolean attribute
    pub fn flag(mut self, key: AttrKey, value: bool) -> Self {
        self.attrs.push((key, AttrValue::Flag(value)));
        self
    }

    /// Attach the IANA status attribute
    pub fn status(mut self, status: IanaStatus) -> Self {
        self.attrs.push((AttrKey::IanaStatus, AttrValue::Status(status)));
        self
    }

    /// Attach the cardinality rule attribute
    pub fn rule(mut self, rule: Rule) -> Self {
        self.attrs.push((AttrKey::Rule, AttrValue::Rule(rule)));
        self
    }

    /// Attach the value-grammar attribute
    pub fn parser(mut self, grammar: Grammar) -> Self {
        self.attrs.push((AttrKey::Parser, AttrValue::Parser(grammar)));
        self
    }

    /// Attach an arbitrary attribute (used by schema-violation tests)
    pub fn attr(mut self, key: AttrKey, value: AttrValue) -> Self {
        self.attrs.push((key, value));
        self
    }
}

/// The typed, fixed-schema record the registry stores per header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderEntry {
    pub name: FieldName,
    pub citations: Vec<Citation>,
    pub bad_for_connection: Option<bool>,
    pub bad_for_trailer: Option<bool>,
    pub for_request: Option<bool>,
    pub for_response: Option<bool>,
    pub iana_status: Option<IanaStatus>,
    pub parser: Option<Grammar>,
    pub precondition: Option<bool>,
    pub proactive_conneg: Option<bool>,
    pub representation_metadata: Option<bool>,
    pub rule: Option<Rule>,
}

impl HeaderEntry {
    /// The synthetic entry returned for names absent from the table:
    /// no citations, every attribute absent.
    pub fn unknown(name: FieldName) -> Self {
        Self {
            name,
            citations: Vec::new(),
            bad_for_connection: None,
            bad_for_trailer: None,
            for_request: None,
            for_response: None,
            iana_status: None,
            parser: None,
            precondition: None,
            proactive_conneg: None,
            representation_metadata: None,
            rule: None,
        }
    }
}
