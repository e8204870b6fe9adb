//! Typed parse results
//!
//! Every grammar produces a `ParsedValue` node specific to its shape.
//! The top-level `Parsed` wraps the node with the consumed span and
//! any unconsumed trailing input, which is reported rather than
//! silently dropped.

use crate::span::Span;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Structured result of one successful grammar application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParsedValue {
    /// An RFC 7230 token
    Token(String),
    /// A non-negative decimal integer
    Integer(u64),
    /// A matched literal, stored as written in the input
    Literal(String),
    /// Opaque input accepted by the `Anything` rule
    Opaque(String),
    /// A quoted-string with escapes resolved
    Quoted(String),
    /// An HTTP-date; `obsolete_format` is set for the RFC 850 and
    /// asctime forms a conformant sender must not generate
    Date {
        value: DateTime<FixedOffset>,
        obsolete_format: bool,
    },
    /// An entity-tag; `opaque` excludes the surrounding quotes
    EntityTag { weak: bool, opaque: String },
    /// One directive of a structured directive list
    Directive {
        name: String,
        argument: Option<Box<ParsedValue>>,
    },
    /// Elements of a comma list, in input order
    List(Vec<ParsedValue>),
    /// Parts of a sequence, in grammar order
    Sequence(Vec<ParsedValue>),
}

impl ParsedValue {
    /// The elements of a `List` node, if this is one
    pub fn as_list(&self) -> Option<&[ParsedValue]> {
        match self {
            ParsedValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// The value of an `Integer` node, if this is one
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            ParsedValue::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

/// A successful parse: the node, the span it consumed, and whatever
/// trailing input the grammar left unconsumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parsed {
    pub value: ParsedValue,
    pub span: Span,
    /// Unconsumed trailing input (without surrounding whitespace);
    /// empty when the grammar consumed the whole value
    pub rest: String,
}

impl Parsed {
    pub fn is_complete(&self) -> bool {
        self.rest.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_accessor_returns_elements() {
        let value = ParsedValue::List(vec![ParsedValue::Integer(1), ParsedValue::Integer(2)]);
        assert_eq!(value.as_list().map(|items| items.len()), Some(2));
        assert_eq!(ParsedValue::Token("a".into()).as_list(), None);
    }

    #[test]
    fn parsed_value_serializes() {
        let value = ParsedValue::EntityTag {
            weak: true,
            opaque: "xyzzy".into(),
        };
        let json = serde_json::to_string(&value).unwrap();
        let back: ParsedValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
