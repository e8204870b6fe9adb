//! Cardinality rules for repeated header instances
//!
//! A header's `rule` attribute governs how multiple same-named
//! instances in one message are reduced to the value(s) its grammar
//! is applied to. Reduction never discards information silently: a
//! violated `Single` rule is surfaced alongside the best-effort value
//! so the caller can report it and still parse.

use crate::field::FieldName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How multiple instances of one header combine within a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// Exactly one instance permitted; more is a protocol violation
    Single,
    /// Instances are equivalent to one comma-joined value
    Multi,
    /// Instances are independently meaningful and must not be joined
    /// (the Set-Cookie exception to HTTP list syntax)
    SetCookie,
    /// Joined like `Multi`, and the value is a comma list of typed
    /// directives (Cache-Control style)
    DirectiveList,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::Single => "single",
            Rule::Multi => "multi",
            Rule::SetCookie => "set-cookie",
            Rule::DirectiveList => "directive-list",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A `Single`-rule header occurred more than once in one message.
/// Reported, not fatal: parsing proceeds on the first instance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("header '{name}' admits one instance per message, found {found}")]
pub struct CardinalityViolation {
    pub name: String,
    pub found: usize,
}

impl CardinalityViolation {
    /// Diagnostic code for the notices subsystem
    pub fn code(&self) -> httplint_syntax::codes::Code {
        crate::error::codes::SINGLE_HEADER_REPEATED
    }
}

/// Result of reducing the instances of one header name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reduction {
    /// The value text(s) to hand to the header's grammar, in order
    pub values: Vec<String>,
    /// Present when a `Single` rule was violated
    pub violation: Option<CardinalityViolation>,
}

/// Reduce the raw instances of one header per its declared rule.
///
/// Headers with no declared rule (unknown or unclassified names) keep
/// each instance separate, like `SetCookie`, and never produce a
/// violation: absence of classification is not evidence of error.
pub fn reduce_instances(name: &FieldName, rule: Option<Rule>, instances: &[&str]) -> Reduction {
    match rule {
        Some(Rule::Single) => {
            let violation = if instances.len() > 1 {
                Some(CardinalityViolation {
                    name: name.as_str().to_string(),
                    found: instances.len(),
                })
            } else {
                None
            };
            Reduction {
                // best effort: the first instance is parsed
                values: instances.first().map(|v| v.to_string()).into_iter().collect(),
                violation,
            }
        }
        Some(Rule::Multi) | Some(Rule::DirectiveList) => {
            let values = if instances.is_empty() {
                Vec::new()
            } else {
                vec![instances.join(", ")]
            };
            Reduction {
                values,
                violation: None,
            }
        }
        Some(Rule::SetCookie) | None => Reduction {
            values: instances.iter().map(|v| v.to_string()).collect(),
            violation: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(text: &str) -> FieldName {
        FieldName::from(text)
    }

    #[test]
    fn single_rule_reports_repetition_without_merging() {
        let reduction = reduce_instances(&name("Content-Length"), Some(Rule::Single), &["5", "6"]);
        assert_eq!(reduction.values, vec!["5"]);
        let violation = reduction.violation.unwrap();
        assert_eq!(violation.found, 2);
        assert_eq!(violation.name, "Content-Length");
    }

    #[test]
    fn single_rule_with_one_instance_is_clean() {
        let reduction = reduce_instances(&name("Content-Length"), Some(Rule::Single), &["5"]);
        assert_eq!(reduction.values, vec!["5"]);
        assert!(reduction.violation.is_none());
    }

    #[test]
    fn multi_rule_joins_like_a_single_comma_list() {
        let joined = reduce_instances(&name("Accept"), Some(Rule::Multi), &["a", "b"]);
        let single = reduce_instances(&name("Accept"), Some(Rule::Multi), &["a, b"]);
        assert_eq!(joined, single);
        assert_eq!(joined.values, vec!["a, b"]);
        assert!(joined.violation.is_none());
    }

    #[test]
    fn directive_list_rule_joins_like_multi() {
        let reduction = reduce_instances(
            &name("Cache-Control"),
            Some(Rule::DirectiveList),
            &["no-cache", "max-age=0"],
        );
        assert_eq!(reduction.values, vec!["no-cache, max-age=0"]);
    }

    #[test]
    fn set_cookie_instances_stay_separate() {
        let reduction = reduce_instances(
            &name("Set-Cookie"),
            Some(Rule::SetCookie),
            &["a=1", "b=2"],
        );
        assert_eq!(reduction.values, vec!["a=1", "b=2"]);
        assert!(reduction.violation.is_none());
    }

    #[test]
    fn unclassified_headers_reduce_like_set_cookie() {
        let reduction = reduce_instances(&name("X-Custom"), None, &["one", "two"]);
        assert_eq!(reduction.values, vec!["one", "two"]);
        assert!(reduction.violation.is_none());
    }

    #[test]
    fn empty_instance_list_reduces_to_nothing() {
        let reduction = reduce_instances(&name("Age"), Some(Rule::Single), &[]);
        assert!(reduction.values.is_empty());
        assert!(reduction.violation.is_none());
    }
}
