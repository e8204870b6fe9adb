//! Composable grammars for HTTP header field values
//!
//! A `Grammar` is an immutable value describing the syntax of one
//! header value. Primitives recognize single elements (token, integer,
//! quoted string, date, entity tag, literal); combinators build larger
//! rules by sequencing, ordered-choice alternation and comma-list
//! repetition. Grammars carry no parse state: a single value can be
//! applied concurrently to any number of inputs.
//!
//! Construction goes through the free functions at the bottom of this
//! module (`token()`, `alternation(..)`, `comma_list1(..)`, ...) so
//! call sites read like the grammar they build.

pub mod ast;
pub mod error;

use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable parsing rule over one header value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Grammar {
    /// One RFC 7230 token
    Token,
    /// One non-negative decimal integer
    Integer,
    /// Accepts the whole remaining input opaquely
    Anything,
    /// RFC 7230 quoted-string with backslash escapes
    QuotedString,
    /// HTTP-date: IMF-fixdate, with the obsolete RFC 850 and asctime
    /// forms accepted and flagged
    HttpDate,
    /// RFC 7232 entity-tag, weak or strong
    EntityTag,
    /// Exact literal, consumed from the front of the input
    Literal {
        text: String,
        case_insensitive: bool,
    },
    /// `token [ "=" argument ]`; directives whose case-folded name
    /// appears in `known` parse their argument with the paired grammar,
    /// all others accept `token / quoted-string`
    Directive { known: Vec<(String, Grammar)> },
    /// Sub-grammars applied left to right, separated by optional
    /// whitespace. `Anything` may only appear in final position since
    /// it consumes the rest of the input.
    Sequence(Vec<Grammar>),
    /// Ordered choice: alternatives tried in declared order against
    /// the same starting input; the first that fully succeeds wins
    Alternation(Vec<Grammar>),
    /// `item` repeated with top-level comma separators; empty elements
    /// between commas are skipped per historical HTTP list syntax
    CommaList { item: Box<Grammar>, min_count: usize },
}

impl Grammar {
    /// Short name of this rule for failure messages
    pub fn describe(&self) -> String {
        match self {
            Grammar::Token => "token".to_string(),
            Grammar::Integer => "integer".to_string(),
            Grammar::Anything => "anything".to_string(),
            Grammar::QuotedString => "quoted-string".to_string(),
            Grammar::HttpDate => "HTTP-date".to_string(),
            Grammar::EntityTag => "entity-tag".to_string(),
            Grammar::Literal { text, .. } => format!("literal {:?}", text),
            Grammar::Directive { .. } => "directive".to_string(),
            Grammar::Sequence(parts) => format!("sequence of {} rules", parts.len()),
            Grammar::Alternation(alts) => format!("one of {} alternatives", alts.len()),
            Grammar::CommaList { item, min_count } => {
                format!("{}#({})", min_count, item.describe())
            }
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

// === CONSTRUCTOR FUNCTIONS ===

/// One RFC 7230 token
pub fn token() -> Grammar {
    Grammar::Token
}

/// One non-negative decimal integer
pub fn integer() -> Grammar {
    Grammar::Integer
}

/// Accept the whole remaining input opaquely
pub fn anything() -> Grammar {
    Grammar::Anything
}

/// RFC 7230 quoted-string
pub fn quoted_string() -> Grammar {
    Grammar::QuotedString
}

/// HTTP-date in any of the three RFC 7231 formats
pub fn http_date() -> Grammar {
    Grammar::HttpDate
}

/// RFC 7232 entity-tag
pub fn entity_tag() -> Grammar {
    Grammar::EntityTag
}

/// Exact case-sensitive literal (e.g. the `*` wildcard)
pub fn literal(text: &str) -> Grammar {
    Grammar::Literal {
        text: text.to_string(),
        case_insensitive: false,
    }
}

/// Exact case-insensitive literal
pub fn literal_ci(text: &str) -> Grammar {
    Grammar::Literal {
        text: text.to_string(),
        case_insensitive: true,
    }
}

/// `token [ "=" ( token / quoted-string ) ]`
pub fn directive() -> Grammar {
    Grammar::Directive { known: Vec::new() }
}

/// Directive with typed arguments for the named directives
pub fn directive_with(known: Vec<(&str, Grammar)>) -> Grammar {
    Grammar::Directive {
        known: known
            .into_iter()
            .map(|(name, grammar)| (name.to_ascii_lowercase(), grammar))
            .collect(),
    }
}

/// Sub-grammars applied left to right over successive spans
pub fn sequence(parts: Vec<Grammar>) -> Grammar {
    debug_assert!(parts.len() >= 2, "sequence needs at least two parts");
    Grammar::Sequence(parts)
}

/// Ordered choice over two or more alternatives
pub fn alternation(alternatives: Vec<Grammar>) -> Grammar {
    debug_assert!(
        alternatives.len() >= 2,
        "alternation needs at least two alternatives"
    );
    Grammar::Alternation(alternatives)
}

/// Comma-separated list, zero or more elements
pub fn comma_list(item: Grammar) -> Grammar {
    Grammar::CommaList {
        item: Box::new(item),
        min_count: 0,
    }
}

/// Comma-separated list, at least one element
pub fn comma_list1(item: Grammar) -> Grammar {
    Grammar::CommaList {
        item: Box::new(item),
        min_count: 1,
    }
}
