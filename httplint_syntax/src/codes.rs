//! Diagnostic codes for the syntax layer
//!
//! Stable identifiers attached to every failure this crate can report,
//! so the surrounding checker can key its notices off codes rather
//! than message text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Universal wrapper for diagnostic codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Value-parsing failure codes
pub mod parse {
    use super::Code;

    pub const EXPECTED_SYNTAX: Code = Code::new("S001");
    pub const MALFORMED_VALUE: Code = Code::new("S002");
    pub const NO_ALTERNATIVE: Code = Code::new("S003");
    pub const TOO_FEW_LIST_ITEMS: Code = Code::new("S004");
    pub const TRAILING_INPUT: Code = Code::new("S005");
}
