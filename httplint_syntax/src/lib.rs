// Internal modules
pub mod codes;
pub mod cursor;
pub mod engine;
pub mod grammar;
pub mod rules;
pub mod span;

// Re-export key types for library consumers
pub use engine::{parse, parse_complete};
pub use grammar::ast::{Parsed, ParsedValue};
pub use grammar::error::{ParseFailure, ParseResult};
pub use grammar::Grammar;
pub use span::Span;
