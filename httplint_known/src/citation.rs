//! Citation references for registry entries
//!
//! A citation points at the normative source for a header: a numbered
//! RFC with an optional section or appendix path, or a named external
//! document with a URL. Citations feed diagnostics and reports only;
//! they carry no behavioral weight.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference to a normative source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Citation {
    Rfc {
        number: u32,
        section: Option<String>,
        appendix: Option<String>,
    },
    Document {
        title: String,
        url: String,
    },
}

impl Citation {
    /// Cite an RFC as a whole
    pub fn rfc(number: u32) -> Self {
        Self::Rfc {
            number,
            section: None,
            appendix: None,
        }
    }

    /// Cite a specific section of an RFC, e.g. `"5.3.2"`
    pub fn rfc_section(number: u32, section: &str) -> Self {
        Self::Rfc {
            number,
            section: Some(section.to_string()),
            appendix: None,
        }
    }

    /// Cite a specific appendix of an RFC, e.g. `"A.1"`
    pub fn rfc_appendix(number: u32, appendix: &str) -> Self {
        Self::Rfc {
            number,
            section: None,
            appendix: Some(appendix.to_string()),
        }
    }

    /// Cite a named external document
    pub fn document(title: &str, url: &str) -> Self {
        Self::Document {
            title: title.to_string(),
            url: url.to_string(),
        }
    }
}

impl fmt::Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Citation::Rfc {
                number,
                section,
                appendix,
            } => {
                write!(f, "RFC {}", number)?;
                if let Some(section) = section {
                    write!(f, " \u{a7} {}", section)?;
                }
                if let Some(appendix) = appendix {
                    write!(f, " appendix {}", appendix)?;
                }
                Ok(())
            }
            Citation::Document { title, .. } => write!(f, "{}", title),
        }
    }
}
