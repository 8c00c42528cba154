//! # Document Formats
//!
//! The wire formats matcha can check. A format decides two things: the
//! label used in the debug block appended to a failure report
//! (`JSON data:` / `XML data:`) and which per-format key override a field
//! declaration is consulted for.

use std::fmt;
use std::str::FromStr;

use crate::naming::NamingConvention;

/// A supported document wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Json,
    Xml,
}

impl DocumentFormat {
    /// Upper-case label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Xml => "XML",
        }
    }

    /// Lower-case tag naming the per-format key override on a field.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }

    /// Guess the format from a file extension (`json`, `xml`).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "xml" => Some(Self::Xml),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DocumentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s).ok_or_else(|| format!("unknown document format: {s}"))
    }
}

impl NamingConvention for DocumentFormat {
    fn override_tag(&self) -> &str {
        self.tag()
    }
}
