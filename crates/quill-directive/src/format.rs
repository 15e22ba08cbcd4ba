//! Output formats.

use std::fmt;
use std::str::FromStr;

use crate::FormatError;

const DOCBOOK_NAMESPACE: &str = "http://docbook.org/ns/docbook";

/// Target format of an output tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OutputFormat {
    /// XHTML element tree (`pre`, `code`, `p`).
    Xhtml,
    /// `DocBook` 5 element tree (`programlisting`, `para`).
    Docbook,
}

impl OutputFormat {
    /// Every supported format, in generation order.
    pub const ALL: [Self; 2] = [Self::Xhtml, Self::Docbook];

    /// Lowercase format name, as used in configuration.
    pub fn name(self) -> &'static str {
        match self {
            Self::Xhtml => "xhtml",
            Self::Docbook => "docbook",
        }
    }

    /// Name of the root element of a document in this format.
    pub fn root_element(self) -> &'static str {
        match self {
            Self::Xhtml => "body",
            Self::Docbook => "article",
        }
    }

    /// Attributes set on the root element.
    pub fn root_attributes(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Xhtml => &[],
            Self::Docbook => &[("xmlns", DOCBOOK_NAMESPACE), ("version", "5.0")],
        }
    }

    /// File extension for serialized documents.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Xhtml => "html",
            Self::Docbook => "xml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| FormatError::Unknown(s.to_owned()))
    }
}
