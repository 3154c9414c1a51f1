//! Parsers for the five string-catalog formats used by English
//! localization repositories. Each format sits behind the same
//! [`FormatParser`] trait so the extraction layer never branches on file
//! suffixes, and a parser can be swapped out without touching callers.

use std::path::Path;

use thiserror::Error;

mod dtd;
mod ftl;
mod inc;
mod ini;
mod properties;

pub use dtd::DtdParser;
pub use ftl::FtlParser;
pub use inc::IncParser;
pub use ini::IniParser;
pub use properties::PropertiesParser;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unterminated entity declaration at offset {0}")]
    UnterminatedEntity(usize),
}

/// One attribute of an FTL message (`.title = ...`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// A parsed catalog entry: key, raw value, and any attributes.
/// Non-FTL formats never carry attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
    pub attributes: Vec<Attribute>,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Entry {
            key: key.into(),
            value: value.into(),
            attributes: Vec::new(),
        }
    }
}

/// Output of a parser: either a usable entry or an unparsable region.
/// Junk is reported rather than swallowed so callers can decide what to
/// do with it; extraction drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedEntry {
    Entry(Entry),
    Junk(String),
}

/// A format-aware parser turning file content into a sequence of entries.
pub trait FormatParser {
    fn parse(&self, content: &str) -> Result<Vec<ParsedEntry>, ParseError>;
}

/// Closed set of supported catalog formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Dtd,
    Ftl,
    Inc,
    Ini,
    Properties,
}

impl Format {
    pub const ALL: [Format; 5] = [
        Format::Dtd,
        Format::Ftl,
        Format::Inc,
        Format::Ini,
        Format::Properties,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            Format::Dtd => "dtd",
            Format::Ftl => "ftl",
            Format::Inc => "inc",
            Format::Ini => "ini",
            Format::Properties => "properties",
        }
    }

    /// Recognize a file by extension; `None` for anything we do not
    /// parse. Case-sensitive: `.FTL` is not a catalog file.
    pub fn from_path(path: &Path) -> Option<Format> {
        let ext = path.extension()?.to_str()?;
        Format::ALL.into_iter().find(|f| f.extension() == ext)
    }

    /// Dispatch table from format to its parser.
    pub fn parser(self) -> &'static dyn FormatParser {
        match self {
            Format::Dtd => &DtdParser,
            Format::Ftl => &FtlParser,
            Format::Inc => &IncParser,
            Format::Ini => &IniParser,
            Format::Properties => &PropertiesParser,
        }
    }

    /// Only FTL entries can carry attributes (and value-less containers).
    pub fn has_attributes(self) -> bool {
        matches!(self, Format::Ftl)
    }
}
