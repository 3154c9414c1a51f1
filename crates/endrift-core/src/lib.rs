use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Workspace-wide result alias.
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Flat mapping from string identifier to its current text for one
/// localization repository. Identifiers look like
/// `browser/foo.ftl:some-key` or `browser/foo.ftl:some-key.title` for
/// FTL attributes. Insertion order is sorted-file-then-parse order and
/// later duplicates overwrite earlier ones in place.
pub type Catalog = IndexMap<String, String>;

/// Per-locale allow-list of identifiers whose case or spelling mismatch
/// against the reference is accepted. Rewritten after every run to hold
/// only the entries that actually matched (self-pruning).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExclusionList {
    pub case: Vec<String>,
    pub spelling: Vec<String>,
}

impl ExclusionList {
    pub fn is_empty(&self) -> bool {
        self.case.is_empty() && self.spelling.is_empty()
    }
}

/// A spelling-table replacement: one word or several acceptable words.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Replacement {
    One(String),
    Many(Vec<String>),
}

impl Replacement {
    pub fn alternatives(&self) -> &[String] {
        match self {
            Replacement::One(s) => std::slice::from_ref(s),
            Replacement::Many(v) => v.as_slice(),
        }
    }
}

/// Per-locale word-substitution rules for accepted regional spelling
/// conventions, e.g. `"color" -> "colour"`. Order matters: a later
/// word's replacement may apply to a variant produced by an earlier one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpellingTable {
    pub spelling: IndexMap<String, Replacement>,
}

/// Unresolved mismatches of one run, in candidate-catalog order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DifferenceReport {
    pub case: Vec<String>,
    pub spelling: Vec<String>,
}

impl DifferenceReport {
    pub fn is_empty(&self) -> bool {
        self.case.is_empty() && self.spelling.is_empty()
    }
}

/// Lightweight error type for crates that need a concrete one.
#[derive(Debug, Error)]
pub enum EndriftError {
    #[error("candidate repository path does not exist: {0}")]
    MissingRepository(String),
    #[error("{0}")]
    Other(String),
}
