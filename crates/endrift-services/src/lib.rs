//! High-level services over the parser crate.
//! Intentionally thin: exposes stable functions used by the CLI without
//! leaking parser internals to callers.

pub use endrift_core::{Catalog, DifferenceReport, ExclusionList, Result, SpellingTable};

mod compare;
mod extract;
mod fixup;
mod run;
mod spelling;

pub use compare::{compare_catalogs, ComparisonOutcome};
pub use extract::extract_catalog;
pub use fixup::apply_case_fixes;
pub use run::{check_locale, load_exclusions, load_spelling, CheckOptions, RunPaths, RunSummary};
pub use spelling::expand_variants;
