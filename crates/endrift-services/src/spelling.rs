use endrift_core::{Result, SpellingTable};
use regex::Regex;

/// Expand the lower-cased reference text into every locale-spelling
/// variant the substitution table allows. The seed text itself is always
/// the first variant. Substitutions compose: a later table entry applies
/// to variants produced by earlier ones, so independent spelling changes
/// combine.
pub fn expand_variants(source: &str, table: &SpellingTable) -> Result<Vec<String>> {
    let mut variants: Vec<String> = vec![source.to_string()];

    for (word, replacement) in &table.spelling {
        let re = word_pattern(word)?;
        for alt in replacement.alternatives() {
            // Snapshot: substitutions run against the variants that exist
            // before this alternative, matching one pass per alternative.
            let snapshot: Vec<String> = variants.clone();
            for variant in snapshot {
                let substituted = re
                    .replace_all(&variant, |caps: &regex::Captures| {
                        format!("{}{}", &caps[1], alt)
                    })
                    .into_owned();
                if !variants.contains(&substituted) {
                    variants.push(substituted);
                }
            }
        }
    }

    Ok(variants)
}

/// Whole-word matcher where a preceding `$` or `-` is not a valid word
/// boundary, so variable references (`$color`) and hyphen compounds
/// (`two-color`) are left alone. The preceding character is captured and
/// re-emitted because the regex crate has no lookbehind.
fn word_pattern(word: &str) -> Result<Regex> {
    let pattern = format!(r"(^|[^\w$-]){}\b", regex::escape(word));
    Ok(Regex::new(&pattern)?)
}
