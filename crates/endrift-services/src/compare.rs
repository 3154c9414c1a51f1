use crate::spelling::expand_variants;
use endrift_core::{Catalog, DifferenceReport, ExclusionList, Result, SpellingTable};

/// Result of one comparison run. `used_exclusions` holds exactly the
/// exclusion entries that matched a mismatch this run; the caller is
/// expected to *replace* the on-disk exclusion list with it so stale
/// entries self-prune.
#[derive(Debug, Clone, Default)]
pub struct ComparisonOutcome {
    pub report: DifferenceReport,
    pub used_exclusions: ExclusionList,
}

/// Keyboard shortcut definitions legitimately differ per locale and are
/// excluded from comparison entirely.
fn is_shortcut(id: &str) -> bool {
    id.ends_with(".key") || id.ends_with(".accesskey")
}

/// Trim, collapse whitespace runs and fold line breaks to single spaces.
fn normalize_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Classify every identifier present in both catalogs. Candidate-only
/// identifiers are obsolete strings, not errors. Report ordering follows
/// candidate catalog insertion order. Pure function of its inputs.
pub fn compare_catalogs(
    reference: &Catalog,
    candidate: &Catalog,
    exclusions: &ExclusionList,
    spelling: &SpellingTable,
) -> Result<ComparisonOutcome> {
    let mut outcome = ComparisonOutcome::default();

    for (id, translation) in candidate {
        let Some(source) = reference.get(id) else {
            continue;
        };
        if is_shortcut(id) {
            continue;
        }
        if translation == source {
            continue;
        }

        let translation = normalize_ws(translation);
        let source = normalize_ws(source);
        if translation == source {
            // Pure formatting noise.
            continue;
        }

        if translation.to_lowercase() == source.to_lowercase() {
            if exclusions.case.iter().any(|e| e == id) {
                outcome.used_exclusions.case.push(id.clone());
            } else {
                outcome.report.case.push(id.clone());
            }
            continue;
        }

        let source = source.to_lowercase();
        let translation = translation.to_lowercase();
        let variants = expand_variants(&source, spelling)?;
        if variants.iter().any(|v| *v == translation) {
            // Accepted spelling convention.
            continue;
        }
        if exclusions.spelling.iter().any(|e| e == id) {
            outcome.used_exclusions.spelling.push(id.clone());
        } else {
            outcome.report.spelling.push(id.clone());
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(pairs: &[(&str, &str)]) -> Catalog {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn spelling_table(json: &str) -> SpellingTable {
        serde_json::from_str(&format!(r#"{{"spelling": {json}}}"#)).expect("valid table")
    }

    fn compare(
        reference: &Catalog,
        candidate: &Catalog,
        exclusions: &ExclusionList,
        spelling: &SpellingTable,
    ) -> ComparisonOutcome {
        compare_catalogs(reference, candidate, exclusions, spelling).expect("compare")
    }

    #[test]
    fn identical_values_never_mismatch() {
        let reference = catalog(&[("a.ftl:x", "Same")]);
        let candidate = catalog(&[("a.ftl:x", "Same")]);
        let outcome = compare(
            &reference,
            &candidate,
            &ExclusionList::default(),
            &spelling_table("{}"),
        );
        assert!(outcome.report.is_empty());
        assert!(outcome.used_exclusions.is_empty());
    }

    #[test]
    fn whitespace_only_difference_is_noise() {
        let reference = catalog(&[("a.properties:x", "Two  words\nhere")]);
        let candidate = catalog(&[("a.properties:x", "  Two words here ")]);
        let outcome = compare(
            &reference,
            &candidate,
            &ExclusionList::default(),
            &spelling_table("{}"),
        );
        assert!(outcome.report.is_empty());
    }

    #[test]
    fn case_difference_reported_unless_excluded() {
        let reference = catalog(&[("foo.ftl:title", "Settings")]);
        let candidate = catalog(&[("foo.ftl:title", "settings")]);

        let outcome = compare(
            &reference,
            &candidate,
            &ExclusionList::default(),
            &spelling_table("{}"),
        );
        assert_eq!(outcome.report.case, ["foo.ftl:title"]);
        assert!(outcome.used_exclusions.case.is_empty());

        let exclusions = ExclusionList {
            case: vec!["foo.ftl:title".into()],
            spelling: vec![],
        };
        let outcome = compare(&reference, &candidate, &exclusions, &spelling_table("{}"));
        assert!(outcome.report.case.is_empty());
        assert_eq!(outcome.used_exclusions.case, ["foo.ftl:title"]);
    }

    #[test]
    fn spelling_convention_match_is_not_a_mismatch() {
        let reference = catalog(&[("a.ftl:c", "color")]);
        let candidate = catalog(&[("a.ftl:c", "colour")]);
        let outcome = compare(
            &reference,
            &candidate,
            &ExclusionList::default(),
            &spelling_table(r#"{"color": "colour"}"#),
        );
        assert!(outcome.report.is_empty());
        assert!(outcome.used_exclusions.is_empty());
    }

    #[test]
    fn plural_form_not_covered_by_table_is_reported() {
        let reference = catalog(&[("a.ftl:f", "favorite item")]);
        let candidate = catalog(&[("a.ftl:f", "favorites item")]);
        let outcome = compare(
            &reference,
            &candidate,
            &ExclusionList::default(),
            &spelling_table(r#"{"favorite": "favourite"}"#),
        );
        assert_eq!(outcome.report.spelling, ["a.ftl:f"]);
    }

    #[test]
    fn shortcut_identifiers_are_skipped_entirely() {
        let reference = catalog(&[("a.dtd:open.key", "O"), ("a.ftl:btn.accesskey", "B")]);
        let candidate = catalog(&[("a.dtd:open.key", "A"), ("a.ftl:btn.accesskey", "Z")]);
        let outcome = compare(
            &reference,
            &candidate,
            &ExclusionList::default(),
            &spelling_table("{}"),
        );
        assert!(outcome.report.is_empty());
        assert!(outcome.used_exclusions.is_empty());
    }

    #[test]
    fn candidate_only_identifiers_are_ignored() {
        let reference = Catalog::new();
        let candidate = catalog(&[("obsolete.ftl:gone", "whatever")]);
        let outcome = compare(
            &reference,
            &candidate,
            &ExclusionList::default(),
            &spelling_table("{}"),
        );
        assert!(outcome.report.is_empty());
    }

    #[test]
    fn case_and_spelling_case_sensitivity_interplay() {
        // Differs beyond case: goes down the spelling branch.
        let reference = catalog(&[("a.ftl:x", "Color Scheme")]);
        let candidate = catalog(&[("a.ftl:x", "Colour scheme")]);
        let outcome = compare(
            &reference,
            &candidate,
            &ExclusionList::default(),
            &spelling_table(r#"{"color": "colour"}"#),
        );
        // Lower-cased candidate equals a generated variant: accepted.
        assert!(outcome.report.is_empty());
    }

    #[test]
    fn report_follows_candidate_insertion_order() {
        let reference = catalog(&[
            ("b.ftl:two", "Beta"),
            ("a.ftl:one", "Alpha"),
            ("c.ftl:three", "Gamma"),
        ]);
        // Candidate order intentionally differs from reference order.
        let candidate = catalog(&[
            ("c.ftl:three", "gamma"),
            ("a.ftl:one", "alpha"),
            ("b.ftl:two", "beta"),
        ]);
        let outcome = compare(
            &reference,
            &candidate,
            &ExclusionList::default(),
            &spelling_table("{}"),
        );
        assert_eq!(outcome.report.case, ["c.ftl:three", "a.ftl:one", "b.ftl:two"]);
    }

    #[test]
    fn excluded_and_reported_are_disjoint_per_run() {
        let reference = catalog(&[("a.ftl:x", "One"), ("a.ftl:y", "Two")]);
        let candidate = catalog(&[("a.ftl:x", "one"), ("a.ftl:y", "two")]);
        let exclusions = ExclusionList {
            case: vec!["a.ftl:x".into()],
            spelling: vec![],
        };
        let outcome = compare(&reference, &candidate, &exclusions, &spelling_table("{}"));
        assert_eq!(outcome.used_exclusions.case, ["a.ftl:x"]);
        assert_eq!(outcome.report.case, ["a.ftl:y"]);
    }

    #[test]
    fn feeding_used_exclusions_back_is_idempotent() {
        let reference = catalog(&[("a.ftl:x", "One"), ("a.ftl:y", "colors")]);
        let candidate = catalog(&[("a.ftl:x", "one"), ("a.ftl:y", "shades")]);
        let exclusions = ExclusionList {
            case: vec!["a.ftl:x".into(), "stale.ftl:gone".into()],
            spelling: vec!["a.ftl:y".into()],
        };
        let table = spelling_table("{}");

        let first = compare(&reference, &candidate, &exclusions, &table);
        let second = compare(&reference, &candidate, &first.used_exclusions, &table);
        assert_eq!(first.report, second.report);
        assert_eq!(first.used_exclusions, second.used_exclusions);
        // The stale entry was pruned away.
        assert_eq!(first.used_exclusions.case, ["a.ftl:x"]);
    }

    #[test]
    fn adding_a_table_entry_is_monotonic() {
        let reference = catalog(&[("a.ftl:x", "color")]);
        let candidate = catalog(&[("a.ftl:x", "colour")]);
        let empty = spelling_table("{}");
        let with_entry = spelling_table(r#"{"color": "colour"}"#);

        let before = compare(&reference, &candidate, &ExclusionList::default(), &empty);
        let after = compare(&reference, &candidate, &ExclusionList::default(), &with_entry);
        assert_eq!(before.report.spelling, ["a.ftl:x"]);
        assert!(after.report.spelling.is_empty());
    }
}
