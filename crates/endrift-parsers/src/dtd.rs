use crate::{Entry, FormatParser, ParseError, ParsedEntry};
use once_cell::sync::Lazy;
use regex::Regex;

/// XML DTD entity files: `<!ENTITY key "value">` declarations with
/// either quote character, interleaved with `<!-- comments -->`.
pub struct DtdParser;

static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)<!--.*?-->|<!ENTITY\s+([A-Za-z_][A-Za-z0-9._-]*)\s+(?:"([^"]*)"|'([^']*)')\s*>"#,
    )
    .expect("dtd token regex")
});

impl FormatParser for DtdParser {
    fn parse(&self, content: &str) -> Result<Vec<ParsedEntry>, ParseError> {
        let mut out = Vec::new();
        let mut cursor = 0;

        for m in TOKEN.captures_iter(content) {
            let whole = m.get(0).expect("group 0 always present");
            push_junk(&mut out, &content[cursor..whole.start()]);
            cursor = whole.end();

            let Some(key) = m.get(1) else {
                continue; // comment
            };
            let value = m
                .get(2)
                .or_else(|| m.get(3))
                .map(|v| v.as_str())
                .unwrap_or_default();
            out.push(ParsedEntry::Entry(Entry::new(key.as_str(), value)));
        }

        // A declaration opened after the last parsed token and never
        // closed means the file is cut off; that is a parse failure,
        // not junk to skip past.
        let trailing = &content[cursor..];
        if let Some(pos) = trailing.find("<!ENTITY") {
            if !trailing[pos..].contains('>') {
                return Err(ParseError::UnterminatedEntity(cursor + pos));
            }
        }
        push_junk(&mut out, trailing);

        Ok(out)
    }
}

/// Anything markup-looking between declarations is an unparsable region.
fn push_junk(out: &mut Vec<ParsedEntry>, gap: &str) {
    let gap = gap.trim();
    if gap.contains('<') {
        out.push(ParsedEntry::Junk(gap.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Vec<ParsedEntry> {
        DtdParser.parse(content).expect("parse dtd")
    }

    #[test]
    fn parses_entities_with_both_quote_styles() {
        let entries = parse(
            "<!-- about -->\n<!ENTITY about.title \"About\">\n<!ENTITY about.label 'Details'>\n",
        );
        assert_eq!(
            entries,
            vec![
                ParsedEntry::Entry(Entry::new("about.title", "About")),
                ParsedEntry::Entry(Entry::new("about.label", "Details")),
            ]
        );
    }

    #[test]
    fn broken_declaration_is_junk() {
        let entries = parse("<!ENTITY broken\n<!ENTITY ok \"fine\">\n");
        assert_eq!(entries.len(), 2);
        assert!(matches!(entries[0], ParsedEntry::Junk(_)));
        assert_eq!(entries[1], ParsedEntry::Entry(Entry::new("ok", "fine")));
    }

    #[test]
    fn multiline_comment_is_skipped() {
        let entries = parse("<!--\n multi\n line\n-->\n<!ENTITY k \"v\">\n");
        assert_eq!(entries, vec![ParsedEntry::Entry(Entry::new("k", "v"))]);
    }

    #[test]
    fn truncated_trailing_declaration_is_a_parse_error() {
        let err = DtdParser
            .parse("<!ENTITY ok \"fine\">\n<!ENTITY cut.off \"no close")
            .expect_err("truncated file must not parse");
        assert!(matches!(err, ParseError::UnterminatedEntity(_)));
    }
}
