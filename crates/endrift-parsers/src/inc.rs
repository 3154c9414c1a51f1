use crate::{Entry, FormatParser, ParseError, ParsedEntry};

/// `.inc` preprocessor string bundles: `#define key value` lines.
/// Everything else (plain comments, `#if`/`#filter` directives, blank
/// lines) carries no localizable text and is ignored.
pub struct IncParser;

impl FormatParser for IncParser {
    fn parse(&self, content: &str) -> Result<Vec<ParsedEntry>, ParseError> {
        let mut out = Vec::new();
        for line in content.lines() {
            let Some(rest) = line.trim_start().strip_prefix("#define") else {
                continue;
            };
            // "#definefoo" is not a define.
            if !rest.starts_with(char::is_whitespace) {
                continue;
            }
            let rest = rest.trim_start();
            match rest.split_once(char::is_whitespace) {
                Some((key, value)) => {
                    out.push(ParsedEntry::Entry(Entry::new(key, value.trim_start())));
                }
                None if !rest.is_empty() => {
                    // Valueless define, e.g. `#define MOZ_LANGPACK`.
                    out.push(ParsedEntry::Entry(Entry::new(rest, "")));
                }
                None => out.push(ParsedEntry::Junk(line.to_string())),
            }
        }
        Ok(out)
    }
}
