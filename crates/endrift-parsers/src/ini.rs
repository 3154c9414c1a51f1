use crate::{Entry, FormatParser, ParseError, ParsedEntry};

/// `.ini` string bundles: `key=value` pairs with `[Section]` headers and
/// `;`/`#` comments. Sections only group keys visually in these files,
/// so they are skipped rather than folded into the key.
pub struct IniParser;

impl FormatParser for IniParser {
    fn parse(&self, content: &str) -> Result<Vec<ParsedEntry>, ParseError> {
        let mut out = Vec::new();
        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#') {
                continue;
            }
            if trimmed.starts_with('[') && trimmed.ends_with(']') {
                continue;
            }
            match trimmed.split_once('=') {
                Some((key, value)) if !key.trim().is_empty() => {
                    out.push(ParsedEntry::Entry(Entry::new(key.trim(), value.trim_start())));
                }
                _ => out.push(ParsedEntry::Junk(line.to_string())),
            }
        }
        Ok(out)
    }
}
