use crate::{Entry, FormatParser, ParseError, ParsedEntry};

/// Java-style `.properties` files: `key = value` pairs, `#`/`!` comments,
/// trailing-backslash line continuations. Values are kept raw (no escape
/// processing) since the comparison works on the literal file text.
pub struct PropertiesParser;

impl FormatParser for PropertiesParser {
    fn parse(&self, content: &str) -> Result<Vec<ParsedEntry>, ParseError> {
        let mut out = Vec::new();
        let mut lines = content.lines().peekable();

        while let Some(line) = lines.next() {
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }

            let Some(sep) = find_separator(trimmed) else {
                out.push(ParsedEntry::Junk(line.to_string()));
                continue;
            };
            let key = trimmed[..sep].trim();
            if key.is_empty() {
                out.push(ParsedEntry::Junk(line.to_string()));
                continue;
            }
            let mut value = trimmed[sep + 1..].trim_start().to_string();

            // Continuation lines: a trailing backslash folds the next line in.
            while value.ends_with('\\') && !value.ends_with("\\\\") {
                value.pop();
                match lines.next() {
                    Some(cont) => value.push_str(cont.trim_start()),
                    None => break,
                }
            }

            out.push(ParsedEntry::Entry(Entry::new(key, value)));
        }

        Ok(out)
    }
}

/// First unescaped `=` or `:` on the line.
fn find_separator(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut escaped = false;
    for (i, b) in bytes.iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match b {
            b'\\' => escaped = true,
            b'=' | b':' => return Some(i),
            _ => {}
        }
    }
    None
}
