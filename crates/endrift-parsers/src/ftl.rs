use crate::{Attribute, Entry, FormatParser, ParseError, ParsedEntry};
use once_cell::sync::Lazy;
use regex::Regex;

/// Fluent (`.ftl`) message files. Supported shape: messages and terms
/// (`key = value`, `-term = value`), indented continuation lines, and
/// attributes (`.title = value`). Messages may be value-less containers
/// that only hold attributes. Select expressions and placeables pass
/// through as raw text.
pub struct FtlParser;

static MESSAGE_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?[A-Za-z][A-Za-z0-9_-]*)\s*=\s*(.*)$").expect("ftl message regex"));

static ATTRIBUTE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s+\.([A-Za-z][A-Za-z0-9_-]*)\s*=\s*(.*)$").expect("ftl attribute regex")
});

/// Where continuation lines currently attach.
enum Context {
    Value,
    Attribute,
}

struct Builder {
    entry: Entry,
    context: Context,
}

impl Builder {
    fn push_continuation(&mut self, text: &str) {
        let slot = match self.context {
            Context::Value => &mut self.entry.value,
            Context::Attribute => {
                &mut self
                    .entry
                    .attributes
                    .last_mut()
                    .expect("attribute context implies an attribute")
                    .value
            }
        };
        if !slot.is_empty() {
            slot.push('\n');
        }
        slot.push_str(text);
    }
}

impl FormatParser for FtlParser {
    fn parse(&self, content: &str) -> Result<Vec<ParsedEntry>, ParseError> {
        let mut out = Vec::new();
        let mut current: Option<Builder> = None;

        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            // Comments terminate the message they follow.
            if line.starts_with('#') {
                flush(&mut out, &mut current);
                continue;
            }
            if let Some(caps) = MESSAGE_START.captures(line) {
                flush(&mut out, &mut current);
                current = Some(Builder {
                    entry: Entry::new(&caps[1], caps[2].trim_end()),
                    context: Context::Value,
                });
                continue;
            }
            if let Some(caps) = ATTRIBUTE_LINE.captures(line) {
                if let Some(builder) = current.as_mut() {
                    builder.entry.attributes.push(Attribute {
                        name: caps[1].to_string(),
                        value: caps[2].trim_end().to_string(),
                    });
                    builder.context = Context::Attribute;
                } else {
                    out.push(ParsedEntry::Junk(line.to_string()));
                }
                continue;
            }
            if line.starts_with(char::is_whitespace) {
                match current.as_mut() {
                    Some(builder) => builder.push_continuation(line.trim()),
                    None => out.push(ParsedEntry::Junk(line.to_string())),
                }
                continue;
            }
            // Top-level line that is not a message start.
            flush(&mut out, &mut current);
            out.push(ParsedEntry::Junk(line.to_string()));
        }
        flush(&mut out, &mut current);

        Ok(out)
    }
}

fn flush(out: &mut Vec<ParsedEntry>, current: &mut Option<Builder>) {
    if let Some(builder) = current.take() {
        out.push(ParsedEntry::Entry(builder.entry));
    }
}
