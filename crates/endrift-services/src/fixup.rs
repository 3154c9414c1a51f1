use endrift_core::{Catalog, Result};
use endrift_parsers::Format;
use indexmap::IndexMap;
use regex::{Captures, Regex};
use std::path::Path;

/// Rewrite accepted case-differing candidate values back to the
/// reference text, in place. Identifiers are grouped by source file so
/// every file is opened and rewritten at most once. Returns the number
/// of lines changed.
///
/// Each file is written back as one whole write; there is no protection
/// against a crash mid-rewrite beyond that.
pub fn apply_case_fixes(
    root: &Path,
    case_ids: &[String],
    candidate: &Catalog,
    reference: &Catalog,
) -> Result<usize> {
    let mut by_file: IndexMap<&str, Vec<&String>> = IndexMap::new();
    for id in case_ids {
        let Some((rel, _)) = id.split_once(':') else {
            continue;
        };
        by_file.entry(rel).or_default().push(id);
    }

    let mut changed_lines = 0;
    for (rel, ids) in by_file {
        let Some(format) = Format::from_path(Path::new(rel)) else {
            continue;
        };

        let mut patches: Vec<Patch<'_>> = Vec::new();
        for id in ids {
            let (Some(old), Some(new)) = (candidate.get(id), reference.get(id)) else {
                continue;
            };
            match build_pattern(format, id, old) {
                Some(pattern) => patches.push(Patch {
                    old: old.as_str(),
                    new: new.as_str(),
                    pattern: pattern?,
                }),
                None => {
                    tracing::debug!(id, format = ?format, "no rewrite pattern for this format");
                }
            }
        }
        if patches.is_empty() {
            continue;
        }

        let path = root.join(rel);
        let content = std::fs::read_to_string(&path)?;
        let had_trailing_newline = content.ends_with('\n');

        let mut lines: Vec<String> = Vec::new();
        for line in content.lines() {
            let mut line = line.to_string();
            for patch in &patches {
                if !line.contains(patch.old) {
                    continue;
                }
                let rewritten = patch.apply(&line);
                if rewritten != line {
                    changed_lines += 1;
                    line = rewritten;
                }
            }
            lines.push(line);
        }

        let mut output = lines.join("\n");
        if had_trailing_newline {
            output.push('\n');
        }
        std::fs::write(&path, output)?;
        tracing::info!(path = %path.display(), "applied case fixes");
    }

    Ok(changed_lines)
}

struct Patch<'a> {
    old: &'a str,
    new: &'a str,
    pattern: Pattern,
}

impl Patch<'_> {
    /// Replacement strings are assembled in a closure so `$` and `\` in
    /// values stay literal.
    fn apply(&self, line: &str) -> String {
        let new = self.new;
        match &self.pattern {
            Pattern::Equals { key, re } => re
                .replace_all(line, |caps: &Captures| {
                    format!("{key}{}={}{new}{}", &caps[1], &caps[2], &caps[3])
                })
                .into_owned(),
            Pattern::Entity { key, re } => re
                .replace_all(line, |caps: &Captures| {
                    format!("{key}{}{}{new}{}", &caps[1], &caps[2], &caps[3])
                })
                .into_owned(),
            Pattern::FtlAttribute { attr, re } => re
                .replace_all(line, |caps: &Captures| {
                    format!(
                        "{}.{attr}{}={}{new}{}",
                        &caps[1], &caps[2], &caps[3], &caps[4]
                    )
                })
                .into_owned(),
        }
    }
}

enum Pattern {
    /// `key = value` lines (.properties, .ini, plain .ftl messages).
    Equals { key: String, re: Regex },
    /// `<!ENTITY key "value">` with either quote character (.dtd).
    Entity { key: String, re: Regex },
    /// Indented `.attr = value` lines (.ftl attributes).
    FtlAttribute { attr: String, re: Regex },
}

/// Build the line-rewrite pattern for one identifier, anchored on the
/// entry key and the exact current value, capturing the surrounding
/// whitespace and quote characters so they survive the rewrite.
/// `.inc` files have no rewrite pattern and are left untouched.
fn build_pattern(format: Format, id: &str, old: &str) -> Option<Result<Pattern>> {
    let key = id.split_once(':').map(|(_, k)| k)?;
    let old = regex::escape(old);

    let built = match format {
        Format::Properties | Format::Ini => equals_pattern(key, &old),
        Format::Dtd => {
            let escaped = regex::escape(key);
            Regex::new(&format!(r#"{escaped}(\s*)("|'){old}("|')"#)).map(|re| Pattern::Entity {
                key: key.to_string(),
                re,
            })
        }
        Format::Ftl => match key.split_once('.') {
            Some((_, attr)) => {
                let escaped = regex::escape(attr);
                Regex::new(&format!(r"^(\s*)\.{escaped}(\s*)=(\s*){old}(\s*)$")).map(|re| {
                    Pattern::FtlAttribute {
                        attr: attr.to_string(),
                        re,
                    }
                })
            }
            None => equals_pattern(key, &old),
        },
        Format::Inc => return None,
    };

    Some(built.map_err(Into::into))
}

fn equals_pattern(key: &str, old: &str) -> std::result::Result<Pattern, regex::Error> {
    let escaped = regex::escape(key);
    Regex::new(&format!(r"^{escaped}(\s*)=(\s*){old}(\s*)$")).map(|re| Pattern::Equals {
        key: key.to_string(),
        re,
    })
}
