use endrift_core::{Catalog, Result};
use endrift_parsers::{Entry, Format, ParsedEntry};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Direct children of the repository root that hold no comparable UI
/// strings. The exclusion applies at the root only, not recursively.
const EXCLUDED_ROOT_DIRS: &[&str] = &[
    "calendar",
    "chat",
    "dom",
    "editor",
    "extensions",
    "mail",
    "mobile",
    "other-licenses",
    "security",
    "suite",
];

/// Region metadata files are not string catalogs.
const REGION_METADATA_SUFFIX: &str = "region.properties";

/// Walk `root` and build the flat identifier -> value catalog for one
/// repository. Files are visited in full-path lexicographic order so the
/// catalog insertion order is deterministic. A file that fails to read
/// or parse is logged and skipped; it never aborts the extraction.
pub fn extract_catalog(root: &Path) -> Result<Catalog> {
    let mut catalog = Catalog::new();

    for path in collect_files(root) {
        let rel = relative_id_path(&path, root);
        let Some(format) = Format::from_path(&path) else {
            continue;
        };

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to read file");
                continue;
            }
        };
        let entries = match format.parser().parse(&content) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to parse file");
                continue;
            }
        };

        for parsed in entries {
            let ParsedEntry::Entry(entry) = parsed else {
                continue;
            };
            record_entry(&mut catalog, &rel, format, entry);
        }
    }

    Ok(catalog)
}

fn record_entry(catalog: &mut Catalog, rel: &str, format: Format, entry: Entry) {
    let Entry {
        key,
        value,
        attributes,
    } = entry;

    if format.has_attributes() {
        // FTL: value-less containers exist solely to hold attributes.
        if !value.is_empty() {
            catalog.insert(format!("{rel}:{key}"), value);
        }
        for attr in attributes {
            catalog.insert(format!("{rel}:{key}.{}", attr.name), attr.value);
        }
    } else {
        catalog.insert(format!("{rel}:{key}"), value);
    }
}

fn collect_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            !(e.depth() == 1
                && e.file_type().is_dir()
                && e.file_name()
                    .to_str()
                    .map(|name| EXCLUDED_ROOT_DIRS.contains(&name))
                    .unwrap_or(false))
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| Format::from_path(p).is_some())
        .filter(|p| {
            !p.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.ends_with(REGION_METADATA_SUFFIX))
                .unwrap_or(false)
        })
        .collect();
    // Order by the full path's string form, not component-wise: the two
    // disagree when a directory name contains a byte below '/'.
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    files
}

/// Relative path with forward slashes, used as the identifier prefix.
fn relative_id_path(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
