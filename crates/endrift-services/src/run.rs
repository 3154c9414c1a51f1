use crate::{apply_case_fixes, compare_catalogs, extract_catalog, ComparisonOutcome};
use color_eyre::eyre::{bail, WrapErr};
use endrift_core::{Catalog, DifferenceReport, EndriftError, ExclusionList, Result, SpellingTable};
use std::path::{Path, PathBuf};

/// Filesystem layout for one run. `data_root` holds the per-locale
/// `exclusions/`, `spelling/` and `output/` directories.
#[derive(Debug, Clone)]
pub struct RunPaths {
    pub reference_root: PathBuf,
    pub candidate_root: PathBuf,
    pub data_root: PathBuf,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    /// Write accepted case fixes back into the candidate files.
    pub write: bool,
    /// Refresh the candidate repository from its remote before comparing.
    pub update: bool,
}

/// Everything the CLI needs to render the run: the report plus both
/// catalogs (for source/translation display) and the fix count.
#[derive(Debug)]
pub struct RunSummary {
    pub report: DifferenceReport,
    pub used_exclusions: ExclusionList,
    pub reference: Catalog,
    pub candidate: Catalog,
    pub fixed_lines: usize,
}

/// Full check of one locale: extract both catalogs, compare, optionally
/// fix case differences in place, then persist the report and the pruned
/// exclusion list. Differences are reported, not treated as failure.
pub fn check_locale(paths: &RunPaths, locale: &str, opts: CheckOptions) -> Result<RunSummary> {
    if !paths.candidate_root.is_dir() {
        bail!(EndriftError::MissingRepository(
            paths.candidate_root.display().to_string()
        ));
    }
    if opts.update {
        refresh_repository(&paths.candidate_root);
    }

    let reference = extract_catalog(&paths.reference_root)?;
    let candidate = extract_catalog(&paths.candidate_root)?;
    tracing::info!(
        locale,
        reference = reference.len(),
        candidate = candidate.len(),
        "catalogs extracted"
    );

    let exclusions = load_exclusions(&paths.data_root, locale)?;
    let spelling = load_spelling(&paths.data_root, locale)?;

    let ComparisonOutcome {
        report,
        used_exclusions,
    } = compare_catalogs(&reference, &candidate, &exclusions, &spelling)?;

    let fixed_lines = if opts.write && !report.case.is_empty() {
        apply_case_fixes(&paths.candidate_root, &report.case, &candidate, &reference)?
    } else {
        0
    };

    write_report(&paths.data_root, locale, &report)?;
    write_exclusions(&paths.data_root, locale, &used_exclusions)?;

    Ok(RunSummary {
        report,
        used_exclusions,
        reference,
        candidate,
        fixed_lines,
    })
}

/// `hg pull -u` on the candidate working copy. A failure is logged and
/// the check proceeds with the working copy as it is.
fn refresh_repository(repo: &Path) {
    let status = std::process::Command::new("hg")
        .arg("-R")
        .arg(repo)
        .args(["pull", "-u"])
        .status();
    match status {
        Ok(status) if status.success() => {
            tracing::info!(repo = %repo.display(), "repository refreshed");
        }
        Ok(status) => {
            tracing::warn!(repo = %repo.display(), %status, "hg pull failed");
        }
        Err(err) => {
            tracing::warn!(repo = %repo.display(), error = %err, "could not run hg");
        }
    }
}

/// Missing or malformed configuration is fatal: every mismatch
/// classification depends on it.
pub fn load_exclusions(data_root: &Path, locale: &str) -> Result<ExclusionList> {
    let path = data_root.join("exclusions").join(format!("{locale}.json"));
    let file = std::fs::File::open(&path)
        .wrap_err_with(|| format!("missing exclusions file {}", path.display()))?;
    serde_json::from_reader(file)
        .wrap_err_with(|| format!("malformed exclusions file {}", path.display()))
}

pub fn load_spelling(data_root: &Path, locale: &str) -> Result<SpellingTable> {
    let path = data_root.join("spelling").join(format!("{locale}.json"));
    let file = std::fs::File::open(&path)
        .wrap_err_with(|| format!("missing spelling file {}", path.display()))?;
    serde_json::from_reader(file)
        .wrap_err_with(|| format!("malformed spelling file {}", path.display()))
}

fn write_report(data_root: &Path, locale: &str, report: &DifferenceReport) -> Result<()> {
    let dir = data_root.join("output");
    std::fs::create_dir_all(&dir)?;
    write_json(&dir.join(format!("{locale}.json")), report)
}

/// Replace, not merge: the exclusion file ends up holding exactly the
/// exclusions used this run.
fn write_exclusions(data_root: &Path, locale: &str, used: &ExclusionList) -> Result<()> {
    let dir = data_root.join("exclusions");
    std::fs::create_dir_all(&dir)?;
    write_json(&dir.join(format!("{locale}.json")), used)
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"  ");
    let mut ser = serde_json::Serializer::with_formatter(file, formatter);
    value.serialize(&mut ser)?;
    Ok(())
}
