use crate::report::print_summary;
use color_eyre::eyre::{bail, Result};
use endrift_services::{check_locale, CheckOptions, RunPaths};
use std::path::PathBuf;

pub fn run_check(
    locale: &str,
    write: bool,
    update: bool,
    reference: Option<PathBuf>,
    locales_root: Option<PathBuf>,
    data_root: Option<PathBuf>,
    use_color: bool,
) -> Result<()> {
    tracing::debug!(locale, write, update, "check args");
    let cfg = endrift_config::load_config().unwrap_or_default();

    let reference_root = match reference.or_else(|| cfg.reference_root.clone().map(PathBuf::from)) {
        Some(p) => p,
        None => bail!("no reference repository configured; pass --reference or set it in endrift.toml"),
    };
    let locales_root = match locales_root.or_else(|| cfg.locales_root.clone().map(PathBuf::from)) {
        Some(p) => p,
        None => bail!("no locales root configured; pass --locales-root or set it in endrift.toml"),
    };
    let data_root = match data_root.or_else(|| cfg.data_root.clone().map(PathBuf::from)) {
        Some(p) => p,
        None => bail!("no data root configured; pass --data-root or set it in endrift.toml"),
    };

    let paths = RunPaths {
        reference_root,
        candidate_root: locales_root.join(locale),
        data_root,
    };

    println!("Checking {locale}\n-------");
    let summary = check_locale(&paths, locale, CheckOptions { write, update })?;
    print_summary(&summary, use_color);

    if write && summary.fixed_lines > 0 {
        println!("\n✔ rewrote {} line(s) in place", summary.fixed_lines);
    }
    Ok(())
}
