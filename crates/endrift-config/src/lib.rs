use serde::Deserialize;
use std::path::Path;

/// Tool configuration loaded from `endrift.toml`. All fields are
/// optional; the CLI applies its own flag overrides on top.
///
/// - `reference_root`: the English reference string repository.
/// - `locales_root`: directory holding one candidate repository per
///   locale (`<locales_root>/<locale>`).
/// - `data_root`: directory holding `exclusions/`, `spelling/` and
///   `output/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EndriftConfig {
    pub reference_root: Option<String>,
    pub locales_root: Option<String>,
    pub data_root: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{0}")]
    Other(String),
}

/// Search order: CWD/endrift.toml, then $HOME config dir. Earlier files
/// win field-by-field.
pub fn load_config() -> Result<EndriftConfig, ConfigError> {
    let mut merged = EndriftConfig::default();
    if let Ok(cwd) = std::env::current_dir() {
        merged = merge(merged, read_file(&cwd.join("endrift.toml")));
    }
    if let Some(base) = dirs::config_dir() {
        merged = merge(merged, read_file(&base.join("endrift").join("endrift.toml")));
    }
    Ok(merged)
}

fn read_file(path: &Path) -> EndriftConfig {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|s| toml::from_str(&s).ok())
        .unwrap_or_default()
}

fn merge(mut a: EndriftConfig, b: EndriftConfig) -> EndriftConfig {
    if a.reference_root.is_none() {
        a.reference_root = b.reference_root;
    }
    if a.locales_root.is_none() {
        a.locales_root = b.locales_root;
    }
    if a.data_root.is_none() {
        a.data_root = b.data_root;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_earlier_values() {
        let a = EndriftConfig {
            reference_root: Some("/ref-a".into()),
            locales_root: None,
            data_root: None,
        };
        let b = EndriftConfig {
            reference_root: Some("/ref-b".into()),
            locales_root: Some("/locales-b".into()),
            data_root: None,
        };
        let merged = merge(a, b);
        assert_eq!(merged.reference_root.as_deref(), Some("/ref-a"));
        assert_eq!(merged.locales_root.as_deref(), Some("/locales-b"));
        assert!(merged.data_root.is_none());
    }

    #[test]
    fn unreadable_file_yields_defaults() {
        let cfg = read_file(Path::new("/nonexistent/endrift.toml"));
        assert!(cfg.reference_root.is_none());
    }

    #[test]
    fn reads_config_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("endrift.toml");
        std::fs::write(
            &path,
            "reference_root = \"/srv/reference\"\nlocales_root = \"/srv/locales\"\n",
        )
        .expect("write config");

        let cfg = read_file(&path);
        assert_eq!(cfg.reference_root.as_deref(), Some("/srv/reference"));
        assert_eq!(cfg.locales_root.as_deref(), Some("/srv/locales"));
        assert!(cfg.data_root.is_none());
    }

    #[test]
    fn invalid_toml_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("endrift.toml");
        std::fs::write(&path, "reference_root = [not toml").expect("write config");

        let cfg = read_file(&path);
        assert!(cfg.reference_root.is_none());
    }
}
