#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// On-disk fixture for one check run: a reference repo, a locales root
/// with a single candidate repo, and a data root with per-locale
/// exclusion and spelling files.
pub struct Fixture {
    pub dir: tempfile::TempDir,
    pub locale: String,
}

impl Fixture {
    pub fn reference_root(&self) -> PathBuf {
        self.dir.path().join("reference")
    }

    pub fn locales_root(&self) -> PathBuf {
        self.dir.path().join("locales")
    }

    pub fn candidate_root(&self) -> PathBuf {
        self.locales_root().join(&self.locale)
    }

    pub fn data_root(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    pub fn write_reference(&self, rel: &str, content: &str) {
        write_file(&self.reference_root().join(rel), content);
    }

    pub fn write_candidate(&self, rel: &str, content: &str) {
        write_file(&self.candidate_root().join(rel), content);
    }

    pub fn check_args(&self) -> Vec<String> {
        vec![
            "check".to_string(),
            self.locale.clone(),
            "--reference".to_string(),
            self.reference_root().display().to_string(),
            "--locales-root".to_string(),
            self.locales_root().display().to_string(),
            "--data-root".to_string(),
            self.data_root().display().to_string(),
        ]
    }
}

pub fn fixture(locale: &str) -> Fixture {
    fixture_with_configs(locale, r#"{"case": [], "spelling": []}"#, r#"{"spelling": {}}"#)
}

pub fn fixture_with_configs(locale: &str, exclusions: &str, spelling: &str) -> Fixture {
    let dir = tempfile::tempdir().expect("tempdir");
    let fx = Fixture {
        dir,
        locale: locale.to_string(),
    };
    fs::create_dir_all(fx.reference_root()).expect("mkdir reference");
    fs::create_dir_all(fx.candidate_root()).expect("mkdir candidate");
    write_file(
        &fx.data_root().join("exclusions").join(format!("{locale}.json")),
        exclusions,
    );
    write_file(
        &fx.data_root().join("spelling").join(format!("{locale}.json")),
        spelling,
    );
    fx
}

fn write_file(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, content).expect("write");
}
