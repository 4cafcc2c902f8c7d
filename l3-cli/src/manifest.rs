use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::L3cError;

pub const MANIFEST_FILE_NAME: &str = "l3.toml";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Manifest {
    pub name:   String,
    pub author: Option<String>,
    #[serde(default)]
    pub check:  CheckConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Directory, relative to the manifest, holding the program documents.
    #[serde(default = "default_programs_dir")]
    pub programs:  PathBuf,
    /// Stop at the first program that fails instead of reporting all of them.
    #[serde(default)]
    pub fail_fast: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            programs:  default_programs_dir(),
            fail_fast: false,
        }
    }
}

fn default_programs_dir() -> PathBuf {
    PathBuf::from("programs")
}

/// A manifest together with the directory it was found in.
#[derive(Debug, Clone)]
pub struct Project {
    pub root:     PathBuf,
    pub manifest: Manifest,
}

impl Project {
    pub fn programs_dir(&self) -> PathBuf {
        self.root.join(&self.manifest.check.programs)
    }
}

// check the given folder, then recursively upwards until a manifest is found
pub fn find_manifest(start: &Path) -> Result<Project, L3cError> {
    fn search_dir(path: &Path) -> Option<PathBuf> {
        if path.join(MANIFEST_FILE_NAME).exists() {
            return Some(path.to_path_buf());
        }
        path.parent().and_then(search_dir)
    }

    let start = if start.is_absolute() { start.to_path_buf() } else { std::env::current_dir()?.join(start) };
    let root = search_dir(&start).ok_or_else(|| L3cError::ManifestNotFound(start.clone()))?;
    let manifest_path = root.join(MANIFEST_FILE_NAME);
    let manifest_content = fs::read_to_string(&manifest_path)?;
    let manifest = toml::from_str(&manifest_content).map_err(|source| L3cError::Manifest {
        path: manifest_path,
        source,
    })?;
    Ok(Project { root, manifest })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_check_table_is_missing() {
        let manifest: Manifest = toml::from_str(r#"name = "demo""#).expect("manifest should parse");
        assert_eq!(manifest.check, CheckConfig::default());
        assert_eq!(manifest.check.programs, PathBuf::from("programs"));
        assert!(manifest.author.is_none());
    }

    #[test]
    fn check_table_overrides_defaults() {
        let manifest: Manifest = toml::from_str(
            r#"
                name = "demo"
                author = "someone"

                [check]
                programs = "ir"
                fail_fast = true
            "#,
        )
        .expect("manifest should parse");
        assert_eq!(manifest.check.programs, PathBuf::from("ir"));
        assert!(manifest.check.fail_fast);
    }

    #[test]
    fn manifest_found_in_parent_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(MANIFEST_FILE_NAME), "name = \"demo\"\n").expect("write manifest");
        let nested = dir.path().join("programs").join("deeper");
        fs::create_dir_all(&nested).expect("create nested dir");

        let project = find_manifest(&nested).expect("manifest should be found");
        assert_eq!(project.manifest.name, "demo");
        assert_eq!(project.root, dir.path());
        assert_eq!(project.programs_dir(), dir.path().join("programs"));
    }

    #[test]
    fn malformed_manifest_is_reported_with_its_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(MANIFEST_FILE_NAME), "name = [").expect("write manifest");
        match find_manifest(dir.path()) {
            Err(L3cError::Manifest { path, .. }) => assert_eq!(path, dir.path().join(MANIFEST_FILE_NAME)),
            other => panic!("expected a manifest error, got {other:?}"),
        }
    }
}
