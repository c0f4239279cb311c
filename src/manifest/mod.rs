//! npm package manifest (`package.json`) loading.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ManifestError {
    #[error("package manifest not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read package manifest '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse package manifest '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("package manifest '{0}' declares no version")]
    MissingVersion(PathBuf),
}

/// The subset of `package.json` this crate reads: the package's own version
/// and its declared dependency maps.
///
/// Unknown fields are ignored; all recognized fields are optional so that
/// minimal manifests (e.g. `{"name": "x"}`) still parse.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: Option<String>,
    pub version: Option<String>,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Parses manifest contents from a JSON string.
    pub fn parse(path: &Path, contents: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(contents).map_err(|e| ManifestError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Loads and parses a `package.json` file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(path, &contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ManifestError::NotFound(path.to_path_buf()))
            }
            Err(e) => Err(ManifestError::ReadError {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Whether `dep` appears in either the runtime or dev dependency map.
    pub fn declares(&self, dep: &str) -> bool {
        self.dependencies.contains_key(dep) || self.dev_dependencies.contains_key(dep)
    }
}

/// Reads the version an installed package declares about itself.
///
/// `install_dir` is the directory containing the package's `package.json`.
/// A manifest without a `version` field is an error: downstream feature
/// metadata requires a detected version.
pub fn detect_version(install_dir: &Path) -> Result<String, ManifestError> {
    let path = install_dir.join("package.json");
    let manifest = PackageManifest::load(&path)?;
    manifest
        .version
        .ok_or(ManifestError::MissingVersion(path))
}
