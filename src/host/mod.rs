//! The slice of the host build tool's plugin API this crate consumes,
//! reframed as an explicit accumulator passed by reference through the
//! configuration phase instead of ambient global state.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::compose::merge_patch;
use crate::manifest::PackageManifest;

/// Process-wide build metadata: one entry per feature key, populated during
/// plugin initialization and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildMetadata(Map<String, Value>);

impl BuildMetadata {
    pub fn set(&mut self, feature: &str, entry: Value) {
        self.0.insert(feature.to_string(), entry);
    }

    pub fn get(&self, feature: &str) -> Option<&Value> {
        self.0.get(feature)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The host-supplied context for one plugin initialization: the consuming
/// project's manifest, its working directory, the shared mutable user
/// configuration namespace, and the build-metadata accumulator.
#[derive(Debug, Default)]
pub struct BuildContext {
    pkg: PackageManifest,
    cwd: PathBuf,
    user_config: Map<String, Value>,
    app_data: BuildMetadata,
}

impl BuildContext {
    pub fn new(pkg: PackageManifest, cwd: impl Into<PathBuf>) -> Self {
        Self {
            pkg,
            cwd: cwd.into(),
            user_config: Map::new(),
            app_data: BuildMetadata::default(),
        }
    }

    /// Seeds the user configuration namespace, e.g. with what the host tool
    /// parsed from the project's config file.
    pub fn with_user_config(mut self, user_config: Map<String, Value>) -> Self {
        self.user_config = user_config;
        self
    }

    pub fn pkg(&self) -> &PackageManifest {
        &self.pkg
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn user_config(&self) -> &Map<String, Value> {
        &self.user_config
    }

    /// The user's configuration for one feature key, if any.
    pub fn feature_config(&self, key: &str) -> Option<&Value> {
        self.user_config.get(key)
    }

    pub fn app_data(&self) -> &BuildMetadata {
        &self.app_data
    }

    /// The "modify build metadata" hook: applies a pure transform to the
    /// accumulator.
    pub fn modify_app_data<F>(&mut self, transform: F)
    where
        F: FnOnce(BuildMetadata) -> BuildMetadata,
    {
        self.app_data = transform(std::mem::take(&mut self.app_data));
    }

    /// Merges a patch into the named entry of the user configuration.
    ///
    /// The existing entry is the merge base (user-declared settings win);
    /// an entry the user set to a non-object is left untouched.
    pub fn merge_feature_config(&mut self, key: &str, patch: Map<String, Value>) {
        match self.user_config.get_mut(key) {
            Some(Value::Object(existing)) => merge_patch(existing, patch),
            Some(_) => {}
            None => {
                self.user_config.insert(key.to_string(), Value::Object(patch));
            }
        }
    }
}
