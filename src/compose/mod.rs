//! Configuration Composer: option normalization, version resolution, and
//! the auto-import merge patch.

mod descriptor;
mod error;
mod merge;
mod options;

pub use descriptor::ResolverDescriptor;
pub use error::ComposeError;
pub use merge::merge_patch;
pub use options::{
    ImportStyle, PluginOptions, StyleSource, DEFAULT_NO_STYLES_COMPONENTS, DEFAULT_PREFIX,
};

use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::locate::LocatedPackage;
use crate::manifest;

/// The npm package this plugin configures auto-import for.
pub const PACKAGE_NAME: &str = "element-plus";

/// Key under the auto-import namespace holding component-import settings.
pub const UN_COMPONENTS_KEY: &str = "unComponents";

/// Key of the resolver-descriptor list other plugins append to as well.
pub const RESOLVERS_KEY: &str = "resolvers";

/// The feature's build-metadata entry. `version` is the one the rest of the
/// build sees; `detected_version` is kept separately for diagnostics when an
/// override is in play.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureMetadata {
    pub pkg_path: PathBuf,
    pub version: String,
    pub detected_version: String,
}

impl FeatureMetadata {
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).expect("feature metadata serializes to JSON")
    }
}

/// Everything one compose run produces: the metadata entry and the patch to
/// merge into the auto-import namespace.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedFeature {
    pub metadata: FeatureMetadata,
    pub patch: Map<String, Value>,
}

/// Validates options against the located package and builds the feature's
/// metadata and merge patch.
///
/// The missing-dependency check runs before any manifest read, so a missing
/// install never surfaces as a confusing secondary filesystem error.
pub fn compose(
    options: Option<&PluginOptions>,
    located: &LocatedPackage,
) -> Result<ComposedFeature, ComposeError> {
    let install_path = located
        .install_path()
        .ok_or_else(|| ComposeError::MissingDependency {
            package: PACKAGE_NAME.to_string(),
        })?;

    let detected_version = manifest::detect_version(install_path)?;
    let default_options = PluginOptions::default();
    let options = options.unwrap_or(&default_options);

    // Override wins; detected version is the fallback, so the resolved
    // version is never empty once the install path is present.
    let version = options
        .version_override()
        .unwrap_or(&detected_version)
        .to_string();
    debug!(%version, %detected_version, "composed element-plus feature");

    let descriptor = ResolverDescriptor::from_options(options);
    let patch = auto_import_patch(&descriptor);

    Ok(ComposedFeature {
        metadata: FeatureMetadata {
            pkg_path: install_path.to_path_buf(),
            version,
            detected_version,
        },
        patch,
    })
}

/// Wraps a descriptor as a single-element resolver list, ready for the
/// append-merge into the shared namespace.
fn auto_import_patch(descriptor: &ResolverDescriptor) -> Map<String, Value> {
    let mut un_components = Map::new();
    un_components.insert(
        RESOLVERS_KEY.to_string(),
        Value::Array(vec![descriptor.to_value()]),
    );

    let mut patch = Map::new();
    patch.insert(UN_COMPONENTS_KEY.to_string(), Value::Object(un_components));
    patch
}
