//! Resolver descriptor construction.

use serde::Serialize;
use serde_json::Value;

use super::options::{ImportStyle, PluginOptions};

/// The configuration fragment handed to the auto-import feature: how to map
/// an unqualified component name to its import statement and optional style
/// import.
///
/// `exclude` is only present when the user explicitly supplied one. Emitting
/// an empty list instead would read as an override and could suppress
/// another plugin's contribution downstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverDescriptor {
    pub import_style: ImportStyle,
    pub prefix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
    pub no_styles_components: Vec<String>,
    pub directives: bool,
}

impl ResolverDescriptor {
    /// Builds a descriptor from user options, resolving each field
    /// independently against its default.
    pub fn from_options(options: &PluginOptions) -> Self {
        Self {
            import_style: options.resolved_import_style(),
            prefix: options.resolved_prefix().to_string(),
            exclude: options.exclude.clone(),
            no_styles_components: options.resolved_no_styles_components(),
            directives: options.resolved_directives(),
        }
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).expect("descriptor serializes to JSON")
    }
}
