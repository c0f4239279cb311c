use serde::{Deserialize, Serialize};

/// Default component-name prefix.
pub const DEFAULT_PREFIX: &str = "El";

/// Components whose styles are assumed globally loaded, so auto-import must
/// not additionally pull in their style files.
pub const DEFAULT_NO_STYLES_COMPONENTS: [&str; 4] =
    ["ElMessage", "ElNotification", "ElMessageBox", "ElLoading"];

/// How component style sheets are imported alongside the component itself:
/// `true`/`false` toggles the compiled CSS import, `"css"`/`"sass"` selects
/// the source to import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImportStyle {
    Toggle(bool),
    Source(StyleSource),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleSource {
    Css,
    Sass,
}

impl Default for ImportStyle {
    fn default() -> Self {
        Self::Toggle(true)
    }
}

/// User-supplied plugin options, as found under the feature's entry in the
/// shared configuration namespace.
///
/// Every field is optional and defaults independently: supplying one field
/// never changes how an absent sibling resolves, and an absent options
/// object behaves exactly like an empty one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginOptions {
    pub import_style: Option<ImportStyle>,
    /// Manual version override; takes precedence over the detected version.
    pub version: Option<String>,
    pub prefix: Option<String>,
    /// Components excluded from auto-import (names without prefix).
    pub exclude: Option<Vec<String>>,
    pub no_styles_components: Option<Vec<String>>,
    pub directives: Option<bool>,
}

impl PluginOptions {
    /// The version override, with an empty string treated as absent.
    pub fn version_override(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.is_empty())
    }

    /// The component prefix, defaulted. An empty string is treated as
    /// absent, same as the override.
    pub fn resolved_prefix(&self) -> &str {
        self.prefix
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_PREFIX)
    }

    pub fn resolved_import_style(&self) -> ImportStyle {
        self.import_style.unwrap_or_default()
    }

    pub fn resolved_no_styles_components(&self) -> Vec<String> {
        self.no_styles_components.clone().unwrap_or_else(|| {
            DEFAULT_NO_STYLES_COMPONENTS
                .iter()
                .map(|s| (*s).to_string())
                .collect()
        })
    }

    /// Directives are on unless explicitly disabled.
    pub fn resolved_directives(&self) -> bool {
        self.directives.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_json(json: &str) -> PluginOptions {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_empty_options_resolve_to_documented_defaults() {
        let options = PluginOptions::default();

        assert_eq!(options.resolved_import_style(), ImportStyle::Toggle(true));
        assert_eq!(options.version_override(), None);
        assert_eq!(options.resolved_prefix(), "El");
        assert_eq!(options.exclude, None);
        assert_eq!(
            options.resolved_no_styles_components(),
            vec!["ElMessage", "ElNotification", "ElMessageBox", "ElLoading"]
        );
        assert!(options.resolved_directives());
    }

    #[test]
    fn test_prefix_only_leaves_sibling_defaults_untouched() {
        let options = from_json(r#"{"prefix": "Ep"}"#);

        assert_eq!(options.resolved_prefix(), "Ep");
        assert_eq!(options.resolved_import_style(), ImportStyle::Toggle(true));
        assert_eq!(options.version_override(), None);
        assert_eq!(options.exclude, None);
        assert_eq!(
            options.resolved_no_styles_components(),
            vec!["ElMessage", "ElNotification", "ElMessageBox", "ElLoading"]
        );
        assert!(options.resolved_directives());
    }

    #[test]
    fn test_import_style_accepts_bool_and_keywords() {
        assert_eq!(
            from_json(r#"{"importStyle": false}"#).resolved_import_style(),
            ImportStyle::Toggle(false)
        );
        assert_eq!(
            from_json(r#"{"importStyle": "css"}"#).resolved_import_style(),
            ImportStyle::Source(StyleSource::Css)
        );
        assert_eq!(
            from_json(r#"{"importStyle": "sass"}"#).resolved_import_style(),
            ImportStyle::Source(StyleSource::Sass)
        );
    }

    #[test]
    fn test_import_style_rejects_unknown_keyword() {
        let result = serde_json::from_str::<PluginOptions>(r#"{"importStyle": "less"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_strings_behave_as_absent() {
        let options = from_json(r#"{"version": "", "prefix": ""}"#);

        assert_eq!(options.version_override(), None);
        assert_eq!(options.resolved_prefix(), "El");
    }

    #[test]
    fn test_directives_off_only_when_explicitly_false() {
        assert!(from_json("{}").resolved_directives());
        assert!(from_json(r#"{"directives": true}"#).resolved_directives());
        assert!(!from_json(r#"{"directives": false}"#).resolved_directives());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let options = from_json(r#"{"prefix": "Ep", "theme": "dark"}"#);
        assert_eq!(options.resolved_prefix(), "Ep");
    }
}
