//! Plugin orchestration: one locate-then-compose pass per build.

use std::path::PathBuf;

use tracing::debug;

use crate::compose::{self, ComposeError, PluginOptions, PACKAGE_NAME};
use crate::host::BuildContext;
use crate::locate::{locate, ResolutionContext};
use crate::Error;

/// Feature key under both the user configuration and the build metadata.
pub const FEATURE_KEY: &str = "elementPlus";

/// The shared namespace the auto-import feature reads.
pub const AUTO_IMPORT_KEY: &str = "autoImport";

#[derive(Debug)]
enum PluginState {
    Uninitialized,
    Located,
    Failed,
    Configured,
}

/// Element Plus auto-import configuration plugin.
///
/// A plugin instance is single-shot: `Uninitialized → Located → (Failed |
/// Configured)`, with no transition back. Re-invoking [`setup`](Self::setup)
/// within the same build is rejected.
#[derive(Debug)]
pub struct ElementPlusPlugin {
    state: PluginState,
    fallback_dir: Option<PathBuf>,
}

impl Default for ElementPlusPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementPlusPlugin {
    pub fn new() -> Self {
        Self {
            state: PluginState::Uninitialized,
            fallback_dir: None,
        }
    }

    /// Sets the secondary resolution root, covering installs where
    /// element-plus ships bundled alongside the plugin rather than in the
    /// host project's tree.
    pub fn with_fallback_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fallback_dir = Some(dir.into());
        self
    }

    pub fn is_configured(&self) -> bool {
        matches!(self.state, PluginState::Configured)
    }

    /// Runs the full configuration pass: locate the package, normalize the
    /// user's options, write the feature's build metadata, and merge the
    /// resolver descriptor into the auto-import namespace.
    pub fn setup(&mut self, ctx: &mut BuildContext) -> Result<(), Error> {
        if !matches!(self.state, PluginState::Uninitialized) {
            return Err(Error::AlreadyInitialized);
        }

        let located = locate(&ResolutionContext {
            manifest: ctx.pkg(),
            working_dir: ctx.cwd(),
            dependency: PACKAGE_NAME,
            fallback_dir: self.fallback_dir.as_deref(),
        });
        self.state = PluginState::Located;

        let composed = match self.parse_options(ctx).and_then(|options| {
            compose::compose(options.as_ref(), &located)
        }) {
            Ok(composed) => composed,
            Err(e) => {
                self.state = PluginState::Failed;
                return Err(e.into());
            }
        };

        ctx.modify_app_data(|mut memo| {
            memo.set(FEATURE_KEY, composed.metadata.to_value());
            memo
        });
        ctx.merge_feature_config(AUTO_IMPORT_KEY, composed.patch);

        debug!(version = %composed.metadata.version, "element-plus auto-import configured");
        self.state = PluginState::Configured;
        Ok(())
    }

    /// Deserializes the user's options from the feature's configuration
    /// entry. An absent entry means "all defaults".
    fn parse_options(&self, ctx: &BuildContext) -> Result<Option<PluginOptions>, ComposeError> {
        match ctx.feature_config(FEATURE_KEY) {
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(ComposeError::InvalidOptions),
            None => Ok(None),
        }
    }
}
