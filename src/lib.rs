pub mod compose;
pub mod host;
pub mod locate;
pub mod manifest;
pub mod plugin;
mod error;

pub use compose::{compose, ComposeError, ComposedFeature, PluginOptions, ResolverDescriptor};
pub use error::Error;
pub use host::{BuildContext, BuildMetadata};
pub use locate::{locate, LocatedPackage, ResolutionContext};
pub use manifest::{ManifestError, PackageManifest};
pub use plugin::ElementPlusPlugin;
