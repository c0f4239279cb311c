use thiserror::Error;

use crate::manifest::ManifestError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ComposeError {
    #[error("can't find {package} package, please install {package} first")]
    MissingDependency { package: String },

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("invalid plugin options: {0}")]
    InvalidOptions(#[source] serde_json::Error),
}
