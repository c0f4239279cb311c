use crate::compose::ComposeError;
use thiserror::Error;

/// Top-level error type for the elp-autoimport plugin.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("element-plus configuration error: {0}")]
    Compose(#[from] ComposeError),

    #[error("plugin already initialized for this build")]
    AlreadyInitialized,
}
