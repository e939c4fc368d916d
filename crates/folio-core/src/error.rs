//! Failure taxonomy shared by every subsystem.
//!
//! None of these are fatal to the page: callers log them at the component
//! boundary and continue with the feature disabled.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SiteError {
    /// A required rendering/animation capability or DOM element is missing.
    #[error("environment unavailable: {0}")]
    EnvironmentUnavailable(String),
    /// The audio context could not be created or a tone could not be played.
    #[error("audio unavailable: {0}")]
    AudioUnavailable(String),
    /// The mascot animation asset could not be loaded.
    #[error("asset failed to load: {0}")]
    AssetLoadFailure(String),
    /// Key-value storage rejected a read or write.
    #[error("storage error: {0}")]
    Storage(String),
}

pub type SiteResult<T> = Result<T, SiteError>;
