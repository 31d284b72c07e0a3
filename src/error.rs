use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for manifest-semver operations
#[derive(Error, Debug)]
pub enum ManifestSemverError {
    #[error("Unknown phase '{0}'")]
    UnknownPhase(String),

    #[error("Unknown part '{0}'")]
    UnknownBumpPart(String),

    #[error("Failed to read manifest {}: {reason}", path.display())]
    ManifestRead { path: PathBuf, reason: String },

    #[error("Manifest {} has no string 'version' field", path.display())]
    MissingVersionField { path: PathBuf },

    #[error("Invalid version '{input}': {source}")]
    VersionParse {
        input: String,
        #[source]
        source: semver::Error,
    },

    #[error("Version '{input}' cannot be incremented past {}", u64::MAX)]
    VersionOverflow { input: String },

    #[error("Failed to write manifest {}: {source}", path.display())]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Hook error: {0}")]
    Hook(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in manifest-semver
pub type Result<T> = std::result::Result<T, ManifestSemverError>;

impl ManifestSemverError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ManifestSemverError::Config(msg.into())
    }

    /// Create a hook error with context
    pub fn hook(msg: impl Into<String>) -> Self {
        ManifestSemverError::Hook(msg.into())
    }

    /// Create a manifest read error for `path`
    pub fn manifest_read(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ManifestSemverError::ManifestRead {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Pre-flight errors abort the whole invocation; everything else is
    /// reported against a single file.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ManifestSemverError::UnknownPhase(_) | ManifestSemverError::UnknownBumpPart(_)
        )
    }
}
