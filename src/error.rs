//! Error types.

use thiserror::Error;

/// Result alias for workplay operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by workplay operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Filesystem I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The invoking user's home directory could not be determined.
    #[error("home directory not found")]
    HomeNotFound,

    /// The settings file exists but is unreadable, malformed, or misses a
    /// required field.
    #[error("invalid settings file {path}: {source}")]
    Config {
        /// The settings file path.
        path: String,
        /// Why the file was rejected.
        #[source]
        source: ConfigSource,
    },

    /// The privileged copy onto the system hosts file was refused.
    #[error("privileged write to {target} refused{}", code.map(|c| format!(" (exit status {c})")).unwrap_or_default())]
    Permission {
        /// The file that could not be replaced.
        target: String,
        /// Exit code of the elevation helper, if it ran at all.
        code: Option<i32>,
    },
}

/// Cause of an [`Error::Config`].
#[derive(Debug, Error)]
pub enum ConfigSource {
    /// The file exists but could not be read as UTF-8 text.
    #[error(transparent)]
    Read(#[from] std::io::Error),

    /// The text is not valid TOML or misses a required field.
    #[error(transparent)]
    Parse(#[from] toml::de::Error),
}

impl Error {
    /// Returns `true` for refused elevation or a `PermissionDenied` I/O error.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::Permission { .. } => true,
            Self::Io(e) => e.kind() == std::io::ErrorKind::PermissionDenied,
            _ => false,
        }
    }

    /// Process exit code for this error.
    ///
    /// A refused elevation propagates the helper's own exit code.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Permission { code: Some(c), .. } => u8::try_from(*c)
                .ok()
                .filter(|c| *c != 0)
                .unwrap_or(1),
            _ => 1,
        }
    }
}
