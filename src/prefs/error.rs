use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the preference store.
///
/// None of these are fatal: callers keep the last committed value and carry on.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("Preference storage '{path}' is unavailable: {source}")]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Stored value for '{key}' is not a boolean: {found}")]
    CorruptValue { key: String, found: String },

    #[error("Preference write task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
