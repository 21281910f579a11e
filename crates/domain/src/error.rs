//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`VeneerError`]
//! via `#[from]`.

/// Top-level error for every veneer operation.
#[derive(Debug, thiserror::Error)]
pub enum VeneerError {
    #[error("storage error")]
    Storage(#[from] StorageError),

    #[error(transparent)]
    MissingElement(#[from] MissingElementError),
}

/// Failure reported by a preference store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The host exposes no storage area (disabled, sandboxed iframe, …).
    #[error("preference storage is unavailable")]
    Unavailable,

    /// The host refused to read the key.
    #[error("failed to read key {key:?}: {reason}")]
    Read { key: String, reason: String },

    /// The host refused to write the key (quota, private mode, …).
    #[error("failed to write key {key:?}: {reason}")]
    Write { key: String, reason: String },
}

/// An element the markup is expected to provide could not be found.
#[derive(Debug, thiserror::Error)]
#[error("no element with id {id:?}")]
pub struct MissingElementError {
    pub id: String,
}

/// A string is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?}, expected \"light\" or \"dark\"")]
pub struct ParseThemeError(pub String);

/// A root margin shorthand could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseRootMarginError {
    #[error("root margin must have between 1 and 4 lengths, got {0}")]
    Arity(usize),

    #[error("invalid pixel length {0:?}")]
    Length(String),
}
