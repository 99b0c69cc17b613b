//! Fatal error types for the documentation pipeline.
//!
//! Structural errors abort the run at the stage that detects them,
//! surfaced with the offending record's identity. Configuration errors
//! are raised before any symbol processing. Everything non-fatal is a
//! [`Warning`](crate::diagnostics::Warning) instead.

use std::sync::Arc;

use thiserror::Error;

/// Errors in the caller-supplied configuration, fatal at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Option name not recognized.
    #[error("unrecognized option '{0}'")]
    UnknownOption(String),

    /// Option value does not parse as a boolean.
    #[error("invalid boolean value '{value}' for option '{option}'")]
    InvalidBool { option: String, value: String },
}

/// Structural errors in the extraction input, fatal to the run.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A record names a parent scope that was never registered.
    #[error("unknown parent scope '{scope}' for {kind} '{name}'")]
    UnknownScope {
        name: Arc<str>,
        scope: Arc<str>,
        kind: &'static str,
    },

    /// Two non-function declarations share a name and kind in one scope.
    #[error("duplicate symbol '{name}' in scope '{scope}'")]
    DuplicateSymbol { name: Arc<str>, scope: Arc<str> },

    /// An enumerator record whose parent is not an enum.
    #[error("enumerator '{name}' declared outside an enum (in '{scope}')")]
    EnumeratorOutsideEnum { name: Arc<str>, scope: Arc<str> },

    /// A malformed record the extraction layer should not have produced.
    #[error("invalid record '{name}': {message}")]
    InvalidRecord { name: Arc<str>, message: String },

    /// An overload set constructed from zero declarations.
    #[error("overload set for '{name}' has no signatures")]
    EmptyOverloadSet { name: Arc<str> },

    /// Configuration rejected before symbol processing.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ModelError {
    /// Create an unknown-scope error for a record.
    pub fn unknown_scope(name: Arc<str>, scope: Arc<str>, kind: &'static str) -> Self {
        Self::UnknownScope { name, scope, kind }
    }

    /// Create a duplicate-symbol error.
    pub fn duplicate_symbol(name: Arc<str>, scope: Arc<str>) -> Self {
        Self::DuplicateSymbol { name, scope }
    }

    /// Create an invalid-record error.
    pub fn invalid_record(name: Arc<str>, message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            name,
            message: message.into(),
        }
    }
}
