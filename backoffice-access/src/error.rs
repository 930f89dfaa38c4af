//! Error types for access decisions

use thiserror::Error;

pub type AccessResult<T> = Result<T, AccessError>;

/// Errors that can occur while evaluating an access decision
///
/// Note that "not authorized" is not an error: a denied check is an ordinary
/// [`AccessDecision`](crate::AccessDecision) with `granted == false`.
#[derive(Error, Debug)]
pub enum AccessError {
    /// The permission provider could not answer the lookup.
    ///
    /// Callers must treat this distinctly from a plain denial: the standard
    /// policy is fail-closed (render the trigger disabled) plus a warning.
    #[error("Authorization unavailable: {message}")]
    ProviderUnavailable {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A permission or role name could not be parsed
    #[error("Unknown access identifier: {0}")]
    UnknownIdentifier(String),
}

impl AccessError {
    /// Create a provider-unavailable error from a message
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::ProviderUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Create a provider-unavailable error with an underlying cause
    pub fn unavailable_with_source<S: Into<String>>(
        message: S,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::ProviderUnavailable {
            message: message.into(),
            source: Some(source),
        }
    }
}
