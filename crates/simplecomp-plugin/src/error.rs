//! Error types for the plug-in boundary.

use thiserror::Error;

/// Errors surfaced to the host shell.
///
/// Nothing on the audio path returns an error; these only come out of state
/// save and restore.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Persisted state could not be interpreted. Parameter values are unchanged.
    #[error("invalid plug-in state: {0}")]
    State(String),

    /// State could not be encoded
    #[error("failed to serialize plug-in state: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl PluginError {
    /// Create a state error.
    pub fn state(reason: impl Into<String>) -> Self {
        PluginError::State(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn state_display() {
        let err = PluginError::state("not a JSON object");
        assert_eq!(err.to_string(), "invalid plug-in state: not a JSON object");
        assert!(err.source().is_none());
    }

    #[test]
    fn serialize_wraps_json_error() {
        let json_err = serde_json::from_slice::<serde_json::Value>(b"{").unwrap_err();
        let err = PluginError::from(json_err);
        assert!(matches!(err, PluginError::Serialize(_)));
        assert!(err.to_string().starts_with("failed to serialize plug-in state"));
        assert!(err.source().is_some());
    }
}
