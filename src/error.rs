//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for commands and API calls.
///
/// Every variant is recoverable: the REPL prints it and keeps reading.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Connection or body transfer failed before a full response arrived
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("response failed with status code: {status} and\nbody: {body}")]
    Remote { status: u16, body: String },

    /// Response body was not the JSON shape we expected
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Inspect of a species that is not in the pokedex
    #[error("you have not caught {0}")]
    NotCaught(String),

    /// Pokedex listing with nothing caught
    #[error("you haven't caught any pokemon yet")]
    EmptyPokedex,

    /// Command invoked without its required argument
    #[error("{command} must be called with {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    /// Writing command output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_carries_status_and_body() {
        let err = PokedexError::Remote {
            status: 404,
            body: "Not Found".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("Not Found"));
    }

    #[test]
    fn test_missing_argument_message() {
        let err = PokedexError::MissingArgument {
            command: "catch",
            expected: "a valid pokemon name",
        };
        assert_eq!(
            err.to_string(),
            "catch must be called with a valid pokemon name"
        );
    }

    #[test]
    fn test_decode_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: PokedexError = serde_err.into();
        assert!(matches!(err, PokedexError::Decode(_)));
    }
}
