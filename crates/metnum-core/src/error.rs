//! Error types for input handling and remote calls.

use crate::constants::exit_codes;

/// A token in a numeric field could not be read as a number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("valor numérico inválido: \"{token}\"")]
pub struct ParseError {
    /// The offending token, trimmed.
    pub token: String,
}

impl ParseError {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

/// Input was missing, out of range or contained disallowed characters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// User-facing explanation.
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure while talking to the computation server.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// Non-success HTTP status; the message comes from the body's `error`
    /// field when the server sent one.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never produced a response.
    #[error("error de conexión: {0}")]
    Transport(String),

    /// The response body was not the JSON we expected.
    #[error("respuesta inválida del servidor: {0}")]
    Decode(String),

    /// The server answered 2xx but flagged the computation as failed.
    #[error("{0}")]
    Server(String),
}

impl RemoteError {
    /// Generic message used when a failed response carries no `error` field.
    #[must_use]
    pub fn status_fallback(status: u16) -> String {
        format!("Error HTTP {status}")
    }
}

/// Any error a calculate or compare operation can end with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetnumError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl MetnumError {
    /// True when the error was raised before any network call.
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Validation(_))
    }

    /// Process exit code for the command-line front-end.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Parse(_) | Self::Validation(_) => exit_codes::ERROR_INPUT,
            Self::Remote(RemoteError::Transport(_)) => exit_codes::ERROR_TRANSPORT,
            Self::Remote(_) => exit_codes::ERROR_REMOTE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_token() {
        let err = ParseError::new("x");
        assert_eq!(err.to_string(), "valor numérico inválido: \"x\"");
    }

    #[test]
    fn validation_error_displays_message() {
        let err = ValidationError::new("a debe ser menor que b");
        assert_eq!(err.to_string(), "a debe ser menor que b");
    }

    #[test]
    fn status_error_uses_server_message() {
        let err = RemoteError::Status {
            status: 400,
            message: "Método inválido".into(),
        };
        assert_eq!(err.to_string(), "Método inválido");
        assert_eq!(RemoteError::status_fallback(503), "Error HTTP 503");
    }

    #[test]
    fn local_errors() {
        assert!(MetnumError::from(ParseError::new("x")).is_local());
        assert!(MetnumError::from(ValidationError::new("bad")).is_local());
        assert!(!MetnumError::from(RemoteError::Transport("refused".into())).is_local());
    }

    #[test]
    fn exit_codes() {
        assert_eq!(MetnumError::from(ParseError::new("x")).exit_code(), 4);
        assert_eq!(
            MetnumError::from(RemoteError::Transport("refused".into())).exit_code(),
            2
        );
        assert_eq!(
            MetnumError::from(RemoteError::Server("boom".into())).exit_code(),
            1
        );
    }
}
