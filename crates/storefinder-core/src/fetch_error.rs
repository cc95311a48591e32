//! Failure taxonomy for page fetches.
//!
//! A data source reports failures as [`FetchError`]. Transport-level
//! problems carry a [`TransportFailure`] with a fixed, user-facing message;
//! everything else (decode failures, bad configuration) is [`FetchError::Other`]
//! and surfaces to users as a generic "Unexpected error".

use thiserror::Error;

/// Message shown for failures that are not transport failures.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected error";

/// Classified transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailure {
    ConnectionTimeout,
    SendTimeout,
    ReceiveTimeout,
    /// Server answered with a non-success status.
    BadResponse {
        status: u16,
    },
    Cancelled,
    ConnectionError,
    Unexpected,
}

impl TransportFailure {
    /// Human-readable message for this failure.
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::ConnectionTimeout => "Connection timed out.".to_owned(),
            Self::SendTimeout => "Request timed out while sending.".to_owned(),
            Self::ReceiveTimeout => "Server took too long to respond.".to_owned(),
            Self::BadResponse { status } => format!("Server responded with status {status}."),
            Self::Cancelled => "Request was cancelled.".to_owned(),
            Self::ConnectionError => "No internet connection.".to_owned(),
            Self::Unexpected => "Unexpected network error.".to_owned(),
        }
    }
}

impl std::fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(TransportFailure),

    #[error("{0}")]
    Other(String),
}

impl FetchError {
    /// The message a user should see for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(failure) => failure.message(),
            Self::Other(_) => UNEXPECTED_ERROR_MESSAGE.to_owned(),
        }
    }
}

impl From<TransportFailure> for FetchError {
    fn from(failure: TransportFailure) -> Self {
        Self::Transport(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_messages_are_fixed() {
        assert_eq!(
            TransportFailure::ConnectionTimeout.message(),
            "Connection timed out."
        );
        assert_eq!(
            TransportFailure::ConnectionError.message(),
            "No internet connection."
        );
        assert_eq!(
            TransportFailure::BadResponse { status: 503 }.message(),
            "Server responded with status 503."
        );
    }

    #[test]
    fn other_errors_hide_their_detail_from_users() {
        let err = FetchError::Other("missing field `name` at line 1".to_owned());
        assert_eq!(err.user_message(), "Unexpected error");
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn transport_user_message_matches_failure_message() {
        let err = FetchError::from(TransportFailure::ReceiveTimeout);
        assert_eq!(err.user_message(), TransportFailure::ReceiveTimeout.message());
    }
}
