//! Mapping from client errors to the fetch failure taxonomy.

use storefinder_core::{FetchError, TransportFailure};

use crate::error::ClientError;

/// Classifies a `reqwest` error.
///
/// `reqwest` does not separate send and receive timeouts; any timeout that
/// is not a connect timeout is reported as [`TransportFailure::ReceiveTimeout`].
/// Body decode errors are not transport failures. Non-success statuses never
/// reach here: the client checks the status itself and reports
/// [`ClientError::UnexpectedStatus`].
#[must_use]
pub fn classify_reqwest_error(err: &reqwest::Error) -> FetchError {
    if err.is_decode() {
        return FetchError::Other(err.to_string());
    }
    let failure = if err.is_timeout() {
        if err.is_connect() {
            TransportFailure::ConnectionTimeout
        } else {
            TransportFailure::ReceiveTimeout
        }
    } else if err.is_connect() {
        TransportFailure::ConnectionError
    } else {
        TransportFailure::Unexpected
    };
    FetchError::Transport(failure)
}

impl From<ClientError> for FetchError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http(e) => classify_reqwest_error(&e),
            ClientError::RateLimited { .. } => {
                FetchError::Transport(TransportFailure::BadResponse { status: 429 })
            }
            ClientError::UnexpectedStatus { status, .. } => {
                FetchError::Transport(TransportFailure::BadResponse { status })
            }
            other @ (ClientError::Deserialize { .. } | ClientError::InvalidBaseUrl { .. }) => {
                FetchError::Other(other.to_string())
            }
        }
    }
}
