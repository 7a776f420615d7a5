//! Error types for the quiz client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server rejected the action
    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The request never completed
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    /// Whether the error means the room does not exist.
    ///
    /// A missing room is terminal for the session: the client stops
    /// polling instead of retrying.
    pub fn is_room_gone(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }
}
