//! Transport and decode errors surfaced by the REST layer.
//!
//! ERROR HANDLING
//! ==============
//! Only two failure families matter to callers: the request never produced a
//! response (`Network`) or the server answered with a non-2xx status
//! (`Status`). Serialization failures are kept separate so they are not
//! confused with server-side rejections.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// HTTP status the client treats as an expired or missing session.
pub const UNAUTHORIZED: u16 = 401;

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response was received (connection refused, CORS, aborted fetch).
    #[error("network error: {0}")]
    Network(String),
    /// The server responded with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },
    /// A success response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The request payload could not be serialized.
    #[error("invalid request body: {0}")]
    Encode(String),
}

impl ApiError {
    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server rejected the request as unauthenticated.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(UNAUTHORIZED)
    }
}
