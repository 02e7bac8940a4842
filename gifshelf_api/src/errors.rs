//! Error types for the API client.

/// Errors that can occur when talking to the bookmark server.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or a body that
    /// could not be parsed as the expected JSON).
    #[error("Request failed")]
    RequestFailed,
    /// The server answered with a non-success status.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
}
