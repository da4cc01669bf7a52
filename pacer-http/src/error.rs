#![doc = "Error types."]
use crate::types::BoxError;

/// Failures of the request helpers in [`RequestExt`](crate::RequestExt).
///
/// Non-success status codes are not errors here: the response is handed back as it
/// came from the transport.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("http request error: {0}")]
    HttpRequest(#[from] http::Error),
    /// The failure reported by the transport, untouched.
    #[error("http client error: {0}")]
    HttpClient(BoxError),
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
