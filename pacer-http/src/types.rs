use std::collections::HashMap;

/// Request headers as plain name/value strings.
pub type Headers = HashMap<String, String>;

/// The error type returned by [`HttpClient`](crate::HttpClient) transports.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub(crate) const APPLICATION_JSON: &str = "application/json";
