use thiserror::Error;

/// Client-side failure taxonomy.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a usable response (connect, timeout, ...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request URL could not be assembled from the base URL and form.
    #[error("invalid request url: {0}")]
    Url(String),

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The server answered with a failure envelope.
    #[error("server error: {0}")]
    Server(String),
}
