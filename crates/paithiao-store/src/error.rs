use thiserror::Error;

/// Errors returned by the store client.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-2xx status. `message` is the
    /// PostgREST error message when one could be extracted, otherwise
    /// the raw body; it is shown to the user verbatim.
    #[error("store error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The base URL from configuration is not a valid URL.
    #[error("invalid store base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
