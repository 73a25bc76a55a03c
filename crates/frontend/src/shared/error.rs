use thiserror::Error;

/// Failure of a call to the products API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Transport failure; the message is shown to the user verbatim.
    #[error("{0}")]
    Network(String),

    #[error("Not found")]
    NotFound,

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
