use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport failure or non-2xx status, passed through from the client.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("Unsupported data provider request type {0}")]
    UnsupportedOperation(String),

    #[error("Invalid request parameters: {0}")]
    InvalidParams(String),

    #[error("Pagination requires page and perPage greater than zero")]
    InvalidPagination,

    #[error("Response is missing the {0} header")]
    MissingHeader(&'static str),

    #[error("Response header {name} has unexpected value {value:?}")]
    InvalidHeader { name: &'static str, value: String },

    #[error("Invalid API base url: {0}")]
    InvalidBaseUrl(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

impl ProviderError {
    /// Upstream HTTP status when the remote API answered with a non-2xx code.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            ProviderError::Http(err) => err.status(),
            _ => None,
        }
    }

    /// Whether the failure was detected locally, before any request was sent.
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            ProviderError::UnsupportedOperation(_)
                | ProviderError::InvalidParams(_)
                | ProviderError::InvalidPagination
        )
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::InvalidParams(err.to_string())
    }
}

impl From<url::ParseError> for ProviderError {
    fn from(err: url::ParseError) -> Self {
        ProviderError::InvalidBaseUrl(err.to_string())
    }
}
