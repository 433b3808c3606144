use std::sync::Arc;

use thiserror::Error;

use crate::resource::Operation;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the Optimizely client.
///
/// Upstream failures map 1:1 from the HTTP status code (see [`Error::from_status`]) and carry
/// the raw response body as their message. None of them is retried.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// Catch-all for upstream status codes without a dedicated variant.
    #[error("optimizely API error (status {status}): {message}")]
    Api { status: u16, message: String },
    /// 400: the request body was not valid JSON or was rejected by the API.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// 401: API token is missing or was not sent in the header.
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// 403: API token is invalid or revoked.
    #[error("forbidden: {0}")]
    Forbidden(String),
    /// 404: the id is wrong or the token user has no permission to see it.
    #[error("not found: {0}")]
    NotFound(String),
    /// 429: rate limit hit.
    #[error("too many requests: {0}")]
    TooManyRequests(String),
    /// 503: the API is overloaded or down for maintenance.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The resource has no id, so it cannot be refreshed, saved or deleted.
    #[error("{resource} has no id")]
    InvalidId { resource: &'static str },
    /// The upstream API does not offer this operation for the resource type.
    #[error("{operation} is not supported for {resource}")]
    Unsupported {
        resource: &'static str,
        operation: Operation,
    },
    /// A nested resource was created without the id of its parent.
    #[error("cannot create {resource} without `{key}`")]
    MissingParentId { resource: &'static str, key: String },
    /// The parent id of a nested create is not an unsigned integer.
    #[error("invalid `{key}` for {resource}: {value}")]
    InvalidParentId {
        resource: &'static str,
        key: String,
        value: String,
    },
    #[error("payload must serialize to a JSON object")]
    InvalidPayload,
    #[error("unexpected response body, expected {expected}")]
    UnexpectedResponse { expected: &'static str },

    #[error("API key is not set")]
    MissingApiKey,
    #[error("invalid token type `{0}`, expected `legacy` or `oauth`")]
    InvalidTokenType(String),
    #[error("invalid base_url configuration")]
    InvalidBaseUrl(#[source] url::ParseError),

    // reqwest::Error and serde_json::Error are not clonable, so they are wrapped in an Arc.
    #[error(transparent)]
    Transport(Arc<reqwest::Error>),
    #[error("error decoding JSON")]
    Json(#[source] Arc<serde_json::Error>),
}

impl Error {
    /// Translate a non-success HTTP status into the matching error.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 => Self::BadRequest(message),
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            429 => Self::TooManyRequests(message),
            503 => Self::ServiceUnavailable(message),
            status => Self::Api { status, message },
        }
    }

    /// HTTP status of an upstream error, `None` for local failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::BadRequest(_) => Some(400),
            Self::Unauthorized(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::TooManyRequests(_) => Some(429),
            Self::ServiceUnavailable(_) => Some(503),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(Arc::new(value))
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(Arc::new(value))
    }
}
