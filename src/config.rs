use std::{fmt, str::FromStr};

use crate::{Client, Error, Result};

/// How the API token is presented to the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenType {
    /// Legacy API token, sent as `Token: <key>`.
    #[default]
    Legacy,
    /// OAuth 2.0 access token, sent as `Authorization: Bearer <key>`.
    OAuth,
}

impl FromStr for TokenType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "legacy" => Ok(Self::Legacy),
            "oauth" => Ok(Self::OAuth),
            other => Err(Error::InvalidTokenType(other.to_owned())),
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Legacy => "legacy",
            Self::OAuth => "oauth",
        })
    }
}

/// Configuration for [`Client`].
///
/// # Examples
/// ```
/// # use optimizely::{ClientConfig, TokenType};
/// let client = ClientConfig::from_api_key("api-key")
///     .token_type(TokenType::OAuth)
///     .to_client()
///     .unwrap();
/// ```
pub struct ClientConfig {
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) token_type: TokenType,
    pub(crate) http_client: Option<reqwest::blocking::Client>,
}

impl ClientConfig {
    /// Default base URL for API calls.
    pub const DEFAULT_BASE_URL: &'static str = "https://www.optimizelyapis.com/experiment/v1/";

    /// Create a default configuration using the specified legacy API token.
    ///
    /// ```
    /// # use optimizely::ClientConfig;
    /// ClientConfig::from_api_key("api-key");
    /// ```
    pub fn from_api_key(api_key: impl Into<String>) -> Self {
        ClientConfig {
            api_key: api_key.into(),
            base_url: ClientConfig::DEFAULT_BASE_URL.to_owned(),
            token_type: TokenType::default(),
            http_client: None,
        }
    }

    /// Build a configuration from `OPTIMIZELY_API_KEY`, `OPTIMIZELY_API_BASE` and
    /// `OPTIMIZELY_TOKEN_TYPE`. Only the key is required.
    pub fn from_env() -> Result<Self> {
        ClientConfig::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("OPTIMIZELY_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or(Error::MissingApiKey)?;

        let mut config = ClientConfig::from_api_key(api_key);
        if let Some(base_url) = lookup("OPTIMIZELY_API_BASE") {
            config = config.base_url(base_url);
        }
        if let Some(token_type) = lookup("OPTIMIZELY_TOKEN_TYPE") {
            config = config.token_type(token_type.parse()?);
        }
        Ok(config)
    }

    /// Select how the API key is sent. Defaults to [`TokenType::Legacy`].
    pub fn token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Override base URL for API calls. Clients should use the default setting in most cases.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Use a preconfigured HTTP client (proxies, timeouts, TLS settings).
    pub fn http_client(mut self, http_client: reqwest::blocking::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Create a new [`Client`] using the specified configuration.
    ///
    /// Fails if the API key is empty or the base URL cannot be parsed.
    pub fn to_client(self) -> Result<Client> {
        Client::new(self)
    }
}
