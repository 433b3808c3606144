use reqwest::{header, Method, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    config::TokenType,
    resource::{Resource, Resources},
    resources::{Audience, Dimension, Experiment, Goal, Project, Schedule, Variation},
    response::{parse_response, ApiResponse},
    ClientConfig, Error, Result,
};

const USER_AGENT: &str = concat!("optimizely-client-rust/", env!("CARGO_PKG_VERSION"));

/// A client for the Optimizely Experiments API.
///
/// In order to create a client instance, first create [`ClientConfig`]. Every call blocks on a
/// single HTTP round trip; nothing is cached between calls.
///
/// # Examples
/// ```no_run
/// # use optimizely::ClientConfig;
/// let client = ClientConfig::from_api_key("api-key").to_client()?;
/// for project in client.projects().list()? {
///     println!("{:?}", project.project_name);
/// }
/// # Ok::<(), optimizely::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::blocking::Client,
    base_url: Url,
    api_key: String,
    token_type: TokenType,
}

impl Client {
    /// Create a new `Client` using the specified configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }

        // Url::join replaces the last segment unless the base ends with a slash.
        let mut base_url = config.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base_url = Url::parse(&base_url).map_err(Error::InvalidBaseUrl)?;

        let http = match config.http_client {
            Some(http) => http,
            None => reqwest::blocking::Client::builder()
                .user_agent(USER_AGENT)
                .build()?,
        };

        Ok(Client {
            http,
            base_url,
            api_key: config.api_key,
            token_type: config.token_type,
        })
    }

    /// Base URL every request path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Send a request to `path` (relative to the base URL) and parse the response.
    ///
    /// This is the primitive every resource operation is built on. It can be used directly for
    /// endpoints this crate does not model, with `R = serde_json::Value`.
    pub fn send<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse<R>> {
        let (status, text) = self.execute(method, path, body)?;
        parse_response(status, &text)
    }

    fn execute(&self, method: Method, path: &str, body: Option<&Value>) -> Result<(u16, String)> {
        let url = self.base_url.join(path).map_err(Error::InvalidBaseUrl)?;

        log::debug!(target: "optimizely", method:display = method, url:display = url; "sending request");

        let mut request = self
            .http
            .request(method, url)
            .header(header::USER_AGENT, USER_AGENT);
        request = match self.token_type {
            TokenType::Legacy => request.header("Token", &self.api_key),
            TokenType::OAuth => request.bearer_auth(&self.api_key),
        };
        if let Some(body) = body {
            // .json() sets Content-Type: application/json.
            request = request.json(body);
        }

        let response = request.send()?;
        let status = response.status().as_u16();
        let text = response.text()?;

        log::trace!(target: "optimizely", status; "received response");

        Ok((status, text))
    }

    /// Operations on any resource type.
    pub fn resource<R: Resource>(&self) -> Resources<'_, R> {
        Resources::new(self)
    }

    /// Projects.
    pub fn projects(&self) -> Resources<'_, Project> {
        self.resource()
    }

    /// Experiments. Listing is only available per project, see [`Project::experiments`].
    pub fn experiments(&self) -> Resources<'_, Experiment> {
        self.resource()
    }

    /// Variations. Listing is only available per experiment, see [`Experiment::variations`].
    pub fn variations(&self) -> Resources<'_, Variation> {
        self.resource()
    }

    /// Goals. Listing is only available per project, see [`Project::goals`].
    pub fn goals(&self) -> Resources<'_, Goal> {
        self.resource()
    }

    /// Audiences. Listing is only available per project, see [`Project::audiences`].
    pub fn audiences(&self) -> Resources<'_, Audience> {
        self.resource()
    }

    /// Dimensions. Listing is only available per project, see [`Project::dimensions`].
    pub fn dimensions(&self) -> Resources<'_, Dimension> {
        self.resource()
    }

    /// Schedules. Listing is only available per experiment, see [`Experiment::schedules`].
    pub fn schedules(&self) -> Resources<'_, Schedule> {
        self.resource()
    }
}
