//! # Jira HTTP Client
//!
//! Shared HTTP client for every Jira service. Services build an endpoint
//! string and hand it to the request path here, which attaches authentication
//! and the JSON headers, checks the status and decodes the body.

use std::fmt;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace, warn};
use url::Url;

use crate::consts::{self, APPLICATION_JSON};
use crate::error::{Error, Result};
use crate::response::ResponseScheme;
use crate::url::parse_site;

/// Jira authentication credentials
#[derive(Clone)]
pub enum JiraAuth {
  /// Atlassian account email plus API token
  Basic { username: String, api_token: String },
  /// Personal access token
  Bearer { token: String },
}

impl JiraAuth {
  pub fn basic(username: impl Into<String>, api_token: impl Into<String>) -> Self {
    Self::Basic {
      username: username.into(),
      api_token: api_token.into(),
    }
  }

  pub fn bearer(token: impl Into<String>) -> Self {
    Self::Bearer { token: token.into() }
  }

  /// Account the client authenticates as; `None` for bearer tokens.
  pub fn username(&self) -> Option<&str> {
    match self {
      Self::Basic { username, .. } => Some(username),
      Self::Bearer { .. } => None,
    }
  }

  fn apply(&self, request: RequestBuilder) -> RequestBuilder {
    match self {
      Self::Basic { username, api_token } => request.basic_auth(username, Some(api_token)),
      Self::Bearer { token } => request.bearer_auth(token),
    }
  }
}

// Keep tokens out of logs and panics.
impl fmt::Debug for JiraAuth {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Basic { username, .. } => f
        .debug_struct("Basic")
        .field("username", username)
        .field("api_token", &"<redacted>")
        .finish(),
      Self::Bearer { .. } => f.debug_struct("Bearer").field("token", &"<redacted>").finish(),
    }
  }
}

/// REST API generation used to build endpoint paths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiVersion {
  V2,
  #[default]
  V3,
}

impl ApiVersion {
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::V2 => "2",
      Self::V3 => "3",
    }
  }
}

/// Represents a Jira Cloud API client
#[derive(Debug, Clone)]
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) site: Url,
  pub(crate) auth: JiraAuth,
  pub(crate) api_version: ApiVersion,
}

/// Builder for [`JiraClient`] when the defaults need adjusting
#[derive(Debug, Default)]
pub struct JiraClientBuilder {
  site: Option<String>,
  auth: Option<JiraAuth>,
  timeout: Option<Duration>,
  user_agent: Option<String>,
  http_client: Option<Client>,
  api_version: ApiVersion,
}

impl JiraClientBuilder {
  pub fn site(mut self, site: impl Into<String>) -> Self {
    self.site = Some(site.into());
    self
  }

  pub fn auth(mut self, auth: JiraAuth) -> Self {
    self.auth = Some(auth);
    self
  }

  /// Client-wide timeout applied to every request.
  pub fn timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }

  pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
    self.user_agent = Some(user_agent.into());
    self
  }

  /// Use a pre-configured `reqwest` client. Timeout and user agent settings on
  /// this builder are ignored in that case.
  pub fn http_client(mut self, client: Client) -> Self {
    self.http_client = Some(client);
    self
  }

  pub fn api_version(mut self, version: ApiVersion) -> Self {
    self.api_version = version;
    self
  }

  pub fn build(self) -> Result<JiraClient> {
    let site_input = self.site.unwrap_or_default();
    let site = parse_site(&site_input)?;

    let client = match self.http_client {
      Some(client) => client,
      None => {
        let mut builder =
          Client::builder().user_agent(self.user_agent.unwrap_or_else(|| consts::USER_AGENT.to_string()));
        if let Some(timeout) = self.timeout {
          builder = builder.timeout(timeout);
        }
        builder.build().map_err(Error::ClientBuild)?
      }
    };

    Ok(JiraClient {
      client,
      site,
      auth: self.auth.unwrap_or_else(|| JiraAuth::basic("", "")),
      api_version: self.api_version,
    })
  }
}

impl JiraClient {
  /// Create a new Jira client for `site` using the REST API v3.
  pub fn new(site: &str, auth: JiraAuth) -> Result<Self> {
    Self::builder().site(site).auth(auth).build()
  }

  pub fn builder() -> JiraClientBuilder {
    JiraClientBuilder::default()
  }

  /// Base URL every endpoint is resolved against
  pub fn site(&self) -> &Url {
    &self.site
  }

  pub fn api_version(&self) -> ApiVersion {
    self.api_version
  }

  pub fn auth(&self) -> &JiraAuth {
    &self.auth
  }

  /// Test the Jira connection by fetching the current user
  pub async fn test_connection(&self) -> Result<bool> {
    let endpoint = self.api_path("myself");
    let url = self.resolve(&endpoint)?;

    let response = self
      .auth
      .apply(self.client.get(url).header(ACCEPT, APPLICATION_JSON))
      .send()
      .await?;

    Ok(response.status().is_success())
  }

  /// `rest/api/{version}/{path}`
  pub(crate) fn api_path(&self, path: &str) -> String {
    format!("rest/api/{}/{path}", self.api_version.as_str())
  }

  fn resolve(&self, endpoint: &str) -> Result<Url> {
    self.site.join(endpoint).map_err(|source| Error::InvalidEndpoint {
      endpoint: endpoint.to_string(),
      source,
    })
  }

  fn new_request(&self, method: &Method, url: Url, payload: Option<Vec<u8>>) -> RequestBuilder {
    let mut request = self
      .client
      .request(method.clone(), url)
      .header(ACCEPT, APPLICATION_JSON);

    if let Some(body) = payload {
      request = request.header(CONTENT_TYPE, APPLICATION_JSON).body(body);
    }

    self.auth.apply(request)
  }

  #[instrument(skip(self, payload), level = "debug")]
  async fn execute(&self, method: Method, endpoint: &str, payload: Option<Vec<u8>>) -> Result<ResponseScheme> {
    let url = self.resolve(endpoint)?;
    trace!("Jira API URL: {}", url);

    let request = self.new_request(&method, url.clone(), payload);
    let response = request.send().await?;

    let status = response.status();
    debug!("Jira API response status: {}", status);

    let headers = response.headers().clone();
    let bytes = response.bytes().await?.to_vec();
    trace!("Jira API response body: {}", String::from_utf8_lossy(&bytes));

    let scheme = ResponseScheme {
      method,
      endpoint: url.to_string(),
      status,
      headers,
      bytes,
    };

    if !status.is_success() {
      warn!("Jira API request failed: HTTP {} - {}", status, scheme.text());
      return Err(Error::RequestFailed {
        status,
        response: Box::new(scheme),
      });
    }

    Ok(scheme)
  }

  fn encode<B: Serialize + ?Sized>(payload: &B) -> Result<Vec<u8>> {
    serde_json::to_vec(payload).map_err(Error::Encode)
  }

  fn decode<T: DeserializeOwned>(response: &ResponseScheme) -> Result<T> {
    serde_json::from_slice(&response.bytes).map_err(Error::Decode)
  }

  /// Issue a request without a body and decode the response.
  pub(crate) async fn call<T: DeserializeOwned>(&self, method: Method, endpoint: &str) -> Result<(T, ResponseScheme)> {
    let response = self.execute(method, endpoint, None).await?;
    let result = Self::decode(&response)?;
    Ok((result, response))
  }

  /// Issue a request with a JSON payload and decode the response.
  pub(crate) async fn call_with<B, T>(&self, method: Method, endpoint: &str, payload: &B) -> Result<(T, ResponseScheme)>
  where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
  {
    let body = Self::encode(payload)?;
    let response = self.execute(method, endpoint, Some(body)).await?;
    let result = Self::decode(&response)?;
    Ok((result, response))
  }

  /// Issue a request without a body, ignoring any response body.
  pub(crate) async fn send(&self, method: Method, endpoint: &str) -> Result<ResponseScheme> {
    self.execute(method, endpoint, None).await
  }

  /// Issue a request with a JSON payload, ignoring any response body.
  pub(crate) async fn send_with<B: Serialize + ?Sized>(
    &self,
    method: Method,
    endpoint: &str,
    payload: &B,
  ) -> Result<ResponseScheme> {
    let body = Self::encode(payload)?;
    self.execute(method, endpoint, Some(body)).await
  }
}

/// Create a Jira client from basic-auth credentials
pub fn create_jira_client(site: &str, username: &str, api_token: &str) -> Result<JiraClient> {
  JiraClient::new(site, JiraAuth::basic(username, api_token))
}
