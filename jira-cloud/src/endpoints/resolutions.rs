//! # Jira Resolution Endpoints

use reqwest::Method;
use tracing::instrument;

use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::ResolutionScheme;
use crate::response::ResponseScheme;
use crate::url::path_segment;

/// Resolution endpoints, obtained through [`JiraClient::resolutions`]
pub struct ResolutionService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub fn resolutions(&self) -> ResolutionService<'_> {
    ResolutionService { client: self }
  }
}

impl ResolutionService<'_> {
  #[instrument(skip(self), level = "debug")]
  pub async fn gets(&self) -> Result<(Vec<ResolutionScheme>, ResponseScheme)> {
    let endpoint = self.client.api_path("resolution");
    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn get(&self, resolution_id: &str) -> Result<(ResolutionScheme, ResponseScheme)> {
    if resolution_id.is_empty() {
      return Err(Error::NoResolutionId);
    }

    let resolution_id = path_segment(resolution_id)?;
    let endpoint = self.client.api_path(&format!("resolution/{resolution_id}"));
    self.client.call(Method::GET, &endpoint).await
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{method, path};
  use wiremock::{Mock, ResponseTemplate};

  use super::*;
  use crate::endpoints::test_support::mock_client;

  #[tokio::test]
  async fn test_gets_resolutions() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/resolution"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([
          { "id": "10000", "name": "Fixed", "description": "A fix for this issue is checked into the tree and tested." },
          { "id": "10001", "name": "Won't Fix" }
      ])))
      .mount(&mock_server)
      .await;

    let (resolutions, _) = client.resolutions().gets().await?;
    assert_eq!(resolutions.len(), 2);
    assert_eq!(resolutions[1].name, "Won't Fix");

    Ok(())
  }

  #[tokio::test]
  async fn test_get_resolution() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/resolution/10000"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "10000", "name": "Fixed" })))
      .mount(&mock_server)
      .await;

    let (resolution, _) = client.resolutions().get("10000").await?;
    assert_eq!(resolution.id, "10000");

    Ok(())
  }

  #[tokio::test]
  async fn test_get_resolution_errors() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/resolution/404"))
      .respond_with(ResponseTemplate::new(404))
      .mount(&mock_server)
      .await;

    assert!(matches!(client.resolutions().get("").await, Err(Error::NoResolutionId)));

    let err = client.resolutions().get("404").await.unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));

    Ok(())
  }

  #[tokio::test]
  async fn test_gets_resolutions_with_malformed_body() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/resolution"))
      .respond_with(ResponseTemplate::new(200).set_body_string("{ not json"))
      .mount(&mock_server)
      .await;

    let result = client.resolutions().gets().await;
    assert!(matches!(result, Err(Error::Decode(_))));

    Ok(())
  }
}
