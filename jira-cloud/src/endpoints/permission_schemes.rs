//! # Jira Permission Scheme Endpoints

use reqwest::Method;
use tracing::instrument;

use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::{PermissionSchemePageScheme, PermissionSchemeScheme};
use crate::query::Query;
use crate::response::ResponseScheme;

/// Permission scheme endpoints, obtained through
/// [`JiraClient::permission_schemes`]
pub struct PermissionSchemeService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub fn permission_schemes(&self) -> PermissionSchemeService<'_> {
    PermissionSchemeService { client: self }
  }
}

impl PermissionSchemeService<'_> {
  #[instrument(skip(self), level = "debug")]
  pub async fn gets(&self) -> Result<(PermissionSchemePageScheme, ResponseScheme)> {
    let endpoint = self.client.api_path("permissionscheme");
    self.client.call(Method::GET, &endpoint).await
  }

  /// Fetch a scheme. `expand` may include `permissions`, `user`, `group`,
  /// `projectRole`, `field` or `all`.
  #[instrument(skip(self), level = "debug")]
  pub async fn get(&self, scheme_id: i64, expand: &[String]) -> Result<(PermissionSchemeScheme, ResponseScheme)> {
    if scheme_id == 0 {
      return Err(Error::NoPermissionSchemeId);
    }

    let endpoint = Query::new()
      .with_joined("expand", expand)
      .endpoint(&self.client.api_path(&format!("permissionscheme/{scheme_id}")));

    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self, payload), level = "debug")]
  pub async fn create(&self, payload: &PermissionSchemeScheme) -> Result<(PermissionSchemeScheme, ResponseScheme)> {
    let endpoint = self.client.api_path("permissionscheme");
    self.client.call_with(Method::POST, &endpoint, payload).await
  }

  /// Replace a scheme. Grants listed in the payload replace every existing
  /// grant of the scheme.
  #[instrument(skip(self, payload), level = "debug")]
  pub async fn update(
    &self,
    scheme_id: i64,
    payload: &PermissionSchemeScheme,
  ) -> Result<(PermissionSchemeScheme, ResponseScheme)> {
    if scheme_id == 0 {
      return Err(Error::NoPermissionSchemeId);
    }

    let endpoint = self.client.api_path(&format!("permissionscheme/{scheme_id}"));
    self.client.call_with(Method::PUT, &endpoint, payload).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn delete(&self, scheme_id: i64) -> Result<ResponseScheme> {
    if scheme_id == 0 {
      return Err(Error::NoPermissionSchemeId);
    }

    let endpoint = self.client.api_path(&format!("permissionscheme/{scheme_id}"));
    self.client.send(Method::DELETE, &endpoint).await
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{body_json, method, path, query_param};
  use wiremock::{Mock, ResponseTemplate};

  use super::*;
  use crate::endpoints::test_support::mock_client;
  use crate::models::{PermissionGrantHolderScheme, PermissionGrantScheme};

  #[tokio::test]
  async fn test_gets_permission_schemes() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/permissionscheme"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "permissionSchemes": [
              { "id": 10000, "name": "Example permission scheme", "description": "description" },
              { "id": 10001, "name": "Default software scheme" }
          ]
      })))
      .mount(&mock_server)
      .await;

    let (page, _) = client.permission_schemes().gets().await?;
    assert_eq!(page.permission_schemes.len(), 2);
    assert_eq!(page.permission_schemes[0].id, Some(10000));

    Ok(())
  }

  #[tokio::test]
  async fn test_get_scheme_with_expand() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/permissionscheme/10000"))
      .and(query_param("expand", "permissions,user"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "id": 10000,
          "name": "Example permission scheme",
          "permissions": [{
              "id": 10000,
              "holder": { "type": "group", "parameter": "jira-core-users", "expand": "group" },
              "permission": "ADMINISTER_PROJECTS"
          }]
      })))
      .mount(&mock_server)
      .await;

    let expand = vec!["permissions".to_string(), "user".to_string()];
    let (scheme, _) = client.permission_schemes().get(10000, &expand).await?;
    let holder = scheme.permissions[0].holder.as_ref().map(|h| h.kind.as_str());
    assert_eq!(holder, Some("group"));

    Ok(())
  }

  #[tokio::test]
  async fn test_create_scheme_with_grants() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("POST"))
      .and(path("/rest/api/3/permissionscheme"))
      .and(body_json(json!({
          "name": "EF Permission Scheme",
          "description": "EF Permission Scheme description",
          "permissions": [{
              "holder": { "type": "group", "parameter": "jira-administrators-system" },
              "permission": "ADMINISTER_PROJECTS"
          }]
      })))
      .respond_with(ResponseTemplate::new(201).set_body_json(json!({
          "id": 10100,
          "name": "EF Permission Scheme"
      })))
      .mount(&mock_server)
      .await;

    let payload = PermissionSchemeScheme {
      name: "EF Permission Scheme".to_string(),
      description: Some("EF Permission Scheme description".to_string()),
      permissions: vec![PermissionGrantScheme {
        holder: Some(PermissionGrantHolderScheme {
          kind: "group".to_string(),
          parameter: Some("jira-administrators-system".to_string()),
          ..Default::default()
        }),
        permission: Some("ADMINISTER_PROJECTS".to_string()),
        ..Default::default()
      }],
      ..Default::default()
    };

    let (scheme, response) = client.permission_schemes().create(&payload).await?;
    assert_eq!(scheme.id, Some(10100));
    assert_eq!(response.code(), 201);

    Ok(())
  }

  #[tokio::test]
  async fn test_zero_scheme_id_is_rejected() -> anyhow::Result<()> {
    let (_mock_server, client) = mock_client().await;
    let service = client.permission_schemes();

    assert!(matches!(service.get(0, &[]).await, Err(Error::NoPermissionSchemeId)));
    assert!(matches!(
      service.update(0, &PermissionSchemeScheme::default()).await,
      Err(Error::NoPermissionSchemeId)
    ));
    assert!(matches!(service.delete(0).await, Err(Error::NoPermissionSchemeId)));

    Ok(())
  }

  #[tokio::test]
  async fn test_update_and_delete_scheme() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("PUT"))
      .and(path("/rest/api/3/permissionscheme/10100"))
      .and(body_json(json!({ "name": "Renamed scheme" })))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 10100, "name": "Renamed scheme" })))
      .mount(&mock_server)
      .await;

    Mock::given(method("DELETE"))
      .and(path("/rest/api/3/permissionscheme/10100"))
      .respond_with(ResponseTemplate::new(204))
      .mount(&mock_server)
      .await;

    let service = client.permission_schemes();
    let payload = PermissionSchemeScheme {
      name: "Renamed scheme".to_string(),
      ..Default::default()
    };
    let (scheme, _) = service.update(10100, &payload).await?;
    assert_eq!(scheme.name, "Renamed scheme");

    let response = service.delete(10100).await?;
    assert_eq!(response.code(), 204);

    Ok(())
  }

  #[tokio::test]
  async fn test_delete_unknown_scheme() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("DELETE"))
      .and(path("/rest/api/3/permissionscheme/10099"))
      .respond_with(ResponseTemplate::new(404).set_body_json(json!({
          "errorMessages": ["The permission scheme does not exist."],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let err = client.permission_schemes().delete(10099).await.unwrap_err();
    assert!(matches!(err, Error::RequestFailed { .. }));
    assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
    assert!(err.to_string().contains("The permission scheme does not exist."));

    Ok(())
  }

  #[tokio::test]
  async fn test_get_scheme_with_malformed_body() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/permissionscheme/10000"))
      .respond_with(ResponseTemplate::new(200).set_body_string("{ not json"))
      .mount(&mock_server)
      .await;

    let result = client.permission_schemes().get(10000, &[]).await;
    assert!(matches!(result, Err(Error::Decode(_))));

    Ok(())
  }
}
