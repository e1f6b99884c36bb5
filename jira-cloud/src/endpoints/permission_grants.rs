//! # Jira Permission Grant Endpoints
//!
//! Grants are the individual holder/permission pairs inside a permission
//! scheme.

use reqwest::Method;
use tracing::instrument;

use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::{PermissionGrantPayloadScheme, PermissionGrantScheme, PermissionSchemeGrantsScheme};
use crate::query::Query;
use crate::response::ResponseScheme;

/// Permission grant endpoints, obtained through
/// [`JiraClient::permission_grants`]
pub struct PermissionGrantService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub fn permission_grants(&self) -> PermissionGrantService<'_> {
    PermissionGrantService { client: self }
  }
}

impl PermissionGrantService<'_> {
  #[instrument(skip(self, payload), level = "debug")]
  pub async fn create(
    &self,
    scheme_id: i64,
    payload: &PermissionGrantPayloadScheme,
  ) -> Result<(PermissionGrantScheme, ResponseScheme)> {
    if scheme_id == 0 {
      return Err(Error::NoPermissionSchemeId);
    }

    let endpoint = self.client.api_path(&format!("permissionscheme/{scheme_id}/permission"));
    self.client.call_with(Method::POST, &endpoint, payload).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn gets(
    &self,
    scheme_id: i64,
    expand: &[String],
  ) -> Result<(PermissionSchemeGrantsScheme, ResponseScheme)> {
    if scheme_id == 0 {
      return Err(Error::NoPermissionSchemeId);
    }

    let endpoint = Query::new()
      .with_joined("expand", expand)
      .endpoint(&self.client.api_path(&format!("permissionscheme/{scheme_id}/permission")));

    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn get(
    &self,
    scheme_id: i64,
    grant_id: i64,
    expand: &[String],
  ) -> Result<(PermissionGrantScheme, ResponseScheme)> {
    if scheme_id == 0 {
      return Err(Error::NoPermissionSchemeId);
    }
    if grant_id == 0 {
      return Err(Error::NoPermissionGrantId);
    }

    let endpoint = Query::new()
      .with_joined("expand", expand)
      .endpoint(&self.client.api_path(&format!("permissionscheme/{scheme_id}/permission/{grant_id}")));

    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn delete(&self, scheme_id: i64, grant_id: i64) -> Result<ResponseScheme> {
    if scheme_id == 0 {
      return Err(Error::NoPermissionSchemeId);
    }
    if grant_id == 0 {
      return Err(Error::NoPermissionGrantId);
    }

    let endpoint = self.client.api_path(&format!("permissionscheme/{scheme_id}/permission/{grant_id}"));
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
  use crate::models::PermissionGrantHolderScheme;

  #[tokio::test]
  async fn test_create_grant() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("POST"))
      .and(path("/rest/api/3/permissionscheme/10000/permission"))
      .and(body_json(json!({
          "holder": { "type": "group", "parameter": "jira-core-users" },
          "permission": "ADMINISTER_PROJECTS"
      })))
      .respond_with(ResponseTemplate::new(201).set_body_json(json!({
          "id": 10062,
          "holder": { "type": "group", "parameter": "jira-core-users", "expand": "group" },
          "permission": "ADMINISTER_PROJECTS"
      })))
      .mount(&mock_server)
      .await;

    let payload = PermissionGrantPayloadScheme {
      holder: PermissionGrantHolderScheme {
        kind: "group".to_string(),
        parameter: Some("jira-core-users".to_string()),
        ..Default::default()
      },
      permission: "ADMINISTER_PROJECTS".to_string(),
    };

    let (grant, _) = client.permission_grants().create(10000, &payload).await?;
    assert_eq!(grant.id, Some(10062));

    Ok(())
  }

  #[tokio::test]
  async fn test_gets_and_get_grants() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/permissionscheme/10000/permission"))
      .and(query_param("expand", "all"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "permissions": [
              { "id": 10000, "holder": { "type": "anyone" }, "permission": "BROWSE_PROJECTS" },
              { "id": 10001, "holder": { "type": "projectRole", "parameter": "10002" }, "permission": "ASSIGN_ISSUES" }
          ],
          "expand": "user,group,projectRole,field,all"
      })))
      .mount(&mock_server)
      .await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/permissionscheme/10000/permission/10001"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "id": 10001, "holder": { "type": "projectRole", "parameter": "10002" }, "permission": "ASSIGN_ISSUES"
      })))
      .mount(&mock_server)
      .await;

    let service = client.permission_grants();
    let (grants, _) = service.gets(10000, &["all".to_string()]).await?;
    assert_eq!(grants.permissions.len(), 2);

    let (grant, _) = service.get(10000, 10001, &[]).await?;
    assert_eq!(grant.permission.as_deref(), Some("ASSIGN_ISSUES"));

    Ok(())
  }

  #[tokio::test]
  async fn test_missing_identifiers() -> anyhow::Result<()> {
    let (_mock_server, client) = mock_client().await;
    let service = client.permission_grants();

    assert!(matches!(service.gets(0, &[]).await, Err(Error::NoPermissionSchemeId)));
    assert!(matches!(service.get(10000, 0, &[]).await, Err(Error::NoPermissionGrantId)));
    assert!(matches!(service.delete(0, 10001).await, Err(Error::NoPermissionSchemeId)));
    assert!(matches!(service.delete(10000, 0).await, Err(Error::NoPermissionGrantId)));

    Ok(())
  }

  #[tokio::test]
  async fn test_delete_grant() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("DELETE"))
      .and(path("/rest/api/3/permissionscheme/10000/permission/10001"))
      .respond_with(ResponseTemplate::new(204))
      .mount(&mock_server)
      .await;

    let response = client.permission_grants().delete(10000, 10001).await?;
    assert_eq!(response.code(), 204);

    Ok(())
  }

  #[tokio::test]
  async fn test_gets_grants_forbidden() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/permissionscheme/10000/permission"))
      .respond_with(ResponseTemplate::new(403))
      .mount(&mock_server)
      .await;

    let err = client.permission_grants().gets(10000, &[]).await.unwrap_err();
    assert!(matches!(err, Error::RequestFailed { .. }));
    assert_eq!(err.status(), Some(reqwest::StatusCode::FORBIDDEN));

    Ok(())
  }

  #[tokio::test]
  async fn test_get_grant_with_empty_body() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/permissionscheme/10000/permission/10001"))
      .respond_with(ResponseTemplate::new(200))
      .mount(&mock_server)
      .await;

    let result = client.permission_grants().get(10000, 10001, &[]).await;
    assert!(matches!(result, Err(Error::Decode(_))));

    Ok(())
  }
}
