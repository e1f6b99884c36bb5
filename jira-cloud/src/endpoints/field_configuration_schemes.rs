//! # Jira Field Configuration Scheme Endpoints
//!
//! Schemes map issue types to field configurations and are assigned to
//! projects.

use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::{
  FieldConfigurationIssueTypeItemScheme, FieldConfigurationPayloadScheme, FieldConfigurationSchemeProjectScheme,
  FieldConfigurationSchemeScheme, FieldConfigurationToIssueTypeMappingPayloadScheme, PageScheme,
};
use crate::query::Query;
use crate::response::ResponseScheme;

/// Field configuration scheme endpoints, obtained through
/// [`JiraClient::field_configuration_schemes`]
pub struct FieldConfigurationSchemeService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub fn field_configuration_schemes(&self) -> FieldConfigurationSchemeService<'_> {
    FieldConfigurationSchemeService { client: self }
  }
}

/// `fieldConfigurationSchemeId` is sent as `null` to fall back to the
/// default scheme.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AssignPayload {
  field_configuration_scheme_id: Option<String>,
  project_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UnlinkPayload<'a> {
  issue_type_ids: &'a [String],
}

fn payload(name: &str, description: &str) -> FieldConfigurationPayloadScheme {
  FieldConfigurationPayloadScheme {
    name: name.to_string(),
    description: (!description.is_empty()).then(|| description.to_string()),
  }
}

impl FieldConfigurationSchemeService<'_> {
  #[instrument(skip(self), level = "debug")]
  pub async fn gets(
    &self,
    ids: &[i64],
    start_at: i32,
    max_results: i32,
  ) -> Result<(PageScheme<FieldConfigurationSchemeScheme>, ResponseScheme)> {
    let endpoint = Query::new()
      .page(start_at, max_results)
      .with_each("id", ids)
      .endpoint(&self.client.api_path("fieldconfigurationscheme"));

    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn create(
    &self,
    name: &str,
    description: &str,
  ) -> Result<(FieldConfigurationSchemeScheme, ResponseScheme)> {
    if name.is_empty() {
      return Err(Error::NoFieldConfigurationSchemeName);
    }

    let endpoint = self.client.api_path("fieldconfigurationscheme");
    self.client.call_with(Method::POST, &endpoint, &payload(name, description)).await
  }

  /// Issue type to field configuration mappings of the given schemes.
  #[instrument(skip(self), level = "debug")]
  pub async fn mapping(
    &self,
    scheme_ids: &[i64],
    start_at: i32,
    max_results: i32,
  ) -> Result<(PageScheme<FieldConfigurationIssueTypeItemScheme>, ResponseScheme)> {
    let endpoint = Query::new()
      .page(start_at, max_results)
      .with_each("fieldConfigurationSchemeId", scheme_ids)
      .endpoint(&self.client.api_path("fieldconfigurationscheme/mapping"));

    self.client.call(Method::GET, &endpoint).await
  }

  /// Schemes in use by the given projects, grouped by scheme.
  #[instrument(skip(self), level = "debug")]
  pub async fn project(
    &self,
    project_ids: &[i64],
    start_at: i32,
    max_results: i32,
  ) -> Result<(PageScheme<FieldConfigurationSchemeProjectScheme>, ResponseScheme)> {
    let endpoint = Query::new()
      .page(start_at, max_results)
      .with_each("projectId", project_ids)
      .endpoint(&self.client.api_path("fieldconfigurationscheme/project"));

    self.client.call(Method::GET, &endpoint).await
  }

  /// Assign a scheme to a project. `None` (or `Some(0)`) puts the project
  /// back on the default scheme.
  #[instrument(skip(self), level = "debug")]
  pub async fn assign(&self, scheme_id: Option<i64>, project_id: i64) -> Result<ResponseScheme> {
    if project_id == 0 {
      return Err(Error::NoProjectId);
    }

    // Jira takes both ids as strings here.
    let body = AssignPayload {
      field_configuration_scheme_id: scheme_id.filter(|id| *id != 0).map(|id| id.to_string()),
      project_id: project_id.to_string(),
    };

    let endpoint = self.client.api_path("fieldconfigurationscheme/project");
    self.client.send_with(Method::PUT, &endpoint, &body).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn update(&self, scheme_id: i64, name: &str, description: &str) -> Result<ResponseScheme> {
    if scheme_id == 0 {
      return Err(Error::NoFieldConfigurationSchemeId);
    }
    if name.is_empty() {
      return Err(Error::NoFieldConfigurationSchemeName);
    }

    let endpoint = self.client.api_path(&format!("fieldconfigurationscheme/{scheme_id}"));
    self.client.send_with(Method::PUT, &endpoint, &payload(name, description)).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn delete(&self, scheme_id: i64) -> Result<ResponseScheme> {
    if scheme_id == 0 {
      return Err(Error::NoFieldConfigurationSchemeId);
    }

    let endpoint = self.client.api_path(&format!("fieldconfigurationscheme/{scheme_id}"));
    self.client.send(Method::DELETE, &endpoint).await
  }

  /// Map issue types to field configurations within a scheme.
  #[instrument(skip(self, payload), level = "debug")]
  pub async fn link(
    &self,
    scheme_id: i64,
    payload: &FieldConfigurationToIssueTypeMappingPayloadScheme,
  ) -> Result<ResponseScheme> {
    if scheme_id == 0 {
      return Err(Error::NoFieldConfigurationSchemeId);
    }

    let endpoint = self.client.api_path(&format!("fieldconfigurationscheme/{scheme_id}/mapping"));
    self.client.send_with(Method::PUT, &endpoint, payload).await
  }

  /// Remove the mappings for `issue_type_ids` from a scheme.
  #[instrument(skip(self), level = "debug")]
  pub async fn unlink(&self, scheme_id: i64, issue_type_ids: &[String]) -> Result<ResponseScheme> {
    if scheme_id == 0 {
      return Err(Error::NoFieldConfigurationSchemeId);
    }
    if issue_type_ids.is_empty() {
      return Err(Error::NoIssueTypeIds);
    }

    let endpoint = self.client.api_path(&format!("fieldconfigurationscheme/{scheme_id}/mapping/delete"));
    self
      .client
      .send_with(Method::POST, &endpoint, &UnlinkPayload { issue_type_ids })
      .await
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{body_json, method, path, query_param};
  use wiremock::{Mock, ResponseTemplate};

  use super::*;
  use crate::endpoints::test_support::mock_client;
  use crate::models::FieldConfigurationToIssueTypeMappingScheme;

  #[tokio::test]
  async fn test_gets_schemes() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/fieldconfigurationscheme"))
      .and(query_param("id", "10000"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "maxResults": 10,
          "startAt": 0,
          "total": 2,
          "isLast": true,
          "values": [
              { "id": "10000", "name": "Field Configuration Scheme for Bugs", "description": "This field configuration scheme is for bugs only." },
              { "id": "10001", "name": "Field Configuration Scheme for software related projects" }
          ]
      })))
      .mount(&mock_server)
      .await;

    let (page, _) = client.field_configuration_schemes().gets(&[10000], 0, 10).await?;
    assert_eq!(page.values.len(), 2);
    assert_eq!(page.values[0].id, "10000");
    assert!(page.values[1].description.is_none());

    Ok(())
  }

  #[tokio::test]
  async fn test_create_scheme_requires_name() -> anyhow::Result<()> {
    let (_mock_server, client) = mock_client().await;

    let result = client.field_configuration_schemes().create("", "").await;
    assert!(matches!(result, Err(Error::NoFieldConfigurationSchemeName)));

    Ok(())
  }

  #[tokio::test]
  async fn test_mapping_and_project_queries() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/fieldconfigurationscheme/mapping"))
      .and(query_param("fieldConfigurationSchemeId", "10020"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "values": [
              { "fieldConfigurationSchemeId": "10020", "issueTypeId": "10000", "fieldConfigurationId": "10010" }
          ]
      })))
      .mount(&mock_server)
      .await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/fieldconfigurationscheme/project"))
      .and(query_param("projectId", "10000"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "values": [
              {
                  "projectIds": ["10000", "10001"],
                  "fieldConfigurationScheme": { "id": "10002", "name": "Field Configuration Scheme for software related projects" }
              },
              { "projectIds": ["12000"] }
          ]
      })))
      .mount(&mock_server)
      .await;

    let service = client.field_configuration_schemes();

    let (mapping, response) = service.mapping(&[10020, 10021], 0, 50).await?;
    assert_eq!(mapping.values[0].field_configuration_id, "10010");
    assert!(response.endpoint.contains("fieldConfigurationSchemeId=10020&fieldConfigurationSchemeId=10021"));

    let (projects, _) = service.project(&[10000], 0, 50).await?;
    assert_eq!(projects.values[0].project_ids, vec!["10000", "10001"]);
    assert!(projects.values[1].field_configuration_scheme.is_none());

    Ok(())
  }

  #[tokio::test]
  async fn test_assign_sends_null_for_default_scheme() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("PUT"))
      .and(path("/rest/api/3/fieldconfigurationscheme/project"))
      .and(body_json(json!({ "fieldConfigurationSchemeId": null, "projectId": "10000" })))
      .respond_with(ResponseTemplate::new(204))
      .expect(2)
      .mount(&mock_server)
      .await;

    let response = client.field_configuration_schemes().assign(None, 10000).await?;
    assert_eq!(response.code(), 204);
    client.field_configuration_schemes().assign(Some(0), 10000).await?;

    Ok(())
  }

  #[tokio::test]
  async fn test_assign_scheme_to_project() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("PUT"))
      .and(path("/rest/api/3/fieldconfigurationscheme/project"))
      .and(body_json(json!({ "fieldConfigurationSchemeId": "10000", "projectId": "10000" })))
      .respond_with(ResponseTemplate::new(204))
      .mount(&mock_server)
      .await;

    let service = client.field_configuration_schemes();
    service.assign(Some(10000), 10000).await?;
    assert!(matches!(service.assign(Some(10000), 0).await, Err(Error::NoProjectId)));

    Ok(())
  }

  #[tokio::test]
  async fn test_link_and_unlink_mappings() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("PUT"))
      .and(path("/rest/api/3/fieldconfigurationscheme/10000/mapping"))
      .and(body_json(json!({
          "mappings": [
              { "issueTypeId": "default", "fieldConfigurationId": "10000" },
              { "issueTypeId": "10001", "fieldConfigurationId": "10002" }
          ]
      })))
      .respond_with(ResponseTemplate::new(204))
      .mount(&mock_server)
      .await;

    Mock::given(method("POST"))
      .and(path("/rest/api/3/fieldconfigurationscheme/10000/mapping/delete"))
      .and(body_json(json!({ "issueTypeIds": ["10001", "10002"] })))
      .respond_with(ResponseTemplate::new(204))
      .mount(&mock_server)
      .await;

    let service = client.field_configuration_schemes();
    let mapping = FieldConfigurationToIssueTypeMappingPayloadScheme {
      mappings: vec![
        FieldConfigurationToIssueTypeMappingScheme {
          issue_type_id: "default".to_string(),
          field_configuration_id: "10000".to_string(),
        },
        FieldConfigurationToIssueTypeMappingScheme {
          issue_type_id: "10001".to_string(),
          field_configuration_id: "10002".to_string(),
        },
      ],
    };
    service.link(10000, &mapping).await?;

    let ids = vec!["10001".to_string(), "10002".to_string()];
    let response = service.unlink(10000, &ids).await?;
    assert_eq!(response.code(), 204);

    assert!(matches!(service.unlink(10000, &[]).await, Err(Error::NoIssueTypeIds)));
    assert!(matches!(service.unlink(0, &ids).await, Err(Error::NoFieldConfigurationSchemeId)));

    Ok(())
  }

  #[tokio::test]
  async fn test_delete_scheme_failure_status() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("DELETE"))
      .and(path("/rest/api/3/fieldconfigurationscheme/10000"))
      .respond_with(ResponseTemplate::new(400).set_body_json(json!({
          "errorMessages": ["The field configuration scheme is in use by a project."]
      })))
      .mount(&mock_server)
      .await;

    let err = client.field_configuration_schemes().delete(10000).await.unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::BAD_REQUEST));
    assert!(err.to_string().contains("in use by a project"));

    Ok(())
  }

  #[tokio::test]
  async fn test_gets_with_empty_body() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/fieldconfigurationscheme"))
      .respond_with(ResponseTemplate::new(200))
      .mount(&mock_server)
      .await;

    let result = client.field_configuration_schemes().gets(&[], 0, 50).await;
    assert!(matches!(result, Err(Error::Decode(_))));

    Ok(())
  }
}
