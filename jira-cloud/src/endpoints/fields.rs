//! # Jira Field Endpoints

use reqwest::Method;
use tracing::instrument;

use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::{CustomFieldScheme, FieldScheme, FieldSearchOptionsScheme, PageScheme, TaskScheme};
use crate::query::Query;
use crate::response::ResponseScheme;
use crate::url::path_segment;

/// Field endpoints, obtained through [`JiraClient::fields`]
pub struct FieldService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub fn fields(&self) -> FieldService<'_> {
    FieldService { client: self }
  }
}

impl FieldService<'_> {
  /// List every system and custom field.
  #[instrument(skip(self), level = "debug")]
  pub async fn gets(&self) -> Result<(Vec<FieldScheme>, ResponseScheme)> {
    let endpoint = self.client.api_path("field");
    self.client.call(Method::GET, &endpoint).await
  }

  /// Create a custom field.
  #[instrument(skip(self, payload), level = "debug")]
  pub async fn create(&self, payload: &CustomFieldScheme) -> Result<(FieldScheme, ResponseScheme)> {
    let endpoint = self.client.api_path("field");
    self.client.call_with(Method::POST, &endpoint, payload).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn search(
    &self,
    options: &FieldSearchOptionsScheme,
    start_at: i32,
    max_results: i32,
  ) -> Result<(PageScheme<FieldScheme>, ResponseScheme)> {
    let endpoint = Query::new()
      .page(start_at, max_results)
      .with_joined("type", &options.types)
      .with_joined("id", &options.ids)
      .with_opt("query", options.query.as_deref())
      .with_opt("orderBy", options.order_by.as_deref())
      .with_joined("expand", &options.expand)
      .endpoint(&self.client.api_path("field/search"));

    self.client.call(Method::GET, &endpoint).await
  }

  /// Delete a custom field. Jira runs the deletion as a background task,
  /// which is returned so its progress can be followed with
  /// [`JiraClient::tasks`].
  #[instrument(skip(self), level = "debug")]
  pub async fn delete(&self, field_id: &str) -> Result<(TaskScheme, ResponseScheme)> {
    if field_id.is_empty() {
      return Err(Error::NoFieldId);
    }

    let field_id = path_segment(field_id)?;
    let endpoint = self.client.api_path(&format!("field/{field_id}"));
    self.client.call(Method::DELETE, &endpoint).await
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{body_json, method, path, query_param};
  use wiremock::{Mock, ResponseTemplate};

  use super::*;
  use crate::endpoints::test_support::mock_client;

  #[tokio::test]
  async fn test_gets_fields() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/field"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([
          {
              "id": "description",
              "name": "Description",
              "custom": false,
              "orderable": true,
              "navigable": true,
              "searchable": true,
              "clauseNames": ["description"],
              "schema": { "type": "string", "system": "description" }
          },
          {
              "id": "customfield_10000",
              "key": "customfield_10000",
              "name": "New custom field",
              "custom": true,
              "clauseNames": ["cf[10000]", "New custom field"],
              "schema": {
                  "type": "project",
                  "custom": "com.atlassian.jira.plugin.system.customfieldtypes:project",
                  "customId": 10000
              }
          }
      ])))
      .mount(&mock_server)
      .await;

    let (fields, _) = client.fields().gets().await?;
    assert_eq!(fields.len(), 2);
    assert!(!fields[0].custom);
    assert_eq!(fields[1].clause_names.len(), 2);
    assert_eq!(fields[1].schema.as_ref().and_then(|s| s.custom_id), Some(10000));

    Ok(())
  }

  #[tokio::test]
  async fn test_create_field() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("POST"))
      .and(path("/rest/api/3/field"))
      .and(body_json(json!({
          "name": "Alerting Project",
          "description": "Custom field for picking groups",
          "type": "com.atlassian.jira.plugin.system.customfieldtypes:grouppicker",
          "searcherKey": "com.atlassian.jira.plugin.system.customfieldtypes:grouppickersearcher"
      })))
      .respond_with(ResponseTemplate::new(201).set_body_json(json!({
          "id": "customfield_10101",
          "name": "Alerting Project",
          "custom": true
      })))
      .mount(&mock_server)
      .await;

    let payload = CustomFieldScheme {
      name: "Alerting Project".to_string(),
      description: Some("Custom field for picking groups".to_string()),
      field_type: "com.atlassian.jira.plugin.system.customfieldtypes:grouppicker".to_string(),
      searcher_key: Some("com.atlassian.jira.plugin.system.customfieldtypes:grouppickersearcher".to_string()),
    };

    let (field, response) = client.fields().create(&payload).await?;
    assert_eq!(field.id, "customfield_10101");
    assert!(field.custom);
    assert_eq!(response.code(), 201);

    Ok(())
  }

  #[tokio::test]
  async fn test_search_fields() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/field/search"))
      .and(query_param("type", "custom"))
      .and(query_param("id", "customfield_10000,customfield_10001"))
      .and(query_param("query", "story"))
      .and(query_param("orderBy", "-name"))
      .and(query_param("expand", "screensCount,lastUsed"))
      .and(query_param("startAt", "0"))
      .and(query_param("maxResults", "50"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "maxResults": 50,
          "startAt": 0,
          "total": 1,
          "isLast": true,
          "values": [{
              "id": "customfield_10000",
              "name": "Story Points",
              "schema": { "type": "number" },
              "screensCount": 2,
              "lastUsed": { "type": "TRACKED", "value": "2021-01-28T07:37:40.000+0000" }
          }]
      })))
      .mount(&mock_server)
      .await;

    let options = FieldSearchOptionsScheme {
      types: vec!["custom".to_string()],
      ids: vec!["customfield_10000".to_string(), "customfield_10001".to_string()],
      query: Some("story".to_string()),
      order_by: Some("-name".to_string()),
      expand: vec!["screensCount".to_string(), "lastUsed".to_string()],
    };

    let (page, _) = client.fields().search(&options, 0, 50).await?;
    assert_eq!(page.values[0].screens_count, Some(2));
    assert_eq!(
      page.values[0].last_used.as_ref().and_then(|used| used.kind.as_deref()),
      Some("TRACKED")
    );

    Ok(())
  }

  #[tokio::test]
  async fn test_delete_field_returns_task() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("DELETE"))
      .and(path("/rest/api/3/field/customfield_10000"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "id": "1000",
          "self": "https://your-domain.atlassian.net/rest/api/3/task/1000",
          "status": "ENQUEUED"
      })))
      .mount(&mock_server)
      .await;

    let (task, _) = client.fields().delete("customfield_10000").await?;
    assert_eq!(task.id, "1000");
    assert_eq!(task.status.as_deref(), Some("ENQUEUED"));

    Ok(())
  }

  #[tokio::test]
  async fn test_delete_field_without_id() -> anyhow::Result<()> {
    let (_mock_server, client) = mock_client().await;

    let result = client.fields().delete("").await;
    assert!(matches!(result, Err(Error::NoFieldId)));

    Ok(())
  }

  #[tokio::test]
  async fn test_gets_fields_forbidden() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/field"))
      .respond_with(ResponseTemplate::new(403))
      .mount(&mock_server)
      .await;

    let err = client.fields().gets().await.unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::FORBIDDEN));

    Ok(())
  }

  #[tokio::test]
  async fn test_gets_fields_expects_a_list() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/field"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "summary", "name": "Summary" })))
      .mount(&mock_server)
      .await;

    let result = client.fields().gets().await;
    assert!(matches!(result, Err(Error::Decode(_))));

    Ok(())
  }
}
