//! # Jira Workflow Endpoints

use reqwest::Method;
use tracing::instrument;

use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::{PageScheme, WorkflowCreatedResponseScheme, WorkflowPayloadScheme, WorkflowScheme, WorkflowSearchOptions};
use crate::query::Query;
use crate::response::ResponseScheme;
use crate::url::path_segment;

/// Workflow endpoints, obtained through [`JiraClient::workflows`]
pub struct WorkflowService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub fn workflows(&self) -> WorkflowService<'_> {
    WorkflowService { client: self }
  }
}

impl WorkflowService<'_> {
  #[instrument(skip(self, payload), level = "debug")]
  pub async fn create(&self, payload: &WorkflowPayloadScheme) -> Result<(WorkflowCreatedResponseScheme, ResponseScheme)> {
    let endpoint = self.client.api_path("workflow/create");
    self.client.call_with(Method::POST, &endpoint, payload).await
  }

  /// Paginated workflow search.
  #[instrument(skip(self), level = "debug")]
  pub async fn gets(
    &self,
    options: &WorkflowSearchOptions,
    start_at: i32,
    max_results: i32,
  ) -> Result<(PageScheme<WorkflowScheme>, ResponseScheme)> {
    let endpoint = Query::new()
      .page(start_at, max_results)
      .with_each("workflowName", &options.workflow_names)
      .with_opt("queryString", options.query_string.as_deref())
      .with_opt("orderBy", options.order_by.as_deref())
      .with_opt("isActive", options.is_active)
      .with_joined("expand", &options.expand)
      .endpoint(&self.client.api_path("workflow/search"));

    self.client.call(Method::GET, &endpoint).await
  }

  /// Delete an inactive workflow by entity id.
  #[instrument(skip(self), level = "debug")]
  pub async fn delete(&self, workflow_id: &str) -> Result<ResponseScheme> {
    if workflow_id.is_empty() {
      return Err(Error::NoWorkflowId);
    }

    let workflow_id = path_segment(workflow_id)?;
    let endpoint = self.client.api_path(&format!("workflow/{workflow_id}"));
    self.client.send(Method::DELETE, &endpoint).await
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
  use wiremock::{Mock, ResponseTemplate};

  use super::*;
  use crate::endpoints::test_support::mock_client;
  use crate::models::{WorkflowStatusPayloadScheme, WorkflowTransitionPayloadScheme};

  #[tokio::test]
  async fn test_create_workflow() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("POST"))
      .and(path("/rest/api/3/workflow/create"))
      .and(body_json(json!({
          "name": "Workflow 1",
          "description": "This is a workflow used for Stories and Tasks",
          "statuses": [{ "id": "1" }, { "id": "2" }],
          "transitions": [
              { "name": "Created", "to": "1", "type": "initial" },
              { "name": "In progress", "from": ["1"], "to": "2", "type": "directed" }
          ]
      })))
      .respond_with(ResponseTemplate::new(201).set_body_json(json!({
          "name": "Workflow 1",
          "entityId": "d7178e8d-bf6c-4c0c-9e90-758a0b965b67"
      })))
      .mount(&mock_server)
      .await;

    let payload = WorkflowPayloadScheme {
      name: "Workflow 1".to_string(),
      description: Some("This is a workflow used for Stories and Tasks".to_string()),
      statuses: vec![
        WorkflowStatusPayloadScheme {
          id: "1".to_string(),
          properties: None,
        },
        WorkflowStatusPayloadScheme {
          id: "2".to_string(),
          properties: None,
        },
      ],
      transitions: vec![
        WorkflowTransitionPayloadScheme {
          name: "Created".to_string(),
          to: "1".to_string(),
          kind: "initial".to_string(),
          ..Default::default()
        },
        WorkflowTransitionPayloadScheme {
          name: "In progress".to_string(),
          from: vec!["1".to_string()],
          to: "2".to_string(),
          kind: "directed".to_string(),
          ..Default::default()
        },
      ],
    };

    let (created, _) = client.workflows().create(&payload).await?;
    assert_eq!(created.entity_id, "d7178e8d-bf6c-4c0c-9e90-758a0b965b67");

    Ok(())
  }

  #[tokio::test]
  async fn test_search_workflows() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/workflow/search"))
      .and(query_param("isActive", "true"))
      .and(query_param("expand", "transitions,statuses"))
      .and(query_param_is_missing("queryString"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "isLast": true,
          "total": 1,
          "values": [{
              "id": { "name": "SCRUM Workflow", "entityId": "5ed312c5-f7a6-4a78-a1f6-8ff7f307d063" },
              "description": "A workflow used for Software projects in the SCRUM methodology",
              "transitions": [{ "id": "5", "name": "In Progress", "from": ["10"], "to": "3", "type": "directed" }],
              "statuses": [{ "id": "3", "name": "In Progress" }]
          }]
      })))
      .mount(&mock_server)
      .await;

    let options = WorkflowSearchOptions {
      workflow_names: vec!["SCRUM Workflow".to_string(), "Kanban Workflow".to_string()],
      is_active: Some(true),
      expand: vec!["transitions".to_string(), "statuses".to_string()],
      ..Default::default()
    };

    let (page, response) = client.workflows().gets(&options, 0, 50).await?;
    let workflow = &page.values[0];
    assert_eq!(workflow.id.as_ref().map(|id| id.name.as_str()), Some("SCRUM Workflow"));
    assert_eq!(workflow.transitions[0].from, vec!["10"]);
    assert!(response.endpoint.contains("workflowName=SCRUM+Workflow&workflowName=Kanban+Workflow"));

    Ok(())
  }

  #[tokio::test]
  async fn test_delete_workflow() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("DELETE"))
      .and(path("/rest/api/3/workflow/d7178e8d-bf6c-4c0c-9e90-758a0b965b67"))
      .respond_with(ResponseTemplate::new(204))
      .mount(&mock_server)
      .await;

    let service = client.workflows();
    assert_eq!(service.delete("d7178e8d-bf6c-4c0c-9e90-758a0b965b67").await?.code(), 204);
    assert!(matches!(service.delete("").await, Err(Error::NoWorkflowId)));

    Ok(())
  }

  #[tokio::test]
  async fn test_delete_unknown_workflow() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("DELETE"))
      .and(path("/rest/api/3/workflow/b9ff2384-d3b6-4d4e-9509-3ee19f607168"))
      .respond_with(ResponseTemplate::new(404).set_body_json(json!({
          "errorMessages": ["The workflow does not exist."],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let err = client.workflows().delete("b9ff2384-d3b6-4d4e-9509-3ee19f607168").await.unwrap_err();
    assert!(matches!(err, Error::RequestFailed { .. }));
    assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
    assert!(err.to_string().contains("The workflow does not exist."));

    Ok(())
  }

  #[tokio::test]
  async fn test_gets_with_malformed_values() -> anyhow::Result<()> {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/workflow/search"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "values": { "id": "1" } })))
      .mount(&mock_server)
      .await;

    let result = client.workflows().gets(&WorkflowSearchOptions::default(), 0, 50).await;
    assert!(matches!(result, Err(Error::Decode(_))));

    Ok(())
  }
}
