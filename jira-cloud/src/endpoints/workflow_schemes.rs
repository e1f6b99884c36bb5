//! # Jira Workflow Scheme Endpoints
//!
//! Workflow schemes map issue types to workflows. Updating an active scheme
//! creates or updates its draft when `updateDraftIfNeeded` is set.

use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::{
  PageScheme, WorkflowSchemeAssociationPageScheme, WorkflowSchemePayloadScheme, WorkflowSchemeScheme,
};
use crate::query::Query;
use crate::response::ResponseScheme;

/// Workflow scheme endpoints, obtained through [`JiraClient::workflow_schemes`]
pub struct WorkflowSchemeService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub fn workflow_schemes(&self) -> WorkflowSchemeService<'_> {
    WorkflowSchemeService { client: self }
  }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AssignPayload {
  workflow_scheme_id: String,
  project_id: String,
}

impl WorkflowSchemeService<'_> {
  #[instrument(skip(self), level = "debug")]
  pub async fn gets(&self, start_at: i32, max_results: i32) -> Result<(PageScheme<WorkflowSchemeScheme>, ResponseScheme)> {
    let endpoint = Query::new()
      .page(start_at, max_results)
      .endpoint(&self.client.api_path("workflowscheme"));

    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self, payload), level = "debug")]
  pub async fn create(&self, payload: &WorkflowSchemePayloadScheme) -> Result<(WorkflowSchemeScheme, ResponseScheme)> {
    let endpoint = self.client.api_path("workflowscheme");
    self.client.call_with(Method::POST, &endpoint, payload).await
  }

  /// Fetch a scheme, or its draft when `return_draft_if_exists` is set and
  /// one exists.
  #[instrument(skip(self), level = "debug")]
  pub async fn get(&self, scheme_id: i64, return_draft_if_exists: bool) -> Result<(WorkflowSchemeScheme, ResponseScheme)> {
    if scheme_id == 0 {
      return Err(Error::NoWorkflowSchemeId);
    }

    let endpoint = Query::new()
      .with_flag("returnDraftIfExists", return_draft_if_exists)
      .endpoint(&self.client.api_path(&format!("workflowscheme/{scheme_id}")));

    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self, payload), level = "debug")]
  pub async fn update(
    &self,
    scheme_id: i64,
    payload: &WorkflowSchemePayloadScheme,
  ) -> Result<(WorkflowSchemeScheme, ResponseScheme)> {
    if scheme_id == 0 {
      return Err(Error::NoWorkflowSchemeId);
    }

    let endpoint = self.client.api_path(&format!("workflowscheme/{scheme_id}"));
    self.client.call_with(Method::PUT, &endpoint, payload).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn delete(&self, scheme_id: i64) -> Result<ResponseScheme> {
    if scheme_id == 0 {
      return Err(Error::NoWorkflowSchemeId);
    }

    let endpoint = self.client.api_path(&format!("workflowscheme/{scheme_id}"));
    self.client.send(Method::DELETE, &endpoint).await
  }

  /// Schemes used by the given projects, grouped by scheme.
  #[instrument(skip(self), level = "debug")]
  pub async fn associations(&self, project_ids: &[i64]) -> Result<(WorkflowSchemeAssociationPageScheme, ResponseScheme)> {
    if project_ids.is_empty() {
      return Err(Error::NoProjectId);
    }

    let endpoint = Query::new()
      .with_each("projectId", project_ids)
      .endpoint(&self.client.api_path("workflowscheme/project"));

    self.client.call(Method::GET, &endpoint).await
  }

  /// Assign a scheme to a company-managed project.
  #[instrument(skip(self), level = "debug")]
  pub async fn assign(&self, scheme_id: i64, project_id: i64) -> Result<ResponseScheme> {
    if scheme_id == 0 {
      return Err(Error::NoWorkflowSchemeId);
    }
    if project_id == 0 {
      return Err(Error::NoProjectId);
    }

    // Jira takes both ids as strings here.
    let payload = AssignPayload {
      workflow_scheme_id: scheme_id.to_string(),
      project_id: project_id.to_string(),
    };

    let endpoint = self.client.api_path("workflowscheme/project");
    self.client.send_with(Method::PUT, &endpoint, &payload).await
  }
}
