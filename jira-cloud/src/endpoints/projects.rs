//! # Jira Project Endpoints
//!
//! Creating, searching, updating, archiving and deleting projects, plus the
//! per-project status and notification scheme lookups.

use reqwest::Method;
use tracing::instrument;

use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::{
  NewProjectCreatedScheme, NotificationSchemeScheme, PageScheme, ProjectPayloadScheme, ProjectScheme,
  ProjectSearchOptionsScheme, ProjectStatusPageScheme, ProjectUpdateScheme, TaskScheme,
};
use crate::query::Query;
use crate::response::ResponseScheme;
use crate::url::path_segment;

/// Project endpoints, obtained through [`JiraClient::projects`]
pub struct ProjectService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub fn projects(&self) -> ProjectService<'_> {
    ProjectService { client: self }
  }
}

fn require_project(project_key_or_id: &str) -> Result<()> {
  if project_key_or_id.is_empty() {
    return Err(Error::NoProjectKeyOrId);
  }
  Ok(())
}

impl ProjectService<'_> {
  #[instrument(skip(self, payload), level = "debug")]
  pub async fn create(&self, payload: &ProjectPayloadScheme) -> Result<(NewProjectCreatedScheme, ResponseScheme)> {
    let endpoint = self.client.api_path("project");
    self.client.call_with(Method::POST, &endpoint, payload).await
  }

  /// Paginated project search.
  #[instrument(skip(self), level = "debug")]
  pub async fn search(
    &self,
    options: &ProjectSearchOptionsScheme,
    start_at: i32,
    max_results: i32,
  ) -> Result<(PageScheme<ProjectScheme>, ResponseScheme)> {
    let endpoint = Query::new()
      .page(start_at, max_results)
      .with_opt("orderBy", options.order_by.as_deref())
      .with_opt("query", options.query.as_deref())
      .with_opt("action", options.action.as_deref())
      .with_opt("typeKey", options.type_key.as_deref())
      .with_opt("categoryId", options.category_id)
      .with_each("id", &options.ids)
      .with_each("keys", &options.keys)
      .with_joined("expand", &options.expand)
      .endpoint(&self.client.api_path("project/search"));

    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn get(&self, project_key_or_id: &str, expand: &[String]) -> Result<(ProjectScheme, ResponseScheme)> {
    require_project(project_key_or_id)?;

    let project_key_or_id = path_segment(project_key_or_id)?;
    let endpoint = Query::new()
      .with_joined("expand", expand)
      .endpoint(&self.client.api_path(&format!("project/{project_key_or_id}")));

    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self, payload), level = "debug")]
  pub async fn update(
    &self,
    project_key_or_id: &str,
    payload: &ProjectUpdateScheme,
  ) -> Result<(ProjectScheme, ResponseScheme)> {
    require_project(project_key_or_id)?;

    let project_key_or_id = path_segment(project_key_or_id)?;
    let endpoint = self.client.api_path(&format!("project/{project_key_or_id}"));
    self.client.call_with(Method::PUT, &endpoint, payload).await
  }

  /// Delete a project. With `enable_undo` the project goes to the recycle
  /// bin instead of being removed immediately.
  #[instrument(skip(self), level = "debug")]
  pub async fn delete(&self, project_key_or_id: &str, enable_undo: bool) -> Result<ResponseScheme> {
    require_project(project_key_or_id)?;

    let project_key_or_id = path_segment(project_key_or_id)?;
    let endpoint = Query::new()
      .with("enableUndo", enable_undo)
      .endpoint(&self.client.api_path(&format!("project/{project_key_or_id}")));

    self.client.send(Method::DELETE, &endpoint).await
  }

  /// Delete a project as a background task.
  #[instrument(skip(self), level = "debug")]
  pub async fn delete_asynchronously(&self, project_key_or_id: &str) -> Result<(TaskScheme, ResponseScheme)> {
    require_project(project_key_or_id)?;

    let project_key_or_id = path_segment(project_key_or_id)?;
    let endpoint = self.client.api_path(&format!("project/{project_key_or_id}/delete"));
    self.client.call(Method::POST, &endpoint).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn archive(&self, project_key_or_id: &str) -> Result<ResponseScheme> {
    require_project(project_key_or_id)?;

    let project_key_or_id = path_segment(project_key_or_id)?;
    let endpoint = self.client.api_path(&format!("project/{project_key_or_id}/archive"));
    self.client.send(Method::POST, &endpoint).await
  }

  /// Restore an archived or recycled project.
  #[instrument(skip(self), level = "debug")]
  pub async fn restore(&self, project_key_or_id: &str) -> Result<(ProjectScheme, ResponseScheme)> {
    require_project(project_key_or_id)?;

    let project_key_or_id = path_segment(project_key_or_id)?;
    let endpoint = self.client.api_path(&format!("project/{project_key_or_id}/restore"));
    self.client.call(Method::POST, &endpoint).await
  }

  /// Valid statuses per issue type of a project.
  #[instrument(skip(self), level = "debug")]
  pub async fn statuses(&self, project_key_or_id: &str) -> Result<(Vec<ProjectStatusPageScheme>, ResponseScheme)> {
    require_project(project_key_or_id)?;

    let project_key_or_id = path_segment(project_key_or_id)?;
    let endpoint = self.client.api_path(&format!("project/{project_key_or_id}/statuses"));
    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn notification_scheme(
    &self,
    project_key_or_id: &str,
    expand: &[String],
  ) -> Result<(NotificationSchemeScheme, ResponseScheme)> {
    require_project(project_key_or_id)?;

    let project_key_or_id = path_segment(project_key_or_id)?;
    let endpoint = Query::new()
      .with_joined("expand", expand)
      .endpoint(&self.client.api_path(&format!("project/{project_key_or_id}/notificationscheme")));

    self.client.call(Method::GET, &endpoint).await
  }
}
