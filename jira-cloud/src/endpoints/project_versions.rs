//! # Jira Project Version Endpoints

use reqwest::Method;
use tracing::instrument;

use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::{
  PageScheme, VersionGetsOptions, VersionIssueCountsScheme, VersionPayloadScheme, VersionScheme,
  VersionUnresolvedIssuesCountScheme,
};
use crate::query::Query;
use crate::response::ResponseScheme;
use crate::url::path_segment;

/// Project version endpoints, obtained through [`JiraClient::project_versions`]
pub struct ProjectVersionService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub fn project_versions(&self) -> ProjectVersionService<'_> {
    ProjectVersionService { client: self }
  }
}

fn require_version(version_id: &str) -> Result<()> {
  if version_id.is_empty() {
    return Err(Error::NoVersionId);
  }
  Ok(())
}

impl ProjectVersionService<'_> {
  /// All versions of a project, unpaginated.
  #[instrument(skip(self), level = "debug")]
  pub async fn gets(&self, project_key_or_id: &str) -> Result<(Vec<VersionScheme>, ResponseScheme)> {
    if project_key_or_id.is_empty() {
      return Err(Error::NoProjectKeyOrId);
    }

    let project_key_or_id = path_segment(project_key_or_id)?;
    let endpoint = self.client.api_path(&format!("project/{project_key_or_id}/versions"));
    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn search(
    &self,
    project_key_or_id: &str,
    options: &VersionGetsOptions,
    start_at: i32,
    max_results: i32,
  ) -> Result<(PageScheme<VersionScheme>, ResponseScheme)> {
    if project_key_or_id.is_empty() {
      return Err(Error::NoProjectKeyOrId);
    }

    let project_key_or_id = path_segment(project_key_or_id)?;
    let endpoint = Query::new()
      .page(start_at, max_results)
      .with_opt("orderBy", options.order_by.as_deref())
      .with_opt("query", options.query.as_deref())
      .with_joined("status", &options.status)
      .with_joined("expand", &options.expand)
      .endpoint(&self.client.api_path(&format!("project/{project_key_or_id}/version")));

    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self, payload), level = "debug")]
  pub async fn create(&self, payload: &VersionPayloadScheme) -> Result<(VersionScheme, ResponseScheme)> {
    let endpoint = self.client.api_path("version");
    self.client.call_with(Method::POST, &endpoint, payload).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn get(&self, version_id: &str, expand: &[String]) -> Result<(VersionScheme, ResponseScheme)> {
    require_version(version_id)?;

    let version_id = path_segment(version_id)?;
    let endpoint = Query::new()
      .with_joined("expand", expand)
      .endpoint(&self.client.api_path(&format!("version/{version_id}")));

    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self, payload), level = "debug")]
  pub async fn update(&self, version_id: &str, payload: &VersionPayloadScheme) -> Result<(VersionScheme, ResponseScheme)> {
    require_version(version_id)?;

    let version_id = path_segment(version_id)?;
    let endpoint = self.client.api_path(&format!("version/{version_id}"));
    self.client.call_with(Method::PUT, &endpoint, payload).await
  }

  /// Merge a version into `move_issues_to`, deleting the merged version.
  #[instrument(skip(self), level = "debug")]
  pub async fn merge(&self, version_id: &str, move_issues_to: &str) -> Result<ResponseScheme> {
    require_version(version_id)?;
    if move_issues_to.is_empty() {
      return Err(Error::NoMoveToVersionId);
    }

    let version_id = path_segment(version_id)?;
    let move_issues_to = path_segment(move_issues_to)?;
    let endpoint = self.client.api_path(&format!("version/{version_id}/mergeto/{move_issues_to}"));
    self.client.send(Method::PUT, &endpoint).await
  }

  /// Delete a version, optionally moving its fix and affected issues to
  /// other versions first.
  #[instrument(skip(self), level = "debug")]
  pub async fn delete(
    &self,
    version_id: &str,
    move_fix_issues_to: Option<&str>,
    move_affected_issues_to: Option<&str>,
  ) -> Result<ResponseScheme> {
    require_version(version_id)?;

    let version_id = path_segment(version_id)?;
    let endpoint = Query::new()
      .with_opt("moveFixIssuesTo", move_fix_issues_to.filter(|id| !id.is_empty()))
      .with_opt("moveAffectedIssuesTo", move_affected_issues_to.filter(|id| !id.is_empty()))
      .endpoint(&self.client.api_path(&format!("version/{version_id}")));

    self.client.send(Method::DELETE, &endpoint).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn related_issue_counts(&self, version_id: &str) -> Result<(VersionIssueCountsScheme, ResponseScheme)> {
    require_version(version_id)?;

    let version_id = path_segment(version_id)?;
    let endpoint = self.client.api_path(&format!("version/{version_id}/relatedIssueCounts"));
    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn unresolved_issue_count(
    &self,
    version_id: &str,
  ) -> Result<(VersionUnresolvedIssuesCountScheme, ResponseScheme)> {
    require_version(version_id)?;

    let version_id = path_segment(version_id)?;
    let endpoint = self.client.api_path(&format!("version/{version_id}/unresolvedIssueCount"));
    self.client.call(Method::GET, &endpoint).await
  }
}
