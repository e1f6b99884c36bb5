//! # Jira Project Role Actor Endpoints

use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::ProjectRoleScheme;
use crate::query::Query;
use crate::response::ResponseScheme;
use crate::url::path_segment;

/// Project role actor endpoints, obtained through
/// [`JiraClient::project_role_actors`]
pub struct ProjectRoleActorService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub fn project_role_actors(&self) -> ProjectRoleActorService<'_> {
    ProjectRoleActorService { client: self }
  }
}

#[derive(Serialize)]
struct ActorsPayload<'a> {
  #[serde(skip_serializing_if = "<[String]>::is_empty")]
  user: &'a [String],
  #[serde(skip_serializing_if = "<[String]>::is_empty")]
  group: &'a [String],
}

impl ProjectRoleActorService<'_> {
  /// Add users (by account id) and groups to a project role.
  #[instrument(skip(self), level = "debug")]
  pub async fn add(
    &self,
    project_key_or_id: &str,
    role_id: i64,
    account_ids: &[String],
    groups: &[String],
  ) -> Result<(ProjectRoleScheme, ResponseScheme)> {
    if project_key_or_id.is_empty() {
      return Err(Error::NoProjectKeyOrId);
    }
    if role_id == 0 {
      return Err(Error::NoProjectRoleId);
    }
    if account_ids.is_empty() && groups.is_empty() {
      return Err(Error::NoRoleActor);
    }

    let payload = ActorsPayload {
      user: account_ids,
      group: groups,
    };

    let project_key_or_id = path_segment(project_key_or_id)?;
    let endpoint = self.client.api_path(&format!("project/{project_key_or_id}/role/{role_id}"));
    self.client.call_with(Method::POST, &endpoint, &payload).await
  }

  /// Remove a user or a group from a project role.
  #[instrument(skip(self), level = "debug")]
  pub async fn delete(
    &self,
    project_key_or_id: &str,
    role_id: i64,
    account_id: Option<&str>,
    group: Option<&str>,
  ) -> Result<ResponseScheme> {
    if project_key_or_id.is_empty() {
      return Err(Error::NoProjectKeyOrId);
    }
    if role_id == 0 {
      return Err(Error::NoProjectRoleId);
    }

    let account_id = account_id.filter(|id| !id.is_empty());
    let group = group.filter(|name| !name.is_empty());
    if account_id.is_none() && group.is_none() {
      return Err(Error::NoRoleActor);
    }

    let project_key_or_id = path_segment(project_key_or_id)?;
    let endpoint = Query::new()
      .with_opt("user", account_id)
      .with_opt("group", group)
      .endpoint(&self.client.api_path(&format!("project/{project_key_or_id}/role/{role_id}")));

    self.client.send(Method::DELETE, &endpoint).await
  }
}
