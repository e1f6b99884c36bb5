//! # Jira Project Role Endpoints
//!
//! `GET /project/{key}/role` answers with a map of role name to role URL
//! rather than role objects, so the role ids are recovered from the last
//! path segment of each URL.

use std::collections::BTreeMap;

use reqwest::Method;
use tracing::{instrument, trace};

use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::{ProjectRoleDetailScheme, ProjectRoleLinkScheme, ProjectRolePayloadScheme, ProjectRoleScheme};
use crate::response::ResponseScheme;
use crate::url::path_segment;

/// Project role endpoints, obtained through [`JiraClient::project_roles`]
pub struct ProjectRoleService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub fn project_roles(&self) -> ProjectRoleService<'_> {
    ProjectRoleService { client: self }
  }
}

/// Role id from the trailing path segment of a role URL.
fn role_id_from_url(url: &str) -> Result<i64> {
  url
    .trim_end_matches('/')
    .rsplit('/')
    .next()
    .and_then(|segment| segment.parse().ok())
    .ok_or_else(|| Error::InvalidRoleUrl(url.to_string()))
}

/// Turn Jira's `name -> url` map into role links ordered by id.
pub(crate) fn role_links(roles: BTreeMap<String, String>) -> Result<Vec<ProjectRoleLinkScheme>> {
  let mut links = roles
    .into_iter()
    .map(|(name, self_url)| {
      let id = role_id_from_url(&self_url)?;
      Ok(ProjectRoleLinkScheme { id, name, self_url })
    })
    .collect::<Result<Vec<_>>>()?;

  links.sort_by_key(|link| link.id);
  Ok(links)
}

impl ProjectRoleService<'_> {
  /// Roles of a project, ordered by role id.
  #[instrument(skip(self), level = "debug")]
  pub async fn gets(&self, project_key_or_id: &str) -> Result<(Vec<ProjectRoleLinkScheme>, ResponseScheme)> {
    if project_key_or_id.is_empty() {
      return Err(Error::NoProjectKeyOrId);
    }

    let project_key_or_id = path_segment(project_key_or_id)?;
    let endpoint = self.client.api_path(&format!("project/{project_key_or_id}/role"));
    let (roles, response): (BTreeMap<String, String>, _) = self.client.call(Method::GET, &endpoint).await?;
    trace!("Project {} has {} roles", project_key_or_id, roles.len());

    Ok((role_links(roles)?, response))
  }

  /// A project role together with its actors.
  #[instrument(skip(self), level = "debug")]
  pub async fn get(&self, project_key_or_id: &str, role_id: i64) -> Result<(ProjectRoleScheme, ResponseScheme)> {
    if project_key_or_id.is_empty() {
      return Err(Error::NoProjectKeyOrId);
    }
    if role_id == 0 {
      return Err(Error::NoProjectRoleId);
    }

    let project_key_or_id = path_segment(project_key_or_id)?;
    let endpoint = self.client.api_path(&format!("project/{project_key_or_id}/role/{role_id}"));
    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn details(&self, project_key_or_id: &str) -> Result<(Vec<ProjectRoleDetailScheme>, ResponseScheme)> {
    if project_key_or_id.is_empty() {
      return Err(Error::NoProjectKeyOrId);
    }

    let project_key_or_id = path_segment(project_key_or_id)?;
    let endpoint = self.client.api_path(&format!("project/{project_key_or_id}/roledetails"));
    self.client.call(Method::GET, &endpoint).await
  }

  /// Every project role defined on the site.
  #[instrument(skip(self), level = "debug")]
  pub async fn global(&self) -> Result<(Vec<ProjectRoleScheme>, ResponseScheme)> {
    let endpoint = self.client.api_path("role");
    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self, payload), level = "debug")]
  pub async fn create(&self, payload: &ProjectRolePayloadScheme) -> Result<(ProjectRoleScheme, ResponseScheme)> {
    if payload.name.is_empty() {
      return Err(Error::NoProjectRoleName);
    }

    let endpoint = self.client.api_path("role");
    self.client.call_with(Method::POST, &endpoint, payload).await
  }
}
