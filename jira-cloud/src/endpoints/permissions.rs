//! # Jira Permission Endpoints
//!
//! The permission catalogue and permission checks for the current user.

use std::collections::BTreeMap;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::{PermissionCheckPayload, PermissionGrantsScheme, PermissionScheme, PermittedProjectsScheme};
use crate::response::ResponseScheme;

/// Permission endpoints, obtained through [`JiraClient::permissions`]
pub struct PermissionService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub fn permissions(&self) -> PermissionService<'_> {
    PermissionService { client: self }
  }
}

/// Jira keys the catalogue by permission key.
#[derive(Deserialize)]
struct PermissionCatalogue {
  #[serde(default)]
  permissions: BTreeMap<String, PermissionScheme>,
}

#[derive(Serialize)]
struct PermittedProjectsPayload<'a> {
  permissions: &'a [String],
}

impl PermissionService<'_> {
  /// Every permission Jira knows about, ordered by key.
  #[instrument(skip(self), level = "debug")]
  pub async fn gets(&self) -> Result<(Vec<PermissionScheme>, ResponseScheme)> {
    let endpoint = self.client.api_path("permissions");
    let (catalogue, response): (PermissionCatalogue, _) = self.client.call(Method::GET, &endpoint).await?;

    Ok((catalogue.permissions.into_values().collect(), response))
  }

  /// Check global and project permissions, for the calling user or for
  /// `account_id` when set.
  #[instrument(skip(self, payload), level = "debug")]
  pub async fn check(&self, payload: &PermissionCheckPayload) -> Result<(PermissionGrantsScheme, ResponseScheme)> {
    let endpoint = self.client.api_path("permissions/check");
    self.client.call_with(Method::POST, &endpoint, payload).await
  }

  /// Projects where the user holds all of `permission_keys`.
  #[instrument(skip(self), level = "debug")]
  pub async fn projects(&self, permission_keys: &[String]) -> Result<(PermittedProjectsScheme, ResponseScheme)> {
    if permission_keys.is_empty() {
      return Err(Error::NoPermissionKeys);
    }

    let endpoint = self.client.api_path("permissions/project");
    let payload = PermittedProjectsPayload {
      permissions: permission_keys,
    };
    self.client.call_with(Method::POST, &endpoint, &payload).await
  }
}
