//! # Jira Dashboard Endpoints
//!
//! Listing, searching, creating, copying, updating and deleting dashboards.

use reqwest::Method;
use tracing::instrument;

use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::{
  DashboardPageScheme, DashboardPayloadScheme, DashboardScheme, DashboardSearchOptionsScheme, PageScheme,
};
use crate::query::Query;
use crate::response::ResponseScheme;
use crate::url::path_segment;

/// Dashboard endpoints, obtained through [`JiraClient::dashboards`]
pub struct DashboardService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub fn dashboards(&self) -> DashboardService<'_> {
    DashboardService { client: self }
  }
}

impl DashboardService<'_> {
  /// List the dashboards visible to the user, optionally restricted to
  /// `favourite` or `my` dashboards.
  #[instrument(skip(self), level = "debug")]
  pub async fn gets(
    &self,
    start_at: i32,
    max_results: i32,
    filter: Option<&str>,
  ) -> Result<(DashboardPageScheme, ResponseScheme)> {
    let endpoint = Query::new()
      .page(start_at, max_results)
      .with_opt("filter", filter.filter(|f| !f.is_empty()))
      .endpoint(&self.client.api_path("dashboard"));

    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self, payload), level = "debug")]
  pub async fn create(&self, payload: &DashboardPayloadScheme) -> Result<(DashboardScheme, ResponseScheme)> {
    let endpoint = self.client.api_path("dashboard");
    self.client.call_with(Method::POST, &endpoint, payload).await
  }

  /// Search dashboards by name, owner, group or project.
  #[instrument(skip(self), level = "debug")]
  pub async fn search(
    &self,
    options: &DashboardSearchOptionsScheme,
    start_at: i32,
    max_results: i32,
  ) -> Result<(PageScheme<DashboardScheme>, ResponseScheme)> {
    let endpoint = Query::new()
      .page(start_at, max_results)
      .with_opt("dashboardName", options.dashboard_name.as_deref())
      .with_opt("accountId", options.owner_account_id.as_deref())
      .with_opt("groupname", options.group_permission_name.as_deref())
      .with_opt("groupId", options.group_id.as_deref())
      .with_opt("projectId", options.project_id)
      .with_opt("orderBy", options.order_by.as_deref())
      .with_opt("status", options.status.as_deref())
      .with_joined("expand", &options.expand)
      .endpoint(&self.client.api_path("dashboard/search"));

    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn get(&self, dashboard_id: &str) -> Result<(DashboardScheme, ResponseScheme)> {
    if dashboard_id.is_empty() {
      return Err(Error::NoDashboardId);
    }

    let dashboard_id = path_segment(dashboard_id)?;
    let endpoint = self.client.api_path(&format!("dashboard/{dashboard_id}"));
    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn delete(&self, dashboard_id: &str) -> Result<ResponseScheme> {
    if dashboard_id.is_empty() {
      return Err(Error::NoDashboardId);
    }

    let dashboard_id = path_segment(dashboard_id)?;
    let endpoint = self.client.api_path(&format!("dashboard/{dashboard_id}"));
    self.client.send(Method::DELETE, &endpoint).await
  }

  /// Copy a dashboard; the payload overrides the copy's name, description
  /// and permissions.
  #[instrument(skip(self, payload), level = "debug")]
  pub async fn copy(
    &self,
    dashboard_id: &str,
    payload: &DashboardPayloadScheme,
  ) -> Result<(DashboardScheme, ResponseScheme)> {
    if dashboard_id.is_empty() {
      return Err(Error::NoDashboardId);
    }

    let dashboard_id = path_segment(dashboard_id)?;
    let endpoint = self.client.api_path(&format!("dashboard/{dashboard_id}/copy"));
    self.client.call_with(Method::POST, &endpoint, payload).await
  }

  #[instrument(skip(self, payload), level = "debug")]
  pub async fn update(
    &self,
    dashboard_id: &str,
    payload: &DashboardPayloadScheme,
  ) -> Result<(DashboardScheme, ResponseScheme)> {
    if dashboard_id.is_empty() {
      return Err(Error::NoDashboardId);
    }

    let dashboard_id = path_segment(dashboard_id)?;
    let endpoint = self.client.api_path(&format!("dashboard/{dashboard_id}"));
    self.client.call_with(Method::PUT, &endpoint, payload).await
  }
}
