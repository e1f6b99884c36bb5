//! # Jira Screen Tab Endpoints

use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::ScreenTabScheme;
use crate::query::Query;
use crate::response::ResponseScheme;

/// Screen tab endpoints, obtained through [`JiraClient::screen_tabs`]
pub struct ScreenTabService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub fn screen_tabs(&self) -> ScreenTabService<'_> {
    ScreenTabService { client: self }
  }
}

#[derive(Serialize)]
struct TabPayload<'a> {
  name: &'a str,
}

impl ScreenTabService<'_> {
  /// Tabs of a screen. `project_key` is only needed by users without the
  /// global admin permission.
  #[instrument(skip(self), level = "debug")]
  pub async fn gets(&self, screen_id: i64, project_key: Option<&str>) -> Result<(Vec<ScreenTabScheme>, ResponseScheme)> {
    if screen_id == 0 {
      return Err(Error::NoScreenId);
    }

    let endpoint = Query::new()
      .with_opt("projectKey", project_key.filter(|key| !key.is_empty()))
      .endpoint(&self.client.api_path(&format!("screens/{screen_id}/tabs")));

    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn create(&self, screen_id: i64, tab_name: &str) -> Result<(ScreenTabScheme, ResponseScheme)> {
    if screen_id == 0 {
      return Err(Error::NoScreenId);
    }
    if tab_name.is_empty() {
      return Err(Error::NoScreenTabName);
    }

    let endpoint = self.client.api_path(&format!("screens/{screen_id}/tabs"));
    self
      .client
      .call_with(Method::POST, &endpoint, &TabPayload { name: tab_name })
      .await
  }

  /// Rename a tab.
  #[instrument(skip(self), level = "debug")]
  pub async fn update(&self, screen_id: i64, tab_id: i64, new_tab_name: &str) -> Result<(ScreenTabScheme, ResponseScheme)> {
    if screen_id == 0 {
      return Err(Error::NoScreenId);
    }
    if tab_id == 0 {
      return Err(Error::NoScreenTabId);
    }
    if new_tab_name.is_empty() {
      return Err(Error::NoScreenTabName);
    }

    let endpoint = self.client.api_path(&format!("screens/{screen_id}/tabs/{tab_id}"));
    self
      .client
      .call_with(Method::PUT, &endpoint, &TabPayload { name: new_tab_name })
      .await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn delete(&self, screen_id: i64, tab_id: i64) -> Result<ResponseScheme> {
    if screen_id == 0 {
      return Err(Error::NoScreenId);
    }
    if tab_id == 0 {
      return Err(Error::NoScreenTabId);
    }

    let endpoint = self.client.api_path(&format!("screens/{screen_id}/tabs/{tab_id}"));
    self.client.send(Method::DELETE, &endpoint).await
  }

  /// Move a tab to `position` (zero based) among the screen's tabs.
  #[instrument(skip(self), level = "debug")]
  pub async fn move_tab(&self, screen_id: i64, tab_id: i64, position: i32) -> Result<ResponseScheme> {
    if screen_id == 0 {
      return Err(Error::NoScreenId);
    }
    if tab_id == 0 {
      return Err(Error::NoScreenTabId);
    }

    let endpoint = self.client.api_path(&format!("screens/{screen_id}/tabs/{tab_id}/move/{position}"));
    self.client.send(Method::POST, &endpoint).await
  }
}
