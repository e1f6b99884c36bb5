//! # Jira Task Endpoints
//!
//! Long-running operations such as asynchronous project or field deletion
//! report their progress through tasks.

use reqwest::Method;
use tracing::instrument;

use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::TaskScheme;
use crate::response::ResponseScheme;
use crate::url::path_segment;

/// Task endpoints, obtained through [`JiraClient::tasks`]
pub struct TaskService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub fn tasks(&self) -> TaskService<'_> {
    TaskService { client: self }
  }
}

impl TaskService<'_> {
  #[instrument(skip(self), level = "debug")]
  pub async fn get(&self, task_id: &str) -> Result<(TaskScheme, ResponseScheme)> {
    if task_id.is_empty() {
      return Err(Error::NoTaskId);
    }

    let task_id = path_segment(task_id)?;
    let endpoint = self.client.api_path(&format!("task/{task_id}"));
    self.client.call(Method::GET, &endpoint).await
  }

  /// Request cancellation. Jira answers `202 Accepted`; the task may still
  /// finish before it is cancelled.
  #[instrument(skip(self), level = "debug")]
  pub async fn cancel(&self, task_id: &str) -> Result<ResponseScheme> {
    if task_id.is_empty() {
      return Err(Error::NoTaskId);
    }

    let task_id = path_segment(task_id)?;
    let endpoint = self.client.api_path(&format!("task/{task_id}/cancel"));
    self.client.send(Method::POST, &endpoint).await
  }
}
