use serde::{Deserialize, Serialize};

/// Long-running Jira task, as returned by asynchronous deletes
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskScheme {
  pub id: String,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub description: Option<String>,
  /// `ENQUEUED`, `RUNNING`, `COMPLETE`, `FAILED`, `CANCEL_REQUESTED`, `CANCELLED` or `DEAD`
  pub status: Option<String>,
  pub message: Option<String>,
  pub result: Option<serde_json::Value>,
  pub submitted_by: Option<i64>,
  pub progress: Option<i64>,
  pub elapsed_runtime: Option<i64>,
  pub submitted: Option<i64>,
  pub started: Option<i64>,
  pub finished: Option<i64>,
  pub last_update: Option<i64>,
}
