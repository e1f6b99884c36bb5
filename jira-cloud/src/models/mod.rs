//! # Jira Resource Models
//!
//! Request and response payloads for the Jira REST API. Field names follow
//! Jira's camelCase JSON; anything Jira may leave out is an `Option` or an
//! empty collection.

use serde::{Deserialize, Serialize};

pub mod dashboard;
pub mod field;
pub mod field_configuration;
pub mod issue_link;
pub mod permission;
pub mod priority;
pub mod project;
pub mod resolution;
pub mod role;
pub mod screen;
pub mod task;
pub mod user;
pub mod version;
pub mod workflow;

pub use dashboard::*;
pub use field::*;
pub use field_configuration::*;
pub use issue_link::*;
pub use permission::*;
pub use priority::*;
pub use project::*;
pub use resolution::*;
pub use role::*;
pub use screen::*;
pub use task::*;
pub use user::*;
pub use version::*;
pub use workflow::*;

/// Offset-paginated result wrapper shared by most Jira search endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageScheme<T> {
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub next_page: Option<String>,
  pub max_results: Option<i32>,
  pub start_at: Option<i32>,
  pub total: Option<i32>,
  pub is_last: Option<bool>,
  #[serde(default = "Vec::new")]
  pub values: Vec<T>,
}
