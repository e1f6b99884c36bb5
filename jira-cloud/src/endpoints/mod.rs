//! # Jira API Endpoints
//!
//! One service per Jira resource family. A service borrows the shared
//! [`JiraClient`](crate::JiraClient) and exposes one method per REST endpoint;
//! all of them validate their required identifiers before any request is made.

pub mod dashboards;
pub mod field_configuration_schemes;
pub mod field_configurations;
pub mod fields;
pub mod issue_link_types;
pub mod issue_links;
pub mod permission_grants;
pub mod permission_schemes;
pub mod permissions;
pub mod priorities;
pub mod project_role_actors;
pub mod project_roles;
pub mod project_versions;
pub mod projects;
pub mod resolutions;
pub mod screen_tabs;
pub mod screens;
pub mod tasks;
pub mod user_search;
pub mod users;
pub mod workflow_schemes;
pub mod workflows;

#[cfg(test)]
pub(crate) mod test_support {
  use wiremock::MockServer;

  use crate::client::{JiraAuth, JiraClient};

  /// Start a mock server and a client pointed at it.
  pub(crate) async fn mock_client() -> (MockServer, JiraClient) {
    let mock_server = MockServer::start().await;
    let client = JiraClient::new(&mock_server.uri(), JiraAuth::basic("test_user", "test_token"))
      .expect("mock server uri is a valid site");
    (mock_server, client)
  }
}
