//! # Jira Cloud API Client
//!
//! Typed access to the Jira Cloud REST API: dashboards, fields and field
//! configurations, issue links, priorities, resolutions, permissions,
//! projects and their roles and versions, screens, long-running tasks, users
//! and workflows.
//!
//! Every resource family is a lightweight service borrowed from a shared
//! [`JiraClient`]:
//!
//! ```no_run
//! # async fn run() -> jira_cloud::Result<()> {
//! let client = jira_cloud::create_jira_client("company.atlassian.net", "me@example.com", "api-token")?;
//!
//! let (project, response) = client.projects().get("KP", &[]).await?;
//! println!("{:?} ({})", project.name, response.code());
//! # Ok(())
//! # }
//! ```

pub mod auth;
mod client;
pub mod consts;
pub mod endpoints;
mod error;
pub mod models;
pub mod netrc;
mod query;
mod response;
mod url;

pub use auth::{
  check_jira_credentials, create_jira_client_from_env, create_jira_client_from_netrc, create_jira_runtime_and_client,
  get_jira_credentials, get_jira_host,
};
// Re-export the client
pub use client::{ApiVersion, JiraAuth, JiraClient, JiraClientBuilder, create_jira_client};
pub use endpoints::dashboards::DashboardService;
pub use endpoints::field_configuration_schemes::FieldConfigurationSchemeService;
pub use endpoints::field_configurations::FieldConfigurationService;
pub use endpoints::fields::FieldService;
pub use endpoints::issue_link_types::IssueLinkTypeService;
pub use endpoints::issue_links::IssueLinkService;
pub use endpoints::permission_grants::PermissionGrantService;
pub use endpoints::permission_schemes::PermissionSchemeService;
pub use endpoints::permissions::PermissionService;
pub use endpoints::priorities::PriorityService;
pub use endpoints::project_role_actors::ProjectRoleActorService;
pub use endpoints::project_roles::ProjectRoleService;
pub use endpoints::project_versions::ProjectVersionService;
pub use endpoints::projects::ProjectService;
pub use endpoints::resolutions::ResolutionService;
pub use endpoints::screen_tabs::ScreenTabService;
pub use endpoints::screens::ScreenService;
pub use endpoints::tasks::TaskService;
pub use endpoints::user_search::UserSearchService;
pub use endpoints::users::UserService;
pub use endpoints::workflow_schemes::WorkflowSchemeService;
pub use endpoints::workflows::WorkflowService;
pub use error::{Error, Result};
pub use netrc::Credentials;
pub use response::{ApiErrorScheme, ResponseScheme};
pub use crate::url::ensure_url_scheme;
