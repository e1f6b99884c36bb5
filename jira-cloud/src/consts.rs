//! Constants for the jira-cloud client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Media type sent in `Accept` and, for requests with a payload, `Content-Type`
pub const APPLICATION_JSON: &str = "application/json";

/// Environment variable storing the Jira site URL.
pub const ENV_JIRA_HOST: &str = "JIRA_HOST";

/// Environment variable storing the Atlassian account email used for basic auth.
pub const ENV_JIRA_USER: &str = "JIRA_USER";

/// Environment variable storing the Atlassian API token used for basic auth.
pub const ENV_JIRA_API_TOKEN: &str = "JIRA_API_TOKEN";

/// Fallback `.netrc` machine consulted when the site has no entry of its own.
pub const ATLASSIAN_NETRC_MACHINE: &str = "atlassian.net";
