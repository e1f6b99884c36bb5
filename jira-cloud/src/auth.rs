//! Authentication helpers for the Jira client.
//!
//! Credential lookup and runtime construction live here so command-line
//! front ends and synchronous callers share one authentication flow.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use tracing::debug;

use crate::client::{JiraClient, create_jira_client};
use crate::consts::{ATLASSIAN_NETRC_MACHINE, ENV_JIRA_API_TOKEN, ENV_JIRA_HOST, ENV_JIRA_USER};
use crate::netrc::{Credentials, netrc_credentials, normalize_host};
use crate::url::ensure_url_scheme;

/// Get the $JIRA_HOST environment variable value.
/// If the host doesn't include a scheme (http:// or https://), assumes https://.
pub fn get_jira_host() -> Result<String> {
  let host = std::env::var(ENV_JIRA_HOST)
    .with_context(|| format!("Jira host environment variable '{ENV_JIRA_HOST}' not set"))?;
  Ok(ensure_url_scheme(&host)?)
}

/// Read `JIRA_USER` and `JIRA_API_TOKEN`. Both must be set and non-empty.
fn env_credentials() -> Option<Credentials> {
  let username = std::env::var(ENV_JIRA_USER).ok().filter(|v| !v.is_empty())?;
  let password = std::env::var(ENV_JIRA_API_TOKEN).ok().filter(|v| !v.is_empty())?;
  Some(Credentials { username, password })
}

/// Look up credentials for `jira_host` in `<home>/.netrc`, falling back to the
/// shared `atlassian.net` machine.
fn lookup_netrc_credentials(home: &Path, jira_host: &str) -> Result<Credentials> {
  let normalized_host = normalize_host(jira_host);
  if let Some(creds) = netrc_credentials(home, &normalized_host)? {
    debug!("Using .netrc credentials for {normalized_host}");
    return Ok(creds);
  }
  if let Some(creds) = netrc_credentials(home, ATLASSIAN_NETRC_MACHINE)? {
    debug!("Using .netrc credentials for {ATLASSIAN_NETRC_MACHINE}");
    return Ok(creds);
  }

  Err(anyhow::anyhow!(
    "Jira credentials not found. Set {ENV_JIRA_USER} and {ENV_JIRA_API_TOKEN}, or add credentials to .netrc for machine '{normalized_host}' or '{ATLASSIAN_NETRC_MACHINE}'."
  ))
}

/// Retrieve Jira credentials for the provided host.
///
/// `JIRA_USER` + `JIRA_API_TOKEN` take precedence; otherwise `.netrc` is
/// consulted for the host and then for `atlassian.net`.
pub fn get_jira_credentials(home: &Path, jira_host: &str) -> Result<Credentials> {
  if let Some(creds) = env_credentials() {
    debug!("Using Jira credentials from {ENV_JIRA_USER}/{ENV_JIRA_API_TOKEN}");
    return Ok(creds);
  }

  lookup_netrc_credentials(home, jira_host)
}

/// Check if Jira credentials are available for the provided host.
pub fn check_jira_credentials(home: &Path, jira_host: &str) -> Result<bool> {
  Ok(get_jira_credentials(home, jira_host).is_ok())
}

/// Creates an authenticated Jira client using credentials from .netrc only.
pub fn create_jira_client_from_netrc(home: &Path, jira_host: &str) -> Result<JiraClient> {
  let credentials = lookup_netrc_credentials(home, jira_host).context("Failed to get credentials")?;

  create_jira_client(jira_host, &credentials.username, &credentials.password)
    .with_context(|| format!("Failed to create Jira client for {jira_host}"))
}

/// Creates an authenticated Jira client from `JIRA_HOST` plus whichever
/// credential source is configured.
pub fn create_jira_client_from_env(home: &Path) -> Result<JiraClient> {
  let jira_host = get_jira_host()?;
  let credentials = get_jira_credentials(home, &jira_host).context("Failed to get credentials")?;

  create_jira_client(&jira_host, &credentials.username, &credentials.password)
    .with_context(|| format!("Failed to create Jira client for {jira_host}"))
}

/// Creates a tokio runtime and an authenticated Jira client.
pub fn create_jira_runtime_and_client(home: &Path, jira_host: &str) -> Result<(Runtime, JiraClient)> {
  let rt = Runtime::new().context("Failed to create async runtime")?;
  let credentials = get_jira_credentials(home, jira_host).context("Failed to get credentials")?;
  let client = create_jira_client(jira_host, &credentials.username, &credentials.password)
    .with_context(|| format!("Failed to create Jira client for {jira_host}"))?;
  Ok((rt, client))
}
