//! Error types for the Jira client.
//!
//! Missing identifiers are reported through dedicated variants so callers can
//! match on them without string comparison. Everything that happens after a
//! request is built (transport, status, decoding) has its own variant too.

use reqwest::StatusCode;
use thiserror::Error;

use crate::response::ResponseScheme;

#[derive(Debug, Error)]
pub enum Error {
  #[error("no dashboard id set")]
  NoDashboardId,
  #[error("no field id set")]
  NoFieldId,
  #[error("no field configuration id set")]
  NoFieldConfigurationId,
  #[error("no field configuration name set")]
  NoFieldConfigurationName,
  #[error("no field configuration scheme id set")]
  NoFieldConfigurationSchemeId,
  #[error("no field configuration scheme name set")]
  NoFieldConfigurationSchemeName,
  #[error("no issue type ids set")]
  NoIssueTypeIds,
  #[error("no issue key/id set")]
  NoIssueKeyOrId,
  #[error("no link id set")]
  NoLinkId,
  #[error("no link type id set")]
  NoLinkTypeId,
  #[error("no priority id set")]
  NoPriorityId,
  #[error("no resolution id set")]
  NoResolutionId,
  #[error("no permission keys set")]
  NoPermissionKeys,
  #[error("no permission scheme id set")]
  NoPermissionSchemeId,
  #[error("no permission grant id set")]
  NoPermissionGrantId,
  #[error("no project id set")]
  NoProjectId,
  #[error("no project key/id set")]
  NoProjectKeyOrId,
  #[error("no project keys set")]
  NoProjectKeys,
  #[error("no project role id set")]
  NoProjectRoleId,
  #[error("no project role name set")]
  NoProjectRoleName,
  #[error("no account id or group name set")]
  NoRoleActor,
  #[error("no version id set")]
  NoVersionId,
  #[error("no move-to version id set")]
  NoMoveToVersionId,
  #[error("no screen id set")]
  NoScreenId,
  #[error("no screen name set")]
  NoScreenName,
  #[error("no screen tab id set")]
  NoScreenTabId,
  #[error("no screen tab name set")]
  NoScreenTabName,
  #[error("no task id set")]
  NoTaskId,
  #[error("no account id set")]
  NoAccountId,
  #[error("no account ids set")]
  NoAccountIds,
  #[error("no user query or account id set")]
  NoUserQuery,
  #[error("no workflow id set")]
  NoWorkflowId,
  #[error("no workflow scheme id set")]
  NoWorkflowSchemeId,

  #[error("invalid Jira site '{site}': {source}")]
  InvalidSite {
    site: String,
    #[source]
    source: url::ParseError,
  },

  #[error("invalid endpoint '{endpoint}': {source}")]
  InvalidEndpoint {
    endpoint: String,
    #[source]
    source: url::ParseError,
  },

  #[error("failed to build HTTP client: {0}")]
  ClientBuild(#[source] reqwest::Error),

  #[error("request failed: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("failed to encode request payload: {0}")]
  Encode(#[source] serde_json::Error),

  #[error("failed to decode response body: {0}")]
  Decode(#[source] serde_json::Error),

  #[error(
    "request failed. Please analyze the request body for more details. Status Code: {}{}",
    .status.as_u16(),
    .response.api_error_summary().map(|s| format!(" ({s})")).unwrap_or_default()
  )]
  RequestFailed {
    status: StatusCode,
    response: Box<ResponseScheme>,
  },

  #[error("'{0}' is not a valid path segment")]
  InvalidPathSegment(String),

  #[error("role url '{0}' does not end with a numeric role id")]
  InvalidRoleUrl(String),
}

impl Error {
  /// HTTP status code when the error came from a non-success response.
  pub fn status(&self) -> Option<StatusCode> {
    match self {
      Self::RequestFailed { status, .. } => Some(*status),
      Self::Transport(err) => err.status(),
      _ => None,
    }
  }

  /// Response envelope when the error came from a non-success response.
  pub fn response(&self) -> Option<&ResponseScheme> {
    match self {
      Self::RequestFailed { response, .. } => Some(response),
      _ => None,
    }
  }
}

pub type Result<T> = std::result::Result<T, Error>;
