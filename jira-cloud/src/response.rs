//! Response envelope handed back alongside every decoded result.

use std::borrow::Cow;
use std::collections::BTreeMap;

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::Deserialize;

/// Raw view of a completed Jira request.
#[derive(Debug, Clone)]
pub struct ResponseScheme {
  pub method: Method,
  /// Fully resolved URL, including the encoded query string
  pub endpoint: String,
  pub status: StatusCode,
  pub headers: HeaderMap,
  pub bytes: Vec<u8>,
}

/// Error body Jira attaches to most 4xx responses.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorScheme {
  #[serde(default)]
  pub error_messages: Vec<String>,
  #[serde(default)]
  pub errors: BTreeMap<String, String>,
  #[serde(default)]
  pub warning_messages: Vec<String>,
}

impl ResponseScheme {
  /// Numeric status code.
  pub fn code(&self) -> u16 {
    self.status.as_u16()
  }

  pub fn is_success(&self) -> bool {
    self.status.is_success()
  }

  /// Body as text, replacing invalid UTF-8.
  pub fn text(&self) -> Cow<'_, str> {
    String::from_utf8_lossy(&self.bytes)
  }

  /// Parse the body as a Jira error document, if it is one.
  pub fn api_errors(&self) -> Option<ApiErrorScheme> {
    serde_json::from_slice::<ApiErrorScheme>(&self.bytes)
      .ok()
      .filter(|errors| !errors.error_messages.is_empty() || !errors.errors.is_empty())
  }

  /// One-line summary of [`Self::api_errors`], used in error messages.
  pub(crate) fn api_error_summary(&self) -> Option<String> {
    let errors = self.api_errors()?;
    let mut parts = errors.error_messages;
    parts.extend(errors.errors.into_iter().map(|(field, message)| format!("{field}: {message}")));
    Some(parts.join("; "))
  }
}
