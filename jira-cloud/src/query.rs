//! Query string assembly for endpoint URLs.
//!
//! Keys are encoded in sorted order so the same parameters always produce the
//! same endpoint string. Repeated keys keep the order they were added in.

use std::collections::BTreeMap;
use std::fmt::Display;

use url::form_urlencoded;

#[derive(Debug, Default, Clone)]
pub(crate) struct Query {
  params: BTreeMap<String, Vec<String>>,
}

impl Query {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// Add a value under `key`, keeping any values already present.
  pub(crate) fn with(mut self, key: &str, value: impl Display) -> Self {
    self.params.entry(key.to_string()).or_default().push(value.to_string());
    self
  }

  pub(crate) fn with_opt<V: Display>(self, key: &str, value: Option<V>) -> Self {
    match value {
      Some(value) => self.with(key, value),
      None => self,
    }
  }

  /// Add `value` unless it is empty.
  pub(crate) fn with_non_empty(self, key: &str, value: &str) -> Self {
    if value.is_empty() { self } else { self.with(key, value) }
  }

  /// Add `true` only when the flag is set; Jira treats absence as `false`.
  pub(crate) fn with_flag(self, key: &str, flag: bool) -> Self {
    if flag { self.with(key, true) } else { self }
  }

  /// Repeat `key` once per value (`id=1&id=2`).
  pub(crate) fn with_each<I>(mut self, key: &str, values: I) -> Self
  where
    I: IntoIterator,
    I::Item: Display,
  {
    for value in values {
      self = self.with(key, value);
    }
    self
  }

  /// Join values with commas under a single key (`expand=a,b`). Skipped when
  /// there is nothing to join.
  pub(crate) fn with_joined<S: AsRef<str>>(self, key: &str, values: &[S]) -> Self {
    if values.is_empty() {
      return self;
    }
    let joined = values.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
    self.with(key, joined)
  }

  /// Standard `startAt`/`maxResults` pagination pair.
  pub(crate) fn page(self, start_at: i32, max_results: i32) -> Self {
    self.with("startAt", start_at).with("maxResults", max_results)
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.params.is_empty()
  }

  pub(crate) fn encode(&self) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, values) in &self.params {
      for value in values {
        serializer.append_pair(key, value);
      }
    }
    serializer.finish()
  }

  /// `path` with the encoded query appended, or `path` alone when empty.
  pub(crate) fn endpoint(&self, path: &str) -> String {
    if self.is_empty() {
      path.to_string()
    } else {
      format!("{path}?{}", self.encode())
    }
  }
}
