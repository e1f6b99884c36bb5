//! # Jira User Search Endpoints

use reqwest::Method;
use tracing::instrument;

use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::UserScheme;
use crate::query::Query;
use crate::response::ResponseScheme;

/// User search endpoints, obtained through [`JiraClient::user_search`]
pub struct UserSearchService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub fn user_search(&self) -> UserSearchService<'_> {
    UserSearchService { client: self }
  }
}

impl UserSearchService<'_> {
  /// Users assignable to issues in every one of `project_keys`.
  #[instrument(skip(self), level = "debug")]
  pub async fn projects(
    &self,
    account_id: Option<&str>,
    project_keys: &[String],
    start_at: i32,
    max_results: i32,
  ) -> Result<(Vec<UserScheme>, ResponseScheme)> {
    if project_keys.is_empty() {
      return Err(Error::NoProjectKeys);
    }

    let endpoint = Query::new()
      .page(start_at, max_results)
      .with_joined("projectKeys", project_keys)
      .with_opt("accountId", account_id.filter(|id| !id.is_empty()))
      .endpoint(&self.client.api_path("user/assignable/multiProjectSearch"));

    self.client.call(Method::GET, &endpoint).await
  }

  /// Users matching `query` (display name or email prefix) or the given
  /// account id. At least one of the two is required.
  #[instrument(skip(self), level = "debug")]
  pub async fn search(
    &self,
    account_id: Option<&str>,
    query: Option<&str>,
    start_at: i32,
    max_results: i32,
  ) -> Result<(Vec<UserScheme>, ResponseScheme)> {
    let account_id = account_id.filter(|id| !id.is_empty());
    let query = query.filter(|q| !q.is_empty());
    if account_id.is_none() && query.is_none() {
      return Err(Error::NoUserQuery);
    }

    let endpoint = Query::new()
      .page(start_at, max_results)
      .with_opt("accountId", account_id)
      .with_opt("query", query)
      .endpoint(&self.client.api_path("user/search"));

    self.client.call(Method::GET, &endpoint).await
  }
}
