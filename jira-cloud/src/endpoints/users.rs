//! # Jira User Endpoints
//!
//! Users are addressed by Atlassian account id, always passed as the
//! `accountId` query parameter.

use reqwest::Method;
use tracing::instrument;

use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::{PageScheme, UserGroupScheme, UserPayloadScheme, UserScheme};
use crate::query::Query;
use crate::response::ResponseScheme;

/// User endpoints, obtained through [`JiraClient::users`]
pub struct UserService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub fn users(&self) -> UserService<'_> {
    UserService { client: self }
  }
}

impl UserService<'_> {
  /// Fetch a user. `expand` may include `groups` and `applicationRoles`.
  #[instrument(skip(self), level = "debug")]
  pub async fn get(&self, account_id: &str, expand: &[String]) -> Result<(UserScheme, ResponseScheme)> {
    if account_id.is_empty() {
      return Err(Error::NoAccountId);
    }

    let endpoint = Query::new()
      .with("accountId", account_id)
      .with_joined("expand", expand)
      .endpoint(&self.client.api_path("user"));

    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self, payload), level = "debug")]
  pub async fn create(&self, payload: &UserPayloadScheme) -> Result<(UserScheme, ResponseScheme)> {
    let endpoint = self.client.api_path("user");
    self.client.call_with(Method::POST, &endpoint, payload).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn delete(&self, account_id: &str) -> Result<ResponseScheme> {
    if account_id.is_empty() {
      return Err(Error::NoAccountId);
    }

    let endpoint = Query::new()
      .with("accountId", account_id)
      .endpoint(&self.client.api_path("user"));

    self.client.send(Method::DELETE, &endpoint).await
  }

  /// Bulk lookup by account id.
  #[instrument(skip(self), level = "debug")]
  pub async fn find(
    &self,
    account_ids: &[String],
    start_at: i32,
    max_results: i32,
  ) -> Result<(PageScheme<UserScheme>, ResponseScheme)> {
    if account_ids.is_empty() {
      return Err(Error::NoAccountIds);
    }

    let endpoint = Query::new()
      .page(start_at, max_results)
      .with_each("accountId", account_ids)
      .endpoint(&self.client.api_path("user/bulk"));

    self.client.call(Method::GET, &endpoint).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn groups(&self, account_id: &str) -> Result<(Vec<UserGroupScheme>, ResponseScheme)> {
    if account_id.is_empty() {
      return Err(Error::NoAccountId);
    }

    let endpoint = Query::new()
      .with("accountId", account_id)
      .endpoint(&self.client.api_path("user/groups"));

    self.client.call(Method::GET, &endpoint).await
  }

  /// Every user on the site, including inactive and app users.
  #[instrument(skip(self), level = "debug")]
  pub async fn gets(&self, start_at: i32, max_results: i32) -> Result<(Vec<UserScheme>, ResponseScheme)> {
    let endpoint = Query::new()
      .page(start_at, max_results)
      .endpoint(&self.client.api_path("users/search"));

    self.client.call(Method::GET, &endpoint).await
  }
}
