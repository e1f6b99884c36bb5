//! Credential lookup in `.netrc` files.
//!
//! Jira credentials are commonly kept next to other service logins in
//! `~/.netrc`, either under the site host or under the shared
//! `atlassian.net` machine.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::trace;

/// Login and secret read from a `.netrc` entry or the environment
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials")
      .field("username", &self.username)
      .field("password", &"<redacted>")
      .finish()
  }
}

/// Returns the path to the `.netrc` file for the provided home directory.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use jira_cloud::netrc::get_netrc_path;
///
/// let path = get_netrc_path(Path::new("/home/user"));
/// assert_eq!(path, Path::new("/home/user/.netrc"));
/// ```
pub fn get_netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

/// Parses a `.netrc` file and returns credentials for the requested machine.
///
/// Both single-line (`machine host login user password pass`) and multi-line
/// entries are understood. A machine that is missing, or lacks a `login` or
/// `password`, yields `Ok(None)`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn parse_netrc_file(path: &Path, target_machine: &str) -> Result<Option<Credentials>> {
  let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
  let reader = BufReader::new(file);

  let mut current_machine: Option<String> = None;
  let mut username = String::new();
  let mut password = String::new();

  let found = |machine: &Option<String>, username: &str, password: &str| {
    machine.as_deref() == Some(target_machine) && !username.is_empty() && !password.is_empty()
  };

  for line in reader.lines() {
    let line = line.context("Failed to read line from .netrc")?;
    let mut tokens = line.split_whitespace();

    while let Some(token) = tokens.next() {
      match token {
        "machine" => {
          let Some(machine) = tokens.next() else { break };
          if found(&current_machine, &username, &password) {
            return Ok(Some(Credentials { username, password }));
          }
          current_machine = Some(machine.to_string());
          username.clear();
          password.clear();
        }
        "login" => {
          if let Some(value) = tokens.next() {
            username = value.to_string();
          }
        }
        "password" => {
          if let Some(value) = tokens.next() {
            password = value.to_string();
          }
        }
        _ => {}
      }
    }
  }

  if found(&current_machine, &username, &password) {
    return Ok(Some(Credentials { username, password }));
  }

  Ok(None)
}

/// Look up `machine` in `<home>/.netrc`. A missing file is not an error.
pub fn netrc_credentials(home: &Path, machine: &str) -> Result<Option<Credentials>> {
  let path = get_netrc_path(home);
  if !path.exists() {
    trace!("No .netrc at {}", path.display());
    return Ok(None);
  }

  parse_netrc_file(&path, machine)
}

/// Strips the scheme and trailing slash from a site URL so it matches a
/// `.netrc` machine name.
///
/// ```
/// use jira_cloud::netrc::normalize_host;
///
/// assert_eq!(normalize_host("https://company.atlassian.net/"), "company.atlassian.net");
/// assert_eq!(normalize_host("jira.example.com"), "jira.example.com");
/// ```
pub fn normalize_host(raw_host: &str) -> String {
  raw_host
    .trim()
    .trim_start_matches("https://")
    .trim_start_matches("http://")
    .trim_end_matches('/')
    .to_string()
}

#[cfg(test)]
mod tests {
  use jira_test_utils::NetrcGuard;

  use super::*;

  #[test]
  fn test_parse_netrc_file_multiple_machines() -> anyhow::Result<()> {
    let guard = NetrcGuard::new(
      r#"machine example.com
  login user1
  password pass1

machine company.atlassian.net
  login user2@example.com
  password token2

machine atlassian.net
  login user3@example.com
  password token3
"#,
    );

    let creds = parse_netrc_file(guard.netrc_path(), "example.com")?;
    assert_eq!(creds.map(|c| c.username).as_deref(), Some("user1"));

    let creds = parse_netrc_file(guard.netrc_path(), "company.atlassian.net")?;
    assert_eq!(creds.map(|c| c.password).as_deref(), Some("token2"));

    let creds = parse_netrc_file(guard.netrc_path(), "atlassian.net")?;
    assert_eq!(creds.map(|c| c.username).as_deref(), Some("user3@example.com"));

    Ok(())
  }

  #[test]
  fn test_parse_netrc_file_single_line_and_mixed_format() -> anyhow::Result<()> {
    let guard = NetrcGuard::new(
      r#"machine example.com login user1 password pass1
machine atlassian.net login user3
  password pass3
"#,
    );

    let creds = parse_netrc_file(guard.netrc_path(), "example.com")?;
    assert_eq!(
      creds,
      Some(Credentials {
        username: "user1".to_string(),
        password: "pass1".to_string(),
      })
    );

    let creds = parse_netrc_file(guard.netrc_path(), "atlassian.net")?;
    assert_eq!(creds.map(|c| c.password).as_deref(), Some("pass3"));

    Ok(())
  }

  #[test]
  fn test_parse_netrc_file_incomplete_entry() -> anyhow::Result<()> {
    let guard = NetrcGuard::new(
      r#"machine example.com
  login testuser
  # missing password
machine github.com
  login user2
  password pass2
  some-invalid-line
"#,
    );

    assert!(parse_netrc_file(guard.netrc_path(), "example.com")?.is_none());
    assert!(parse_netrc_file(guard.netrc_path(), "github.com")?.is_some());
    assert!(parse_netrc_file(guard.netrc_path(), "nonexistent.com")?.is_none());

    Ok(())
  }

  #[test]
  fn test_missing_netrc_is_not_an_error() -> anyhow::Result<()> {
    let home = NetrcGuard::empty_home();

    assert!(netrc_credentials(home.path(), "atlassian.net")?.is_none());
    assert!(parse_netrc_file(&get_netrc_path(home.path()), "atlassian.net").is_err());

    Ok(())
  }

  #[test]
  fn test_credentials_debug_redacts_password() {
    let creds = Credentials {
      username: "me@example.com".to_string(),
      password: "secret".to_string(),
    };

    let rendered = format!("{creds:?}");
    assert!(rendered.contains("me@example.com"));
    assert!(!rendered.contains("secret"));
  }

  #[test]
  fn test_normalize_host() {
    assert_eq!(normalize_host("https://api.example.com/"), "api.example.com");
    assert_eq!(normalize_host("http://localhost:8080/"), "localhost:8080");
    assert_eq!(normalize_host(" company.atlassian.net "), "company.atlassian.net");
  }
}
