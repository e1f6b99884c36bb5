//! Site URL normalization.
//!
//! Jira sites are commonly configured as bare hosts (`company.atlassian.net`)
//! or with slightly mangled schemes. These helpers turn that input into a base
//! URL that relative endpoints can be joined onto.

use url::{Position, Url};

use crate::error::{Error, Result};

/// Render a URL without the lone `/` path Url adds to bare hosts.
fn normalize_url(url: &Url) -> String {
  let mut result = String::new();
  result.push_str(&url[..Position::BeforePath]);

  let path = url.path();
  if path != "/" {
    result.push_str(path.trim_end_matches('/'));
  }

  result
}

fn invalid_site(input: &str, source: url::ParseError) -> Error {
  Error::InvalidSite {
    site: input.to_string(),
    source,
  }
}

/// Parse a URL by prefixing it with https:// scheme.
fn parse_with_https_prefix(input: &str) -> Result<Url> {
  let with_scheme = format!("https://{input}");
  Url::parse(&with_scheme).map_err(|source| invalid_site(input, source))
}

/// Ensure a site has a proper scheme (http:// or https://).
///
/// If the input doesn't include a scheme, assumes https://. Also handles
/// malformed schemes like "https:/example.com" (missing slash). Query strings
/// and fragments are dropped since endpoints carry their own.
pub fn ensure_url_scheme(input: &str) -> Result<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(invalid_site(input, url::ParseError::EmptyHost));
  }

  let lowered = trimmed.to_ascii_lowercase();
  for scheme in ["http", "https"] {
    let prefix = format!("{scheme}:");
    if lowered.starts_with(&prefix) && !lowered.starts_with(&format!("{prefix}//")) {
      let remainder = trimmed[prefix.len()..].trim_start_matches('/');
      let url = Url::parse(&format!("{scheme}://{remainder}")).map_err(|source| invalid_site(input, source))?;
      return Ok(normalize_url(&url));
    }
  }

  let url = match Url::parse(trimmed) {
    Ok(url) if url.host().is_some() && matches!(url.scheme(), "http" | "https") => url,
    _ => parse_with_https_prefix(trimmed)?,
  };

  Ok(normalize_url(&url))
}

/// Parse a site into the base URL used for joining endpoints.
///
/// The result always ends with `/` so `rest/api/3/...` resolves beneath any
/// context path the site carries.
pub(crate) fn parse_site(input: &str) -> Result<Url> {
  let normalized = ensure_url_scheme(input)?;
  Url::parse(&format!("{normalized}/")).map_err(|source| invalid_site(input, source))
}

/// Percent-encode one caller-supplied path segment.
///
/// Everything outside the unreserved set is escaped, so an id cannot add
/// segments, start a query or start a fragment. `.` and `..` are rejected
/// outright because URL resolution treats them as dot segments even when
/// percent-encoded.
pub(crate) fn path_segment(value: &str) -> Result<String> {
  if matches!(value, "." | "..") {
    return Err(Error::InvalidPathSegment(value.to_string()));
  }
  Ok(urlencoding::encode(value).into_owned())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ensure_url_scheme_adds_https() {
    assert_eq!(
      ensure_url_scheme("company.atlassian.net").unwrap(),
      "https://company.atlassian.net"
    );
    assert_eq!(
      ensure_url_scheme("  company.atlassian.net/  ").unwrap(),
      "https://company.atlassian.net"
    );
  }

  #[test]
  fn test_ensure_url_scheme_keeps_existing_scheme() {
    assert_eq!(
      ensure_url_scheme("http://localhost:8080").unwrap(),
      "http://localhost:8080"
    );
    assert_eq!(
      ensure_url_scheme("https://company.atlassian.net/jira/").unwrap(),
      "https://company.atlassian.net/jira"
    );
  }

  #[test]
  fn test_ensure_url_scheme_repairs_malformed_scheme() {
    assert_eq!(
      ensure_url_scheme("https:/company.atlassian.net").unwrap(),
      "https://company.atlassian.net"
    );
    assert_eq!(
      ensure_url_scheme("http:company.atlassian.net").unwrap(),
      "http://company.atlassian.net"
    );
  }

  #[test]
  fn test_ensure_url_scheme_rejects_empty_input() {
    let err = ensure_url_scheme("   ").unwrap_err();
    assert!(matches!(err, Error::InvalidSite { .. }));
  }

  #[test]
  fn test_parse_site_has_trailing_slash() {
    let site = parse_site("company.atlassian.net").unwrap();
    assert_eq!(site.as_str(), "https://company.atlassian.net/");
    assert_eq!(
      site.join("rest/api/3/dashboard").unwrap().as_str(),
      "https://company.atlassian.net/rest/api/3/dashboard"
    );

    let site = parse_site("https://example.com/jira").unwrap();
    assert_eq!(
      site.join("rest/api/3/dashboard").unwrap().as_str(),
      "https://example.com/jira/rest/api/3/dashboard"
    );
  }

  #[test]
  fn test_path_segment_escapes_separators() {
    assert_eq!(path_segment("KP").unwrap(), "KP");
    assert_eq!(path_segment("10000").unwrap(), "10000");
    assert_eq!(path_segment("a/b#c?d").unwrap(), "a%2Fb%23c%3Fd");
    assert_eq!(path_segment("../../3/myself").unwrap(), "..%2F..%2F3%2Fmyself");
    assert_eq!(path_segment("%2e%2e").unwrap(), "%252e%252e");
    assert_eq!(path_segment("my field").unwrap(), "my%20field");
  }

  #[test]
  fn test_path_segment_rejects_dot_segments() {
    assert!(matches!(path_segment(".."), Err(Error::InvalidPathSegment(s)) if s == ".."));
    assert!(matches!(path_segment("."), Err(Error::InvalidPathSegment(_))));
    assert!(path_segment("...").is_ok());
  }
}
