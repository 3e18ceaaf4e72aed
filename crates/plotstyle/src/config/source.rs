//! Reading configuration sources from disk or over HTTP.
//!
//! A source string starting with `http://` or `https://` is fetched remotely;
//! anything else is a local path. Remote requests carry an
//! `Authorization: Bearer <token>` header only when a token is supplied and the
//! host belongs to one of the configured source-hosting domains, so tokens are
//! never sent to arbitrary servers.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use once_cell::sync::{Lazy, OnceCell};
use reqwest::blocking::Client;
use reqwest::Url;

use crate::error::FetchError;

static USER_AGENT: Lazy<String> = Lazy::new(|| format!("plotstyle/{}", env!("CARGO_PKG_VERSION")));

/// Hosts that receive the auth token by default, including their subdomains.
pub const DEFAULT_TOKEN_HOSTS: &[&str] = &[
    "github.com",
    "raw.githubusercontent.com",
    "gitlab.com",
    "bitbucket.org",
];

/// Where a palette, theme or font file lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Local(PathBuf),
    Remote(String),
}

impl Source {
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            Source::Remote(source.to_string())
        } else {
            Source::Local(PathBuf::from(source))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Source::Remote(_))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Local(path) => write!(f, "{}", path.display()),
            Source::Remote(url) => f.write_str(url),
        }
    }
}

/// Settings for remote fetches.
#[derive(Clone, Debug)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
    /// Domains allowed to receive the auth token.
    pub token_hosts: Vec<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(120),
            user_agent: USER_AGENT.clone(),
            token_hosts: DEFAULT_TOKEN_HOSTS.iter().map(|h| h.to_string()).collect(),
        }
    }
}

/// Returns the `Authorization` header value for `url`, if one should be sent.
pub fn auth_header(url: &str, token: Option<&str>, token_hosts: &[String]) -> Option<String> {
    let token = token.filter(|t| !t.is_empty())?;
    let host = Url::parse(url).ok()?.host_str()?.to_ascii_lowercase();
    let trusted = token_hosts.iter().any(|allowed| {
        let allowed = allowed.to_ascii_lowercase();
        host == allowed || host.ends_with(&format!(".{}", allowed))
    });
    trusted.then(|| format!("Bearer {}", token))
}

/// Reads the raw bytes of a [`Source`].
pub trait Fetch: Send + Sync {
    fn fetch(&self, source: &Source, token: Option<&str>) -> Result<Vec<u8>, FetchError>;

    /// Fetches and decodes the source as UTF-8 text.
    fn fetch_text(&self, source: &Source, token: Option<&str>) -> Result<String, FetchError> {
        let bytes = self.fetch(source, token)?;
        String::from_utf8(bytes).map_err(|_| FetchError::Utf8(source.to_string()))
    }
}

/// Default fetcher: local files through `std::fs`, URLs through blocking `reqwest`.
#[derive(Debug, Default)]
pub struct HttpFetcher {
    config: FetchConfig,
    client: OnceCell<Client>,
}

impl HttpFetcher {
    pub fn new(config: FetchConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    fn client(&self, url: &str) -> Result<&Client, FetchError> {
        self.client.get_or_try_init(|| {
            Client::builder()
                .timeout(self.config.timeout)
                .user_agent(self.config.user_agent.clone())
                .build()
                .map_err(|e| FetchError::Http {
                    url: url.to_string(),
                    message: e.to_string(),
                })
        })
    }

    fn get(&self, url: &str, token: Option<&str>) -> Result<Vec<u8>, FetchError> {
        let http_err = |e: reqwest::Error| FetchError::Http {
            url: url.to_string(),
            message: e.to_string(),
        };

        let mut request = self.client(url)?.get(url);
        if let Some(auth) = auth_header(url, token, &self.config.token_hosts) {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().map_err(http_err)?;
        let response = response.error_for_status().map_err(http_err)?;
        let body = response.bytes().map_err(http_err)?;
        Ok(body.to_vec())
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, source: &Source, token: Option<&str>) -> Result<Vec<u8>, FetchError> {
        match source {
            Source::Local(path) => std::fs::read(path).map_err(|e| FetchError::Io {
                path: path.display().to_string(),
                source: e,
            }),
            Source::Remote(url) => self.get(url, token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hosts() -> Vec<String> {
        FetchConfig::default().token_hosts
    }

    #[test]
    fn test_source_parse() {
        assert!(Source::parse("https://example.com/p.yaml").is_remote());
        assert!(Source::parse("http://example.com/p.yaml").is_remote());
        assert_eq!(
            Source::parse("resources/palettes.yaml"),
            Source::Local(PathBuf::from("resources/palettes.yaml"))
        );
        // Only the scheme prefix counts
        assert!(!Source::parse("httpdocs/palettes.yaml").is_remote());
    }

    #[test]
    fn test_auth_header_for_token_hosts() {
        let url = "https://raw.githubusercontent.com/org/repo/main/palettes.yaml";
        assert_eq!(
            auth_header(url, Some("abc"), &hosts()),
            Some("Bearer abc".to_string())
        );
        assert_eq!(
            auth_header("https://api.github.com/repos/x", Some("abc"), &hosts()),
            Some("Bearer abc".to_string())
        );
    }

    #[test]
    fn test_no_auth_header_for_other_hosts() {
        assert_eq!(
            auth_header("https://example.com/palettes.yaml", Some("abc"), &hosts()),
            None
        );
        // suffix match must be on a domain boundary
        assert_eq!(
            auth_header("https://evilgithub.com/p.yaml", Some("abc"), &hosts()),
            None
        );
    }

    #[test]
    fn test_no_auth_header_without_token() {
        let url = "https://github.com/org/repo/raw/main/p.yaml";
        assert_eq!(auth_header(url, None, &hosts()), None);
        assert_eq!(auth_header(url, Some(""), &hosts()), None);
    }

    #[test]
    fn test_fetch_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p.yaml");
        std::fs::write(&path, "a: [red]\n").unwrap();

        let fetcher = HttpFetcher::default();
        let text = fetcher
            .fetch_text(&Source::Local(path), None)
            .unwrap();
        assert_eq!(text, "a: [red]\n");
    }

    #[test]
    fn test_fetch_missing_local_file() {
        let fetcher = HttpFetcher::default();
        let err = fetcher
            .fetch(&Source::parse("/nonexistent/plotstyle/p.yaml"), None)
            .unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
    }
}
