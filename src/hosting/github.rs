use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{CreatedRelease, NewRelease, ReleaseHost};
use crate::error::{ReleaseError, Result};

/// Default GitHub REST endpoint
pub const GITHUB_API: &str = "https://api.github.com";

/// Default timeout for API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("autorelease/", env!("CARGO_PKG_VERSION"));

const API_VERSION: &str = "2022-11-28";

/// GitHub releases API client
#[derive(Clone)]
pub struct GitHubClient {
    base_url: String,
    token: String,
    client: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct CreateReleaseRequest<'a> {
    tag_name: &'a str,
    name: &'a str,
    body: &'a str,
    draft: bool,
    prerelease: bool,
}

#[derive(Deserialize)]
struct CreateReleaseResponse {
    id: u64,
    html_url: String,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GitHubClient {
    /// Create a client for the given API base URL
    ///
    /// # Errors
    /// * `ReleaseError::Api` - If the HTTP client cannot be initialized
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        })
    }

    /// Create a client for github.com
    pub fn github_com(token: impl Into<String>) -> Result<Self> {
        Self::new(GITHUB_API, token)
    }
}

impl ReleaseHost for GitHubClient {
    fn create_release(&self, release: &NewRelease) -> Result<CreatedRelease> {
        let url = format!(
            "{}/repos/{}/{}/releases",
            self.base_url, release.slug.owner, release.slug.repo
        );

        let request = CreateReleaseRequest {
            tag_name: &release.tag_name,
            name: &release.title,
            body: &release.body,
            draft: release.draft,
            prerelease: release.prerelease,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .json(&request)
            .send()
            .map_err(|e| ReleaseError::api(format!("failed to send request to {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|body| body.message)
                .unwrap_or(text);
            return Err(ReleaseError::api(format!(
                "creating release for {} returned {}: {}",
                release.tag_name, status, detail
            )));
        }

        let created: CreateReleaseResponse = response
            .json()
            .map_err(|e| ReleaseError::api(format!("failed to parse release response: {}", e)))?;

        Ok(CreatedRelease {
            id: created.id,
            url: created.html_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = GitHubClient::new("https://ghe.example.com/api/v3/", "t").unwrap();
        assert_eq!(client.base_url, "https://ghe.example.com/api/v3");
    }

    #[test]
    fn test_github_com_default() {
        let client = GitHubClient::github_com("t").unwrap();
        assert_eq!(client.base_url, GITHUB_API);
    }
}
