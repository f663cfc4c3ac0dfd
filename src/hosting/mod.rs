//! Hosting platform access: publishing a release record for a pushed tag.
//!
//! - [github::GitHubClient]: GitHub REST API client
//! - [mock::MockReleaseHost]: records requests for tests

pub mod github;
pub mod mock;

pub use github::GitHubClient;
pub use mock::MockReleaseHost;

use crate::error::{ReleaseError, Result};
use std::fmt;

/// `owner/repo` pair identifying a hosted repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub repo: String,
}

impl RepoSlug {
    /// Parse an `owner/repo` string (the `GITHUB_REPOSITORY` format)
    pub fn parse(slug: &str) -> Result<Self> {
        match slug.trim().split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(RepoSlug {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                })
            }
            _ => Err(ReleaseError::config(format!(
                "repository must be in 'owner/repo' form, got '{}'",
                slug
            ))),
        }
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Release to publish on the hosting platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRelease {
    pub slug: RepoSlug,
    pub tag_name: String,
    pub title: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}

/// Identity of a release the platform created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedRelease {
    pub id: u64,
    pub url: String,
}

/// Hosting platform capable of creating releases
pub trait ReleaseHost {
    /// # Errors
    /// * `ReleaseError::Api` - Authentication, rate limit, or network failure
    fn create_release(&self, release: &NewRelease) -> Result<CreatedRelease>;
}
