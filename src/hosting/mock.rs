use std::cell::RefCell;

use super::{CreatedRelease, NewRelease, ReleaseHost};
use crate::error::{ReleaseError, Result};

/// Release host that records requests instead of calling a platform
#[derive(Debug, Default)]
pub struct MockReleaseHost {
    requests: RefCell<Vec<NewRelease>>,
    failure: Option<String>,
}

impl MockReleaseHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `create_release` call fail with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        MockReleaseHost {
            requests: RefCell::new(Vec::new()),
            failure: Some(message.into()),
        }
    }

    /// Requests received so far, including failed ones
    pub fn requests(&self) -> Vec<NewRelease> {
        self.requests.borrow().clone()
    }
}

impl ReleaseHost for MockReleaseHost {
    fn create_release(&self, release: &NewRelease) -> Result<CreatedRelease> {
        self.requests.borrow_mut().push(release.clone());

        if let Some(message) = &self.failure {
            return Err(ReleaseError::api(message.clone()));
        }

        let id = self.requests.borrow().len() as u64;
        Ok(CreatedRelease {
            id,
            url: format!(
                "https://github.com/{}/releases/tag/{}",
                release.slug, release.tag_name
            ),
        })
    }
}
