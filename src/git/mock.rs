use crate::domain::sort_tags_descending;
use crate::error::{ReleaseError, Result};
use crate::git::Repository;
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    tags: RefCell<Vec<String>>,
    files: HashMap<(String, String), String>,
    created: RefCell<Vec<(String, String)>>,
    fail_listing: bool,
    fail_create: bool,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: RefCell::new(Vec::new()),
            files: HashMap::new(),
            created: RefCell::new(Vec::new()),
            fail_listing: false,
            fail_create: false,
        }
    }

    /// Add an existing tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.get_mut().push(name.into());
    }

    /// Record the content of a file as committed at a tag
    pub fn add_file_at_tag(
        &mut self,
        tag: impl Into<String>,
        path: impl Into<String>,
        content: impl Into<String>,
    ) {
        self.files
            .insert((tag.into(), path.into()), content.into());
    }

    /// Make `list_tags` fail
    pub fn fail_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    /// Make `create_tag` fail
    pub fn fail_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    /// Tags created through the trait, as `(name, message)` pairs
    pub fn created_tags(&self) -> Vec<(String, String)> {
        self.created.borrow().clone()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self, prefix: &str) -> Result<Vec<String>> {
        if self.fail_listing {
            return Err(ReleaseError::git("git tag --list failed"));
        }

        let mut tags: Vec<String> = self
            .tags
            .borrow()
            .iter()
            .filter(|t| t.starts_with(prefix))
            .cloned()
            .collect();
        sort_tags_descending(&mut tags, prefix);
        Ok(tags)
    }

    fn tag_exists(&self, name: &str) -> Result<bool> {
        Ok(self.tags.borrow().iter().any(|t| t == name))
    }

    fn create_tag(&self, name: &str, message: &str) -> Result<()> {
        if self.fail_create {
            return Err(ReleaseError::git(format!("Cannot create tag '{}'", name)));
        }
        if self.tag_exists(name)? {
            return Err(ReleaseError::git(format!("tag '{}' already exists", name)));
        }

        self.tags.borrow_mut().push(name.to_string());
        self.created
            .borrow_mut()
            .push((name.to_string(), message.to_string()));
        Ok(())
    }

    fn read_file_at_tag(&self, tag: &str, path: &str) -> Result<String> {
        self.files
            .get(&(tag.to_string(), path.to_string()))
            .cloned()
            .ok_or_else(|| ReleaseError::git(format!("path '{}' does not exist in '{}'", path, tag)))
    }
}
