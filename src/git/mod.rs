//! Git operations abstraction layer
//!
//! The release workflow only needs four things from version control: list
//! existing release tags, check whether a tag exists, create and push a tag,
//! and read a file as it was at a tag. The [Repository] trait covers exactly
//! that, with two implementations:
//!
//! - [repository::Git2Repository]: the real repository, using the `git2`
//!   crate for reads and tag creation and the `git` binary for pushing
//! - [mock::MockRepository]: an in-memory implementation for tests
//!
//! ```rust
//! # use autorelease::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> autorelease::Result<()> {
//! let tags = repo.list_tags("v")?;
//! if let Some(latest) = tags.first() {
//!     println!("Latest release tag: {}", latest);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::{GitOutput, Git2Repository};

use crate::error::Result;

/// Version-control operations needed to cut a release
pub trait Repository {
    /// List tags starting with `prefix`, newest version first.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names sorted by descending version
    /// * `Err` - If the tags cannot be read
    fn list_tags(&self, prefix: &str) -> Result<Vec<String>>;

    /// Check whether a tag with exactly this name exists.
    fn tag_exists(&self, name: &str) -> Result<bool>;

    /// Create an annotated tag at HEAD and push it to the remote.
    ///
    /// # Returns
    /// * `Ok(())` - Tag created and pushed
    /// * `Err` - If the tag already exists, or creation or push fails
    fn create_tag(&self, name: &str, message: &str) -> Result<()>;

    /// Read the content of `path` as committed at `tag`.
    ///
    /// # Returns
    /// * `Ok(String)` - The file content
    /// * `Err` - If the tag or the file at that tag does not exist
    fn read_file_at_tag(&self, tag: &str, path: &str) -> Result<String>;
}
