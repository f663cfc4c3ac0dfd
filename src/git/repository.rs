use crate::domain::sort_tags_descending;
use crate::error::{ReleaseError, Result};
use git2::{Repository as Git2Repo, Signature};
use std::path::{Path, PathBuf};
use std::process::Command;

const FALLBACK_TAGGER_NAME: &str = "github-actions[bot]";
const FALLBACK_TAGGER_EMAIL: &str = "41898282+github-actions[bot]@users.noreply.github.com";

/// Captured result of a finished `git` subprocess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
    remote: String,
}

impl Git2Repository {
    /// Open or discover a git repository, pushing new tags to `remote`
    pub fn open<P: AsRef<Path>>(path: P, remote: impl Into<String>) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository {
            repo,
            remote: remote.into(),
        })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo, remote: impl Into<String>) -> Self {
        Git2Repository {
            repo,
            remote: remote.into(),
        }
    }

    fn workdir(&self) -> PathBuf {
        self.repo
            .workdir()
            .unwrap_or_else(|| self.repo.path())
            .to_path_buf()
    }

    fn tagger(&self) -> Result<Signature<'static>> {
        match self.repo.signature() {
            Ok(sig) => Ok(sig),
            Err(_) => Ok(Signature::now(FALLBACK_TAGGER_NAME, FALLBACK_TAGGER_EMAIL)?),
        }
    }

    /// Run `git` in the working directory and buffer its output.
    ///
    /// Pushing goes through the binary rather than libgit2 so that the
    /// credential helpers and `extraheader` configured on the runner apply.
    pub fn run_git(&self, args: &[&str]) -> Result<GitOutput> {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.workdir())
            .output()
            .map_err(|e| ReleaseError::git(format!("failed to run git {}: {}", args.join(" "), e)))?;

        Ok(GitOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    fn push_tag(&self, name: &str) -> Result<()> {
        let refspec = format!("refs/tags/{}", name);
        let output = self.run_git(&["push", &self.remote, &refspec])?;

        if !output.success() {
            return Err(ReleaseError::git(format!(
                "git push {} {} failed: {}",
                self.remote,
                refspec,
                output.stderr.trim()
            )));
        }

        Ok(())
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self, prefix: &str) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        let mut names: Vec<String> = tags
            .iter()
            .flatten()
            .filter(|name| name.starts_with(prefix))
            .map(|s| s.to_string())
            .collect();

        sort_tags_descending(&mut names, prefix);
        Ok(names)
    }

    fn tag_exists(&self, name: &str) -> Result<bool> {
        let reference_name = format!("refs/tags/{}", name);

        match self.repo.find_reference(&reference_name) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(false),
            Err(e) => Err(ReleaseError::git(format!(
                "Cannot look up tag '{}': {}",
                name,
                e.message()
            ))),
        }
    }

    fn create_tag(&self, name: &str, message: &str) -> Result<()> {
        let head = self
            .repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .map_err(|e| ReleaseError::git(format!("Cannot resolve HEAD: {}", e.message())))?;

        let tagger = self.tagger()?;

        self.repo
            .tag(name, head.as_object(), &tagger, message, false)
            .map_err(|e| ReleaseError::git(format!("Cannot create tag '{}': {}", name, e.message())))?;

        self.push_tag(name)
    }

    fn read_file_at_tag(&self, tag: &str, path: &str) -> Result<String> {
        let spec = format!("{}:{}", tag, path);

        let blob = self
            .repo
            .revparse_single(&spec)
            .and_then(|object| object.peel_to_blob())
            .map_err(|e| ReleaseError::git(format!("Cannot read '{}': {}", spec, e.message())))?;

        String::from_utf8(blob.content().to_vec())
            .map_err(|_| ReleaseError::git(format!("'{}' is not valid UTF-8", spec)))
    }
}
