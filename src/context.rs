//! Repository context resolution.
//!
//! Finds the Git repository root from the working directory (or `-C <path>`)
//! and the config file that belongs to it.

use crate::config::CONFIG_FILE_NAME;
use crate::error::{Result, SweepError};
use crate::git;
use std::env;
use std::path::{Path, PathBuf};

/// Resolved paths for one invocation. All paths are absolute.
#[derive(Debug, Clone)]
pub struct RepoContext {
    /// Absolute path to the repository's top-level directory.
    pub repo_root: PathBuf,
}

impl RepoContext {
    /// Resolve from `dir` if given, otherwise from the current working directory.
    ///
    /// # Returns
    ///
    /// * `Ok(RepoContext)` - Successfully resolved context
    /// * `Err(SweepError::UserError)` - If not in a git repository (exit code 1)
    pub fn resolve(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => Self::resolve_from(dir),
            None => {
                let cwd = env::current_dir().map_err(|e| {
                    SweepError::UserError(format!(
                        "failed to get current working directory: {}",
                        e
                    ))
                })?;
                Self::resolve_from(&cwd)
            }
        }
    }

    /// Resolve the context from a specific directory.
    pub fn resolve_from<P: AsRef<Path>>(cwd: P) -> Result<Self> {
        let cwd = cwd.as_ref();
        if !cwd.is_dir() {
            return Err(SweepError::UserError(format!(
                "directory does not exist: {}",
                cwd.display()
            )));
        }

        let repo_root = git::get_repo_root(cwd)?;
        Ok(Self { repo_root })
    }

    /// Path to `.branch-sweep.yaml` at the repository root.
    pub fn config_path(&self) -> PathBuf {
        self.repo_root.join(CONFIG_FILE_NAME)
    }
}
