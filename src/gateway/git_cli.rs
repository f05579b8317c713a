//! [`VcsGateway`] backed by the `git` command line.
//!
//! Branch lists are read through `for-each-ref` with full ref names, and the
//! known `refs/heads/` or `refs/remotes/<remote>/` prefix is stripped exactly.
//! Nothing is matched by substring, so `feature/x` never shadows `feature/xy`.

use super::VcsGateway;
use crate::engine::{BranchRef, CommitSummary, RemoteBranchSet};
use crate::error::{Result, SweepError};
use crate::git::{run_git, run_git_unchecked};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::debug;

const LOCAL_PREFIX: &str = "refs/heads/";

/// Gateway that shells out to `git` inside one repository.
#[derive(Debug, Clone)]
pub struct GitCliGateway {
    repo_root: PathBuf,
}

impl GitCliGateway {
    pub fn new<P: AsRef<Path>>(repo_root: P) -> Self {
        Self {
            repo_root: repo_root.as_ref().to_path_buf(),
        }
    }

    fn remote_exists(&self, remote: &str) -> Result<bool> {
        let remotes = run_git(&self.repo_root, &["remote"])?;
        Ok(remotes.lines().contains(&remote))
    }

    /// The revision to test ancestry against.
    ///
    /// A local branch wins over a tag or remote ref of the same name. Other
    /// names (`origin/main`, a tag, a commit) pass through unchanged.
    fn base_revision(&self, base: &BranchRef) -> Result<String> {
        let local_ref = format!("{}{}", LOCAL_PREFIX, base.name);
        if base.is_current {
            return Ok(local_ref);
        }

        let (code, _) = run_git_unchecked(
            &self.repo_root,
            &["rev-parse", "--verify", "--quiet", &local_ref],
        )?;
        Ok(if code == 0 { local_ref } else { base.name.clone() })
    }
}

impl VcsGateway for GitCliGateway {
    fn fetch_and_prune(&self, remote: &str) -> Result<()> {
        if !self.remote_exists(remote)? {
            return Err(SweepError::GatewayError(format!(
                "remote '{}' does not exist.\n\n\
                 To fix this, either:\n\
                 1. Pass a different remote with --remote <name>\n\
                 2. Set `remote: <name>` in .branch-sweep.yaml",
                remote
            )));
        }

        debug!(remote, "fetching with prune");
        run_git(&self.repo_root, &["fetch", "--prune", "--quiet", remote]).map_err(|e| {
            SweepError::GatewayError(format!(
                "failed to fetch from '{}': {}\n\n\
                 Make sure the remote is reachable and you are authenticated.",
                remote, e
            ))
        })?;

        Ok(())
    }

    fn current_branch(&self) -> Result<Option<BranchRef>> {
        let (code, output) =
            run_git_unchecked(&self.repo_root, &["symbolic-ref", "--quiet", "--short", "HEAD"])?;

        match code {
            0 => Ok(Some(BranchRef::current(output.stdout))),
            // --quiet exits 1 without output when HEAD is detached
            1 => Ok(None),
            _ => Err(SweepError::GatewayError(format!(
                "failed to resolve the current branch: {}",
                output.message()
            ))),
        }
    }

    fn local_branches(&self) -> Result<Vec<BranchRef>> {
        let output = run_git(
            &self.repo_root,
            &[
                "for-each-ref",
                "--format=%(refname)%09%(HEAD)",
                LOCAL_PREFIX,
            ],
        )?;

        Ok(output
            .lines()
            .into_iter()
            .filter_map(|line| {
                // The HEAD marker is a space for non-current branches, which
                // trimming may strip along with the tab.
                let (refname, head) = line.split_once('\t').unwrap_or((line, ""));
                let name = refname.strip_prefix(LOCAL_PREFIX)?;
                Some(BranchRef {
                    name: name.to_string(),
                    is_current: head.trim() == "*",
                })
            })
            .collect())
    }

    fn remote_branch_names(&self, remote: &str) -> Result<RemoteBranchSet> {
        let prefix = format!("refs/remotes/{}/", remote);
        let output = run_git(
            &self.repo_root,
            &["for-each-ref", "--format=%(refname)", &prefix],
        )?;

        Ok(output
            .lines()
            .into_iter()
            .filter_map(|line| line.strip_prefix(prefix.as_str()))
            .filter(|name| *name != "HEAD")
            .collect())
    }

    fn is_ancestor(&self, candidate: &BranchRef, base: &BranchRef) -> Result<bool> {
        let candidate_ref = format!("{}{}", LOCAL_PREFIX, candidate.name);
        let base_rev = self.base_revision(base)?;
        let (code, output) = run_git_unchecked(
            &self.repo_root,
            &["merge-base", "--is-ancestor", &candidate_ref, &base_rev],
        )?;

        match code {
            0 => Ok(true),
            1 => Ok(false),
            _ => Err(SweepError::GatewayError(format!(
                "ancestry check of '{}' against '{}' failed: {}",
                candidate.name,
                base.name,
                output.message()
            ))),
        }
    }

    fn commit_summary(&self, branch: &BranchRef) -> Result<CommitSummary> {
        let branch_ref = format!("{}{}", LOCAL_PREFIX, branch.name);
        let output = run_git(
            &self.repo_root,
            &["log", "-1", "--format=%h%x09%ct%x09%s", &branch_ref, "--"],
        )?;

        parse_commit_summary(&output.stdout).ok_or_else(|| {
            SweepError::GatewayError(format!(
                "unexpected commit summary for '{}': {}",
                branch.name, output.stdout
            ))
        })
    }

    fn delete_branch(&self, branch: &BranchRef, force: bool) -> Result<()> {
        let delete_flag = if force { "-D" } else { "-d" };
        let (code, output) =
            run_git_unchecked(&self.repo_root, &["branch", delete_flag, &branch.name])?;

        if code == 0 {
            return Ok(());
        }

        let message = output
            .message()
            .lines()
            .next()
            .unwrap_or("git branch exited with an error")
            .trim_start_matches("error: ")
            .to_string();

        Err(SweepError::DeletionError {
            branch: branch.name.clone(),
            message,
        })
    }
}

/// Parse `%h<TAB>%ct<TAB>%s`.
fn parse_commit_summary(line: &str) -> Option<CommitSummary> {
    let mut parts = line.splitn(3, '\t');
    let short_hash = parts.next()?.trim();
    let timestamp: i64 = parts.next()?.trim().parse().ok()?;
    let subject = parts.next().unwrap_or("").trim();

    if short_hash.is_empty() {
        return None;
    }

    Some(CommitSummary {
        short_hash: short_hash.to_string(),
        subject: subject.to_string(),
        committed_at: DateTime::<Utc>::from_timestamp(timestamp, 0)?,
    })
}
