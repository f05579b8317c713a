use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A working clone plus the bare repository it uses as `origin`.
pub(crate) struct RemoteFixture {
    _temp_dir: TempDir,
    pub(crate) work: PathBuf,
    pub(crate) remote: PathBuf,
}

impl RemoteFixture {
    /// Create `name` at the current HEAD of the working clone and push it.
    pub(crate) fn push_branch(&self, name: &str) {
        git(&self.work, &["branch", name]);
        git(&self.work, &["push", "-q", "origin", name]);
    }

    /// Delete `name` on the remote only, leaving the clone's tracking ref stale
    /// until the next `fetch --prune`.
    pub(crate) fn delete_on_remote(&self, name: &str) {
        git(&self.remote, &["branch", "-D", name]);
    }

    /// Add a commit on `branch` in the working clone and return to `main`.
    pub(crate) fn commit_on(&self, branch: &str, file: &str) {
        git(&self.work, &["checkout", "-q", branch]);
        commit_file(&self.work, file);
        git(&self.work, &["checkout", "-q", "main"]);
    }
}

pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    init_repo(temp_dir.path());
    temp_dir
}

/// Create a working clone with `main` pushed to a bare `origin`.
pub(crate) fn create_repo_with_origin() -> RemoteFixture {
    let temp_dir = TempDir::new().unwrap();
    let remote = temp_dir.path().join("origin.git");
    let work = temp_dir.path().join("work");
    std::fs::create_dir_all(&remote).unwrap();
    std::fs::create_dir_all(&work).unwrap();

    git(&remote, &["init", "-q", "--bare"]);
    init_repo(&work);

    let remote_str = remote.to_string_lossy().to_string();
    git(&work, &["remote", "add", "origin", &remote_str]);
    git(&work, &["push", "-q", "-u", "origin", "main"]);

    RemoteFixture {
        _temp_dir: temp_dir,
        work,
        remote,
    }
}

fn init_repo(path: &Path) {
    git(path, &["init", "-q"]);
    // Ensure the repo uses a deterministic default branch name across environments.
    // This sets HEAD to an unborn `main` branch before the first commit.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    // Configure git user for commits
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-q", "-m", "Initial commit"]);
}

pub(crate) fn commit_file(repo_dir: &Path, file: &str) {
    std::fs::write(repo_dir.join(file), format!("{}\n", file)).unwrap();
    git(repo_dir, &["add", file]);
    git(repo_dir, &["commit", "-q", "-m", &format!("Add {}", file)]);
}

pub(crate) fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
