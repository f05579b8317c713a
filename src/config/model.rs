//! Config struct definition and default implementation.

use serde::Deserialize;

/// File name of the optional per-repository config.
pub const CONFIG_FILE_NAME: &str = ".branch-sweep.yaml";

/// Configuration for a sweep.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
/// Command-line flags take precedence over these values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the remote to compare against (default: "origin").
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Branch to check merge status against instead of the current branch.
    #[serde(default)]
    pub base_branch: Option<String>,

    /// Whether text output shows the last commit of each stale branch.
    #[serde(default = "default_true")]
    pub show_commit_details: bool,

    /// Whether destructive runs ask for confirmation.
    /// `false` behaves like always passing `--yes`.
    #[serde(default = "default_true")]
    pub confirm: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            base_branch: None,
            show_commit_details: default_true(),
            confirm: default_true(),
        }
    }
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_true() -> bool {
    true
}
