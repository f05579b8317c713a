//! Error types for branch-sweep.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for branch-sweep operations.
///
/// Snapshot failures (`GatewayError`) are fatal to a run. `ClassificationError`
/// and `DeletionError` are scoped to a single branch and are normally absorbed
/// by the engine rather than returned to the caller.
#[derive(Error, Debug)]
pub enum SweepError {
    /// User provided invalid arguments or the system is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// The git backend could not answer a query.
    #[error("Git operation failed: {0}")]
    GatewayError(String),

    /// The ancestry check for a single branch failed.
    #[error("could not classify branch: {0}")]
    ClassificationError(String),

    /// A single branch could not be deleted.
    #[error("failed to delete branch '{branch}': {message}")]
    DeletionError { branch: String, message: String },

    /// The run finished but some deletions failed.
    #[error("{failed} of {attempted} branch deletion(s) failed")]
    PartialFailure { failed: usize, attempted: usize },
}

impl SweepError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SweepError::UserError(_) => exit_codes::USER_ERROR,
            SweepError::GatewayError(_) => exit_codes::GIT_FAILURE,
            SweepError::ClassificationError(_) => exit_codes::GIT_FAILURE,
            SweepError::DeletionError { .. } => exit_codes::PARTIAL_FAILURE,
            SweepError::PartialFailure { .. } => exit_codes::PARTIAL_FAILURE,
        }
    }

    /// The underlying reason, without the branch-name prefix for deletion errors.
    pub fn reason(&self) -> String {
        match self {
            SweepError::DeletionError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for branch-sweep operations.
pub type Result<T> = std::result::Result<T, SweepError>;
