//! Exit code constants for the branch-sweep CLI.
//!
//! - 0: Success (including dry runs and declined confirmations)
//! - 1: User error (bad args, not a repository, invalid config)
//! - 2: Partial failure (one or more branch deletions failed)
//! - 3: Git failure (fetch, listing, or current-branch lookup failed)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or no usable terminal for confirmation.
pub const USER_ERROR: i32 = 1;

/// Some planned deletions failed; the rest of the batch still ran.
pub const PARTIAL_FAILURE: i32 = 2;

/// The git backend could not produce a snapshot; nothing was deleted.
pub const GIT_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, PARTIAL_FAILURE, GIT_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
