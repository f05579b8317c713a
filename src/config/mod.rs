//! Configuration model for branch-sweep.
//!
//! This module defines the Config struct that represents `.branch-sweep.yaml`
//! at the repository root. Parsing is forward-compatible (unknown fields are
//! ignored), every field has a default, and values are validated on load.

mod model;
mod operations;


pub use model::{CONFIG_FILE_NAME, Config};
