//! Branch-sweep: find local git branches whose remote branch is gone and
//! delete them safely.
//!
//! The [`engine`] module holds the detection, classification, planning and
//! execution steps. It talks to git only through the [`gateway::VcsGateway`]
//! trait. The [`commands`] module wires the engine to the CLI, config,
//! confirmation prompt, and output formats.

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod exit_codes;
pub mod gateway;
pub mod git;
pub mod logging;

#[cfg(test)]
mod test_support;
