//! kiln CLI - resolve library build descriptors into build plans.
//!
//! This crate provides the `kiln` command-line interface on top of
//! `kiln-config` (loading) and `kiln-plan` (resolution).
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`config`] - Layered descriptor loading with figment
//! - [`commands`] - `plan`, `check` and `init`
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - Status lines and plan rendering
//!
//! # Example
//!
//! ```rust,no_run
//! use kiln_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(logger::LogOptions::default());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
