//! `stubtree-cli` - Command line front end for stub trees.
//!
//! - **build**: Builds the stub tree of a fixture file and prints it as an
//!   indented outline or JSON, with diagnostics on stderr
//! - **lookup**: Finds the stubs declaring a name and prints their qualified
//!   path
//!
//! Builder settings come from `--config` or a `stubtree.toml` next to the
//! fixture.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod commands;
