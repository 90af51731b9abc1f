//! doc2conll CLI library
//!
//! This library provides the command-line interface driving the
//! doc2conll-core conversion: export loading, token-file materialization,
//! span alignment and corpus assembly.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
