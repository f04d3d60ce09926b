//! Command-line interface for vidql.

mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};
