//! Library side of the `delim` command-line tool.

pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;
