//! Subcommand implementations.

pub mod check;
pub mod init;
pub mod list_checkers;
pub mod output;
