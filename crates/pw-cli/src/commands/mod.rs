//! CLI subcommand implementations.

pub mod check;
pub mod init;
pub mod play;
