//! CLI command handlers
//!
//! Each subcommand is implemented in its own module.

pub mod add;
pub mod helpers;
pub mod list;
pub mod recent;
pub mod serve;
pub mod summary;
