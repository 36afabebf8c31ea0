//! CLI command implementations
//!
//! This module contains the commands the CLI application runs, using the
//! Command pattern.

pub mod command_traits;
pub mod split_command;

pub use command_traits::Command;
pub use split_command::SplitCommand;
