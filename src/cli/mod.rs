//! Command-line interface for the `esi` binary.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ExchangeArgs, GetArgs, PostArgs};
pub use commands::{Command, CommandDispatcher};
