//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and wraps exactly one
//! client operation. [`CommandDispatcher`] resolves configuration, builds
//! the client, and routes the parsed subcommand.

pub mod auth;
pub mod dispatcher;
pub mod display;
pub mod request;

pub use dispatcher::{Command, CommandDispatcher};
