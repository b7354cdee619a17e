//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandDispatcher`] for resolving configuration and routing subcommands

use anyhow::Result;
use std::io::Write;

use crate::cli::args::{Cli, Commands};
use crate::client::EsiClient;
use crate::config::ClientConfig;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command against `client`, writing results to `out`.
    fn execute(&self, client: &mut EsiClient, out: &mut dyn Write) -> Result<()>;
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: ClientConfig,
    access_token: Option<String>,
}

impl CommandDispatcher {
    /// Resolve configuration from the config file (if any) and CLI overrides.
    pub fn from_cli(cli: &Cli) -> crate::error::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => ClientConfig::load(path)?,
            None => ClientConfig::default(),
        };

        if let Some(id) = &cli.client_id {
            config.client_id = id.clone();
        }
        if let Some(secret) = &cli.client_secret {
            config.client_secret = secret.clone();
        }
        if let Some(callback) = &cli.callback_url {
            config.callback_url = callback.clone();
        }
        if let Some(scope) = &cli.scope {
            config.scope = scope.clone();
        }

        Ok(Self {
            config,
            access_token: cli.access_token.clone(),
        })
    }

    /// The resolved client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build a client and execute the selected subcommand.
    pub fn dispatch(&self, command: &Commands, out: &mut dyn Write) -> Result<()> {
        let mut client = EsiClient::from_config(&self.config)?;
        if let Some(token) = &self.access_token {
            client.set_access_token(token.as_str());
        }

        match command {
            Commands::AuthUrl => super::auth::AuthUrlCommand.execute(&mut client, out),
            Commands::Exchange(args) => {
                super::auth::ExchangeCommand::new(args.clone()).execute(&mut client, out)
            }
            Commands::Whoami => super::auth::WhoamiCommand.execute(&mut client, out),
            Commands::Get(args) => {
                super::request::GetCommand::new(args.clone()).execute(&mut client, out)
            }
            Commands::Post(args) => {
                super::request::PostCommand::new(args.clone()).execute(&mut client, out)
            }
        }
    }
}
