//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// esi - EVE Swagger Interface client.
#[derive(Debug, Parser)]
#[command(name = "esi")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML client config file
    #[arg(short, long, global = true, env = "ESI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Application client ID (overrides config file)
    #[arg(long, global = true, env = "ESI_CLIENT_ID")]
    pub client_id: Option<String>,

    /// Application secret key (overrides config file)
    #[arg(long, global = true, env = "ESI_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Callback URL registered with the SSO (overrides config file)
    #[arg(long, global = true, env = "ESI_CALLBACK_URL")]
    pub callback_url: Option<String>,

    /// Scopes to request during authorization (overrides config file)
    #[arg(long, global = true, env = "ESI_SCOPE")]
    pub scope: Option<String>,

    /// Access token to use for requests
    #[arg(long, global = true, env = "ESI_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print the SSO authorization URL
    AuthUrl,

    /// Exchange an authorization code for tokens
    Exchange(ExchangeArgs),

    /// Show the character behind the access token
    Whoami,

    /// GET an API path
    Get(GetArgs),

    /// POST a body to an API path
    Post(PostArgs),
}

/// Arguments for the `exchange` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExchangeArgs {
    /// Code from the SSO callback
    pub code: String,
}

/// Arguments for the `get` command.
#[derive(Debug, Clone, clap::Args)]
pub struct GetArgs {
    /// API path, optionally with `{}` placeholders (e.g. universe/types/{})
    pub path: String,

    /// Values for the placeholders, in order
    pub args: Vec<String>,
}

/// Arguments for the `post` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PostArgs {
    /// API path (e.g. universe/names)
    pub path: String,

    /// Raw request body
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_get_with_args() {
        let cli = Cli::parse_from(["esi", "get", "universe/types/{}", "34"]);
        match cli.command {
            Commands::Get(args) => {
                assert_eq!(args.path, "universe/types/{}");
                assert_eq!(args.args, vec!["34"]);
            }
            other => panic!("Expected Get command, got {:?}", other),
        }
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["esi", "auth-url", "--client-id", "abc", "--debug"]);
        assert!(matches!(cli.command, Commands::AuthUrl));
        assert_eq!(cli.client_id.as_deref(), Some("abc"));
        assert!(cli.debug);
    }

    #[test]
    fn parses_exchange_code() {
        let cli = Cli::parse_from(["esi", "exchange", "the-code"]);
        match cli.command {
            Commands::Exchange(args) => assert_eq!(args.code, "the-code"),
            other => panic!("Expected Exchange command, got {:?}", other),
        }
    }

    #[test]
    fn parses_post() {
        let cli = Cli::parse_from(["esi", "post", "universe/names", "[34]"]);
        match cli.command {
            Commands::Post(args) => {
                assert_eq!(args.path, "universe/names");
                assert_eq!(args.body, "[34]");
            }
            other => panic!("Expected Post command, got {:?}", other),
        }
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["esi"]).is_err());
    }
}
