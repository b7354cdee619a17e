//! SSO commands: `esi auth-url`, `esi exchange`, `esi whoami`.

use anyhow::Result;
use std::io::Write;

use crate::cli::args::ExchangeArgs;
use crate::client::EsiClient;

use super::dispatcher::Command;
use super::display::write_json;

/// Prints the authorization URL.
pub struct AuthUrlCommand;

impl Command for AuthUrlCommand {
    fn execute(&self, client: &mut EsiClient, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", client.authorize_url()?)?;
        Ok(())
    }
}

/// Exchanges a callback code and prints the resulting tokens.
pub struct ExchangeCommand {
    args: ExchangeArgs,
}

impl ExchangeCommand {
    /// Create a new exchange command.
    pub fn new(args: ExchangeArgs) -> Self {
        Self { args }
    }
}

impl Command for ExchangeCommand {
    fn execute(&self, client: &mut EsiClient, out: &mut dyn Write) -> Result<()> {
        client.exchange_code_for_token(&self.args.code)?;

        let tokens = serde_json::json!({
            "access_token": client.access_token(),
            "refresh_token": client.refresh_token(),
        });
        write_json(out, &tokens)
    }
}

/// Prints the identity behind the current access token.
pub struct WhoamiCommand;

impl Command for WhoamiCommand {
    fn execute(&self, client: &mut EsiClient, out: &mut dyn Write) -> Result<()> {
        if !client.is_authenticated() {
            tracing::warn!("No access token set; the SSO will likely reject this request");
        }
        let identity = client.fetch_identity()?;
        write_json(out, &identity)
    }
}
