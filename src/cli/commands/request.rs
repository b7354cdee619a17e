//! API commands: `esi get` and `esi post`.

use anyhow::Result;
use std::fmt::Display;
use std::io::Write;

use crate::cli::args::{GetArgs, PostArgs};
use crate::client::EsiClient;

use super::dispatcher::Command;
use super::display::write_json;

/// Fetches an API path and prints the document.
pub struct GetCommand {
    args: GetArgs,
}

impl GetCommand {
    /// Create a new get command.
    pub fn new(args: GetArgs) -> Self {
        Self { args }
    }
}

impl Command for GetCommand {
    fn execute(&self, client: &mut EsiClient, out: &mut dyn Write) -> Result<()> {
        let args: Vec<&dyn Display> = self.args.args.iter().map(|a| a as &dyn Display).collect();
        let document = client.get(&self.args.path, &args)?;
        write_json(out, &document)
    }
}

/// Posts a body to an API path and prints the response.
pub struct PostCommand {
    args: PostArgs,
}

impl PostCommand {
    /// Create a new post command.
    pub fn new(args: PostArgs) -> Self {
        Self { args }
    }
}

impl Command for PostCommand {
    fn execute(&self, client: &mut EsiClient, out: &mut dyn Write) -> Result<()> {
        let document = client.post(&self.args.path, &self.args.body)?;
        write_json(out, &document)
    }
}
