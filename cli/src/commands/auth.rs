use anyhow::{Context, Result};
use ica_client::Client;
use std::io::{self, Write};

use crate::{config::ConfigStore, utils::Prompt};

/// Exchange the stored API key for a bearer token and print it.
pub fn run(client: &Client, store: &ConfigStore, prompt: &dyn Prompt) -> Result<()> {
    let tenant = store.tenant_id(prompt)?;
    let token = client
        .create_token(&tenant)
        .context("Operation to create a token has failed.")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", token.0).context("Failed to write token to stdout.")
}
