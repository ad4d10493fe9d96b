use anyhow::{Context, Result};
use ica_client::{Client, ProjectId};
use log::debug;
use std::io::{self, Write};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
pub struct DownloadArgs {
    #[structopt(name = "PATH")]
    /// Path to the file to download. The content is written to stdout.
    pub path: String,
}

pub fn run(args: &DownloadArgs, client: &Client, project: &ProjectId) -> Result<()> {
    let chunks = client
        .download(project, &args.path)
        .with_context(|| format!("Could not download `{}`", args.path))?;

    let mut stdout = io::stdout().lock();
    let mut num_bytes = 0;
    for chunk in chunks {
        let chunk = chunk.with_context(|| format!("Could not download `{}`", args.path))?;
        stdout
            .write_all(&chunk)
            .context("Failed to write download to stdout.")?;
        num_bytes += chunk.len();
    }
    stdout.flush().context("Failed to write download to stdout.")?;

    debug!("Downloaded {} bytes from `{}`", num_bytes, args.path);
    Ok(())
}
