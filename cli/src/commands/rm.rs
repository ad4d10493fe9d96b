use anyhow::{Context, Result};
use ica_client::{Client, ProjectId};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
pub struct RmArgs {
    #[structopt(name = "PATH")]
    /// Path to the file or folder to remove
    pub path: String,

    #[structopt(short = "r", long = "recursive")]
    /// Remove folders and their contents
    pub recursive: bool,
}

pub fn run(args: &RmArgs, client: &Client, project: &ProjectId) -> Result<()> {
    client
        .delete(project, Some(&args.path), args.recursive)
        .context("Operation to remove data has failed.")
}
