use anyhow::{bail, Context, Result};
use ica_client::{paths, Client, Error as ClientError, ProjectId};
use structopt::StructOpt;

use crate::printer::{FileEntry, Printer};

#[derive(Debug, StructOpt)]
pub struct LsArgs {
    #[structopt(name = "FILE")]
    /// Path to a file or folder. Lists the root folder if omitted.
    pub path: Option<String>,

    #[structopt(long = "pattern")]
    /// Only list names matching this search pattern (when listing a folder)
    pub pattern: Option<String>,

    #[structopt(short = "l")]
    /// Use a long listing format
    pub long: bool,

    #[structopt(short = "a", long = "all")]
    /// Show hidden files
    pub all: bool,
}

pub fn run(args: &LsArgs, client: &Client, project: &ProjectId, printer: &Printer) -> Result<()> {
    let LsArgs {
        path,
        pattern,
        long,
        all,
    } = args;

    if let Some(path) = path {
        if !path.starts_with(paths::ROOT) {
            bail!("filepath must begin with \"/\": {}", path);
        }
    }

    let listing = match client.list_files(project, path.as_deref(), pattern.as_deref()) {
        Err(ClientError::UnknownPath { .. }) => bail!(
            "cannot access {}: No such file or directory",
            path.as_deref().unwrap_or(paths::ROOT)
        ),
        listing => listing.context("Operation to list files has failed.")?,
    };

    for page in listing {
        let objects = page.context("Operation to list files has failed.")?;
        printer.print_resources(
            objects
                .iter()
                .filter(|object| *all || !object.name().starts_with('.'))
                .map(|object| FileEntry::new(object, *long)),
        )?;
    }
    Ok(())
}
