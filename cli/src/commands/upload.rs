use anyhow::{bail, Context, Result};
use ica_client::{Client, ProjectId, UploadSource};
use log::info;
use std::{
    io::{self, Read},
    path::PathBuf,
};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
pub struct UploadArgs {
    #[structopt(name = "INFILE", parse(from_os_str))]
    /// Path to the local file. Reads stdin if omitted.
    pub input: Option<PathBuf>,

    #[structopt(long = "path")]
    /// Destination path, either the full path of the new file or the folder to put it in
    pub destination: Option<String>,

    #[structopt(short = "f", long = "force")]
    /// Overwrite the destination file if it exists
    pub force: bool,
}

pub fn run(args: &UploadArgs, client: &Client, project: &ProjectId) -> Result<()> {
    let source = match &args.input {
        Some(path) => {
            if !path.is_file() {
                bail!("No such file `{}`", path.display());
            }
            UploadSource::Path(path.clone())
        }
        None => {
            let mut bytes = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .context("Could not read upload from stdin.")?;
            UploadSource::Bytes(bytes)
        }
    };

    let path = client
        .upload(project, source, args.destination.as_deref(), args.force)
        .context("Operation to upload file has failed.")?;
    info!("Uploaded `{}`", path);
    Ok(())
}
