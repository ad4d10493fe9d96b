use crate::{
    commands::{
        download::DownloadArgs, jobs::JobsArgs, ls::LsArgs, rm::RmArgs, upload::UploadArgs,
    },
    printer::OutputFormat,
};
use anyhow::{anyhow, Error, Result};
use std::{path::PathBuf, str::FromStr};
use structopt::StructOpt;
use url::Url;

/// ica is the command line interface to Illumina Connected Analytics.
#[derive(Debug, StructOpt)]
#[structopt(
    global_settings = &[
        structopt::clap::AppSettings::ColoredHelp,
        structopt::clap::AppSettings::InferSubcommands,
    ]
)]
pub struct Args {
    #[structopt(long = "config-file", parse(from_os_str))]
    /// Path to the configuration file. Defaults to ~/.config/ica/config.json
    pub config: Option<PathBuf>,

    #[structopt(short = "v", long = "verbose")]
    /// Enable more verbose logging.
    pub verbose: bool,

    #[structopt(long = "endpoint", parse(try_from_str))]
    /// Specify what endpoint to use. Defaults to https://ica.illumina.com/ica/rest/
    pub endpoint: Option<Url>,

    #[structopt(short = "o", long = "output", default_value = "tsv")]
    /// Output format. One of: tsv, json
    pub output: OutputFormat,

    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    #[structopt(name = "completion")]
    /// Output shell completion code for the specified shell (bash or zsh)
    Completion { shell: Shell },

    #[structopt(name = "select")]
    /// Set the default project
    Select {},

    #[structopt(name = "projects")]
    /// List the projects visible to your API key
    Projects {},

    #[structopt(name = "token")]
    /// Print a short-lived bearer token for your tenant
    Token {},

    #[structopt(name = "ls")]
    /// List file or folder details
    Ls(LsArgs),

    #[structopt(name = "download")]
    /// Download a file to stdout
    Download(DownloadArgs),

    #[structopt(name = "upload")]
    /// Upload a file
    Upload(UploadArgs),

    #[structopt(name = "rm")]
    /// Remove (unlink) files or folders
    Rm(RmArgs),

    #[structopt(name = "jobs")]
    /// Find analyses (jobs). Jobs are sorted by most recently submitted first.
    Jobs(JobsArgs),
}

#[derive(Debug)]
pub enum Shell {
    Bash,
    Zsh,
}

impl FromStr for Shell {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self> {
        match string {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            _ => Err(anyhow!("unknown shell: '{}'", string)),
        }
    }
}
