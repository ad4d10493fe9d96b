#![deny(clippy::all)]
mod args;
mod commands;
mod config;
mod printer;
mod size;
mod utils;

use anyhow::{Context, Result};
use ica_client::{Client, Config as ClientConfig, DEFAULT_ENDPOINT};
use log::{debug, error};
use std::{io, path::PathBuf, process};
use structopt::{clap::Shell as ClapShell, StructOpt};

use crate::{
    args::{Args, Command, Shell},
    commands::{auth, download, jobs, ls, projects, rm, upload},
    config::ConfigStore,
    printer::Printer,
    utils::{io::init_env_logger, Prompt, TerminalPrompt},
};

fn run(args: Args) -> Result<()> {
    let store = ConfigStore::new(find_configuration(&args)?);
    debug!("Using config file `{}`", store.path().display());
    let printer = Printer::new(args.output);
    let prompt = TerminalPrompt;

    match &args.command {
        Command::Completion { shell } => {
            let mut app = Args::clap();
            let clap_shell = match shell {
                Shell::Zsh => ClapShell::Zsh,
                Shell::Bash => ClapShell::Bash,
            };
            app.gen_completions_to("ica", clap_shell, &mut io::stdout());
            Ok(())
        }
        Command::Select {} => {
            let client = client_from_config(&args, &store, &prompt)?;
            projects::select(&client, &store, &prompt).map(|_| ())
        }
        Command::Projects {} => {
            let client = client_from_config(&args, &store, &prompt)?;
            projects::list(&client, &printer)
        }
        Command::Token {} => {
            let client = client_from_config(&args, &store, &prompt)?;
            auth::run(&client, &store, &prompt)
        }
        Command::Ls(ls_args) => {
            let client = client_from_config(&args, &store, &prompt)?;
            let project = projects::get_project_id(&client, &store, &prompt)?;
            ls::run(ls_args, &client, &project, &printer)
        }
        Command::Download(download_args) => {
            let client = client_from_config(&args, &store, &prompt)?;
            let project = projects::get_project_id(&client, &store, &prompt)?;
            download::run(download_args, &client, &project)
        }
        Command::Upload(upload_args) => {
            let client = client_from_config(&args, &store, &prompt)?;
            let project = projects::get_project_id(&client, &store, &prompt)?;
            upload::run(upload_args, &client, &project)
        }
        Command::Rm(rm_args) => {
            let client = client_from_config(&args, &store, &prompt)?;
            let project = projects::get_project_id(&client, &store, &prompt)?;
            rm::run(rm_args, &client, &project)
        }
        Command::Jobs(jobs_args) => {
            let client = client_from_config(&args, &store, &prompt)?;
            let project = projects::get_project_id(&client, &store, &prompt)?;
            jobs::run(jobs_args, &client, &project, &printer)
        }
    }
}

fn client_from_config(args: &Args, store: &ConfigStore, prompt: &dyn Prompt) -> Result<Client> {
    let endpoint = args
        .endpoint
        .clone()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.clone());
    let api_key = store.api_key(prompt)?;

    Client::new(ClientConfig {
        endpoint,
        api_key,
        ..Default::default()
    })
    .context("Failed to initialise the HTTP client.")
}

fn find_configuration(args: &Args) -> Result<PathBuf> {
    if let Some(config_path) = args.config.clone() {
        return Ok(config_path);
    }

    // ~/.config/ica on every platform, macOS included.
    let mut config_path =
        dirs::home_dir().context("Could not get path to the user's home directory")?;
    config_path.push(".config");
    config_path.push("ica");
    config_path.push("config.json");
    Ok(config_path)
}

fn is_broken_pipe(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|error| error.kind() == io::ErrorKind::BrokenPipe)
    })
}

fn exit_on_interrupt() -> Result<()> {
    ctrlc::set_handler(|| process::exit(0)).context("Could not install the interrupt handler.")
}

fn main() {
    let args = Args::from_args();
    init_env_logger(args.verbose);

    if let Err(error) = exit_on_interrupt().and_then(|_| run(args)) {
        if is_broken_pipe(&error) {
            process::exit(0);
        }

        error!("An error occurred:");
        for cause in error.chain() {
            error!(" |- {cause}");
        }

        #[cfg(feature = "backtrace")]
        {
            error!("{}", error.backtrace());
        }

        process::exit(1);
    }
}
