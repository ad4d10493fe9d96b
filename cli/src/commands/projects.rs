use anyhow::{anyhow, Context, Result};
use ica_client::{Client, Project, ProjectId};
use log::{debug, info};
use std::io::{self, Write};

use crate::{config::ConfigStore, printer::Printer, utils::Prompt};

/// Print every project visible to the API key.
pub fn list(client: &Client, printer: &Printer) -> Result<()> {
    for page in client.get_projects_iter() {
        let projects = page.context("Operation to list projects has failed.")?;
        printer.print_resources(projects.iter())?;
    }
    Ok(())
}

/// Ask the user to pick a default project and store it.
pub fn select(client: &Client, store: &ConfigStore, prompt: &dyn Prompt) -> Result<Project> {
    let projects = client
        .get_projects()
        .context("Operation to list projects has failed.")?;
    let project = choose_project(projects, prompt, io::stderr())?;
    store.set_project(&project, prompt)?;
    info!("Default project set to `{}`", project.name.0);
    Ok(project)
}

/// The stored default project, selecting one first if there is none.
pub fn get_project_id(
    client: &Client,
    store: &ConfigStore,
    prompt: &dyn Prompt,
) -> Result<ProjectId> {
    let config = store.load()?;
    if let (Some(id), name) = (config.project_id(), config.project_name()) {
        debug!(
            "Using project `{}` ({})",
            id,
            name.map(|name| name.0).unwrap_or_default()
        );
        return Ok(id);
    }

    select(client, store, prompt)?;
    store
        .load()?
        .project_id()
        .ok_or_else(|| anyhow!("No default project is set."))
}

/// Pick one of `projects`. A single project is picked without asking,
/// otherwise a numbered menu is written to `menu` until a valid choice is
/// entered.
pub fn choose_project(
    mut projects: Vec<Project>,
    prompt: &dyn Prompt,
    mut menu: impl Write,
) -> Result<Project> {
    match projects.len() {
        0 => return Err(anyhow!("no projects available to select from")),
        1 => {
            let project = projects.remove(0);
            info!(
                "one project available, setting as default ({})",
                project.name.0
            );
            return Ok(project);
        }
        _ => {}
    }

    writeln!(menu, "set default project:")?;
    write_menu(&projects, &mut menu)?;
    loop {
        let answer = prompt.text("provide project number to set as default")?;
        let choice = match answer.trim().parse::<usize>() {
            Ok(choice) => choice,
            Err(_) => {
                writeln!(menu, "must provide integer")?;
                continue;
            }
        };
        if choice == 0 || choice > projects.len() {
            writeln!(menu, "choice must be one of the displayed options")?;
            write_menu(&projects, &mut menu)?;
            continue;
        }
        return Ok(projects.swap_remove(choice - 1));
    }
}

fn write_menu(projects: &[Project], mut menu: impl Write) -> Result<()> {
    for (index, project) in projects.iter().enumerate() {
        writeln!(menu, " {}: {}", index + 1, project.name.0)?;
    }
    Ok(())
}
