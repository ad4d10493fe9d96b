use anyhow::{Context, Result};
use ica_client::{ApiKey, Project, ProjectId, ProjectName, TenantId};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::utils::Prompt;

/// Credentials and the default project, stored as one flat JSON object. Keys
/// written by other tools are kept as they are.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct IcaConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ica_api_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ica_project_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ica_project_name: Option<String>,

    #[serde(flatten)]
    other: Map<String, Value>,
}

impl IcaConfig {
    pub fn project_id(&self) -> Option<ProjectId> {
        self.ica_project_id.clone().map(ProjectId)
    }

    pub fn set_project(&mut self, project: &Project) {
        self.ica_project_id = Some(project.id.0.clone());
        self.ica_project_name = Some(project.name.0.clone());
    }

    pub fn project_name(&self) -> Option<ProjectName> {
        self.ica_project_name.clone().map(ProjectName)
    }
}

pub fn read_ica_config(path: impl AsRef<Path>) -> Result<IcaConfig> {
    debug!("Reading config file at `{}`", path.as_ref().display());
    if path.as_ref().exists() {
        let file = File::open(&path)
            .with_context(|| format!("Could not open config file `{}`", path.as_ref().display()))?;
        let config_reader = BufReader::new(file);
        serde_json::from_reader(config_reader)
            .with_context(|| format!("Could not parse config file `{}`", path.as_ref().display()))
    } else {
        Ok(Default::default())
    }
}

pub fn write_ica_config(path: impl AsRef<Path>, config: &IcaConfig) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing config file at `{}`", path.display());
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| {
            format!("Could not create config directory `{}`", parent.display())
        })?;
    }

    let file = File::create(path)
        .with_context(|| format!("Could not create config file `{}`", path.display()))?;
    let mut config_writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut config_writer, &config)
        .context("Could not serialise configuration.")
        .and_then(|_| config_writer.flush().context("Could not flush configuration."))
        .with_context(|| format!("Could not write configuration to `{}`", path.display()))?;

    restrict_to_owner(path)
}

#[cfg(unix)]
fn restrict_to_owner(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o600)).with_context(|| {
        format!(
            "Could not restrict permissions of config file `{}`",
            path.display()
        )
    })
}

#[cfg(not(unix))]
fn restrict_to_owner(_path: &Path) -> Result<()> {
    Ok(())
}

/// The config file at a fixed path. Every access re-reads the file and every
/// change is written back straight away.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<IcaConfig> {
        read_ica_config(&self.path)
    }

    pub fn write(&self, config: &IcaConfig) -> Result<()> {
        write_ica_config(&self.path, config)
    }

    pub fn api_key(&self, prompt: &dyn Prompt) -> Result<ApiKey> {
        self.get_or_prompt(
            |config| &mut config.ica_api_key,
            || prompt.secret("provide ICA API key"),
        )
        .map(ApiKey)
    }

    pub fn tenant_id(&self, prompt: &dyn Prompt) -> Result<TenantId> {
        self.get_or_prompt(
            |config| &mut config.tenant,
            || prompt.text("provide your ICA tenant ID"),
        )
        .map(TenantId)
    }

    /// Store `project` as the default, asking for the tenant and API key too
    /// if they are not known yet.
    pub fn set_project(&self, project: &Project, prompt: &dyn Prompt) -> Result<()> {
        let mut config = self.load()?;
        if config.tenant.is_none() {
            config.tenant = Some(prompt.text("provide your ICA tenant ID")?);
        }
        if config.ica_api_key.is_none() {
            config.ica_api_key = Some(prompt.secret("provide ICA API key")?);
        }
        config.set_project(project);
        self.write(&config)
    }

    fn get_or_prompt(
        &self,
        field: impl Fn(&mut IcaConfig) -> &mut Option<String>,
        ask: impl FnOnce() -> Result<String>,
    ) -> Result<String> {
        let mut config = self.load()?;
        if let Some(value) = field(&mut config) {
            return Ok(value.clone());
        }

        let value = ask()?;
        *field(&mut config) = Some(value.clone());
        self.write(&config)?;
        Ok(value)
    }
}
