use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::{json, Value};
use std::{
    ffi::OsStr,
    fs,
    io::Write,
    path::PathBuf,
    process::{Command, Output, Stdio},
};
use tempfile::TempDir;

pub const PROJECT_ID: &str = "prj-1";

/// Runs the `ica` binary against a local mock of the API, with its own
/// config file.
pub struct TestCli {
    pub server: ServerGuard,
    config_dir: TempDir,
}

impl TestCli {
    /// Credentials and a default project are already configured.
    pub fn new() -> Self {
        Self::with_config(json!({
            "ica_api_key": "test-api-key",
            "tenant": "tenant-1",
            "ica_project_id": PROJECT_ID,
            "ica_project_name": "Exomes",
        }))
    }

    pub fn with_config(config: Value) -> Self {
        let config_dir = tempfile::tempdir().expect("Could not create config directory");
        fs::write(config_dir.path().join("config.json"), config.to_string())
            .expect("Could not write config file");

        Self {
            server: Server::new(),
            config_dir,
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.path().join("config.json")
    }

    pub fn config(&self) -> Value {
        serde_json::from_str(&fs::read_to_string(self.config_path()).unwrap()).unwrap()
    }

    pub fn command(&self) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_ica"));

        command
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .arg("--config-file")
            .arg(self.config_path())
            .arg("--endpoint")
            .arg(self.server.url());

        command
    }

    pub fn run(&self, args: impl IntoIterator<Item = impl AsRef<OsStr>>) -> String {
        self.output(self.command().args(args))
    }

    pub fn run_and_error(&self, args: impl IntoIterator<Item = impl AsRef<OsStr>>) -> String {
        self.output_error(self.command().args(args))
    }

    pub fn run_with_stdin(
        &self,
        args: impl IntoIterator<Item = impl AsRef<OsStr>>,
        stdin: &[u8],
    ) -> Output {
        let mut process = self
            .command()
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        process.stdin.as_mut().unwrap().write_all(stdin).unwrap();
        drop(process.stdin.take());
        process.wait_with_output().unwrap()
    }

    pub fn output(&self, command: &mut Command) -> String {
        let output = command.output().unwrap();

        if !output.status.success() {
            panic!(
                "failed to run command:\n{}",
                String::from_utf8_lossy(&output.stderr)
            );
        }

        String::from_utf8(output.stdout).unwrap()
    }

    pub fn output_error(&self, command: &mut Command) -> String {
        let output = command.output().unwrap();

        if output.status.success() {
            panic!(
                "succeeded running command (expected failure):\n{}",
                String::from_utf8_lossy(&output.stdout)
            );
        }
        assert_eq!(output.status.code(), Some(1));

        String::from_utf8(output.stderr).unwrap()
    }

    pub fn data_url(&self) -> String {
        format!("/api/projects/{PROJECT_ID}/data")
    }

    /// Mock the lookup of the object called `name` in the folder `parent`.
    pub fn mock_resolve(&mut self, parent: &str, name: &str, items: Vec<Value>) -> Mock {
        let data_url = self.data_url();
        self.server
            .mock("GET", data_url.as_str())
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("parentFolderPath".into(), parent.into()),
                Matcher::UrlEncoded("filename".into(), name.into()),
                Matcher::UrlEncoded("filenameMatchMode".into(), "EXACT".into()),
            ]))
            .match_header("x-api-key", "test-api-key")
            .with_status(200)
            .with_body(page(items))
            .create()
    }
}

pub fn data_item(id: &str, path: &str, data_type: &str) -> Value {
    let name = path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    json!({
        "data": {
            "id": id,
            "details": {
                "name": name,
                "path": path,
                "dataType": data_type,
                "fileSizeInBytes": 2048,
                "timeCreated": "2023-04-01T10:00:00Z",
            }
        }
    })
}

pub fn analysis(id: &str, status: &str, tags: &[&str]) -> Value {
    json!({
        "id": id,
        "userReference": format!("{id}-ref"),
        "timeCreated": "2023-04-01T10:00:00Z",
        "status": status,
        "pipeline": { "code": "dragen-germline" },
        "tags": { "technicalTags": [], "userTags": tags },
    })
}

pub fn page(items: Vec<Value>) -> String {
    json!({ "items": items }).to_string()
}
