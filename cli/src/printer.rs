use anyhow::{anyhow, Context, Error, Result};
use ica_client::{Analysis, DataObject, Project};
use serde::Serialize;
use std::{
    io::{self, Write},
    str::FromStr,
};

use crate::size::format_size;

pub fn print_resources_as_json<Resource>(
    resources: impl IntoIterator<Item = Resource>,
    mut writer: impl Write,
) -> Result<()>
where
    Resource: Serialize,
{
    for resource in resources {
        let line = serde_json::to_string(&resource).context("Could not serialise resource.")?;
        writeln!(writer, "{line}").context("Failed to write JSON resource to writer.")?;
    }
    Ok(())
}

pub fn print_resources_as_tsv<Resource>(
    resources: impl IntoIterator<Item = Resource>,
    mut writer: impl Write,
) -> Result<()>
where
    Resource: DisplayRow,
{
    for resource in resources {
        writeln!(writer, "{}", resource.to_row().join("\t"))
            .context("Failed to write resource to writer.")?;
    }
    Ok(())
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    #[default]
    Tsv,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self> {
        if string == "tsv" {
            Ok(OutputFormat::Tsv)
        } else if string == "json" {
            Ok(OutputFormat::Json)
        } else {
            Err(anyhow!("{}", string))
        }
    }
}

/// Represents a resource that is printed as one tab separated line.
pub trait DisplayRow {
    fn to_row(&self) -> Vec<String>;
}

impl<Resource: DisplayRow> DisplayRow for &Resource {
    fn to_row(&self) -> Vec<String> {
        (*self).to_row()
    }
}

impl DisplayRow for Project {
    fn to_row(&self) -> Vec<String> {
        vec![self.name.0.clone(), self.id.0.clone()]
    }
}

impl DisplayRow for Analysis {
    fn to_row(&self) -> Vec<String> {
        vec![
            self.pipeline.code.clone(),
            self.user_reference.clone(),
            self.id.0.clone(),
            self.time_created.clone(),
            self.status.to_lowercase(),
        ]
    }
}

/// A file or folder as printed by `ls`. The long form adds the id, size and
/// creation time after the path.
#[derive(Serialize)]
#[serde(transparent)]
pub struct FileEntry<'a> {
    object: &'a DataObject,
    #[serde(skip)]
    long: bool,
}

impl<'a> FileEntry<'a> {
    pub fn new(object: &'a DataObject, long: bool) -> Self {
        Self { object, long }
    }
}

impl<'a> DisplayRow for FileEntry<'a> {
    fn to_row(&self) -> Vec<String> {
        let mut row = vec![self.object.path().to_owned()];
        if self.long {
            row.extend([
                self.object.id.0.to_lowercase(),
                format_size(self.object.size()),
                self.object.details.time_created.clone(),
            ]);
        }
        row
    }
}

#[derive(Debug, Default)]
pub struct Printer {
    output: OutputFormat,
}

impl Printer {
    pub fn new(output: OutputFormat) -> Self {
        Self { output }
    }

    pub fn print_resources<Resource>(
        &self,
        resources: impl IntoIterator<Item = Resource>,
    ) -> Result<()>
    where
        Resource: DisplayRow + Serialize,
    {
        self.write_resources(resources, io::stdout().lock())
    }

    pub fn write_resources<Resource>(
        &self,
        resources: impl IntoIterator<Item = Resource>,
        writer: impl Write,
    ) -> Result<()>
    where
        Resource: DisplayRow + Serialize,
    {
        match self.output {
            OutputFormat::Tsv => print_resources_as_tsv(resources, writer),
            OutputFormat::Json => print_resources_as_json(resources, writer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn object() -> DataObject {
        serde_json::from_value(json!({
            "id": "fil.ABC123",
            "details": {
                "name": "sample.bam",
                "path": "/runs/sample.bam",
                "dataType": "FILE",
                "fileSizeInBytes": 1536,
                "timeCreated": "2023-04-01T10:00:00Z",
            }
        }))
        .unwrap()
    }

    fn printed(printer: &Printer, entries: Vec<FileEntry>) -> String {
        let mut buffer = Vec::new();
        printer.write_resources(entries, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn short_entry_is_the_path() {
        let object = object();
        assert_eq!(
            printed(&Printer::default(), vec![FileEntry::new(&object, false)]),
            "/runs/sample.bam\n"
        );
    }

    #[test]
    fn long_entry_has_id_size_and_date() {
        let object = object();
        assert_eq!(
            printed(&Printer::default(), vec![FileEntry::new(&object, true)]),
            "/runs/sample.bam\tfil.abc123\t1.5K\t2023-04-01T10:00:00Z\n"
        );
    }

    #[test]
    fn json_entry_is_the_object() {
        let object = object();
        let output = printed(
            &Printer::new(OutputFormat::Json),
            vec![FileEntry::new(&object, true)],
        );
        let parsed: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(parsed["id"], "fil.ABC123");
        assert_eq!(parsed["details"]["dataType"], "FILE");
    }

    #[test]
    fn analysis_row() {
        let analysis: Analysis = serde_json::from_value(json!({
            "id": "a-1",
            "userReference": "sample-1",
            "timeCreated": "2023-04-01T10:00:00.250Z",
            "status": "IN_PROGRESS",
            "pipeline": { "code": "dragen-germline" },
        }))
        .unwrap();
        assert_eq!(
            analysis.to_row().join("\t"),
            "dragen-germline\tsample-1\ta-1\t2023-04-01T10:00:00.250Z\tin_progress"
        );
    }

    #[test]
    fn created_time_is_printed_as_sent() {
        let analysis: Analysis = serde_json::from_value(json!({
            "id": "a-2",
            "userReference": "sample-2",
            "timeCreated": "2023-04-01T10:00:00.000+00:00",
            "status": "SUCCEEDED",
            "pipeline": { "code": "dragen-germline" },
        }))
        .unwrap();
        assert_eq!(analysis.to_row()[3], "2023-04-01T10:00:00.000+00:00");
    }

    #[test]
    fn unknown_output_format() {
        assert!("table".parse::<OutputFormat>().is_err());
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    }
}
