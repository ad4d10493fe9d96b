use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::resources::PageQuery;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct Id(pub String);

impl Display for Id {
    fn fmt(&self, formatter: &mut Formatter) -> FmtResult {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    File,
    Folder,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Details {
    pub name: String,
    pub path: String,
    pub data_type: DataType,
    // Folders come back without a size.
    #[serde(default)]
    pub file_size_in_bytes: u64,
    // Kept as sent so it prints exactly as the server formats it.
    pub time_created: String,
}

/// A file or folder in a project's storage tree.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DataObject {
    pub id: Id,
    pub details: Details,
}

impl DataObject {
    pub fn name(&self) -> &str {
        &self.details.name
    }

    pub fn path(&self) -> &str {
        &self.details.path
    }

    pub fn size(&self) -> u64 {
        self.details.file_size_in_bytes
    }

    pub fn is_folder(&self) -> bool {
        self.details.data_type == DataType::Folder
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DataItem {
    pub data: DataObject,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum FilenameMatchMode {
    Exact,
    Fuzzy,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DataQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_folder_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_folder_id: Option<Id>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename_match_mode: Option<FilenameMatchMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_offset: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

impl DataQuery {
    pub fn children_of_path(path: String) -> Self {
        Self {
            parent_folder_path: Some(path),
            ..Default::default()
        }
    }

    pub fn children_of_folder(folder_id: Id) -> Self {
        Self {
            parent_folder_id: Some(folder_id),
            ..Default::default()
        }
    }

    pub fn with_filename(mut self, filename: String, mode: FilenameMatchMode) -> Self {
        self.filename = Some(filename);
        self.filename_match_mode = Some(mode);
        self
    }

    pub fn with_page(&self, page: &PageQuery) -> Self {
        Self {
            page_offset: Some(page.page_offset),
            page_size: Some(page.page_size),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CreateDownloadUrlResponse {
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateFileRequest<'request> {
    pub name: &'request str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<&'request Id>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_path: Option<&'request str>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateFileResponse {
    pub upload_url: String,
}
