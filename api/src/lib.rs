#![deny(clippy::all)]
mod error;
pub mod paths;
pub mod resources;

use http::Method;
use log::{debug, info};
use once_cell::sync::Lazy;
use reqwest::{
    blocking::{Body, Client as HttpClient, Response as HttpResponse},
    header::{self, HeaderMap, HeaderName, HeaderValue},
    StatusCode,
};
use serde::{Deserialize, Serialize};
use std::{
    collections::VecDeque,
    fmt::{Debug, Formatter, Result as FmtResult},
    fs::File,
    io::Read,
    path::PathBuf,
    time::Duration,
};
use url::Url;

use crate::resources::{
    data::{
        CreateDownloadUrlResponse, CreateFileRequest, CreateFileResponse, DataItem, DataQuery,
        FilenameMatchMode,
    },
    token::{TokenQuery, TokenResponse},
    Page, PageQuery,
};

pub use crate::{
    error::{Error, Result},
    resources::{
        analysis::{Analysis, Id as AnalysisId, JobStatus, Pipeline},
        data::{DataObject, DataType, Details as DataDetails, Id as DataId},
        project::{Id as ProjectId, Name as ProjectName, Project},
        token::{TenantId, Token},
    },
};

#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(pub String);

impl Debug for ApiKey {
    fn fmt(&self, formatter: &mut Formatter) -> FmtResult {
        write!(formatter, "ApiKey(<hidden>)")
    }
}

pub struct Config {
    pub endpoint: Url,
    pub api_key: ApiKey,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: DEFAULT_ENDPOINT.clone(),
            api_key: ApiKey("".to_owned()),
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECONDS),
        }
    }
}

/// A session with the platform. The authentication headers are built once, on
/// construction, and reused for every request.
#[derive(Debug)]
pub struct Client {
    endpoints: Endpoints,
    http_client: HttpClient,
    // Signed url transfers can run for hours, so they have no total deadline.
    transfer_client: HttpClient,
    headers: HeaderMap,
}

/// What a path resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResolution {
    /// The server knows of nothing with this name in the parent folder.
    Unknown,
    /// The objects whose path is exactly the requested one. Can be empty when
    /// the server's "exact" name match was looser than the path comparison.
    Matches(Vec<DataObject>),
}

impl PathResolution {
    pub fn into_matches(self, path: &str) -> Result<Vec<DataObject>> {
        match self {
            PathResolution::Unknown => Err(Error::UnknownPath {
                path: path.to_owned(),
            }),
            PathResolution::Matches(matches) => Ok(matches),
        }
    }

    /// The single object at the path, failing if there are none or several.
    pub fn into_single(self, path: &str) -> Result<DataObject> {
        let mut matches = match self {
            PathResolution::Unknown => Vec::new(),
            PathResolution::Matches(matches) => matches,
        };
        match matches.len() {
            0 => Err(Error::CannotAccess {
                path: path.to_owned(),
            }),
            1 => Ok(matches.remove(0)),
            _ => Err(Error::TooManyMatches {
                path: path.to_owned(),
            }),
        }
    }

    fn into_first(self) -> Option<DataObject> {
        match self {
            PathResolution::Unknown => None,
            PathResolution::Matches(matches) => matches.into_iter().next(),
        }
    }
}

/// Content to upload.
pub enum UploadSource {
    /// A local file; its name is used when the destination is a folder.
    Path(PathBuf),
    Bytes(Vec<u8>),
    Reader(Box<dyn Read + Send>),
}

impl UploadSource {
    fn file_name(&self) -> Option<String> {
        match self {
            UploadSource::Path(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            UploadSource::Bytes(_) | UploadSource::Reader(_) => None,
        }
    }

    fn into_body(self) -> Result<Body> {
        Ok(match self {
            UploadSource::Path(path) => {
                Body::from(File::open(&path).map_err(|source| Error::Io {
                    message: format!("could not open `{}`", path.display()),
                    source,
                })?)
            }
            UploadSource::Bytes(bytes) => Body::from(bytes),
            UploadSource::Reader(reader) => Body::new(reader),
        })
    }
}

/// The folder an upload is written into. The root folder has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFolder {
    pub id: Option<DataId>,
    pub path: String,
}

impl UploadFolder {
    fn root() -> Self {
        Self {
            id: None,
            path: paths::ROOT.to_owned(),
        }
    }

    fn from_object(object: DataObject) -> Self {
        Self {
            id: Some(object.id),
            path: object.details.path,
        }
    }
}

/// Decide the name a new file gets inside `folder`: whatever part of the
/// destination lies below the folder, or else the local file's own name.
pub fn upload_name(
    source: &UploadSource,
    destination: Option<&str>,
    folder: &UploadFolder,
) -> Result<String> {
    let destination = destination.unwrap_or(&folder.path);
    paths::relative_name(destination, &folder.path)
        .or_else(|| source.file_name())
        .ok_or_else(|| Error::UnknownFilename {
            destination: destination.to_owned(),
        })
}

impl Client {
    /// Create a new API client.
    pub fn new(config: Config) -> Result<Client> {
        let http_client = build_http_client(&config)?;
        let transfer_client = build_transfer_client(&config)?;
        let headers = build_headers(&config)?;
        let endpoints = Endpoints::new(config.endpoint)?;
        Ok(Client {
            endpoints,
            http_client,
            transfer_client,
            headers,
        })
    }

    /// Get the base url for the client
    pub fn base_url(&self) -> &Url {
        &self.endpoints.base
    }

    /// Exchange the API key for a short-lived bearer token.
    pub fn create_token(&self, tenant: &TenantId) -> Result<Token> {
        Ok(self
            .request::<(), _>(
                &Method::POST,
                self.endpoints.tokens.clone(),
                None,
                Some(&TokenQuery { tenant: &tenant.0 }),
                Some(ACCEPT_V3),
            )
            .and_then(parse_json::<TokenResponse>)?
            .token)
    }

    /// Iterate through pages of all projects visible to the API key.
    pub fn get_projects_iter(&self) -> ProjectsIter<'_> {
        ProjectsIter::new(self)
    }

    /// List all projects visible to the API key.
    pub fn get_projects(&self) -> Result<Vec<Project>> {
        let mut projects = Vec::new();
        for page in self.get_projects_iter() {
            projects.extend(page?);
        }
        Ok(projects)
    }

    /// Look up the objects at `path`.
    pub fn resolve_path(&self, project: &ProjectId, path: &str) -> Result<PathResolution> {
        let (parent, name) = paths::split(path);
        let mut query = DataQuery::children_of_path(parent);
        if !name.is_empty() {
            query = query.with_filename(name, FilenameMatchMode::Exact);
        }

        let items = self.get_data_page(project, &query)?;
        if items.is_empty() {
            return Ok(PathResolution::Unknown);
        }

        let wanted = paths::normalize(path);
        Ok(PathResolution::Matches(
            items
                .into_iter()
                .filter(|object| paths::normalize(object.path()) == wanted)
                .collect(),
        ))
    }

    /// List the object at `path` if it is a file, or the children of the
    /// folder at `path`. `None` or `/` lists the root folder.
    pub fn list_files<'a>(
        &'a self,
        project: &'a ProjectId,
        path: Option<&str>,
        pattern: Option<&str>,
    ) -> Result<FileListing<'a>> {
        let with_pattern = |query: DataQuery| match pattern {
            Some(pattern) => query.with_filename(pattern.to_owned(), FilenameMatchMode::Fuzzy),
            None => query,
        };

        let sources = match path {
            None => vec![ListingSource::Folder(with_pattern(
                DataQuery::children_of_path(paths::ROOT.to_owned()),
            ))],
            Some(path) if paths::is_root(path) => vec![ListingSource::Folder(with_pattern(
                DataQuery::children_of_path(paths::ROOT.to_owned()),
            ))],
            Some(path) => self
                .resolve_path(project, path)?
                .into_matches(path)?
                .into_iter()
                .map(|object| {
                    if object.is_folder() {
                        ListingSource::Folder(with_pattern(DataQuery::children_of_folder(
                            object.id,
                        )))
                    } else {
                        ListingSource::File(object)
                    }
                })
                .collect(),
        };

        Ok(FileListing {
            client: self,
            project,
            sources: sources.into(),
            current: None,
        })
    }

    /// Stream the content of the file at `path`.
    pub fn download(&self, project: &ProjectId, path: &str) -> Result<DataChunks> {
        let object = self.resolve_path(project, path)?.into_single(path)?;
        let url = self.create_download_url(project, &object.id)?;

        debug!("Attempting GET on signed download url for `{}`", path);
        let http_response = self
            .transfer_client
            .get(url)
            .send()
            .map_err(|source| Error::ReqwestError {
                source,
                message: "GET operation failed.".to_owned(),
            })?;
        Ok(DataChunks::new(check_status(http_response)?))
    }

    /// Get a short-lived signed url the content of a file can be read from.
    pub fn create_download_url(&self, project: &ProjectId, data: &DataId) -> Result<String> {
        Ok(self
            .request::<(), ()>(
                &Method::POST,
                self.endpoints.data_action(project, data, "createDownloadUrl")?,
                None,
                None,
                None,
            )
            .and_then(parse_json::<CreateDownloadUrlResponse>)?
            .url)
    }

    /// Delete every object at `path`. Folders are only deleted if `recursive`
    /// is set; the first folder met otherwise stops the deletion.
    pub fn delete(&self, project: &ProjectId, path: Option<&str>, recursive: bool) -> Result<()> {
        let path = match path {
            None => return Err(Error::MissingPath),
            Some(path) if paths::is_root(path) => return Err(Error::DeleteRoot),
            Some(path) => path,
        };

        for object in self.resolve_path(project, path)?.into_matches(path)? {
            if object.is_folder() && !recursive {
                return Err(Error::IsADirectory {
                    path: path.to_owned(),
                });
            }
            self.delete_data(project, &object.id)?;
            info!("Deleted `{}`", object.path());
        }
        Ok(())
    }

    /// Delete a single object by id.
    pub fn delete_data(&self, project: &ProjectId, data: &DataId) -> Result<()> {
        self.request::<(), ()>(
            &Method::POST,
            self.endpoints.data_action(project, data, "delete")?,
            None,
            None,
            None,
        )?;
        Ok(())
    }

    /// Upload `source` to `destination`, which may name the new file or the
    /// folder to put it in. Returns the path of the uploaded file.
    pub fn upload(
        &self,
        project: &ProjectId,
        source: UploadSource,
        destination: Option<&str>,
        overwrite: bool,
    ) -> Result<String> {
        let folder = self.get_upload_folder(project, destination, overwrite)?;
        let name = upload_name(&source, destination, &folder)?;
        let path = paths::join(&folder.path, &name);

        let upload_url = match self.create_file_with_upload_url(project, &name, &folder) {
            Err(error) if error.has_status(StatusCode::CONFLICT) => {
                if !overwrite {
                    return Err(Error::AlreadyExists { path });
                }
                info!("Replacing existing file `{}`", path);
                self.delete(project, Some(&path), false)?;
                self.create_file_with_upload_url(project, &name, &folder)?
            }
            result => result?,
        };

        debug!("Attempting PUT on signed upload url for `{}`", path);
        let http_response = self
            .transfer_client
            .put(upload_url)
            .body(source.into_body()?)
            .send()
            .map_err(|source| Error::ReqwestError {
                source,
                message: "PUT operation failed.".to_owned(),
            })?;
        match check_status(http_response) {
            Err(error) if error.has_status(StatusCode::CONFLICT) => {
                Err(Error::UploadConflict { path })
            }
            result => result.map(|_| path),
        }
    }

    /// Find the folder an upload to `destination` goes into. An existing file
    /// at the destination is deleted first when `overwrite` is set.
    pub fn get_upload_folder(
        &self,
        project: &ProjectId,
        destination: Option<&str>,
        overwrite: bool,
    ) -> Result<UploadFolder> {
        let destination = match destination {
            Some(destination) if !paths::is_root(destination) => destination,
            _ => {
                info!("uploading to root folder");
                return Ok(UploadFolder::root());
            }
        };

        if let Some(existing) = self.resolve_path(project, destination)?.into_first() {
            if existing.is_folder() {
                return Ok(UploadFolder::from_object(existing));
            }
            if !overwrite {
                return Err(Error::WouldOverwrite {
                    path: destination.to_owned(),
                });
            }
            info!("Replacing existing file `{}`", existing.path());
            self.delete_data(project, &existing.id)?;
        }

        let parent = paths::parent(destination);
        if paths::is_root(&parent) {
            return Ok(UploadFolder::root());
        }
        match self.resolve_path(project, &parent)?.into_first() {
            Some(folder) if folder.is_folder() => Ok(UploadFolder::from_object(folder)),
            Some(_) => Err(Error::UnknownFolder {
                path: destination.to_owned(),
            }),
            None => Err(Error::UnknownPath { path: parent }),
        }
    }

    fn create_file_with_upload_url(
        &self,
        project: &ProjectId,
        name: &str,
        folder: &UploadFolder,
    ) -> Result<String> {
        let request = CreateFileRequest {
            name,
            folder_id: folder.id.as_ref(),
            folder_path: match folder.id {
                Some(_) => None,
                None => Some(folder.path.as_str()),
            },
        };
        Ok(self
            .request::<_, ()>(
                &Method::POST,
                self.endpoints.create_file_with_upload_url(project)?,
                Some(&request),
                None,
                None,
            )
            .and_then(parse_json::<CreateFileResponse>)?
            .upload_url)
    }

    /// Iterate through pages of analyses in a project, most recent first.
    ///
    /// At most `max_examined` analyses are looked at, whether or not they pass
    /// the status filter.
    pub fn get_analyses_iter<'a>(
        &'a self,
        project: &'a ProjectId,
        status: Option<JobStatus>,
        max_examined: usize,
    ) -> AnalysesIter<'a> {
        AnalysesIter::new(self, project, status, max_examined)
    }

    /// Get a single analysis by id.
    pub fn get_analysis(&self, project: &ProjectId, analysis: &AnalysisId) -> Result<Analysis> {
        self.request::<(), ()>(
            &Method::GET,
            self.endpoints.analysis(project, analysis)?,
            None,
            None,
            Some(ACCEPT_V4),
        )
        .and_then(parse_json)
    }

    fn get_projects_page(&self, page: &PageQuery) -> Result<Vec<Project>> {
        Ok(self
            .request::<(), _>(
                &Method::GET,
                self.endpoints.projects.clone(),
                None,
                Some(page),
                None,
            )
            .and_then(parse_json::<Page<Project>>)?
            .items)
    }

    fn get_data_page(&self, project: &ProjectId, query: &DataQuery) -> Result<Vec<DataObject>> {
        Ok(self
            .request::<(), _>(
                &Method::GET,
                self.endpoints.data(project)?,
                None,
                Some(query),
                None,
            )
            .and_then(parse_json::<Page<DataItem>>)?
            .items
            .into_iter()
            .map(|item| item.data)
            .collect())
    }

    fn search_analyses_page(
        &self,
        project: &ProjectId,
        page: &PageQuery,
    ) -> Result<Vec<Analysis>> {
        Ok(self
            .request::<(), _>(
                &Method::POST,
                self.endpoints.analysis_search(project)?,
                None,
                Some(page),
                None,
            )
            .and_then(parse_json::<Page<Analysis>>)?
            .items)
    }

    fn request<RequestT, QueryT>(
        &self,
        method: &Method,
        url: Url,
        body: Option<&RequestT>,
        query: Option<&QueryT>,
        accept: Option<&'static str>,
    ) -> Result<HttpResponse>
    where
        RequestT: Serialize,
        QueryT: Serialize,
    {
        debug!("Attempting {} `{}`", method, url);
        let mut request = self
            .http_client
            .request(method.clone(), url)
            .headers(self.headers.clone());
        if let Some(accept) = accept {
            request = request.header(header::ACCEPT, accept);
        }
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let http_response = request.send().map_err(|source| Error::ReqwestError {
            source,
            message: format!("{method} operation failed."),
        })?;
        check_status(http_response)
    }
}

fn check_status(http_response: HttpResponse) -> Result<HttpResponse> {
    let status_code = http_response.status();
    if status_code.is_success() {
        Ok(http_response)
    } else {
        let message = http_response.text().unwrap_or_default();
        Err(Error::Api {
            status_code,
            message,
        })
    }
}

fn parse_json<SuccessT>(http_response: HttpResponse) -> Result<SuccessT>
where
    for<'de> SuccessT: Deserialize<'de>,
{
    http_response.json().map_err(Error::BadJsonResponse)
}

pub struct ProjectsIter<'a> {
    client: &'a Client,
    page: PageQuery,
    done: bool,
}

impl<'a> ProjectsIter<'a> {
    pub const PAGE_SIZE: usize = 10;

    fn new(client: &'a Client) -> Self {
        Self {
            client,
            page: PageQuery::first(Self::PAGE_SIZE),
            done: false,
        }
    }
}

impl<'a> Iterator for ProjectsIter<'a> {
    type Item = Result<Vec<Project>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let response = self.client.get_projects_page(&self.page);
        Some(response.map(|projects| {
            self.done = !self.page.advance(projects.len());
            projects
        }))
    }
}

/// Pages of the children of one folder.
pub struct DataIter<'a> {
    client: &'a Client,
    project: &'a ProjectId,
    query: DataQuery,
    page: PageQuery,
    done: bool,
}

impl<'a> DataIter<'a> {
    pub const PAGE_SIZE: usize = 1000;

    fn new(client: &'a Client, project: &'a ProjectId, query: DataQuery) -> Self {
        Self {
            client,
            project,
            query,
            page: PageQuery::first(Self::PAGE_SIZE),
            done: false,
        }
    }
}

impl<'a> Iterator for DataIter<'a> {
    type Item = Result<Vec<DataObject>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let response = self
            .client
            .get_data_page(self.project, &self.query.with_page(&self.page));
        Some(response.map(|objects| {
            self.done = !self.page.advance(objects.len());
            objects
        }))
    }
}

enum ListingSource {
    File(DataObject),
    Folder(DataQuery),
}

/// Pages of objects produced by `Client::list_files`. Folder listings are
/// only requested once the previous source is used up.
pub struct FileListing<'a> {
    client: &'a Client,
    project: &'a ProjectId,
    sources: VecDeque<ListingSource>,
    current: Option<DataIter<'a>>,
}

impl<'a> Iterator for FileListing<'a> {
    type Item = Result<Vec<DataObject>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(current) = self.current.as_mut() {
                match current.next() {
                    Some(page) => return Some(page),
                    None => self.current = None,
                }
            }
            match self.sources.pop_front()? {
                ListingSource::File(object) => return Some(Ok(vec![object])),
                ListingSource::Folder(query) => {
                    self.current = Some(DataIter::new(self.client, self.project, query))
                }
            }
        }
    }
}

/// Pages of analyses, optionally restricted to one job status.
pub struct AnalysesIter<'a> {
    client: &'a Client,
    project: &'a ProjectId,
    status: Option<JobStatus>,
    page: PageQuery,
    max_examined: usize,
    num_examined: usize,
    done: bool,
}

impl<'a> AnalysesIter<'a> {
    pub const PAGE_SIZE: usize = 1000;

    fn new(
        client: &'a Client,
        project: &'a ProjectId,
        status: Option<JobStatus>,
        max_examined: usize,
    ) -> Self {
        Self {
            client,
            project,
            status,
            page: PageQuery::first(Self::PAGE_SIZE),
            max_examined,
            num_examined: 0,
            done: max_examined == 0,
        }
    }

    pub fn num_examined(&self) -> usize {
        self.num_examined
    }
}

impl<'a> Iterator for AnalysesIter<'a> {
    type Item = Result<Vec<Analysis>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let response = self.client.search_analyses_page(self.project, &self.page);
        Some(response.map(|mut analyses| {
            let page_full = self.page.advance(analyses.len());
            analyses.truncate(self.max_examined - self.num_examined);
            self.num_examined += analyses.len();
            self.done = !page_full || self.num_examined >= self.max_examined;

            if let Some(status) = self.status {
                analyses.retain(|analysis| status.matches(&analysis.status));
            }
            analyses
        }))
    }
}

/// The content of a downloaded file, in chunks of `CHUNK_SIZE` bytes. Only
/// the final chunk may be shorter.
pub struct DataChunks {
    response: HttpResponse,
    done: bool,
}

impl DataChunks {
    pub const CHUNK_SIZE: usize = 1600;

    fn new(response: HttpResponse) -> Self {
        Self {
            response,
            done: false,
        }
    }
}

impl Iterator for DataChunks {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut chunk = vec![0; Self::CHUNK_SIZE];
        let mut filled = 0;
        while filled < Self::CHUNK_SIZE {
            match self.response.read(&mut chunk[filled..]) {
                Ok(0) => {
                    self.done = true;
                    break;
                }
                Ok(num_read) => filled += num_read,
                Err(error) if error.kind() == std::io::ErrorKind::Interrupted => {}
                Err(source) => {
                    self.done = true;
                    return Some(Err(Error::Io {
                        message: "could not read download stream".to_owned(),
                        source,
                    }));
                }
            }
        }

        if filled == 0 {
            return None;
        }
        chunk.truncate(filled);
        Some(Ok(chunk))
    }
}

#[derive(Debug)]
struct Endpoints {
    base: Url,
    projects: Url,
    tokens: Url,
}

fn construct_endpoint(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut endpoint = base.clone();

    let mut endpoint_segments = endpoint
        .path_segments_mut()
        .map_err(|_| Error::BadEndpoint {
            endpoint: base.clone(),
        })?;

    endpoint_segments.pop_if_empty();
    for segment in segments {
        endpoint_segments.push(segment);
    }

    drop(endpoint_segments);

    Ok(endpoint)
}

impl Endpoints {
    pub fn new(base: Url) -> Result<Self> {
        let projects = construct_endpoint(&base, &["api", "projects"])?;
        let tokens = construct_endpoint(&base, &["api", "tokens"])?;

        Ok(Endpoints {
            base,
            projects,
            tokens,
        })
    }

    fn data(&self, project: &ProjectId) -> Result<Url> {
        construct_endpoint(&self.base, &["api", "projects", &project.0, "data"])
    }

    fn data_action(&self, project: &ProjectId, data: &DataId, action: &str) -> Result<Url> {
        construct_endpoint(
            &self.base,
            &[
                "api",
                "projects",
                &project.0,
                "data",
                &format!("{}:{}", data.0, action),
            ],
        )
    }

    fn create_file_with_upload_url(&self, project: &ProjectId) -> Result<Url> {
        construct_endpoint(
            &self.base,
            &[
                "api",
                "projects",
                &project.0,
                "data:createFileWithUploadUrl",
            ],
        )
    }

    fn analysis_search(&self, project: &ProjectId) -> Result<Url> {
        construct_endpoint(
            &self.base,
            &["api", "projects", &project.0, "analysis:search"],
        )
    }

    fn analysis(&self, project: &ProjectId, analysis: &AnalysisId) -> Result<Url> {
        construct_endpoint(
            &self.base,
            &["api", "projects", &project.0, "analyses", &analysis.0],
        )
    }
}

const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 240;

const ACCEPT_V3: &str = "application/vnd.illumina.v3+json";
const ACCEPT_V4: &str = "application/vnd.illumina.v4+json";

fn build_http_client(config: &Config) -> Result<HttpClient> {
    HttpClient::builder()
        .timeout(Some(config.timeout))
        .build()
        .map_err(Error::BuildHttpClient)
}

fn build_transfer_client(config: &Config) -> Result<HttpClient> {
    HttpClient::builder()
        .connect_timeout(config.timeout)
        .timeout(None::<Duration>)
        .build()
        .map_err(Error::BuildHttpClient)
}

fn build_headers(config: &Config) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static("x-api-key"),
        HeaderValue::from_str(&config.api_key.0).map_err(|_| Error::BadApiKey)?,
    );
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    Ok(headers)
}

pub static DEFAULT_ENDPOINT: Lazy<Url> = Lazy::new(|| {
    Url::parse("https://ica.illumina.com/ica/rest/").expect("Default URL is well-formed")
});
