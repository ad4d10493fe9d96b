use reqwest::StatusCode;
use url::Url;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("API request failed with {}: {}", status_code, message)]
    Api {
        status_code: StatusCode,
        message: String,
    },

    #[error("unknown path: {}", path)]
    UnknownPath { path: String },

    #[error("cannot access data at {}", path)]
    CannotAccess { path: String },

    #[error("too many matches at {}", path)]
    TooManyMatches { path: String },

    #[error("cannot delete files without supplying a path")]
    MissingPath,

    #[error("cannot delete root directory")]
    DeleteRoot,

    #[error("cannot remove '{}': Is a directory", path)]
    IsADirectory { path: String },

    #[error("would overwrite existing file: {}, use -f/--force to overwrite", path)]
    WouldOverwrite { path: String },

    #[error("unknown folder: {}", path)]
    UnknownFolder { path: String },

    #[error("cannot determine filename to save as from --path ({})", destination)]
    UnknownFilename { destination: String },

    #[error("error: file already exists at {}", path)]
    AlreadyExists { path: String },

    #[error("upload to {} was rejected with a conflict", path)]
    UploadConflict { path: String },

    #[error(
        "unknown job status `{}`, expected one of: aborted, running, failed, requested, succeeded",
        status
    )]
    UnknownJobStatus { status: String },

    #[error("Invalid endpoint `{}`", endpoint)]
    BadEndpoint { endpoint: Url },

    #[error("API key contains characters which are not valid in a header")]
    BadApiKey,

    #[error("Could not parse JSON response.")]
    BadJsonResponse(#[source] reqwest::Error),

    #[error("Failed to initialise the HTTP client")]
    BuildHttpClient(#[source] reqwest::Error),

    #[error("HTTP request error: {}", message)]
    ReqwestError {
        message: String,
        source: reqwest::Error,
    },

    #[error("I/O error: {}", message)]
    Io {
        message: String,
        source: std::io::Error,
    },
}

impl Error {
    /// Whether the error is an API response with the given status code.
    pub fn has_status(&self, status: StatusCode) -> bool {
        matches!(self, Error::Api { status_code, .. } if *status_code == status)
    }
}
