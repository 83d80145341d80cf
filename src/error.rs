use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to fetch {path}: {source}")]
    Request {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to fetch {path}: got response status {status}")]
    Status {
        path: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid data base URL `{0}`")]
    InvalidBase(String),
}

impl Error {
    /// The data path the error is about, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::Request { path, .. }
            | Error::Status { path, .. }
            | Error::Io { path, .. }
            | Error::Decode { path, .. } => Some(path),
            Error::InvalidBase(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
