use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Package metadata not found: {0}")]
    MetadataNotFound(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed HTTP message: {0}")]
    Http(#[from] http::Error),
}

impl Error {
    /// True for the one failure identity resolution swallows.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::MetadataNotFound(_))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
