use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a generation run or a single step of it
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Failed to decode Base64 image data: {0}")]
    Base64(#[from] base64::DecodeError),
}

impl SiteError {
    /// Wrap an I/O error together with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SiteError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this is an I/O error caused by a missing file
    pub fn is_not_found(&self) -> bool {
        matches!(self, SiteError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
