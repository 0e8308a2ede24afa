use std::path::PathBuf;
use thiserror::Error;

/// Every failure of a harvest run. None of them are recovered from: the run
/// stops at the first one and the output file is left as it was.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// Network error, timeout, non-2xx status or unreadable body.
    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The HTML parser rejected the document (strict mode only).
    #[error("failed to parse {url}: {message}")]
    Parse { url: String, message: String },
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("fetch task did not complete")]
    Task(#[from] tokio::task::JoinError),
}

impl HarvestError {
    pub fn fetch(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Fetch {
            url: url.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
