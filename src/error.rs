use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Problems with the run's inputs. All of them abort before any request is sent.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("test case file `{}` not found", path.display())]
    InputNotFound { path: PathBuf },

    #[error("failed to read test case file `{}`: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse JSON in `{}`: {source}", path.display())]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected the test case file to contain a JSON object (name -> test case), found {found}")]
    InputNotObject { found: &'static str },

    #[error("invalid base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to create report file `{}`: {source}", path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures that stop a run after dispatch has started.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),
}
