use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimestampError {
    #[error("malformed timestamp {0:?}, expected MM:SS")]
    Malformed(String),

    #[error("timestamp {0:?} is out of range")]
    OutOfRange(String),
}

/// Why a series document was rejected.
#[derive(Error, Debug)]
pub enum SeriesError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected an object or array of samples, found {0}")]
    NotACollection(&'static str),

    #[error("sample {key:?}: {source}")]
    Sample {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("sample {key:?}: reading at {secs}s exceeds the {max}s recording limit")]
    TooLong { key: String, secs: u32, max: u32 },

    #[error("sample {key:?}: {source}")]
    Timestamp {
        key: String,
        #[source]
        source: TimestampError,
    },
}

/// Failure to load a session file. Always fatal at startup.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Series {
        path: PathBuf,
        #[source]
        source: SeriesError,
    },
}
