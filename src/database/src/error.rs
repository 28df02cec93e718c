use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid snapshot json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot decompress {path}: {source}")]
    Gzip {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported snapshot file {0}, expected .json or .json.gz")]
    UnsupportedFormat(PathBuf),
}
