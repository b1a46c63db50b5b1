use std::io;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("error reading {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("invalid linguistic data: {0}")]
    Data(#[from] srb_core::DataError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
