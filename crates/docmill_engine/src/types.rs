use std::path::PathBuf;

use crate::decode::DecodeError;
use crate::extract::ExtractError;
use crate::paths::PathError;
use crate::persist::PersistError;

/// Which documentation section a page belongs to. Scripting API pages carry
/// extra feedback/suggestion chrome that narrative Manual pages do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocKind {
    Manual,
    ScriptingApi,
}

/// Result of one successful file conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub bytes_written: u64,
    pub encoding_label: String,
}

/// Per-file result reported by the batch runner, in completion order.
#[derive(Debug)]
pub struct FileReport {
    pub input: PathBuf,
    pub result: Result<ConvertOutcome, ConvertError>,
}

/// Everything that can go wrong while converting one file. Each variant is
/// terminal for that file and non-fatal for the batch.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}
