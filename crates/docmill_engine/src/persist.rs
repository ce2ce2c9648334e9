use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("could not create output directory: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Writes converted documents under an output root, mirroring the input
/// tree's relative paths. Parent directories are created on demand;
/// concurrent workers creating the same directory is a no-op.
pub struct MirrorWriter {
    output_root: PathBuf,
}

impl MirrorWriter {
    pub fn new(output_root: PathBuf) -> Self {
        Self { output_root }
    }

    /// Write `content` to `{output_root}/{relative}` atomically.
    pub fn write(&self, relative: &Path, content: &str) -> Result<PathBuf, PersistError> {
        let target = self.output_root.join(relative);
        Self::write_file(&target, content)?;
        Ok(target)
    }

    /// Atomically write content to an explicit target path by writing a
    /// temp file in the target's directory then renaming.
    pub fn write_file(target: &Path, content: &str) -> Result<(), PersistError> {
        let parent = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(|e| PersistError::OutputDir(e.to_string()))?;

        let mut tmp = NamedTempFile::new_in(&parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // Replace existing file if present to keep re-runs deterministic.
        if target.exists() {
            fs::remove_file(target)?;
        }
        tmp.persist(target).map_err(|e| PersistError::Io(e.error))?;
        Ok(())
    }
}
