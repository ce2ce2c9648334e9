use std::path::{Path, PathBuf};

use crate::types::DocKind;

pub const HTML_EXTENSION: &str = "html";
pub const MARKDOWN_EXTENSION: &str = "md";

/// Path marker for Scripting API pages.
pub const SCRIPTING_API_MARKER: &str = "ScriptReference";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PathError {
    #[error("input {input} is not under the input root {root}")]
    OutsideInputRoot { input: PathBuf, root: PathBuf },
}

pub fn is_html_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(HTML_EXTENSION)
}

pub fn doc_kind_for_path(path: &Path) -> DocKind {
    if path.to_string_lossy().contains(SCRIPTING_API_MARKER) {
        DocKind::ScriptingApi
    } else {
        DocKind::Manual
    }
}

/// Mirror `input`'s path relative to `input_root`, with the extension
/// swapped to `.md`.
pub fn markdown_relative_path(input: &Path, input_root: &Path) -> Result<PathBuf, PathError> {
    let relative = input
        .strip_prefix(input_root)
        .map_err(|_| PathError::OutsideInputRoot {
            input: input.to_path_buf(),
            root: input_root.to_path_buf(),
        })?;
    Ok(relative.with_extension(MARKDOWN_EXTENSION))
}

/// Default single-file output: same path, `.md` extension.
pub fn sibling_markdown_path(input: &Path) -> PathBuf {
    input.with_extension(MARKDOWN_EXTENSION)
}
