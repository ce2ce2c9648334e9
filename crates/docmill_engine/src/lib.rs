//! Docmill engine: per-file HTML-to-Markdown pipeline and batch orchestration.
mod batch;
mod clean;
mod convert;
mod decode;
mod extract;
mod paths;
mod persist;
mod pipeline;
mod rewrite;
mod types;

pub use batch::{default_worker_count, BatchError, BatchHandle, BatchRunner, DEFAULT_WORKERS};
pub use convert::{Converter, Html2MdConverter};
pub use decode::{decode_html, DecodeError, DecodedHtml};
pub use extract::{DocsExtractor, ExtractError, ExtractedContent, Extractor};
pub use paths::{
    doc_kind_for_path, is_html_file, markdown_relative_path, sibling_markdown_path, PathError,
    HTML_EXTENSION, MARKDOWN_EXTENSION, SCRIPTING_API_MARKER,
};
pub use persist::{MirrorWriter, PersistError};
pub use pipeline::FileConverter;
pub use rewrite::{MarkdownRewriter, DEFAULT_FENCE_LANGUAGE};
pub use types::{ConvertError, ConvertOutcome, DocKind, FileReport};
