use std::fs;
use std::path::Path;

use crate::convert::{Converter, Html2MdConverter};
use crate::decode::decode_html;
use crate::extract::{DocsExtractor, Extractor};
use crate::paths::{doc_kind_for_path, markdown_relative_path};
use crate::persist::MirrorWriter;
use crate::rewrite::MarkdownRewriter;
use crate::types::{ConvertError, ConvertOutcome};

/// The per-file pipeline: read, decode, extract, convert, rewrite, write.
/// Stateless between files; one instance is shared across batch workers.
pub struct FileConverter {
    extractor: Box<dyn Extractor>,
    converter: Box<dyn Converter>,
    rewriter: MarkdownRewriter,
}

impl FileConverter {
    pub fn new() -> Self {
        Self {
            extractor: Box::new(DocsExtractor::new()),
            converter: Box::new(Html2MdConverter),
            rewriter: MarkdownRewriter::new(),
        }
    }

    /// Convert one file, mirroring its path relative to `input_root` into
    /// `output_root` with the extension swapped to `.md`.
    pub fn convert_file(
        &self,
        input: &Path,
        input_root: &Path,
        output_root: &Path,
    ) -> Result<ConvertOutcome, ConvertError> {
        let relative = markdown_relative_path(input, input_root)?;
        let (markdown, encoding_label) = self.render(input)?;
        let writer = MirrorWriter::new(output_root.to_path_buf());
        let output = writer.write(&relative, &markdown)?;
        Ok(ConvertOutcome {
            input: input.to_path_buf(),
            output,
            bytes_written: markdown.len() as u64,
            encoding_label,
        })
    }

    /// Single-file entry point: convert `input` to an explicit output path.
    pub fn convert_to(&self, input: &Path, output: &Path) -> Result<ConvertOutcome, ConvertError> {
        let (markdown, encoding_label) = self.render(input)?;
        MirrorWriter::write_file(output, &markdown)?;
        Ok(ConvertOutcome {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            bytes_written: markdown.len() as u64,
            encoding_label,
        })
    }

    fn render(&self, input: &Path) -> Result<(String, String), ConvertError> {
        let bytes = fs::read(input)?;
        let decoded = decode_html(&bytes)?;
        let kind = doc_kind_for_path(input);
        let extracted = self.extractor.extract(&decoded.html, kind)?;
        if extracted.used_body_fallback {
            log::warn!(
                "no #content-wrap in {}; falling back to <body>",
                input.display()
            );
        }
        let markdown = self.converter.to_markdown(&extracted.content_html);
        Ok((self.rewriter.rewrite(&markdown), decoded.encoding_label))
    }
}

impl Default for FileConverter {
    fn default() -> Self {
        Self::new()
    }
}
