use scraper::{ElementRef, Html, Selector};

use crate::clean::{self, CleanSelectors};
use crate::types::DocKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedContent {
    pub content_html: String,
    /// True when `#content-wrap` was absent and the whole `<body>` was used
    /// instead; the caller should log a warning.
    pub used_body_fallback: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("content block (div.content) not found")]
    MissingContentBlock,
    #[error("document has no body")]
    MissingBody,
}

pub trait Extractor: Send + Sync {
    fn extract(&self, html: &str, kind: DocKind) -> Result<ExtractedContent, ExtractError>;
}

/// Extractor for the documentation site's page layout:
/// - locates `div#content-wrap`, falling back to `<body>` if absent
/// - strips chrome (and feedback widgets on Scripting API pages)
/// - isolates the inner `div.content` block; its absence is a hard failure
/// - flattens tooltip markup inside tables.
pub struct DocsExtractor {
    content_wrap: Selector,
    body: Selector,
    content_block: Selector,
    clean: CleanSelectors,
}

impl DocsExtractor {
    pub fn new() -> Self {
        Self {
            content_wrap: clean::selector("div#content-wrap"),
            body: clean::selector("body"),
            content_block: clean::selector("div.content"),
            clean: CleanSelectors::new(),
        }
    }
}

impl Default for DocsExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for DocsExtractor {
    fn extract(&self, html: &str, kind: DocKind) -> Result<ExtractedContent, ExtractError> {
        let mut doc = Html::parse_document(html);

        let (scope_id, used_body_fallback) = match doc.select(&self.content_wrap).next() {
            Some(wrap) => (wrap.id(), false),
            None => {
                let body = doc
                    .select(&self.body)
                    .next()
                    .ok_or(ExtractError::MissingBody)?;
                (body.id(), true)
            }
        };

        clean::strip_chrome(&mut doc, scope_id, &self.clean, kind);

        let content_id = doc
            .tree
            .get(scope_id)
            .and_then(ElementRef::wrap)
            .and_then(|scope| scope.select(&self.content_block).next())
            .map(|content| content.id())
            .ok_or(ExtractError::MissingContentBlock)?;

        clean::flatten_tooltips(&mut doc, content_id, &self.clean);

        let content = doc
            .tree
            .get(content_id)
            .and_then(ElementRef::wrap)
            .ok_or(ExtractError::MissingContentBlock)?;

        Ok(ExtractedContent {
            content_html: content.html(),
            used_body_fallback,
        })
    }
}
