use regex::{Captures, Regex};

/// Language tag applied to bare code fences. Code samples in the target
/// documentation are C#.
pub const DEFAULT_FENCE_LANGUAGE: &str = "csharp";

/// Post-processing over rendered Markdown: three ordered passes that
/// collapse blank-line runs, rewrite intra-site `.html` links to `.md`,
/// and tag untagged code fences.
pub struct MarkdownRewriter {
    blank_runs: Regex,
    links: Regex,
    fence_language: String,
}

impl MarkdownRewriter {
    pub fn new() -> Self {
        Self::with_fence_language(DEFAULT_FENCE_LANGUAGE)
    }

    pub fn with_fence_language(language: impl Into<String>) -> Self {
        Self {
            blank_runs: Regex::new(r"\n{3,}").expect("static regex"),
            links: Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("static regex"),
            fence_language: language.into(),
        }
    }

    /// All three passes, in order.
    pub fn rewrite(&self, markdown: &str) -> String {
        let collapsed = self.collapse_blank_lines(markdown);
        let relinked = self.rewrite_html_links(&collapsed);
        self.tag_bare_fences(&relinked)
    }

    /// Runs of three or more newlines collapse to exactly one blank line;
    /// the whole document is trimmed.
    pub fn collapse_blank_lines(&self, markdown: &str) -> String {
        self.blank_runs
            .replace_all(markdown, "\n\n")
            .trim()
            .to_string()
    }

    /// Rewrite `[text](target)` links whose target contains `.html` so the
    /// occurrence reads `.md`; text and the rest of the target (path
    /// prefixes, fragments, queries) are untouched. Idempotent.
    pub fn rewrite_html_links(&self, markdown: &str) -> String {
        self.links
            .replace_all(markdown, |caps: &Captures| {
                let target = &caps[2];
                if target.contains(".html") {
                    format!("[{}]({})", &caps[1], target.replace(".html", ".md"))
                } else {
                    caps[0].to_string()
                }
            })
            .into_owned()
    }

    /// Line scan with a single open/closed flag: a bare ``` opening a block
    /// gains the fence language, a tagged opener keeps its tag, closing
    /// fences pass through. Nested fences are not supported; mismatched
    /// fence counts give best-effort output.
    pub fn tag_bare_fences(&self, markdown: &str) -> String {
        let mut lines = Vec::new();
        let mut in_block = false;
        for line in markdown.lines() {
            let trimmed = line.trim();
            if trimmed == "```" && !in_block {
                lines.push(format!("```{}", self.fence_language));
                in_block = true;
            } else {
                if trimmed.starts_with("```") {
                    in_block = !in_block;
                }
                lines.push(line.to_string());
            }
        }
        lines.join("\n")
    }
}

impl Default for MarkdownRewriter {
    fn default() -> Self {
        Self::new()
    }
}
