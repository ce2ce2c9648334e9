use docmill_engine::MarkdownRewriter;
use pretty_assertions::assert_eq;

fn rewriter() -> MarkdownRewriter {
    MarkdownRewriter::new()
}

#[test]
fn blank_line_runs_collapse_to_one_blank_line() {
    let out = rewriter().collapse_blank_lines("a\n\n\n\n\nb");
    assert_eq!(out, "a\n\nb");
}

#[test]
fn short_blank_runs_and_text_are_untouched() {
    let out = rewriter().collapse_blank_lines("a\n\nb\nc");
    assert_eq!(out, "a\n\nb\nc");
}

#[test]
fn document_is_trimmed() {
    let out = rewriter().collapse_blank_lines("\n\n  a  \n\n");
    assert_eq!(out, "a");
}

#[test]
fn html_link_targets_become_md() {
    let r = rewriter();
    assert_eq!(r.rewrite_html_links("[a](Foo.html)"), "[a](Foo.md)");
    assert_eq!(
        r.rewrite_html_links("[a](../Bar.html#frag)"),
        "[a](../Bar.md#frag)"
    );
    assert_eq!(
        r.rewrite_html_links("see [x](A.html) and [y](B.html?v=1)"),
        "see [x](A.md) and [y](B.md?v=1)"
    );
}

#[test]
fn non_html_links_are_untouched() {
    let r = rewriter();
    assert_eq!(r.rewrite_html_links("[a](Baz.txt)"), "[a](Baz.txt)");
    assert_eq!(
        r.rewrite_html_links("[docs](https://example.com/page)"),
        "[docs](https://example.com/page)"
    );
}

#[test]
fn link_rewrite_is_idempotent() {
    let r = rewriter();
    let once = r.rewrite_html_links("[a](Foo.html) and [b](Bar.md)");
    let twice = r.rewrite_html_links(&once);
    assert_eq!(once, twice);
}

#[test]
fn bare_opening_fence_gains_language_tag() {
    let out = rewriter().tag_bare_fences("```\nvar x = 1;\n```");
    assert_eq!(out, "```csharp\nvar x = 1;\n```");
}

#[test]
fn tagged_fences_keep_their_tag() {
    let input = "```python\nprint(1)\n```";
    assert_eq!(rewriter().tag_bare_fences(input), input);
}

#[test]
fn consecutive_blocks_are_tracked_independently() {
    let out = rewriter().tag_bare_fences("```\na\n```\ntext\n```\nb\n```");
    assert_eq!(out, "```csharp\na\n```\ntext\n```csharp\nb\n```");
}

#[test]
fn fence_language_is_configurable() {
    let out = MarkdownRewriter::with_fence_language("text").tag_bare_fences("```\nx\n```");
    assert_eq!(out, "```text\nx\n```");
}

#[test]
fn rewrite_applies_all_passes_in_order() {
    let input = "intro\n\n\n\n[a](Foo.html)\n\n```\ncode\n```\n\n\n";
    let out = rewriter().rewrite(input);
    assert_eq!(out, "intro\n\n[a](Foo.md)\n\n```csharp\ncode\n```");
}
