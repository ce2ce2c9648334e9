//! Site-specific DOM pruning: navigation chrome, feedback widgets and
//! tooltip markup, identified by the fixed ids/classes the documentation
//! site uses.

use ego_tree::NodeId;
use scraper::{ElementRef, Html, Selector};

use crate::types::DocKind;

/// `div` classes that wrap navigation and layout chrome.
const CHROME_DIV_CLASSES: &[&str] = &[
    "header-wrapper",
    "toolbar",
    "mobileLogo",
    "master-wrapper",
    "sidebar",
    "footer-wrapper",
    "nextprev",
    "breadcrumbs",
    "search-form",
    "toggle",
    "lang-list",
    "otherversionscontent",
    "legendBox",
    "filler",
    "menu",
    "spacer",
    "more",
    "logo",
    "version-switcher",
    "sidebar-version-switcher",
    "sidebar-search-form",
    "ui-field-contain",
    "arrow",
    "lbl",
    "b",
    "tip",
    "icon",
    "tt",
];

/// Element ids for version switchers, search forms and other page furniture.
const CHROME_IDS: &[&str] = &[
    "header",
    "sidebar",
    "footer",
    "VersionNumber",
    "OtherVersionsContent",
    "versionsSelectMobile",
    "otherVersionsLegend",
    "VersionSwitcherArrow",
    "lang-switcher",
    "mobileSearchBtn",
    "ot-sdk-btn-container",
    "_leavefeedback",
    "_content",
];

/// `div` classes of the Scripting API feedback/suggestion widget.
const FEEDBACK_DIV_CLASSES: &[&str] = &[
    "scrollToFeedback",
    "suggest",
    "suggest-wrap",
    "suggest-success",
    "suggest-failed",
    "suggest-form",
    "loading",
];

/// Button/link classes the feedback widget shares with unrelated controls.
const FEEDBACK_BUTTON_CLASSES: &[&str] = &["sbtn", "close", "cancel", "submit"];

/// Visible-text phrases that mark a button/link as part of the feedback
/// widget. Checking text keeps unrelated buttons with the same classes
/// alive.
const FEEDBACK_PHRASES: &[&str] = &[
    "Leave feedback",
    "Suggest a change",
    "Success!",
    "Submission failed",
    "Submit suggestion",
    "Cancel",
];

/// Compiled selectors for every pruning pass. Built once per extractor.
pub(crate) struct CleanSelectors {
    structural: Selector,
    chrome_classes: Selector,
    chrome_ids: Selector,
    feedback_classes: Selector,
    feedback_fields: Selector,
    feedback_buttons: Selector,
    tooltip: Selector,
    tooltip_text: Selector,
    tooltip_links: Selector,
}

impl CleanSelectors {
    pub(crate) fn new() -> Self {
        Self {
            structural: selector("header, footer, nav, aside, script, style"),
            chrome_classes: selector(&tag_class_list("div", CHROME_DIV_CLASSES)),
            chrome_ids: selector(&id_list(CHROME_IDS)),
            feedback_classes: selector(&tag_class_list("div", FEEDBACK_DIV_CLASSES)),
            feedback_fields: selector(
                "label[id^=\"suggest_\"], input[id^=\"suggest_\"], \
                 textarea[id^=\"suggest_\"], button[id^=\"suggest_\"]",
            ),
            feedback_buttons: selector(&cross_tag_class_list(
                &["a", "button"],
                FEEDBACK_BUTTON_CLASSES,
            )),
            tooltip: selector("table td span.tooltip"),
            tooltip_text: selector("table td span.tooltiptext"),
            tooltip_links: selector("table td a.tooltipGlossaryLink, table td a.tooltipMoreInfoLink"),
        }
    }
}

/// Parse a selector built from the fixed lists above.
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

fn tag_class_list(tag: &str, classes: &[&str]) -> String {
    classes
        .iter()
        .map(|class| format!("{tag}.{class}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn cross_tag_class_list(tags: &[&str], classes: &[&str]) -> String {
    tags.iter()
        .flat_map(|tag| classes.iter().map(move |class| format!("{tag}.{class}")))
        .collect::<Vec<_>>()
        .join(", ")
}

fn id_list(ids: &[&str]) -> String {
    ids.iter()
        .map(|id| format!("#{id}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Detach navigation chrome below `scope`; for Scripting API pages also
/// detach the feedback/suggestion widget.
pub(crate) fn strip_chrome(doc: &mut Html, scope: NodeId, sels: &CleanSelectors, kind: DocKind) {
    detach_all(doc, select_ids(doc, scope, &sels.structural));
    detach_all(doc, select_ids(doc, scope, &sels.chrome_classes));
    detach_all(doc, select_ids(doc, scope, &sels.chrome_ids));

    if kind == DocKind::ScriptingApi {
        detach_all(doc, select_ids(doc, scope, &sels.feedback_classes));
        detach_all(doc, select_ids(doc, scope, &sels.feedback_fields));

        let button_ids: Vec<NodeId> = match scope_element(doc, scope) {
            Some(root) => root
                .select(&sels.feedback_buttons)
                .filter(|el| {
                    let text: String = el.text().collect();
                    FEEDBACK_PHRASES.iter().any(|phrase| text.contains(phrase))
                })
                .map(|el| el.id())
                .collect(),
            None => Vec::new(),
        };
        detach_all(doc, button_ids);
    }
}

/// Flatten tooltip markup inside tables below `scope`: the visible label of
/// a `span.tooltip` survives in place, the hover text and glossary/more-info
/// links are dropped so they cannot leak into the flattened cells.
pub(crate) fn flatten_tooltips(doc: &mut Html, scope: NodeId, sels: &CleanSelectors) {
    let tooltip_ids = select_ids(doc, scope, &sels.tooltip);
    let text_ids = select_ids(doc, scope, &sels.tooltip_text);
    let link_ids = select_ids(doc, scope, &sels.tooltip_links);

    for id in tooltip_ids {
        unwrap_node(doc, id);
    }
    detach_all(doc, text_ids);
    detach_all(doc, link_ids);
}

fn scope_element(doc: &Html, scope: NodeId) -> Option<ElementRef<'_>> {
    doc.tree.get(scope).and_then(ElementRef::wrap)
}

fn select_ids(doc: &Html, scope: NodeId, sel: &Selector) -> Vec<NodeId> {
    scope_element(doc, scope)
        .map(|root| root.select(sel).map(|el| el.id()).collect())
        .unwrap_or_default()
}

fn detach_all(doc: &mut Html, ids: Vec<NodeId>) {
    for id in ids {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// Replace a node with its children, preserving their order.
fn unwrap_node(doc: &mut Html, id: NodeId) {
    let child_ids: Vec<NodeId> = match doc.tree.get(id) {
        Some(node) => node.children().map(|child| child.id()).collect(),
        None => return,
    };
    for child in child_ids {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.insert_id_before(child);
        }
    }
    if let Some(mut node) = doc.tree.get_mut(id) {
        node.detach();
    }
}
