//! HTML list rendering of the sidebar tree.
//!
//! Produces a nested `<ul>`/`<li>` structure:
//! - a directory renders as a label (an anchor when it has an index
//!   landing page, a button otherwise) plus a collapsible child list,
//!   with `open` on expanded directories;
//! - a page renders as a link, `active` on the page matching the current
//!   slug and `external` on pages that link out of the site.

use std::fmt::Write;

use crate::expand::{ActivePath, ExpansionState};
use crate::tree::{ItemKind, SidebarItem};

/// Render the sidebar tree as a nested HTML list.
#[must_use]
pub fn render_html(items: &[SidebarItem], active: &ActivePath, state: &ExpansionState) -> String {
    let mut out = String::new();
    render_list(items, active, state, &mut out);
    out
}

fn render_list(items: &[SidebarItem], active: &ActivePath, state: &ExpansionState, out: &mut String) {
    if items.is_empty() {
        return;
    }
    out.push_str(r#"<ul class="sidebar-list">"#);
    for item in items {
        match item.kind {
            ItemKind::Directory => render_directory(item, active, state, out),
            ItemKind::Page => render_page(item, active, out),
        }
    }
    out.push_str("</ul>");
}

fn render_directory(
    item: &SidebarItem,
    active: &ActivePath,
    state: &ExpansionState,
    out: &mut String,
) {
    let open = if state.is_expanded(&item.path, active) {
        " open"
    } else {
        ""
    };
    write!(out, r#"<li class="directory{open}">"#).unwrap();

    // Index landing pages make the label itself a link.
    match &item.link {
        Some(link) => {
            let class = if active.is_active(&item.path) {
                "label active"
            } else {
                "label"
            };
            write!(
                out,
                r#"<a class="{class}" href="{}">{}</a>"#,
                escape_html(link),
                escape_html(&item.title)
            )
            .unwrap();
        }
        None => {
            write!(
                out,
                r#"<button class="label" type="button">{}</button>"#,
                escape_html(&item.title)
            )
            .unwrap();
        }
    }

    render_list(&item.children, active, state, out);
    out.push_str("</li>");
}

fn render_page(item: &SidebarItem, active: &ActivePath, out: &mut String) {
    let mut classes = String::from("page");
    if active.is_active(&item.path) {
        classes.push_str(" active");
    }
    let is_external = item.link.as_deref().is_some_and(|l| l != item.path);
    if is_external {
        classes.push_str(" external");
    }
    let href = item.link.as_deref().unwrap_or(&item.path);
    write!(
        out,
        r#"<li class="{classes}"><a href="{}">{}</a></li>"#,
        escape_html(href),
        escape_html(&item.title)
    )
    .unwrap();
}

/// Escape text for HTML element and attribute contexts.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::active_path;
    use crate::record::{PageRecord, slug_segments};
    use crate::tree::build_tree;

    fn record(slug: &str, order: Option<i64>) -> PageRecord {
        PageRecord {
            slug: slug.to_owned(),
            title: crate::record::title_from_slug(slug),
            order,
            is_index: slug_segments(slug).next_back() == Some("index"),
            static_link: None,
        }
    }

    #[test]
    fn test_render_empty_tree_is_empty_string() {
        let html = render_html(&[], &ActivePath::default(), &ExpansionState::new());
        assert_eq!(html, "");
    }

    #[test]
    fn test_render_marks_active_page_and_open_chain() {
        let records = vec![
            record("/orm/prisma-client/queries", Some(1)),
            record("/orm/prisma-schema/models", Some(2)),
        ];
        let items = build_tree(&records);
        let active = active_path(&items, "/orm/prisma-client/queries");

        let html = render_html(&items, &active, &ExpansionState::new());

        assert!(html.contains(r#"<li class="page active"><a href="/orm/prisma-client/queries">"#));
        assert!(html.contains(r#"<li class="directory open"><button class="label" type="button">Prisma Client</button>"#));
        // Sibling directory stays collapsed.
        assert!(html.contains(r#"<li class="directory"><button class="label" type="button">Prisma Schema</button>"#));
    }

    #[test]
    fn test_render_directory_with_index_links_label() {
        let mut index = record("/orm/index", None);
        index.title = "ORM".to_owned();
        let records = vec![record("/orm/queries", None), index];
        let items = build_tree(&records);

        let html = render_html(&items, &ActivePath::default(), &ExpansionState::new());

        assert!(html.contains(r#"<a class="label" href="/orm">ORM</a>"#));
    }

    #[test]
    fn test_render_external_page() {
        let mut external = record("/orm/community", None);
        external.static_link = Some("https://example.com".to_owned());
        let items = build_tree(&[external]);

        let html = render_html(&items, &ActivePath::default(), &ExpansionState::new());

        assert!(html.contains(r#"<li class="page external"><a href="https://example.com">"#));
    }

    #[test]
    fn test_render_respects_manual_toggle() {
        let records = vec![record("/orm/queries", None)];
        let items = build_tree(&records);
        let active = ActivePath::default();
        let mut state = ExpansionState::new();
        state.toggle("/orm", &active);

        let html = render_html(&items, &active, &state);

        assert!(html.contains(r#"<li class="directory open">"#));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }
}
