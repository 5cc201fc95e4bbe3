//! Sidebar orchestration.
//!
//! Wires the edge filter, tree builder, and active-path selection into
//! the render entry point the layout calls with `(edges, current slug)`.

use serde::Serialize;

use docnav_config::Config;

use crate::expand::{ActivePath, ExpansionState, active_path};
use crate::filter::{BucketMatch, EdgeFilter, Viewport};
use crate::record::{ArticleEdge, PageRecord};
use crate::render::render_html;
use crate::tree::{SidebarItem, build_tree};

/// A rendered sidebar: the nested tree plus the derived active path.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SidebarView {
    /// Top-level tree items for the current bucket.
    pub items: Vec<SidebarItem>,
    /// Directory chain to the current slug's page.
    pub active: ActivePath,
}

impl SidebarView {
    /// Render this view as a nested HTML list.
    #[must_use]
    pub fn to_html(&self, state: &ExpansionState) -> String {
        render_html(&self.items, &self.active, state)
    }
}

/// The navigable-sidebar subsystem.
///
/// Construction is pure and re-entrant: every call to [`Sidebar::render`]
/// rebuilds the tree from the full record snapshot; no state is shared
/// across invocations.
#[derive(Clone, Debug)]
pub struct Sidebar {
    filter: EdgeFilter,
}

impl Sidebar {
    /// Create a sidebar scoped by the configured header buckets.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            filter: EdgeFilter::from_config(config),
        }
    }

    /// Override the bucket matching strategy.
    #[must_use]
    pub fn with_match_mode(mut self, match_mode: BucketMatch) -> Self {
        self.filter = self.filter.with_match_mode(match_mode);
        self
    }

    /// Render the sidebar for the current slug.
    ///
    /// Shorthand for [`Sidebar::build`] without caller navigation state.
    #[must_use]
    pub fn render(&self, edges: &[ArticleEdge], slug: &str, viewport: Viewport) -> SidebarView {
        self.build(edges, None, Some(slug), viewport)
    }

    /// Build the sidebar view from the full article snapshot.
    ///
    /// `bucket_name` carries the caller's navigation state (a selected
    /// top-level section); the current slug's first segment overrides it
    /// when it names a configured bucket.
    #[must_use]
    pub fn build(
        &self,
        edges: &[ArticleEdge],
        bucket_name: Option<&str>,
        slug: Option<&str>,
        viewport: Viewport,
    ) -> SidebarView {
        let records = PageRecord::from_edges(edges);
        let filtered = self.filter.filter(&records, bucket_name, slug, viewport);
        let items = build_tree(filtered);
        let active = slug
            .map(|slug| active_path(&items, slug))
            .unwrap_or_default();

        SidebarView { items, active }
    }
}
