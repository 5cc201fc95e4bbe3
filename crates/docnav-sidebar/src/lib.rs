//! Sidebar navigation tree for docnav.
//!
//! This crate provides:
//! - [`EdgeFilter`]: bucket-scoped filtering of page records
//! - [`build_tree`]: nested tree construction from a flat record set
//! - [`ActivePath`] / [`ExpansionState`]: expansion derived from the
//!   current slug, separated from manual toggles
//! - [`Sidebar`]: the render entry point the page layout calls
//!
//! # Quick Start
//!
//! ```
//! use docnav_config::Config;
//! use docnav_sidebar::{AllArticles, Sidebar, Viewport};
//!
//! let articles: AllArticles = serde_json::from_str(
//!     r#"{
//!         "edges": [
//!             { "node": { "fields": { "slug": "/orm/overview" },
//!                         "frontmatter": { "title": "Overview", "order": 1 } } },
//!             { "node": { "fields": { "slug": "/orm/queries" },
//!                         "frontmatter": { "title": "Queries", "order": 2 } } }
//!         ]
//!     }"#,
//! )
//! .unwrap();
//!
//! let sidebar = Sidebar::new(&Config::default());
//! let view = sidebar.render(&articles.edges, "/orm/queries", Viewport::Desktop);
//!
//! assert!(view.active.is_active("/orm/queries"));
//! ```

pub(crate) mod expand;
pub(crate) mod filter;
pub(crate) mod record;
pub(crate) mod render;
pub(crate) mod sidebar;
pub(crate) mod tree;

pub use expand::{ActivePath, ExpansionState, active_path};
pub use filter::{BucketMatch, EdgeFilter, Viewport};
pub use record::{
    AllArticles, ArticleEdge, ArticleFields, ArticleFrontmatter, ArticleNode, PageRecord,
};
pub use render::render_html;
pub use sidebar::{Sidebar, SidebarView};
pub use tree::{ItemKind, SidebarItem, build_tree};
