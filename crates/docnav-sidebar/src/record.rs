//! Page records and the content-source wire shape.
//!
//! The content source hands over a flat list of article edges shaped like
//! `{ edges: [{ node: { fields: { slug }, frontmatter: { title, order } } }] }`.
//! Every consumed field is enumerated here as a typed struct; the rest of
//! the payload is ignored during deserialization.

use serde::Deserialize;

/// Full article listing as returned by the content source.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AllArticles {
    /// Article edges, in source order.
    #[serde(default)]
    pub edges: Vec<ArticleEdge>,
}

/// One edge of the article listing.
#[derive(Clone, Debug, Deserialize)]
pub struct ArticleEdge {
    /// The article node.
    pub node: ArticleNode,
}

/// Article node payload.
#[derive(Clone, Debug, Deserialize)]
pub struct ArticleNode {
    /// Generated fields (slug).
    pub fields: ArticleFields,
    /// Author-supplied frontmatter.
    #[serde(default)]
    pub frontmatter: ArticleFrontmatter,
}

/// Generated article fields.
#[derive(Clone, Debug, Deserialize)]
pub struct ArticleFields {
    /// Slash-separated page path, unique per article (e.g. `/orm/queries`).
    pub slug: String,
}

/// Article frontmatter fields consumed by the sidebar.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleFrontmatter {
    /// Display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Explicit sort key. Pages without one sort after ordered siblings.
    #[serde(default)]
    pub order: Option<i64>,
    /// External URL this page links to instead of its own route.
    #[serde(default)]
    pub static_link: Option<String>,
}

/// One documentation page, as consumed by the filter and tree builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRecord {
    /// Slash-separated path, unique (e.g. `/orm/queries`).
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Explicit sort key, absent for unordered pages.
    pub order: Option<i64>,
    /// True when this record is a section's landing page.
    pub is_index: bool,
    /// External URL for pages that link out of the site.
    pub static_link: Option<String>,
}

impl From<&ArticleEdge> for PageRecord {
    fn from(edge: &ArticleEdge) -> Self {
        let slug = edge.node.fields.slug.clone();
        let is_index = slug_segments(&slug).next_back() == Some("index");
        let title = edge
            .node
            .frontmatter
            .title
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| title_from_slug(&slug));

        Self {
            slug,
            title,
            order: edge.node.frontmatter.order,
            is_index,
            static_link: edge.node.frontmatter.static_link.clone(),
        }
    }
}

impl PageRecord {
    /// Convert a batch of edges into page records, preserving order.
    #[must_use]
    pub fn from_edges(edges: &[ArticleEdge]) -> Vec<Self> {
        edges.iter().map(Self::from).collect()
    }
}

/// Split a slug into its non-empty path segments.
pub(crate) fn slug_segments(slug: &str) -> impl DoubleEndedIterator<Item = &str> {
    slug.split('/').filter(|s| !s.is_empty())
}

/// Derive a display title from the slug's last segment.
///
/// `prisma-client` becomes `Prisma Client`; index slugs fall back to the
/// owning directory's segment.
pub(crate) fn title_from_slug(slug: &str) -> String {
    let segment = slug_segments(slug)
        .rev()
        .find(|s| *s != "index")
        .unwrap_or_default();
    title_case(segment)
}

/// Titlecase a path segment, treating `-` and `_` as word separators.
pub(crate) fn title_case(segment: &str) -> String {
    segment
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
