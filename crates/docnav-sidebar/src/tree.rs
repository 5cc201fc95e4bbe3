//! Navigation tree construction.
//!
//! Converts a flat, filtered set of [`PageRecord`]s into a nested
//! directory/page structure in two passes:
//!
//! 1. Insert every record into an arena of directory nodes indexed by
//!    path key, splitting its slug on `/`. The final segment yields a
//!    page leaf, except for index records, which set the owning
//!    directory's own title, order, and link.
//! 2. Recursively sort each directory's children and prune directories
//!    with no page descendants (post-order).
//!
//! Construction is a pure function of the input record list: building
//! twice from the same records yields structurally equal trees.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::record::{PageRecord, slug_segments, title_case};

/// Kind of a sidebar tree node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Internal node grouping pages under a path segment.
    Directory,
    /// Leaf node referencing one page record.
    Page,
}

/// One node of the built sidebar tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarItem {
    /// Display title.
    pub title: String,
    /// Tree path key with leading slash (`/orm/prisma-client`). For pages
    /// this is the record's slug; expansion state is keyed by it for
    /// directories.
    pub path: String,
    /// Link target. Pages always link; directories link only when an
    /// index record gave them a landing page. External pages link to
    /// their `static_link` instead of their slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Sort key. For directories this is the index record's order,
    /// falling back to the smallest explicit order among children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    /// Node kind.
    pub kind: ItemKind,
    /// Child nodes, sorted. Always empty for pages.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SidebarItem>,
}

/// Build the sidebar tree for a filtered record set.
///
/// Records with no path segments are skipped with a warning. Duplicate
/// slugs overwrite in place, last seen wins.
#[must_use]
pub fn build_tree<'a, I>(records: I) -> Vec<SidebarItem>
where
    I: IntoIterator<Item = &'a PageRecord>,
{
    let mut arena = TreeArena::new();
    for record in records {
        arena.insert(record);
    }
    arena.freeze()
}

/// Page leaf awaiting tree placement.
struct PageLeaf {
    name: String,
    title: String,
    slug: String,
    order: Option<i64>,
    static_link: Option<String>,
}

/// Child slot of a directory, in insertion order.
enum Entry {
    Dir(usize),
    Page(PageLeaf),
}

/// Directory node in the construction arena.
struct DirNode {
    name: String,
    path: String,
    title: Option<String>,
    order: Option<i64>,
    link: Option<String>,
    entries: Vec<Entry>,
}

impl DirNode {
    fn new(name: String, path: String) -> Self {
        Self {
            name,
            path,
            title: None,
            order: None,
            link: None,
            entries: Vec::new(),
        }
    }
}

/// Arena of directory nodes indexed by path key.
struct TreeArena {
    dirs: Vec<DirNode>,
    index: HashMap<String, usize>,
}

/// Index of the synthetic root directory.
const ROOT: usize = 0;

impl TreeArena {
    fn new() -> Self {
        let root = DirNode::new(String::new(), String::new());
        let mut index = HashMap::new();
        index.insert(String::new(), ROOT);
        Self {
            dirs: vec![root],
            index,
        }
    }

    /// Insert one record (pass 1).
    fn insert(&mut self, record: &PageRecord) {
        let segments: Vec<&str> = slug_segments(&record.slug).collect();
        let Some((last, parents)) = segments.split_last() else {
            tracing::warn!(slug = %record.slug, "skipping record with no path segments");
            return;
        };

        if record.is_index {
            // The index record describes the owning directory itself.
            let dir = self.ensure_dir(parents);
            let node = &mut self.dirs[dir];
            node.title = Some(record.title.clone());
            node.order = record.order;
            node.link = Some(if node.path.is_empty() {
                "/".to_owned()
            } else {
                node.path.clone()
            });
            return;
        }

        let dir = self.ensure_dir(parents);
        let leaf = PageLeaf {
            name: (*last).to_owned(),
            title: record.title.clone(),
            slug: format!("/{}", segments.join("/")),
            order: record.order,
            static_link: record.static_link.clone(),
        };

        let node = &mut self.dirs[dir];
        let existing = node.entries.iter_mut().find_map(|entry| match entry {
            Entry::Page(page) if page.name == leaf.name => Some(page),
            _ => None,
        });
        match existing {
            // Duplicate slug: last-seen record wins at its leaf position.
            Some(page) => *page = leaf,
            None => node.entries.push(Entry::Page(leaf)),
        }
    }

    /// Look up or create the directory chain for a segment list.
    fn ensure_dir(&mut self, segments: &[&str]) -> usize {
        let mut current = ROOT;
        let mut path = String::new();
        for segment in segments {
            path.push('/');
            path.push_str(segment);
            current = match self.index.get(&path) {
                Some(&idx) => idx,
                None => {
                    let idx = self.dirs.len();
                    self.dirs
                        .push(DirNode::new((*segment).to_owned(), path.clone()));
                    self.dirs[current].entries.push(Entry::Dir(idx));
                    self.index.insert(path.clone(), idx);
                    idx
                }
            };
        }
        current
    }

    /// Sort and prune (pass 2), returning the root's children.
    fn freeze(&self) -> Vec<SidebarItem> {
        self.freeze_dir(ROOT)
            .map(|root| root.children)
            .unwrap_or_default()
    }

    /// Convert one directory to a [`SidebarItem`], post-order.
    ///
    /// Returns `None` for directories with no page descendants.
    fn freeze_dir(&self, idx: usize) -> Option<SidebarItem> {
        let node = &self.dirs[idx];

        let mut children: Vec<SidebarItem> = Vec::new();
        for entry in &node.entries {
            match entry {
                Entry::Dir(child) => children.extend(self.freeze_dir(*child)),
                Entry::Page(leaf) => children.push(SidebarItem {
                    title: leaf.title.clone(),
                    path: leaf.slug.clone(),
                    link: Some(
                        leaf.static_link
                            .clone()
                            .unwrap_or_else(|| leaf.slug.clone()),
                    ),
                    order: leaf.order,
                    kind: ItemKind::Page,
                    children: Vec::new(),
                }),
            }
        }

        if children.is_empty() && idx != ROOT {
            return None;
        }

        children.sort_by(sibling_order);

        let order = node
            .order
            .or_else(|| children.iter().filter_map(|child| child.order).min());

        Some(SidebarItem {
            title: node
                .title
                .clone()
                .unwrap_or_else(|| title_case(&node.name)),
            path: node.path.clone(),
            link: node.link.clone(),
            order,
            kind: ItemKind::Directory,
            children,
        })
    }
}

/// Sibling ordering: explicit order ascending with title tie-break;
/// orderless items sort after ordered ones and keep their input order
/// (the sort is stable).
fn sibling_order(a: &SidebarItem, b: &SidebarItem) -> Ordering {
    match (a.order, b.order) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.title.cmp(&b.title)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
