//! Active-path selection and expansion state.
//!
//! The active path is derived from the built tree and the current slug on
//! every render; it is never stored. Manual expand/collapse toggles live
//! in [`ExpansionState`], keyed by directory path, so rebuilding the tree
//! on data change does not clobber them. Navigating to a new slug clears
//! manual overrides along the new active chain only, letting
//! auto-expansion win where it should.

use std::collections::HashMap;

use serde::Serialize;

use crate::record::slug_segments;
use crate::tree::{ItemKind, SidebarItem};

/// Directory chain from the tree root to the item matching the current
/// slug. Empty when no item matches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ActivePath {
    /// Paths of every directory on the chain, root first.
    pub expanded: Vec<String>,
    /// Path of the matched item itself.
    pub active: Option<String>,
}

impl ActivePath {
    /// Whether a directory lies on the active chain.
    #[must_use]
    pub fn contains(&self, dir_path: &str) -> bool {
        self.expanded.iter().any(|path| path == dir_path)
    }

    /// Whether an item is the active one.
    #[must_use]
    pub fn is_active(&self, path: &str) -> bool {
        self.active.as_deref() == Some(path)
    }
}

/// Compute the active path for the current slug.
///
/// The slug matches a page by slug equality, or a directory through its
/// index landing page. When nothing matches, no directory is
/// auto-expanded.
#[must_use]
pub fn active_path(items: &[SidebarItem], slug: &str) -> ActivePath {
    let normalized = normalize_slug(slug);
    let mut chain = Vec::new();
    if find_chain(items, &normalized, &mut chain) {
        ActivePath {
            expanded: chain,
            active: Some(normalized),
        }
    } else {
        ActivePath::default()
    }
}

/// Depth-first walk collecting the directory chain to the matched item.
fn find_chain(items: &[SidebarItem], slug: &str, chain: &mut Vec<String>) -> bool {
    for item in items {
        match item.kind {
            ItemKind::Page => {
                if item.path == slug {
                    return true;
                }
            }
            ItemKind::Directory => {
                chain.push(item.path.clone());
                if item.link.as_deref() == Some(slug) || find_chain(&item.children, slug, chain) {
                    return true;
                }
                chain.pop();
            }
        }
    }
    false
}

/// Normalize a slug to leading-slash form with empty segments dropped.
fn normalize_slug(slug: &str) -> String {
    format!("/{}", slug_segments(slug).collect::<Vec<_>>().join("/"))
}

/// Manual expand/collapse toggles, independent of tree rebuilds.
#[derive(Clone, Debug, Default)]
pub struct ExpansionState {
    manual: HashMap<String, bool>,
}

impl ExpansionState {
    /// Create an empty state with no manual overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective expansion of a directory: manual override if the user
    /// toggled it, otherwise whether it lies on the active path.
    #[must_use]
    pub fn is_expanded(&self, dir_path: &str, active: &ActivePath) -> bool {
        self.manual
            .get(dir_path)
            .copied()
            .unwrap_or_else(|| active.contains(dir_path))
    }

    /// Flip a directory's effective expansion, leaving every other
    /// directory's state untouched.
    pub fn toggle(&mut self, dir_path: &str, active: &ActivePath) {
        let expanded = self.is_expanded(dir_path, active);
        self.manual.insert(dir_path.to_owned(), !expanded);
    }

    /// Apply a newly computed active path: auto-expansion overrides manual
    /// collapses along the active chain. Overrides elsewhere survive.
    pub fn sync_active(&mut self, active: &ActivePath) {
        for path in &active.expanded {
            self.manual.remove(path);
        }
    }
}
