use serde::Serialize;

use crate::catalog::{self, NavEntryDef};
use crate::collections::{CollectionDescriptor, POSTS_LABEL};
use crate::config::SiteConfig;
use crate::labels::SidebarLabels;
use crate::routes;

pub(crate) const COLLECTION_ICON: &str = "book";
const DRAFTS_ICON: &str = "edit";
const DRAFTS_SEGMENT: &str = "drafts";

/// Navigable sidebar link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLeaf {
    pub href: String,
    pub icon: String,
    pub label: String,
}

impl NavLeaf {
    pub fn new(
        href: impl Into<String>,
        icon: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            href: href.into(),
            icon: icon.into(),
            label: label.into(),
        }
    }

    /// Whether the current location is this link's route or nested below it.
    pub fn is_active(&self, location: &str) -> bool {
        routes::is_active(&self.href, location)
    }
}

/// Item of a composed navigation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavItem {
    Splitter,
    Leaf(NavLeaf),
}

impl NavItem {
    pub fn as_leaf(&self) -> Option<&NavLeaf> {
        match self {
            NavItem::Leaf(leaf) => Some(leaf),
            NavItem::Splitter => None,
        }
    }

    pub fn is_splitter(&self) -> bool {
        matches!(self, NavItem::Splitter)
    }
}

/// Result of composing the sidebar for one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Composition {
    /// Leaves shown inside the collections panel. Empty means the panel is
    /// not rendered at all.
    pub collection_items: Vec<NavItem>,
    pub posts_visible: bool,
    pub drafts_visible: bool,
    /// Built-in entries with their leading splitters, in catalog order.
    pub catalog_items: Vec<NavItem>,
}

impl Composition {
    /// Whether anything precedes the catalog block, which then needs a
    /// separating splitter.
    pub fn has_leading_block(&self) -> bool {
        !self.collection_items.is_empty()
            || self.posts_visible
            || self.drafts_visible
    }

    pub fn collection_count(&self) -> usize {
        self.collection_items.len()
    }
}

/// Compose the sidebar with the default English labels.
pub fn compose(
    config: &SiteConfig,
    collections: &[CollectionDescriptor],
) -> Composition {
    compose_with_labels(config, collections, &SidebarLabels::default())
}

/// Compose the sidebar entries from configuration and fetched collections.
///
/// Pure function of its inputs: the collections list may still be empty
/// while the fetch is outstanding.
pub fn compose_with_labels(
    config: &SiteConfig,
    collections: &[CollectionDescriptor],
    labels: &SidebarLabels,
) -> Composition {
    let hidden_links = config.hidden_links();
    let is_hidden =
        |name: &str| hidden_links.iter().any(|hidden| hidden == name);

    let collection_items: Vec<NavItem> = collections
        .iter()
        .filter(|collection| {
            !collection.is_posts() && !is_hidden(&collection.label)
        })
        .map(|collection| {
            NavItem::Leaf(NavLeaf::new(
                routes::collection_route(&collection.label),
                COLLECTION_ICON,
                collection.display_label(),
            ))
        })
        .collect();

    let catalog_items = catalog::visible_catalog(hidden_links.as_slice())
        .into_iter()
        .flat_map(|entry| catalog_entry_items(entry, labels))
        .collect();

    let composition = Composition {
        collection_items,
        posts_visible: !is_hidden(POSTS_LABEL),
        drafts_visible: config.show_drafts(),
        catalog_items,
    };

    log::debug!(
        "sidebar composed: collections={} posts={} drafts={} catalog={}",
        composition.collection_count(),
        composition.posts_visible,
        composition.drafts_visible,
        composition.catalog_items.len(),
    );

    composition
}

/// Fixed slot for the posts collection.
pub fn posts_leaf(labels: &SidebarLabels) -> NavLeaf {
    NavLeaf::new(
        routes::collection_route(POSTS_LABEL),
        COLLECTION_ICON,
        labels.posts.clone(),
    )
}

/// Fixed slot for drafts.
pub fn drafts_leaf(labels: &SidebarLabels) -> NavLeaf {
    NavLeaf::new(
        routes::admin_route(DRAFTS_SEGMENT),
        DRAFTS_ICON,
        labels.drafts.clone(),
    )
}

fn catalog_entry_items(
    entry: &NavEntryDef,
    labels: &SidebarLabels,
) -> Vec<NavItem> {
    let leaf = NavItem::Leaf(NavLeaf::new(
        routes::admin_route(entry.route_segment),
        entry.icon,
        labels.label_for(entry.label_key),
    ));

    if entry.splitter_before {
        vec![NavItem::Splitter, leaf]
    } else {
        vec![leaf]
    }
}
