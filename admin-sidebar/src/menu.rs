use serde::Serialize;

use crate::accordion;
use crate::compose::{self, COLLECTION_ICON, Composition, NavItem, NavLeaf};
use crate::labels::SidebarLabels;
use crate::routes;

/// Target of the sidebar logo.
pub fn logo_href() -> String {
    routes::admin_route("pages")
}

/// Collapsible panel listing the non-posts collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionsPanel {
    pub label: String,
    pub icon: String,
    /// Number of collection leaves, shown next to the panel label.
    pub counter: usize,
    pub collapsed: bool,
    /// Maximum visible size of the panel, see [`accordion::extent`].
    pub extent: usize,
    pub items: Vec<NavItem>,
}

/// Row of the rendered sidebar route list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuRow {
    CollectionsPanel(CollectionsPanel),
    Link(NavLeaf),
    Splitter,
}

impl From<NavItem> for MenuRow {
    fn from(item: NavItem) -> Self {
        match item {
            NavItem::Splitter => MenuRow::Splitter,
            NavItem::Leaf(leaf) => MenuRow::Link(leaf),
        }
    }
}

/// Lay out the composed entries in display order.
///
/// The collections panel, posts and drafts form the leading block. A single
/// splitter separates it from the catalog entries when any of them is shown.
pub fn build_menu(
    composition: &Composition,
    labels: &SidebarLabels,
    collapsed: bool,
) -> Vec<MenuRow> {
    let mut rows = Vec::new();

    if !composition.collection_items.is_empty() {
        let counter = composition.collection_count();
        rows.push(MenuRow::CollectionsPanel(CollectionsPanel {
            label: labels.collections.clone(),
            icon: COLLECTION_ICON.to_string(),
            counter,
            collapsed,
            extent: accordion::extent(collapsed, counter),
            items: composition.collection_items.clone(),
        }));
    }

    if composition.posts_visible {
        rows.push(MenuRow::Link(compose::posts_leaf(labels)));
    }

    if composition.drafts_visible {
        rows.push(MenuRow::Link(compose::drafts_leaf(labels)));
    }

    if composition.has_leading_block() {
        rows.push(MenuRow::Splitter);
    }

    rows.extend(composition.catalog_items.iter().cloned().map(MenuRow::from));
    rows
}
