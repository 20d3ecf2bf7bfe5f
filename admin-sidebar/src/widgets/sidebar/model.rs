use serde::Serialize;

use crate::compose::{NavItem, NavLeaf};
use crate::header::HeaderLink;
use crate::menu::MenuRow;

/// Read-only snapshot consumed by the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarViewModel {
    pub header: HeaderLink,
    pub logo_href: String,
    pub rows: Vec<MenuRow>,
    pub collapsed: bool,
    /// Route of the leaf matching the current location, if any.
    pub active_href: Option<String>,
}

impl SidebarViewModel {
    /// Iterate every link in display order, including panel children.
    pub fn links(&self) -> impl Iterator<Item = &NavLeaf> {
        self.rows.iter().flat_map(row_links)
    }
}

fn row_links(row: &MenuRow) -> Vec<&NavLeaf> {
    match row {
        MenuRow::CollectionsPanel(panel) => {
            panel.items.iter().filter_map(NavItem::as_leaf).collect()
        },
        MenuRow::Link(leaf) => vec![leaf],
        MenuRow::Splitter => Vec::new(),
    }
}
