mod event;
mod model;
mod reducer;
mod state;

pub use event::{SidebarEffect, SidebarIntent};
pub use model::SidebarViewModel;
use state::SidebarState;

use crate::compose::{self, Composition};
use crate::config::SiteConfig;
use crate::header::HeaderLink;
use crate::labels::SidebarLabels;
use crate::menu;

/// Sidebar widget owning its private view state.
#[derive(Debug, Default)]
pub struct SidebarWidget {
    state: SidebarState,
}

impl SidebarWidget {
    /// Construct a sidebar for the given configuration and labels. The
    /// collections panel starts collapsed.
    pub fn new(config: SiteConfig, labels: SidebarLabels) -> Self {
        Self {
            state: SidebarState::new(config, labels),
        }
    }

    /// Start with the collections panel expanded or collapsed.
    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.state.set_collapsed(collapsed);
        self
    }

    /// Reduce an intent event into state updates and effect events.
    pub fn reduce(&mut self, intent: SidebarIntent) -> Vec<SidebarEffect> {
        reducer::reduce(&mut self.state, intent)
    }

    pub fn is_collapsed(&self) -> bool {
        self.state.is_collapsed()
    }

    /// Compose the entries for the current configuration and collections.
    pub fn composition(&self) -> Composition {
        compose::compose_with_labels(
            self.state.config(),
            self.state.collections(),
            self.state.labels(),
        )
    }

    /// Build a read-only view model for the presentation layer.
    pub fn vm(&self) -> SidebarViewModel {
        let composition = self.composition();
        let rows = menu::build_menu(
            &composition,
            self.state.labels(),
            self.state.is_collapsed(),
        );

        let mut vm = SidebarViewModel {
            header: HeaderLink::from_config(self.state.config()),
            logo_href: menu::logo_href(),
            rows,
            collapsed: self.state.is_collapsed(),
            active_href: None,
        };

        let active_href = self.state.location().and_then(|location| {
            vm.links()
                .find(|leaf| leaf.is_active(location))
                .map(|leaf| leaf.href.clone())
        });
        vm.active_href = active_href;

        vm
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::accordion::ROW_UNIT;
    use crate::collections::CollectionDescriptor;
    use crate::menu::MenuRow;

    fn panel_extent(vm: &SidebarViewModel) -> Option<usize> {
        vm.rows.iter().find_map(|row| match row {
            MenuRow::CollectionsPanel(panel) => Some(panel.extent),
            _ => None,
        })
    }

    #[test]
    fn given_fetch_outstanding_when_vm_built_then_panel_is_absent() {
        let mut widget = SidebarWidget::default();
        let _effects = widget.reduce(SidebarIntent::Mounted);

        let vm = widget.vm();

        assert_eq!(panel_extent(&vm), None);
        assert_eq!(vm.logo_href, "/admin/pages");
    }

    #[test]
    fn given_loaded_collections_when_toggled_then_extent_is_rederived() {
        let mut widget = SidebarWidget::default();
        let _effects = widget.reduce(SidebarIntent::CollectionsLoaded(vec![
            CollectionDescriptor::new("posts"),
            CollectionDescriptor::new("team"),
            CollectionDescriptor::new("faq"),
        ]));

        assert_eq!(panel_extent(&widget.vm()), Some(ROW_UNIT));

        let _effects = widget.reduce(SidebarIntent::ToggleCollections);
        assert_eq!(panel_extent(&widget.vm()), Some(3 * ROW_UNIT));

        let _effects = widget.reduce(SidebarIntent::ToggleCollections);
        assert_eq!(panel_extent(&widget.vm()), Some(ROW_UNIT));
    }

    #[test]
    fn given_location_when_vm_built_then_matching_leaf_is_active() {
        let config = SiteConfig::from_json(json!({ "show_drafts": true }));
        let mut widget = SidebarWidget::new(config, SidebarLabels::default());
        let _effects = widget.reduce(SidebarIntent::CollectionsLoaded(vec![
            CollectionDescriptor::new("team"),
        ]));

        let _effects = widget.reduce(SidebarIntent::LocationChanged(
            String::from("/admin/collections/team/alice.md"),
        ));
        assert_eq!(
            widget.vm().active_href.as_deref(),
            Some("/admin/collections/team")
        );

        let _effects = widget.reduce(SidebarIntent::LocationChanged(
            String::from("/admin/drafts"),
        ));
        assert_eq!(widget.vm().active_href.as_deref(), Some("/admin/drafts"));
    }

    #[test]
    fn given_expanded_start_when_vm_built_then_panel_uses_full_extent() {
        let widget = SidebarWidget::default().with_collapsed(false);

        assert!(!widget.is_collapsed());
        assert!(!widget.vm().collapsed);
    }

    #[test]
    fn given_same_state_when_vm_built_twice_then_outputs_match() {
        let mut widget = SidebarWidget::default();
        let _effects = widget.reduce(SidebarIntent::CollectionsLoaded(vec![
            CollectionDescriptor::new("team"),
        ]));

        assert_eq!(widget.vm(), widget.vm());
        assert_eq!(widget.composition(), widget.composition());
    }
}
