use super::event::{SidebarEffect, SidebarIntent};
use super::state::SidebarState;

/// Reduce a sidebar intent into state updates and effect events.
pub(super) fn reduce(
    state: &mut SidebarState,
    intent: SidebarIntent,
) -> Vec<SidebarEffect> {
    match intent {
        SidebarIntent::Mounted => {
            if state.request_fetch() {
                log::debug!("sidebar mounted, requesting collections");
                vec![SidebarEffect::FetchCollections]
            } else {
                Vec::new()
            }
        },
        SidebarIntent::Unmounted => {
            state.reset_view();
            Vec::new()
        },
        SidebarIntent::CollectionsLoaded(collections) => {
            log::debug!("sidebar received {} collections", collections.len());
            state.replace_collections(collections);
            Vec::new()
        },
        SidebarIntent::CollectionsFetchFailed(message) => {
            log::warn!("collections fetch failed: {message}");
            Vec::new()
        },
        SidebarIntent::ToggleCollections => {
            state.toggle_collapsed();
            Vec::new()
        },
        SidebarIntent::ConfigReplaced(config) => {
            state.replace_config(config);
            Vec::new()
        },
        SidebarIntent::LocationChanged(location) => {
            state.set_location(location);
            Vec::new()
        },
    }
}
