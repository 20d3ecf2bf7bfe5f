use crate::collections::CollectionDescriptor;
use crate::config::SiteConfig;

/// Intent events handled by the sidebar widget.
#[derive(Debug, Clone)]
pub enum SidebarIntent {
    /// The owning view was mounted.
    Mounted,
    /// The owning view was unmounted; view-local state is discarded.
    Unmounted,
    CollectionsLoaded(Vec<CollectionDescriptor>),
    CollectionsFetchFailed(String),
    /// User clicked the collections panel header.
    ToggleCollections,
    ConfigReplaced(SiteConfig),
    LocationChanged(String),
}

/// Effect events produced by the sidebar reducer for external collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEffect {
    /// Ask the data-fetch collaborator for the site collections.
    FetchCollections,
}
