use crate::accordion;
use crate::collections::CollectionDescriptor;
use crate::config::SiteConfig;
use crate::labels::SidebarLabels;

/// View-local sidebar state. Lives as long as the owning view is mounted.
#[derive(Debug)]
pub(super) struct SidebarState {
    config: SiteConfig,
    collections: Vec<CollectionDescriptor>,
    labels: SidebarLabels,
    collapsed: bool,
    fetch_requested: bool,
    location: Option<String>,
}

impl SidebarState {
    pub(super) fn new(config: SiteConfig, labels: SidebarLabels) -> Self {
        Self {
            config,
            collections: Vec::new(),
            labels,
            collapsed: true,
            fetch_requested: false,
            location: None,
        }
    }

    pub(super) fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub(super) fn collections(&self) -> &[CollectionDescriptor] {
        &self.collections
    }

    pub(super) fn labels(&self) -> &SidebarLabels {
        &self.labels
    }

    pub(super) fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    #[cfg(test)]
    pub(super) fn is_fetch_requested(&self) -> bool {
        self.fetch_requested
    }

    pub(super) fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub(super) fn toggle_collapsed(&mut self) {
        self.collapsed = accordion::toggle(self.collapsed);
    }

    pub(super) fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
    }

    /// Mark the collections fetch as requested. Returns `false` when it was
    /// already requested during this mount.
    pub(super) fn request_fetch(&mut self) -> bool {
        if self.fetch_requested {
            return false;
        }

        self.fetch_requested = true;
        true
    }

    pub(super) fn replace_collections(
        &mut self,
        collections: Vec<CollectionDescriptor>,
    ) {
        self.collections = collections;
    }

    pub(super) fn replace_config(&mut self, config: SiteConfig) {
        self.config = config;
    }

    pub(super) fn set_location(&mut self, location: String) {
        self.location = Some(location);
    }

    /// Drop everything tied to the mounted view.
    pub(super) fn reset_view(&mut self) {
        self.collapsed = true;
        self.fetch_requested = false;
        self.location = None;
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new(SiteConfig::empty(), SidebarLabels::default())
    }
}
