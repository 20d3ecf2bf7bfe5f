//! Navigation menu composition for the site admin console sidebar.
//!
//! The crate is split into two layers:
//! - pure composition ([`compose`], [`accordion`], [`menu`]) that turns a
//!   [`SiteConfig`] and the fetched [`CollectionDescriptor`] list into
//!   ordered sidebar rows;
//! - the [`SidebarWidget`], which owns the view-local collapse flag and
//!   reduces [`SidebarIntent`] events into state changes and
//!   [`SidebarEffect`] requests for external collaborators.
//!
//! Rendering, routing and fetching stay outside the crate.
//!
//! # Quick Example
//!
//! ```
//! use admin_sidebar::{
//!     CollectionDescriptor, SidebarEffect, SidebarIntent, SidebarLabels,
//!     SidebarWidget, SiteConfig,
//! };
//! use serde_json::json;
//!
//! let config = SiteConfig::from_json(json!({
//!     "show_drafts": true,
//!     "jekyll_admin": { "hidden_links": ["staticfiles"] }
//! }));
//! let mut sidebar = SidebarWidget::new(config, SidebarLabels::default());
//!
//! let effects = sidebar.reduce(SidebarIntent::Mounted);
//! assert_eq!(effects, vec![SidebarEffect::FetchCollections]);
//!
//! let _ = sidebar.reduce(SidebarIntent::CollectionsLoaded(vec![
//!     CollectionDescriptor::new("posts"),
//!     CollectionDescriptor::new("team"),
//! ]));
//! let _ = sidebar.reduce(SidebarIntent::ToggleCollections);
//!
//! let vm = sidebar.vm();
//! assert!(!vm.collapsed);
//! ```

pub mod accordion;
pub mod catalog;
pub mod collections;
pub mod compose;
pub mod config;
mod errors;
pub mod header;
pub mod labels;
pub mod menu;
pub mod routes;
pub mod storage;
mod widgets;

pub use collections::CollectionDescriptor;
pub use compose::{Composition, NavItem, NavLeaf, compose, compose_with_labels};
pub use config::SiteConfig;
pub use errors::SidebarError;
pub use header::HeaderLink;
pub use labels::SidebarLabels;
pub use menu::{CollectionsPanel, MenuRow, build_menu};
pub use widgets::sidebar::{
    SidebarEffect, SidebarIntent, SidebarViewModel, SidebarWidget,
};
