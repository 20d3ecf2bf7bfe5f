use serde::Serialize;

use crate::config::SiteConfig;

const FALLBACK_HREF: &str = "/";
const FALLBACK_TITLE: &str = "You have no title!";

/// Home link shown above the sidebar routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderLink {
    /// Public site URL, opened in a new tab.
    pub href: String,
    pub title: String,
    pub version: String,
}

impl HeaderLink {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            href: config.url().unwrap_or(FALLBACK_HREF).to_string(),
            title: config.title().unwrap_or(FALLBACK_TITLE).to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
