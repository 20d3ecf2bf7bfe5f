use serde::{Deserialize, Serialize};

/// Localized sidebar strings supplied by the translation collaborator.
///
/// Missing fields in a deserialized table fall back to English.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarLabels {
    pub pages: String,
    pub datafiles: String,
    pub staticfiles: String,
    pub configuration: String,
    pub collections: String,
    pub posts: String,
    pub drafts: String,
}

impl SidebarLabels {
    /// Resolve a catalog label key. Unknown keys resolve to the key itself.
    pub fn label_for<'a>(&'a self, label_key: &'a str) -> &'a str {
        match label_key {
            "pages" => &self.pages,
            "datafiles" => &self.datafiles,
            "staticfiles" => &self.staticfiles,
            "configuration" => &self.configuration,
            "collections" => &self.collections,
            "posts" => &self.posts,
            "drafts" => &self.drafts,
            other => other,
        }
    }
}

impl Default for SidebarLabels {
    fn default() -> Self {
        Self {
            pages: String::from("Pages"),
            datafiles: String::from("Data Files"),
            staticfiles: String::from("Static Files"),
            configuration: String::from("Configuration"),
            collections: String::from("Collections"),
            posts: String::from("Posts"),
            drafts: String::from("Drafts"),
        }
    }
}
