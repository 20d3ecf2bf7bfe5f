use serde::{Deserialize, Serialize};

/// Label of the collection that owns a fixed sidebar slot.
pub const POSTS_LABEL: &str = "posts";

/// Collection entry as returned by the collections fetch.
///
/// Upstream payloads carry many more fields; only the ones the sidebar
/// needs are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionDescriptor {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_label: Option<String>,
}

impl CollectionDescriptor {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sidebar_label: None,
        }
    }

    pub fn with_sidebar_label(
        mut self,
        sidebar_label: impl Into<String>,
    ) -> Self {
        self.sidebar_label = Some(sidebar_label.into());
        self
    }

    /// Text shown in the sidebar: the explicit sidebar label, or the
    /// capitalized collection label.
    pub fn display_label(&self) -> String {
        match self.sidebar_label.as_deref() {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => capitalize(&self.label),
        }
    }

    pub fn is_posts(&self) -> bool {
        self.label == POSTS_LABEL
    }
}

/// Upper-case the first character and leave the rest untouched.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
