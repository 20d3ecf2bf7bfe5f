use thiserror::Error;

/// Errors emitted while loading sidebar inputs from disk.
#[derive(Debug, Error)]
pub enum SidebarError {
    /// Filesystem operation failed.
    #[error("sidebar input IO failed: {0}")]
    Io(#[from] std::io::Error),
    /// JSON deserialization failed.
    #[error("sidebar input JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}
