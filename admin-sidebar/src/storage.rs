use std::fs;
use std::path::Path;

use crate::collections::CollectionDescriptor;
use crate::config::SiteConfig;
use crate::errors::SidebarError;
use crate::labels::SidebarLabels;

/// Status describing how the site configuration was loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the site configuration from disk.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    config: SiteConfig,
    status: LoadStatus,
}

impl ConfigLoad {
    pub fn new(config: SiteConfig, status: LoadStatus) -> Self {
        Self { config, status }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Consume the value and return both payload and status.
    pub fn into_parts(self) -> (SiteConfig, LoadStatus) {
        (self.config, self.status)
    }
}

/// Load the site configuration.
///
/// A missing file or malformed JSON yields an empty configuration, so the
/// sidebar still renders with every optional feature disabled.
pub fn load_site_config(path: &Path) -> Result<ConfigLoad, SidebarError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigLoad::new(
                SiteConfig::empty(),
                LoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    let parsed = match serde_json::from_str::<serde_json::Value>(&data) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("site config {} is invalid: {err}", path.display());
            return Ok(ConfigLoad::new(
                SiteConfig::empty(),
                LoadStatus::Invalid(format!("{err}")),
            ));
        },
    };

    Ok(ConfigLoad::new(
        SiteConfig::from_json(parsed),
        LoadStatus::Loaded,
    ))
}

/// Load a fetched collections payload (a JSON array of descriptors).
pub fn load_collections(
    path: &Path,
) -> Result<Vec<CollectionDescriptor>, SidebarError> {
    let data = fs::read_to_string(path)?;
    let collections = serde_json::from_str(&data)?;
    Ok(collections)
}

/// Load a translation table for the sidebar labels.
pub fn load_labels(path: &Path) -> Result<SidebarLabels, SidebarError> {
    let data = fs::read_to_string(path)?;
    let labels = serde_json::from_str(&data)?;
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;

    #[test]
    fn given_missing_file_when_loading_config_then_empty_with_missing_status() {
        let root = test_temp_dir("missing_config");
        let path = root.join("config.json");

        let (config, status) = load_site_config(&path)
            .expect("missing config should not fail")
            .into_parts();

        assert_eq!(status, LoadStatus::Missing);
        assert!(config.hidden_links().is_empty());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_loading_config_then_empty_with_invalid_status() {
        let root = test_temp_dir("invalid_config");
        let path = root.join("config.json");
        fs::write(&path, "{ this is not valid json")
            .expect("invalid test payload should be written");

        let loaded = load_site_config(&path)
            .expect("loading invalid config should not fail with io error");

        match loaded.status() {
            LoadStatus::Invalid(message) => assert!(!message.is_empty()),
            other => panic!("expected invalid status, got {other:?}"),
        }
        let (config, _) = loaded.into_parts();
        assert!(!config.show_drafts());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_valid_config_when_loading_then_fields_are_readable() {
        let root = test_temp_dir("valid_config");
        let path = root.join("config.json");
        fs::write(
            &path,
            r#"{"show_drafts": true, "jekyll_admin": {"hidden_links": ["pages"]}}"#,
        )
        .expect("config payload should be written");

        let (config, status) = load_site_config(&path)
            .expect("config should load")
            .into_parts();

        assert_eq!(status, LoadStatus::Loaded);
        assert!(config.show_drafts());
        assert_eq!(config.hidden_links(), vec!["pages"]);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_collections_file_when_loaded_then_order_is_preserved() {
        let root = test_temp_dir("collections");
        let path = root.join("collections.json");
        fs::write(
            &path,
            r#"[{"label": "team"}, {"label": "posts"}, {"label": "faq"}]"#,
        )
        .expect("collections payload should be written");

        let collections =
            load_collections(&path).expect("collections should load");

        let labels: Vec<_> =
            collections.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["team", "posts", "faq"]);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_malformed_collections_when_loaded_then_json_error() {
        let root = test_temp_dir("bad_collections");
        let path = root.join("collections.json");
        fs::write(&path, r#"{"label": "team"}"#)
            .expect("collections payload should be written");

        let result = load_collections(&path);

        assert!(matches!(result, Err(SidebarError::Json(_))));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_missing_labels_file_when_loaded_then_io_error() {
        let root = test_temp_dir("missing_labels");

        let result = load_labels(&root.join("labels.json"));

        assert!(matches!(result, Err(SidebarError::Io(_))));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "admin-sidebar-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
