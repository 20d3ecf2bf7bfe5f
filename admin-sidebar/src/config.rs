use serde_json::Value;

const ADMIN_SECTION_KEY: &str = "jekyll_admin";
const HIDDEN_LINKS_KEY: &str = "hidden_links";

/// Site configuration as served by the config-loading collaborator.
///
/// The payload is kept as an opaque JSON mapping. Every accessor tolerates
/// missing or mistyped fields and falls back to the "feature disabled"
/// value instead of failing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiteConfig {
    raw: Value,
}

impl SiteConfig {
    /// Wrap an already parsed configuration value.
    pub fn from_json(value: Value) -> Self {
        Self { raw: value }
    }

    /// Configuration with no fields set.
    pub fn empty() -> Self {
        Self {
            raw: Value::Object(serde_json::Map::new()),
        }
    }

    /// Borrow the underlying JSON payload.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Site URL, if configured and non-empty.
    pub fn url(&self) -> Option<&str> {
        read_non_empty_str(&self.raw, &["url"])
    }

    /// Site title, if configured and non-empty.
    pub fn title(&self) -> Option<&str> {
        read_non_empty_str(&self.raw, &["title"])
    }

    /// Whether the drafts entry should be offered.
    pub fn show_drafts(&self) -> bool {
        lookup(&self.raw, &["show_drafts"]).is_some_and(is_truthy)
    }

    /// Names of sidebar entries the site owner asked to hide.
    ///
    /// Reads `jekyll_admin.hidden_links`. Any absent step or a value that
    /// is not an array yields an empty list; non-string entries are skipped.
    pub fn hidden_links(&self) -> Vec<String> {
        lookup(&self.raw, &[ADMIN_SECTION_KEY, HIDDEN_LINKS_KEY])
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(Value::as_str)
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl From<Value> for SiteConfig {
    fn from(value: Value) -> Self {
        Self::from_json(value)
    }
}

/// Walk a chain of object keys, returning `None` at the first missing step.
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |current, key| current.as_object()?.get(*key))
}

/// Truthiness of a JSON value under the usual scripting rules.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn read_non_empty_str<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    lookup(value, path)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}
