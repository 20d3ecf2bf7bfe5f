/// Definition of a built-in sidebar destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntryDef {
    pub key: &'static str,
    pub icon: &'static str,
    pub route_segment: &'static str,
    pub label_key: &'static str,
    pub splitter_before: bool,
}

/// Built-in entries in display order.
pub const CATALOG: &[NavEntryDef] = &[
    NavEntryDef {
        key: "pages",
        icon: "file-text",
        route_segment: "pages",
        label_key: "pages",
        splitter_before: false,
    },
    NavEntryDef {
        key: "datafiles",
        icon: "database",
        route_segment: "datafiles",
        label_key: "datafiles",
        splitter_before: true,
    },
    NavEntryDef {
        key: "staticfiles",
        icon: "file",
        route_segment: "staticfiles",
        label_key: "staticfiles",
        splitter_before: false,
    },
    NavEntryDef {
        key: "configuration",
        icon: "cog",
        route_segment: "configuration",
        label_key: "configuration",
        splitter_before: true,
    },
];

/// Catalog entries not named in `hidden`, in catalog order.
///
/// Names in `hidden` that match no entry are ignored.
pub fn visible_catalog<S: AsRef<str>>(
    hidden: &[S],
) -> Vec<&'static NavEntryDef> {
    CATALOG
        .iter()
        .filter(|entry| !hidden.iter().any(|name| name.as_ref() == entry.key))
        .collect()
}

pub fn find(key: &str) -> Option<&'static NavEntryDef> {
    CATALOG.iter().find(|entry| entry.key == key)
}
