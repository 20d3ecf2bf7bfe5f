/// Mount point of the admin console.
pub const ADMIN_PREFIX: &str = "/admin";

/// Route of a top-level admin page.
pub fn admin_route(segment: &str) -> String {
    format!("{ADMIN_PREFIX}/{segment}")
}

/// Route of a collection listing.
pub fn collection_route(label: &str) -> String {
    format!("{ADMIN_PREFIX}/collections/{label}")
}

/// Whether `location` is `href` or a route nested below it.
///
/// Matching respects path segment boundaries, so `/admin/pages` does not
/// match `/admin/pagesx`. Query strings and fragments are ignored.
pub fn is_active(href: &str, location: &str) -> bool {
    let path = location
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');
    let href = href.trim_end_matches('/');

    match path.strip_prefix(href) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
