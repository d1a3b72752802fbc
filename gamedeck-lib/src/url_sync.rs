//! Mirroring the badge filter into the page URL's `filter` query parameter.
//!
//! The parameter lists *enabled* badges. Fully enabled sections collapse to
//! their section name, everything enabled is written as `ALL`, and nothing
//! enabled removes the parameter.

use std::collections::HashSet;

use url::Url;

use crate::error::GalleryError;
use crate::filter::FilterState;
use crate::registry::BadgeRegistry;

/// Query parameter holding the enabled badges.
pub const FILTER_PARAM: &str = "filter";

/// Parameter value meaning "every badge enabled".
pub const ALL_TOKEN: &str = "ALL";

/// Encode the enabled set. `None` means the parameter should be removed.
pub fn serialize(filter: &FilterState, registry: &BadgeRegistry) -> Option<String> {
    let all = registry.all_ids();
    let enabled = filter.enabled_ids(registry);

    if enabled.len() == all.len() {
        return Some(ALL_TOKEN.to_string());
    }
    if enabled.is_empty() {
        return None;
    }

    let enabled_set: HashSet<&str> = enabled.iter().copied().collect();
    let mut compacted: HashSet<&str> = HashSet::new();
    let mut parts: Vec<&str> = Vec::new();

    for (section, members) in registry.sections() {
        if members.iter().all(|id| enabled_set.contains(id)) {
            parts.push(section);
            compacted.extend(members);
        }
    }
    parts.extend(enabled.iter().filter(|id| !compacted.contains(*id)));

    Some(parts.join(","))
}

/// Decode a parameter value into a filter state.
///
/// A missing or empty value, or one containing the `ALL`/`all` token,
/// enables everything. Otherwise each comma-separated token enables the
/// badge with that id, or every member of the section with that name
/// (case-insensitive); all other known badges are disabled and unknown
/// tokens are ignored.
pub fn deserialize(param: Option<&str>, registry: &BadgeRegistry) -> FilterState {
    let Some(param) = param.filter(|p| !p.trim().is_empty()) else {
        return FilterState::new();
    };
    let tokens: Vec<&str> = param.split(',').map(str::trim).collect();
    if tokens.iter().any(|t| *t == ALL_TOKEN || *t == "all") {
        return FilterState::new();
    }

    let mut enabled: HashSet<&str> = HashSet::new();
    for &token in &tokens {
        if registry.contains(token) {
            enabled.insert(token);
        }
        enabled.extend(registry.section_members(token));
    }

    FilterState::with_disabled(
        registry
            .all_ids()
            .into_iter()
            .filter(|id| !enabled.contains(id)),
    )
}

/// Read the `filter` parameter of a page URL.
pub fn filter_param(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == FILTER_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// Filter state described by a page URL.
pub fn filter_from_url(url: &Url, registry: &BadgeRegistry) -> FilterState {
    deserialize(filter_param(url).as_deref(), registry)
}

/// Return `url` with its `filter` parameter set to `value`, or removed when
/// `value` is `None`. Other parameters keep their order.
pub fn with_filter_param(url: &Url, value: Option<&str>) -> Url {
    let others: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != FILTER_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut out = url.clone();
    out.set_query(None);
    if !others.is_empty() || value.is_some() {
        let mut query = out.query_pairs_mut();
        query.extend_pairs(others);
        if let Some(value) = value {
            query.append_pair(FILTER_PARAM, value);
        }
    }
    out
}

/// Rewrite `url` to reflect the current filter state.
pub fn apply_to_url(url: &Url, filter: &FilterState, registry: &BadgeRegistry) -> Url {
    with_filter_param(url, serialize(filter, registry).as_deref())
}

/// Path plus query string, the form navigation links are written in.
pub fn path_and_query(url: &Url) -> String {
    match url.query() {
        Some(query) if !query.is_empty() => format!("{}?{}", url.path(), query),
        _ => url.path().to_string(),
    }
}

/// Index of the navigation link pointing at the current page, if any.
pub fn active_nav_link(links: &[&str], current: &Url) -> Option<usize> {
    let here = path_and_query(current);
    links.iter().position(|href| *href == here)
}

/// Follow an in-page navigation link: carry the link's `filter` parameter
/// (or its absence) over to the current URL without leaving the page.
pub fn follow_nav_link(current: &Url, href: &str) -> Result<Url, GalleryError> {
    let target = current.join(href)?;
    Ok(with_filter_param(current, filter_param(&target).as_deref()))
}

#[cfg(test)]
#[path = "tests/url_sync_tests.rs"]
mod tests;
