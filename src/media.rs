//! Media URL resolution against the CMS base URL.

/// Resolve a CMS media URL to something a browser can fetch.
///
/// `data:` URIs, `http(s)://` URLs, and protocol-relative `//` URLs pass
/// through. Anything else is treated as a path on the CMS and gets the base
/// URL prefixed once. `None` and blank input resolve to no image.
#[must_use]
pub fn resolve_media_url(base_url: &str, url: Option<&str>) -> Option<String> {
    let url = url.map(str::trim).filter(|u| !u.is_empty())?;
    if url.starts_with("data:") || url.starts_with("http") || url.starts_with("//") {
        return Some(url.to_owned());
    }
    let base = base_url.trim_end_matches('/');
    if url.starts_with('/') {
        Some(format!("{base}{url}"))
    } else {
        Some(format!("{base}/{url}"))
    }
}

#[cfg(test)]
#[path = "media_test.rs"]
mod tests;
