//! HTML rendering for CMS content.
//!
//! DESIGN
//! ======
//! Components are plain functions from typed content to `String` markup.
//! Every text and attribute value coming from the CMS goes through
//! [`escape`]; missing attributes render as empty strings or are omitted.

pub mod blocks;
pub mod chrome;
pub mod contact;
pub mod sections;

use std::fmt::Write as _;

use crate::cms::types::{CallToAction, MediaReference};
use crate::media::resolve_media_url;

/// Shown in place of page content when the CMS could not be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load page content. Please try again later.";

/// Alt text used when an image carries none of its own.
const NO_ALT_TEXT: &str = "No alternative text provided";

/// Per-render inputs that do not come from the CMS payload.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Base URL relative media paths are resolved against.
    pub media_base: String,
    pub site_name: String,
    pub year: i32,
}

/// Escape text for use in HTML content and double-quoted attributes.
#[must_use]
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escaped text of an optional attribute, or empty.
pub(crate) fn text(value: Option<&String>) -> String {
    value.map(|v| escape(v)).unwrap_or_default()
}

/// Anchor for a call to action. External links open in a new tab.
pub(crate) fn link(cta: &CallToAction, class: &str, fallback_label: &str) -> String {
    let href = cta.href.as_deref().unwrap_or("#");
    let label = cta
        .label
        .as_deref()
        .filter(|l| !l.is_empty())
        .unwrap_or(fallback_label);
    let target = match cta.target() {
        Some(target) => format!(r#" target="{target}" rel="noopener noreferrer""#),
        None => String::new(),
    };
    format!(
        r#"<a href="{}" class="{class}"{target}>{}</a>"#,
        escape(href),
        escape(label)
    )
}

/// What an image's alt text falls back to when `alternativeText` is blank.
#[derive(Debug, Clone, Copy)]
pub(crate) enum AltFallback<'a> {
    /// The media file name, then the given text.
    NameThen(&'a str),
    /// The given text only; the file name is never shown.
    Text(&'a str),
}

/// `<img>` for a CMS media reference; empty when there is nothing to show.
pub(crate) fn image(ctx: &RenderContext, media: Option<&MediaReference>, fallback: AltFallback<'_>, class: &str) -> String {
    let Some(media) = media else {
        return String::new();
    };
    let Some(src) = resolve_media_url(&ctx.media_base, media.url.as_deref()) else {
        return String::new();
    };
    let non_empty = |a: &&str| !a.is_empty();
    let (name, text) = match fallback {
        AltFallback::NameThen(text) => (media.name.as_deref(), text),
        AltFallback::Text(text) => (None, text),
    };
    let alt = media
        .alternative_text
        .as_deref()
        .filter(non_empty)
        .or(name.filter(non_empty))
        .or(Some(text).filter(non_empty))
        .unwrap_or(NO_ALT_TEXT);
    format!(
        r#"<img src="{}" alt="{}" class="{class}" loading="lazy">"#,
        escape(&src),
        escape(alt)
    )
}

/// Generic notice rendered when a page's content could not be loaded.
#[must_use]
pub fn load_failed() -> String {
    format!(r#"<section class="load-failed" role="alert"><p>{LOAD_FAILED_MESSAGE}</p></section>"#)
}

/// Full HTML document around pre-rendered body fragments.
#[must_use]
pub fn document(ctx: &RenderContext, title: Option<&str>, description: Option<&str>, fragments: &[String]) -> String {
    let title = match title.filter(|t| !t.is_empty()) {
        Some(t) => format!("{} | {}", escape(t), escape(&ctx.site_name)),
        None => escape(&ctx.site_name),
    };
    let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{title}</title>");
    if let Some(description) = description.filter(|d| !d.is_empty()) {
        let _ = writeln!(html, "<meta name=\"description\" content=\"{}\">", escape(description));
    }
    html.push_str("</head>\n<body>\n");
    for fragment in fragments.iter().filter(|f| !f.is_empty()) {
        html.push_str(fragment);
        html.push('\n');
    }
    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
pub(crate) fn test_context() -> RenderContext {
    RenderContext { media_base: "http://localhost:1337".into(), site_name: "Acme".into(), year: 2026 }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
