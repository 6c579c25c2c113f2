//! Fixed endpoints and populate trees used by the site's pages.

use super::populate::Populate;
use super::types::{FEATURE_SECTION, HEADER_SECTION, HERO_SECTION};

pub const HOME_PATH: &str = "/api/home";
pub const HOME_PAGE_PATH: &str = "/api/home-page";
pub const GLOBAL_PATH: &str = "/api/global";
pub const CONTACTS_PATH: &str = "/api/contacts";

const IMAGE_FIELDS: &[&str] = &["url", "alternativeText", "name"];

fn logo_link() -> Populate {
    Populate::new().fields("image", IMAGE_FIELDS)
}

fn hero_section() -> Populate {
    Populate::new().all("cta").fields("image", IMAGE_FIELDS)
}

fn feature_section() -> Populate {
    Populate::new().nested("featureCard", Populate::new().fields("media", IMAGE_FIELDS))
}

/// `/api/home`: hero with CTAs and image, header, and feature cards.
#[must_use]
pub fn home() -> Populate {
    Populate::new()
        .nested("hero", hero_section())
        .all("header")
        .nested("features", Populate::new().all("featureCard"))
}

/// `/api/home-page`: the `blocks` dynamic zone with one fragment per section type.
#[must_use]
pub fn home_page() -> Populate {
    Populate::new().on(
        "blocks",
        Populate::new()
            .nested(HERO_SECTION, hero_section())
            .all(HEADER_SECTION)
            .nested(FEATURE_SECTION, feature_section()),
    )
}

/// `/api/global` navbar half: logo, links, and the call-to-action button.
#[must_use]
pub fn navbar() -> Populate {
    Populate::new().nested(
        "navbar",
        Populate::new()
            .nested("logoLink", logo_link())
            .deep("link")
            .deep("cta"),
    )
}

/// `/api/global` footer half: logo and grouped link families.
#[must_use]
pub fn footer() -> Populate {
    Populate::new().nested(
        "footer",
        Populate::new()
            .nested("logoLink", logo_link())
            .nested("linkFamily", Populate::new().deep("link")),
    )
}

#[cfg(test)]
#[path = "queries_test.rs"]
mod tests;
