//! CMS types: response envelope, content model, and errors.
//!
//! DESIGN
//! ======
//! The backend evolves independently of this site, so every attribute is
//! optional. Absent keys and explicit JSON `null` both decode to `None` or an
//! empty collection; neither is an error. The only hard requirement is the
//! `__component` discriminator on dynamic-zone blocks.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Field carrying the block variant tag in a dynamic zone.
pub const DISCRIMINATOR: &str = "__component";

pub const HERO_SECTION: &str = "layout.hero-section";
pub const HEADER_SECTION: &str = "layout.header-section";
pub const FEATURE_SECTION: &str = "layout.feature-section";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while talking to the CMS.
#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    /// The base URL and endpoint path did not form a valid URL.
    #[error("invalid CMS url: {0}")]
    InvalidUrl(String),

    /// The HTTP request failed before a response arrived.
    #[error("CMS request failed: {0}")]
    Request(String),

    /// The CMS returned a non-success HTTP status.
    #[error("CMS response error: status {status}")]
    Status { status: u16, body: String },

    /// The CMS response body was not valid JSON.
    #[error("CMS response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl CmsError {
    /// Grepable code for log fields.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidUrl(_) => "E_CMS_URL",
            Self::Request(_) => "E_CMS_REQUEST",
            Self::Status { .. } => "E_CMS_STATUS",
            Self::Parse(_) => "E_CMS_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }
}

/// Why a dynamic-zone block was dropped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockError {
    #[error("block has no __component discriminator")]
    MissingDiscriminator,

    #[error("block {component} failed to decode: {reason}")]
    Malformed { component: String, reason: String },
}

// =============================================================================
// ENVELOPE
// =============================================================================

/// The `{ data, error }` wrapper every CMS endpoint responds with.
#[derive(Debug, Deserialize)]
#[serde(bound = "T: Deserialize<'de>")]
pub struct Envelope<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

/// Error object inside a failed envelope. Shape is best-effort.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<Value>,
}

// =============================================================================
// SHARED PIECES
// =============================================================================

/// A link rendered as a button or anchor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToAction {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_external: bool,
}

impl CallToAction {
    /// Anchor `target` attribute, if the link opens in a new context.
    #[must_use]
    pub fn target(&self) -> Option<&'static str> {
        self.is_external.then_some("_blank")
    }
}

/// A remotely hosted asset. `url` may be relative to the CMS base URL.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaReference {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Brand link shown at the left of the navbar and in the footer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LogoLink {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub image: Option<MediaReference>,
}

/// A named group of footer links.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LinkFamily {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: Vec<CallToAction>,
}

// =============================================================================
// SECTIONS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HeroSection {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub image: Option<MediaReference>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cta: Vec<CallToAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HeaderSection {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeatureCard {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub media: Option<MediaReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSection {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub feature_card: Vec<FeatureCard>,
}

// =============================================================================
// CONTENT BLOCK
// =============================================================================

/// One unit of a dynamic zone, dispatched on [`DISCRIMINATOR`].
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Hero(HeroSection),
    Header(HeaderSection),
    Features(FeatureSection),
    /// Discriminator present but not one this site knows how to render.
    Unknown { component: String },
}

impl ContentBlock {
    /// Classify and decode a raw block.
    ///
    /// # Errors
    ///
    /// Returns [`BlockError::MissingDiscriminator`] when `__component` is
    /// absent, empty, or not a string, and [`BlockError::Malformed`] when a
    /// known variant's attributes have the wrong JSON types.
    pub fn from_value(raw: Value) -> Result<Self, BlockError> {
        let component = raw
            .get(DISCRIMINATOR)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_owned)
            .ok_or(BlockError::MissingDiscriminator)?;

        let decoded = match component.as_str() {
            HERO_SECTION => serde_json::from_value(raw).map(Self::Hero),
            HEADER_SECTION => serde_json::from_value(raw).map(Self::Header),
            FEATURE_SECTION => serde_json::from_value(raw).map(Self::Features),
            _ => return Ok(Self::Unknown { component }),
        };
        decoded.map_err(|e| BlockError::Malformed { component, reason: e.to_string() })
    }

    /// Discriminator string this block was decoded from.
    #[must_use]
    pub fn component(&self) -> &str {
        match self {
            Self::Hero(_) => HERO_SECTION,
            Self::Header(_) => HEADER_SECTION,
            Self::Features(_) => FEATURE_SECTION,
            Self::Unknown { component } => component,
        }
    }
}

// =============================================================================
// PAGES
// =============================================================================

/// `/api/home` single type: fixed hero, header, and features components.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Home {
    #[serde(default)]
    pub hero: Option<HeroSection>,
    #[serde(default)]
    pub header: Option<HeaderSection>,
    #[serde(default)]
    pub features: Option<FeatureSection>,
}

/// `/api/home-page` single type: an ordered dynamic zone of raw blocks.
///
/// Blocks stay as raw JSON so one bad block cannot fail the whole page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomePage {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub blocks: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navbar {
    #[serde(default)]
    pub logo_link: Option<LogoLink>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: Vec<CallToAction>,
    #[serde(default)]
    pub cta: Option<CallToAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    #[serde(default)]
    pub logo_link: Option<LogoLink>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link_family: Vec<LinkFamily>,
}

/// `/api/global` single type. Navbar and footer are requested separately,
/// so either half may be missing from a given response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Global {
    #[serde(default)]
    pub navbar: Option<Navbar>,
    #[serde(default)]
    pub footer: Option<Footer>,
}

/// Treat an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
