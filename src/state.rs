//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the CMS backend and the per-site settings renderers need. Nothing
//! is cached between requests; every render re-fetches from the CMS.

use std::sync::Arc;

use crate::cms::CmsBackend;
use crate::config::SiteConfig;
use crate::render::RenderContext;

/// Clone is required by Axum; inner fields are Arc-wrapped or cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub cms: Arc<dyn CmsBackend>,
    pub media_base: String,
    pub site_name: String,
}

impl AppState {
    #[must_use]
    pub fn new(cms: Arc<dyn CmsBackend>, config: &SiteConfig) -> Self {
        Self { cms, media_base: config.cms_base_url.clone(), site_name: config.site_name.clone() }
    }

    /// Render inputs for the current request.
    #[must_use]
    pub fn render_context(&self) -> RenderContext {
        RenderContext {
            media_base: self.media_base.clone(),
            site_name: self.site_name.clone(),
            year: time::OffsetDateTime::now_utc().year(),
        }
    }
}
