//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page is rendered on request from live CMS data. The landing page
//! and the contact form share one handler family in `pages`; `/healthz`
//! answers without touching the CMS.

pub mod pages;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::landing))
        .route("/hero", get(pages::hero))
        .route("/contact", get(pages::contact_redirect).post(pages::submit_contact))
        .route("/healthz", get(healthz))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
