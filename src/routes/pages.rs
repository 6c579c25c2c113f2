//! Page handlers.

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, Redirect};

use crate::cms::{self, types::HomePage};
use crate::render::{self, RenderContext, blocks, chrome, contact, sections};
use crate::services::contact::{self as contact_svc, ContactForm, ContactState};
use crate::state::AppState;

type Page = (StatusCode, Html<String>);

/// Status for a page whose main content failed to load. The body still
/// renders with chrome and a generic notice.
const LOAD_FAILED_STATUS: StatusCode = StatusCode::BAD_GATEWAY;

/// `GET /`: navbar, dynamic block zone, contact form, footer.
pub async fn landing(State(state): State<AppState>) -> Page {
    render_landing(&state, &ContactForm::default(), &ContactState::Idle).await
}

/// `POST /contact`: submit the form and re-render the landing page with
/// the outcome shown in the contact section.
///
/// Always `200`: the outcome lives in the contact section, and a failed
/// block-zone load must not read as a failed submission.
pub async fn submit_contact(State(state): State<AppState>, Form(form): Form<ContactForm>) -> Page {
    let outcome = contact_svc::submit(state.cms.as_ref(), &form).await;
    let (_, page) = render_landing(&state, &form, &outcome).await;
    (StatusCode::OK, page)
}

/// `GET /contact`: the form lives on the landing page.
pub async fn contact_redirect() -> Redirect {
    Redirect::to("/#contact")
}

/// `GET /hero`: classic hero page from `/api/home`.
pub async fn hero(State(state): State<AppState>) -> Page {
    let backend = state.cms.as_ref();
    let (home, navbar, footer) = tokio::join!(cms::load_home(backend), cms::load_navbar(backend), cms::load_footer(backend));
    let ctx = state.render_context();

    let (status, main) = match home {
        Some(home) => {
            let mut main = String::new();
            if let Some(hero) = &home.hero {
                main.push_str(&sections::hero_banner(&ctx, hero));
            }
            if let Some(header) = &home.header {
                main.push_str(&sections::header(header));
            }
            if let Some(features) = &home.features {
                main.push_str(&sections::features(&ctx, features));
            }
            (StatusCode::OK, main)
        }
        None => (LOAD_FAILED_STATUS, render::load_failed()),
    };

    let body = frame(&ctx, navbar.as_ref(), main, footer.as_ref());
    (status, Html(render::document(&ctx, None, None, &body)))
}

async fn render_landing(state: &AppState, form: &ContactForm, contact_state: &ContactState) -> Page {
    let backend = state.cms.as_ref();
    let (page, navbar, footer) =
        tokio::join!(cms::load_home_page(backend), cms::load_navbar(backend), cms::load_footer(backend));
    let ctx = state.render_context();

    let (status, main, title, description) = match &page {
        Some(page) => (
            StatusCode::OK,
            landing_main(&ctx, page),
            page.title.as_deref(),
            page.description.as_deref(),
        ),
        None => (LOAD_FAILED_STATUS, render::load_failed(), None, None),
    };
    let main = format!("{main}{}", contact::contact_section(form, contact_state));

    let body = frame(&ctx, navbar.as_ref(), main, footer.as_ref());
    (status, Html(render::document(&ctx, title, description, &body)))
}

fn landing_main(ctx: &RenderContext, page: &HomePage) -> String {
    let rendered = blocks::render_blocks(ctx, &page.blocks);
    if !rendered.skipped.is_empty() {
        tracing::warn!(
            rendered = rendered.fragments.len(),
            skipped = rendered.skipped.len(),
            "landing page dropped blocks"
        );
    }
    rendered.html()
}

fn frame(
    ctx: &RenderContext,
    navbar: Option<&cms::types::Navbar>,
    main: String,
    footer: Option<&cms::types::Footer>,
) -> Vec<String> {
    vec![
        navbar.map(|n| chrome::navbar(ctx, n)).unwrap_or_default(),
        format!("<main>{main}</main>"),
        footer.map(|f| chrome::footer(ctx, f)).unwrap_or_default(),
    ]
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
