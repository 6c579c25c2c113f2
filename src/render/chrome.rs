//! Site chrome: navbar and footer from the `/api/global` single type.

use super::{AltFallback, RenderContext, escape, image, link};
use crate::cms::types::{CallToAction, Footer, LinkFamily, LogoLink, Navbar};

const FOOTER_TAGLINE: &str = "Your beautiful landing page for a successful launch";

fn brand(ctx: &RenderContext, logo: Option<&LogoLink>, class: &str) -> String {
    let Some(logo) = logo else {
        return format!(r#"<a href="/" class="{class}">{}</a>"#, escape(&ctx.site_name));
    };
    let href = logo.href.as_deref().filter(|h| !h.is_empty()).unwrap_or("/");
    let label = logo.label.as_deref().unwrap_or_default();
    let icon = image(ctx, logo.image.as_ref(), AltFallback::NameThen(label), "brand-logo");
    format!(
        r#"<a href="{}" class="{class}"><span>{icon}</span><span class="brand-label">{}</span></a>"#,
        escape(href),
        escape(label)
    )
}

fn link_list(links: &[CallToAction], class: &str) -> String {
    links
        .iter()
        .map(|l| format!("<li>{}</li>", link(l, class, "")))
        .collect()
}

/// Fixed top navigation with a collapsible mobile menu.
#[must_use]
pub fn navbar(ctx: &RenderContext, nav: &Navbar) -> String {
    let desktop = link_list(&nav.link, "nav-link");
    let mobile = link_list(&nav.link, "mobile-link");
    let cta = nav
        .cta
        .as_ref()
        .map(|cta| link(cta, "button", ""))
        .unwrap_or_default();
    let mobile_cta = match &nav.cta {
        Some(cta) if nav.link.is_empty() => link(cta, "mobile-cta", ""),
        Some(cta) => format!(r#"<hr class="mobile-divider">{}"#, link(cta, "mobile-cta", "")),
        None => String::new(),
    };

    format!(
        r#"<nav class="navbar">
  <details class="mobile-menu">
    <summary aria-label="Toggle menu">Menu</summary>
    <div class="mobile-panel" role="dialog" aria-modal="true"><ul>{mobile}</ul>{mobile_cta}</div>
  </details>
  <div class="nav-main">
    {}
    <ul class="nav-links">{desktop}</ul>
  </div>
  <div class="nav-cta">{cta}</div>
</nav>"#,
        brand(ctx, nav.logo_link.as_ref(), "brand"),
    )
}

fn link_family(family: &LinkFamily) -> String {
    format!(
        r#"<div class="link-family"><h4>{}</h4><ul>{}</ul></div>"#,
        escape(family.family.as_deref().unwrap_or_default()),
        link_list(&family.link, "footer-link"),
    )
}

/// Footer with brand column, grouped links, and a copyright bar.
#[must_use]
pub fn footer(ctx: &RenderContext, footer: &Footer) -> String {
    let families: String = footer.link_family.iter().map(link_family).collect();
    format!(
        r#"<footer class="site-footer">
  <div class="footer-grid">
    <div class="footer-brand">{}<p>{FOOTER_TAGLINE}</p></div>
    {families}
  </div>
  <div class="footer-bar"><p>&copy; {} {}</p><p>Made in Europe</p></div>
</footer>"#,
        brand(ctx, footer.logo_link.as_ref(), "brand"),
        ctx.year,
        escape(&ctx.site_name),
    )
}

#[cfg(test)]
#[path = "chrome_test.rs"]
mod tests;
