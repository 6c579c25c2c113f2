//! Section components: hero, header, and feature grid.

use super::{AltFallback, RenderContext, escape, image, link, text};
use crate::cms::types::{FeatureCard, FeatureSection, HeaderSection, HeroSection};

/// Two-column hero used inside the block zone: copy and CTAs left, image right.
#[must_use]
pub fn hero(ctx: &RenderContext, section: &HeroSection) -> String {
    let ctas = hero_ctas(section, "button", "Learn More");
    let picture = image(ctx, section.image.as_ref(), AltFallback::Text("Hero image"), "hero-image");
    let picture = if picture.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="hero-visual">{picture}</div>"#)
    };

    format!(
        r#"<section class="hero" data-block="hero">
  <div class="hero-content">
    <h1>{}</h1>
    <p class="hero-subtitle">{}</p>
    {ctas}
  </div>
  {picture}
</section>"#,
        text(section.title.as_ref()),
        text(section.subtitle.as_ref()),
    )
}

/// Full-bleed hero from `/api/home`: the image sits behind centered copy.
#[must_use]
pub fn hero_banner(ctx: &RenderContext, section: &HeroSection) -> String {
    let background = image(ctx, section.image.as_ref(), AltFallback::Text(""), "hero-background");
    let background = if background.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="hero-backdrop">{background}</div>"#)
    };
    let ctas = hero_ctas(section, "button button-lg", "");

    format!(
        r#"<section class="hero-banner" data-block="hero">
  {background}
  <div class="hero-banner-content">
    <h1>{}</h1>
    <p class="hero-subtitle">{}</p>
    {ctas}
  </div>
</section>"#,
        text(section.title.as_ref()),
        text(section.subtitle.as_ref()),
    )
}

fn hero_ctas(section: &HeroSection, class: &str, fallback_label: &str) -> String {
    if section.cta.is_empty() {
        return String::new();
    }
    let links: String = section
        .cta
        .iter()
        .map(|cta| link(cta, class, fallback_label))
        .collect();
    format!(r#"<div class="hero-ctas">{links}</div>"#)
}

/// Gradient header card. Each line is omitted when empty.
#[must_use]
pub fn header(section: &HeaderSection) -> String {
    let mut inner = String::new();
    if let Some(subtitle) = non_empty(section.subtitle.as_deref()) {
        inner.push_str(&format!(r#"<p class="header-subtitle">{}</p>"#, escape(subtitle)));
    }
    if let Some(title) = non_empty(section.title.as_deref()) {
        inner.push_str(&format!("<h2>{}</h2>", escape(title)));
    }
    if let Some(description) = non_empty(section.description.as_deref()) {
        inner.push_str(&format!(r#"<div class="header-description"><p>{}</p></div>"#, escape(description)));
    }
    format!(r#"<section class="header-section" data-block="header"><div class="header-card">{inner}</div></section>"#)
}

/// Grid of feature cards, in backend order.
#[must_use]
pub fn features(ctx: &RenderContext, section: &FeatureSection) -> String {
    let cards: String = section
        .feature_card
        .iter()
        .map(|card| feature_card(ctx, card))
        .collect();
    format!(r#"<section class="features" id="features" data-block="features">{cards}</section>"#)
}

fn feature_card(ctx: &RenderContext, card: &FeatureCard) -> String {
    let title = card.title.as_deref().unwrap_or_default();
    let icon = image(ctx, card.media.as_ref(), AltFallback::Text(title), "feature-icon");
    format!(
        r#"<div class="feature-card"><div class="feature-media">{icon}</div><div><h3>{}</h3><p>{}</p></div></div>"#,
        escape(title),
        text(card.description.as_ref()),
    )
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "sections_test.rs"]
mod tests;
