use super::*;
use crate::cms::types::{CallToAction, MediaReference};
use crate::render::test_context;

fn sample_hero() -> HeroSection {
    HeroSection {
        id: Some(1),
        title: Some("Launch <fast>".into()),
        subtitle: Some("Ship today".into()),
        image: Some(MediaReference { url: Some("/uploads/hero.png".into()), ..MediaReference::default() }),
        cta: vec![
            CallToAction { id: Some(1), href: Some("/start".into()), label: Some("Start".into()), is_external: false },
            CallToAction { id: Some(2), href: Some("https://docs.example".into()), label: None, is_external: true },
        ],
    }
}

#[test]
fn hero_renders_escaped_copy_ctas_and_image() {
    let html = hero(&test_context(), &sample_hero());
    assert!(html.contains("<h1>Launch &lt;fast&gt;</h1>"));
    assert!(html.contains(">Start</a>"));
    assert!(html.contains(">Learn More</a>"));
    assert!(html.contains(r#"target="_blank""#));
    assert!(html.contains(r#"src="http://localhost:1337/uploads/hero.png""#));
    assert!(html.contains(r#"alt="Hero image""#));
}

#[test]
fn hero_image_alt_prefers_fixed_fallback_over_file_name() {
    let mut section = sample_hero();
    section.image = Some(MediaReference {
        url: Some("/uploads/hero.png".into()),
        alternative_text: Some(String::new()),
        name: Some("hero.png".into()),
    });
    let html = hero(&test_context(), &section);
    assert!(html.contains(r#"alt="Hero image""#));
}

#[test]
fn feature_card_alt_uses_card_title_over_file_name() {
    let card = FeatureCard {
        id: Some(1),
        title: Some("Fast".into()),
        description: None,
        media: Some(MediaReference { url: Some("/f.png".into()), alternative_text: None, name: Some("f.png".into()) }),
    };
    let html = features(&test_context(), &FeatureSection { id: Some(1), feature_card: vec![card] });
    assert!(html.contains(r#"alt="Fast""#));
    assert!(!html.contains(r#"alt="f.png""#));
}

#[test]
fn hero_with_nothing_renders_empty_shell() {
    let html = hero(&test_context(), &HeroSection::default());
    assert!(html.contains("<h1></h1>"));
    assert!(!html.contains("hero-ctas"));
    assert!(!html.contains("<img"));
}

#[test]
fn hero_banner_puts_image_behind_copy() {
    let html = hero_banner(&test_context(), &sample_hero());
    let backdrop = html.find("hero-backdrop").unwrap();
    let heading = html.find("<h1>").unwrap();
    assert!(backdrop < heading);
}

#[test]
fn header_omits_empty_lines() {
    let html = header(&HeaderSection { title: Some("Why us".into()), subtitle: Some(" ".into()), ..HeaderSection::default() });
    assert!(html.contains("<h2>Why us</h2>"));
    assert!(!html.contains("header-subtitle"));
    assert!(!html.contains("header-description"));
}

#[test]
fn features_render_cards_in_order_with_title_as_alt() {
    let section = FeatureSection {
        id: Some(3),
        feature_card: vec![
            FeatureCard {
                id: Some(1),
                title: Some("Fast".into()),
                description: Some("Very".into()),
                media: Some(MediaReference { url: Some("/uploads/f.png".into()), ..MediaReference::default() }),
            },
            FeatureCard { id: Some(2), title: Some("Safe".into()), ..FeatureCard::default() },
        ],
    };
    let html = features(&test_context(), &section);
    assert_eq!(html.matches("feature-card").count(), 2);
    assert!(html.find("Fast").unwrap() < html.find("Safe").unwrap());
    assert!(html.contains(r#"alt="Fast""#));
}

#[test]
fn features_without_cards_is_empty_grid() {
    let html = features(&test_context(), &FeatureSection::default());
    assert!(!html.contains("feature-card"));
}
