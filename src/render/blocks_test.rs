use super::*;
use crate::render::test_context;
use serde_json::json;

#[test]
fn renders_known_blocks_in_input_order() {
    let blocks = vec![
        json!({ "__component": "layout.header-section", "id": 1, "title": "First" }),
        json!({ "__component": "layout.hero-section", "id": 2, "title": "Second" }),
        json!({ "__component": "layout.feature-section", "id": 3, "featureCard": [{ "id": 1, "title": "Third" }] }),
    ];
    let rendered = render_blocks(&test_context(), &blocks);
    assert_eq!(rendered.fragments.len(), 3);
    assert!(rendered.skipped.is_empty());

    let html = rendered.html();
    let first = html.find("First").unwrap();
    let second = html.find("Second").unwrap();
    let third = html.find("Third").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn duplicate_ids_are_not_deduplicated() {
    let block = json!({ "__component": "layout.header-section", "id": 1, "title": "Again" });
    let rendered = render_blocks(&test_context(), &[block.clone(), block]);
    assert_eq!(rendered.fragments.len(), 2);
}

#[test]
fn missing_discriminator_is_skipped_and_recorded() {
    let blocks = vec![
        json!({ "id": 10, "title": "orphan" }),
        json!({ "__component": "layout.header-section", "id": 11, "title": "Kept" }),
    ];
    let rendered = render_blocks(&test_context(), &blocks);
    assert_eq!(rendered.fragments.len(), 1);
    assert!(!rendered.html().contains("orphan"));
    assert_eq!(
        rendered.skipped,
        vec![SkippedBlock { index: 0, id: Some(10), reason: SkipReason::MissingDiscriminator }]
    );
}

#[test]
fn unknown_discriminator_is_skipped_and_recorded() {
    let blocks = vec![
        json!({ "__component": "layout.hero-section", "id": 1 }),
        json!({ "__component": "layout.pricing", "id": 2 }),
        json!({ "__component": "layout.header-section", "id": 3 }),
    ];
    let rendered = render_blocks(&test_context(), &blocks);
    assert_eq!(rendered.fragments.len(), 2);
    assert_eq!(rendered.skipped.len(), 1);
    assert_eq!(rendered.skipped[0].index, 1);
    assert_eq!(rendered.skipped[0].reason, SkipReason::Unknown("layout.pricing".into()));
}

#[test]
fn malformed_block_is_skipped_without_aborting() {
    let blocks = vec![
        json!({ "__component": "layout.hero-section", "id": 1, "cta": "not-a-list" }),
        json!({ "__component": "layout.header-section", "id": 2, "title": "Survivor" }),
    ];
    let rendered = render_blocks(&test_context(), &blocks);
    assert_eq!(rendered.fragments.len(), 1);
    assert!(rendered.html().contains("Survivor"));
    assert!(matches!(
        rendered.skipped[0].reason,
        SkipReason::Malformed { ref component, .. } if component == "layout.hero-section"
    ));
}

#[test]
fn empty_zone_renders_nothing() {
    let rendered = render_blocks(&test_context(), &[]);
    assert!(rendered.fragments.is_empty());
    assert!(rendered.html().is_empty());
}

#[test]
fn unknown_arm_has_no_renderer() {
    let block = ContentBlock::Unknown { component: "layout.faq".into() };
    assert!(render_block(&test_context(), &block).is_none());
}
