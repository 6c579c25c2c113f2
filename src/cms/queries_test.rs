use super::*;

fn keys(p: &Populate) -> Vec<String> {
    p.query_pairs().into_iter().map(|(k, _)| k).collect()
}

#[test]
fn home_requests_hero_image_fields() {
    let pairs = home().query_pairs();
    assert!(pairs.contains(&("populate[hero][populate][cta]".into(), "true".into())));
    assert!(pairs.contains(&("populate[hero][populate][image][fields][1]".into(), "alternativeText".into())));
    assert!(pairs.contains(&("populate[header]".into(), "true".into())));
    assert!(pairs.contains(&("populate[features][populate][featureCard]".into(), "true".into())));
}

#[test]
fn home_page_has_a_fragment_per_known_block() {
    let keys = keys(&home_page());
    for component in [HERO_SECTION, HEADER_SECTION, FEATURE_SECTION] {
        let prefix = format!("populate[blocks][on][{component}]");
        assert!(keys.iter().any(|k| k.starts_with(&prefix)), "missing fragment for {component}");
    }
}

#[test]
fn navbar_and_footer_target_their_half() {
    assert!(keys(&navbar()).iter().all(|k| k.starts_with("populate[navbar]")));
    assert!(keys(&footer()).iter().all(|k| k.starts_with("populate[footer]")));
    assert!(keys(&footer()).contains(&"populate[footer][populate][linkFamily][populate][link][populate]".to_owned()));
}
