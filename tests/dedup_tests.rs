use screen_fusion::element::element_model::Element;
use screen_fusion::engine::config::FusionConfig;
use screen_fusion::fuse::dedup::{is_chrome_candidate, resolve_duplicates};
use screen_fusion::fuse::synthesizer::{from_structural, from_text};

mod common;
use crate::common::utils::{structural, text_det, window, with_title};

fn config() -> FusionConfig {
    FusionConfig::default()
}

fn button_at(x: f64, y: f64, w: f64, h: f64) -> Element {
    from_structural(&structural("Button", x, y, w, h), &window())
}

// =========================================================================
// General proximity rule: ≤5px distance, ≤20% size difference
// =========================================================================

#[test]
fn close_equal_sized_elements_collapse_to_one() {
    let elements = vec![
        button_at(100.0, 100.0, 60.0, 20.0),
        button_at(102.0, 101.0, 60.0, 20.0),
    ];

    let kept = resolve_duplicates(elements, &config());
    assert_eq!(kept.len(), 1, "2.2px apart, same size: exactly one survives");
    assert_eq!(kept[0].position.x, 100.0, "First seen wins");
}

#[test]
fn distant_elements_both_survive() {
    let elements = vec![
        button_at(100.0, 100.0, 60.0, 20.0),
        button_at(110.0, 100.0, 60.0, 20.0),
    ];

    let kept = resolve_duplicates(elements, &config());
    assert_eq!(kept.len(), 2, "10px apart is beyond the 5px rule");
}

#[test]
fn close_but_differently_sized_elements_both_survive() {
    let elements = vec![
        button_at(100.0, 100.0, 60.0, 20.0),
        button_at(102.0, 101.0, 200.0, 80.0),
    ];

    let kept = resolve_duplicates(elements, &config());
    assert_eq!(
        kept.len(),
        2,
        "Close positions but a 3x size difference is not a duplicate"
    );
}

#[test]
fn zero_sized_elements_never_match() {
    let elements = vec![
        button_at(100.0, 100.0, 0.0, 0.0),
        button_at(100.0, 100.0, 0.0, 0.0),
    ];

    let kept = resolve_duplicates(elements, &config());
    assert_eq!(
        kept.len(),
        2,
        "Degenerate sizes are an automatic non-match, not a division by zero"
    );
}

// =========================================================================
// System-chrome rule: both small controls, ≤3px, no size test
// =========================================================================

fn close_button_at(x: f64, y: f64) -> Element {
    from_structural(
        &with_title(structural("Button", x, y, 16.0, 16.0), "Close"),
        &window(),
    )
}

#[test]
fn chrome_candidates_collapse_at_three_px() {
    let elements = vec![close_button_at(10.0, 10.0), close_button_at(12.0, 11.0)];

    let kept = resolve_duplicates(elements, &config());
    assert_eq!(
        kept.len(),
        1,
        "16x16 close buttons 2.2px apart collapse through the chrome path"
    );
}

#[test]
fn chrome_rule_ignores_size_similarity() {
    // Different crops of the same traffic-light button: 16x16 vs 10x10 fails
    // the 20% size test, but the chrome rule has no size requirement.
    let a = from_structural(
        &with_title(structural("Button", 10.0, 10.0, 16.0, 16.0), "Close"),
        &window(),
    );
    let b = from_structural(
        &with_title(structural("Button", 12.0, 11.0, 10.0, 10.0), "Close"),
        &window(),
    );

    let kept = resolve_duplicates(vec![a, b], &config());
    assert_eq!(kept.len(), 1, "Chrome duplicates collapse despite size mismatch");
}

#[test]
fn chrome_rule_is_tighter_than_general_rule() {
    let elements = vec![close_button_at(10.0, 10.0), close_button_at(14.0, 13.0)];

    let kept = resolve_duplicates(elements, &config());
    assert_eq!(
        kept.len(),
        2,
        "5px apart: inside the general distance but outside the 3px chrome path"
    );
}

#[test]
fn big_buttons_are_not_chrome_candidates() {
    let cfg = config();
    let big = from_structural(
        &with_title(structural("Button", 10.0, 10.0, 60.0, 30.0), "Close"),
        &window(),
    );
    assert!(
        !is_chrome_candidate(&big, &cfg),
        "1800px² is over the 400px² chrome ceiling"
    );

    let small = close_button_at(10.0, 10.0);
    assert!(is_chrome_candidate(&small, &cfg));
}

#[test]
fn labeled_small_buttons_without_chrome_hints_use_general_rule() {
    // Small and clickable, but the metadata says nothing about window
    // controls, so the chrome override must not apply.
    let a = from_structural(
        &with_title(structural("Button", 10.0, 10.0, 16.0, 16.0), "Add"),
        &window(),
    );
    let b = from_structural(
        &with_title(structural("Button", 12.0, 11.0, 16.0, 16.0), "Add"),
        &window(),
    );

    let cfg = config();
    assert!(!is_chrome_candidate(&a, &cfg));

    let kept = resolve_duplicates(vec![a, b], &cfg);
    assert_eq!(kept.len(), 1, "Still a duplicate, via the general rule");
}

#[test]
fn metadata_free_small_clickables_qualify_as_chrome() {
    // Shape-only detections of a traffic light carry no accessibility
    // metadata; smallness plus clickability is enough for them.
    use screen_fusion::detect::detection_model::InteractionCategory;
    use screen_fusion::fuse::synthesizer::from_shape;

    let a = from_shape(
        &crate::common::utils::shape(10.0, 10.0, 14.0, 14.0, InteractionCategory::CloseButton, 0.9),
        None,
        &window(),
    );

    assert!(is_chrome_candidate(&a, &config()));
}

// =========================================================================
// Greedy accumulation properties
// =========================================================================

#[test]
fn dedup_is_idempotent() {
    let elements = vec![
        button_at(100.0, 100.0, 60.0, 20.0),
        button_at(102.0, 101.0, 60.0, 20.0),
        button_at(300.0, 100.0, 60.0, 20.0),
        from_text(&text_det("hello", 500.0, 500.0, 0.9), &window()),
    ];

    let once = resolve_duplicates(elements, &config());
    let first_ids: Vec<String> = once.iter().map(|e| e.id.clone()).collect();

    let twice = resolve_duplicates(once, &config());
    let second_ids: Vec<String> = twice.iter().map(|e| e.id.clone()).collect();

    assert_eq!(
        first_ids, second_ids,
        "A second pass over dedup output changes nothing"
    );
}

#[test]
fn first_seen_wins_in_chains() {
    // A chain where B duplicates A, and C duplicates B but not A. B is
    // removed against A, so C is compared against A only and survives.
    let elements = vec![
        button_at(100.0, 100.0, 60.0, 20.0),
        button_at(104.0, 100.0, 60.0, 20.0),
        button_at(108.0, 100.0, 60.0, 20.0),
    ];

    let kept = resolve_duplicates(elements, &config());
    assert_eq!(kept.len(), 2, "A absorbs B; C is 8px from A and survives");
    assert_eq!(kept[0].position.x, 100.0);
    assert_eq!(kept[1].position.x, 108.0);
}
