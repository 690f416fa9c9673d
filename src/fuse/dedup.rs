use crate::element::element_model::{Element, SemanticType};
use crate::engine::config::FusionConfig;
use crate::geometry::coords::{distance, sizes_similar};

// ============================================================================
// Duplicate resolver — greedy, order-dependent accumulation
// ============================================================================

/// Remove elements that represent the same on-screen control.
///
/// Precondition: `elements` must arrive in merger-output order. Each element
/// is compared only against previously-accepted ones; the first seen wins
/// and later duplicates are discarded whole (enhancement already happened in
/// the merger).
pub fn resolve_duplicates(elements: Vec<Element>, config: &FusionConfig) -> Vec<Element> {
    let mut accepted: Vec<Element> = Vec::with_capacity(elements.len());

    'next: for element in elements {
        for kept in &accepted {
            if is_duplicate(kept, &element, config) {
                continue 'next;
            }
        }
        accepted.push(element);
    }

    accepted
}

fn is_duplicate(a: &Element, b: &Element, config: &FusionConfig) -> bool {
    let d = distance(a.position, b.position);

    // Small system controls are frequently detected at slightly different
    // cropped sizes by different sources, so the size test is useless for
    // them; a tighter proximity test replaces the general rule entirely.
    if is_chrome_candidate(a, config) && is_chrome_candidate(b, config) {
        return d <= config.chrome_distance_max;
    }

    d <= config.dup_distance_max && sizes_similar(a.size, b.size, config.dup_size_tolerance)
}

/// Small system-control candidate: tiny, interactive, and where structural
/// metadata exists it must actually say window-control.
pub fn is_chrome_candidate(element: &Element, config: &FusionConfig) -> bool {
    if element.size.is_degenerate() || element.area() > config.chrome_area_max {
        return false;
    }

    if !element.clickable && element.semantic_type != SemanticType::Button {
        return false;
    }

    match &element.structural {
        Some(_) => element.structural_mentions(&["close", "minimize", "zoom"]),
        None => true,
    }
}
