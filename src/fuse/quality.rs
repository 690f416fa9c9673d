use crate::element::element_model::{Element, SemanticType};
use crate::engine::config::FusionConfig;

// ============================================================================
// Quality filter — clickable elements must carry a usable signal
// ============================================================================

/// The synthesizer's generic fallback hint. It marks "we know nothing beyond
/// clickability" and therefore carries no signal for the filter.
const GENERIC_HINT: &str = "clickable element";

/// Display texts that identify tiny window controls drawn as bare glyphs.
const CONTROL_GLYPHS: &[&str] = &["×", "✕", "✖", "x", "X", "−", "-", "+"];

const CHROME_KEYWORDS: &[&str] = &["close", "minimize", "zoom", "window", "control"];

pub fn filter_low_signal(elements: Vec<Element>, config: &FusionConfig) -> Vec<Element> {
    elements
        .into_iter()
        .filter(|e| passes(e, config))
        .collect()
}

fn passes(element: &Element, config: &FusionConfig) -> bool {
    // Non-interactive elements are informational; they always pass.
    if !element.clickable && element.semantic_type != SemanticType::Button {
        return true;
    }

    // Tiny clickables fail the generic text test by construction, so they
    // get the narrower window-control test instead.
    if element.area() < config.small_area {
        return special_ui_context(element);
    }

    has_display_text(element) || has_structural_label(element) || has_real_hint(element)
}

fn has_display_text(element: &Element) -> bool {
    element
        .text
        .as_deref()
        .map(str::trim)
        .is_some_and(|t| !t.is_empty())
}

fn has_structural_label(element: &Element) -> bool {
    let Some(meta) = &element.structural else {
        return false;
    };

    [&meta.title, &meta.description]
        .iter()
        .any(|f| f.as_deref().map(str::trim).is_some_and(|v| !v.is_empty()))
}

fn has_real_hint(element: &Element) -> bool {
    element
        .action_hint
        .as_deref()
        .is_some_and(|h| !h.is_empty() && h != GENERIC_HINT)
}

/// Preserves tiny but meaningful window controls: either the accessibility
/// metadata says window-control, or the element shows a known control glyph.
fn special_ui_context(element: &Element) -> bool {
    if element.structural_mentions(CHROME_KEYWORDS) {
        return true;
    }

    element
        .text
        .as_deref()
        .map(str::trim)
        .is_some_and(|t| CONTROL_GLYPHS.contains(&t))
}
