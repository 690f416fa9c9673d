use crate::element::element_model::{Element, ScreenRegion};
use crate::engine::pipeline::FusionOutcome;

// ============================================================================
// Console reporter — formatted terminal output for one fusion cycle
// ============================================================================

/// Format a fusion outcome for terminal output.
///
/// Produces output like:
/// ```text
/// === Fusion Cycle ===
///
/// Detections: 12 structural, 8 text, 3 shape
/// Funnel: 15 merged -> 12 deduped -> 10 survivors
///
/// Elements by region:
///   toolbar       3
///   main_content  6
///   status_bar    1
///
/// Clickable targets:
///   'Save' button @ (12, 48)  saves the current document
///
/// === Metrics: 10 tokens, ratio 3.21, confidence 0.91 ===
/// ```
pub fn format_console_report(outcome: &FusionOutcome) -> String {
    let mut out = String::new();

    out.push_str("=== Fusion Cycle ===\n\n");

    out.push_str(&format!(
        "Detections: {} structural, {} text, {} shape\n",
        outcome.counts.structural_in, outcome.counts.text_in, outcome.counts.shapes_in
    ));
    out.push_str(&format!(
        "Funnel: {} merged -> {} deduped -> {} survivors\n\n",
        outcome.counts.merged, outcome.counts.deduped, outcome.counts.survivors
    ));

    out.push_str("Elements by region:\n");
    for region in [
        ScreenRegion::Toolbar,
        ScreenRegion::Sidebar,
        ScreenRegion::MainContent,
        ScreenRegion::StatusBar,
    ] {
        let count = outcome
            .elements
            .iter()
            .filter(|e| e.context.region == region)
            .count();
        if count > 0 {
            out.push_str(&format!("  {:<14}{}\n", region_name(region), count));
        }
    }

    let clickable: Vec<&Element> = outcome.elements.iter().filter(|e| e.clickable).collect();
    if !clickable.is_empty() {
        out.push_str("\nClickable targets:\n");
        for element in &clickable {
            out.push_str(&format!(
                "  {} @ ({}, {})",
                element.semantic_meaning, element.position.x as i64, element.position.y as i64
            ));
            if let Some(hint) = &element.action_hint {
                out.push_str(&format!("  {}", hint));
            }
            out.push('\n');
        }
    }

    let metrics = &outcome.compressed.metrics;
    out.push_str(&format!(
        "\n=== Metrics: {} tokens, ratio {:.2}, confidence {:.2} ===\n",
        metrics.token_count, metrics.compression_ratio, metrics.confidence
    ));

    out
}

fn region_name(region: ScreenRegion) -> &'static str {
    match region {
        ScreenRegion::Toolbar => "toolbar",
        ScreenRegion::Sidebar => "sidebar",
        ScreenRegion::StatusBar => "status_bar",
        ScreenRegion::MainContent => "main_content",
    }
}
