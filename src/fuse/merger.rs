use crate::detect::detection_model::{
    InteractionCategory, ShapeDetection, StructuralDetection, TextDetection,
};
use crate::element::element_model::{Element, Interaction};
use crate::engine::config::FusionConfig;
use crate::fuse::synthesizer::{from_pair, from_shape, from_structural, from_text};
use crate::geometry::coords::{Rect, overlap_ratio};
use crate::index::spatial_index::PositionIndex;

// ============================================================================
// Cross-source merger — three fixed-order passes, deterministic
// ============================================================================

/// Merge the three detection sets into one element list.
///
/// Pass order is part of the contract: text detections pair first (consuming
/// their structural counterparts), leftover structural detections are added
/// when high-value, and shape detections either enhance an existing element
/// in place or append a new one. Downstream dedup depends on this order.
pub fn merge_sources(
    structural: &[StructuralDetection],
    texts: &[TextDetection],
    shapes: &[ShapeDetection],
    window: &Rect,
    config: &FusionConfig,
) -> Vec<Element> {
    let index = PositionIndex::build(structural, config.grid_threshold, config.grid_cell_size);
    let mut consumed = vec![false; structural.len()];
    let mut elements = Vec::with_capacity(structural.len() + texts.len());

    // ---- Pass 1: text × structural pairing ----
    for text in texts {
        let candidate = index
            .nearest(text.position, config.proximity_radius)
            .into_iter()
            .filter(|i| !consumed[*i])
            .min_by(|a, b| {
                index
                    .distance_to(*a, text.position)
                    .total_cmp(&index.distance_to(*b, text.position))
            });

        match candidate {
            Some(i) => {
                consumed[i] = true;
                elements.push(from_pair(text, &structural[i], window));
            }
            None => elements.push(from_text(text, window)),
        }
    }

    // ---- Pass 2: high-value leftover structural ----
    for (i, detection) in structural.iter().enumerate() {
        if consumed[i] {
            continue;
        }
        if is_high_value(detection) {
            elements.push(from_structural(detection, window));
        }
        // Decorative containers with nothing to say are dropped here to
        // bound output size.
    }

    // ---- Pass 3: shape integration ----
    for shape in shapes {
        integrate_shape(shape, texts, &mut elements, window, config);
    }

    elements
}

/// A leftover structural detection earns an element only when it carries a
/// usable label or an interaction-significant role.
fn is_high_value(detection: &StructuralDetection) -> bool {
    let has_label = |s: &Option<String>| s.as_deref().map(str::trim).is_some_and(|v| !v.is_empty());

    has_label(&detection.title)
        || has_label(&detection.description)
        || crate::fuse::synthesizer::role_is_clickable(&detection.role)
}

/// Enhance the first sufficiently-overlapped element in place, or append a
/// brand-new element for the shape. Only the first overlap is enhanced so a
/// single shape cannot inflate several elements.
fn integrate_shape(
    shape: &ShapeDetection,
    texts: &[TextDetection],
    elements: &mut Vec<Element>,
    window: &Rect,
    config: &FusionConfig,
) {
    for element in elements.iter_mut() {
        let element_bounds = Rect {
            origin: element.position,
            size: element.size,
        };

        if overlap_ratio(&shape.bounds, &element_bounds) > config.shape_overlap_min {
            enhance_with_shape(element, shape);
            return;
        }
    }

    let label = texts
        .iter()
        .find(|t| shape.bounds.contains(t.position))
        .map(|t| t.text.as_str());

    elements.push(from_shape(shape, label, window));
}

/// In-place enhancement: confidence is the max of the two, the shape's
/// interaction category contributes clickability and interaction hints.
fn enhance_with_shape(element: &mut Element, shape: &ShapeDetection) {
    element.confidence = element.confidence.max(shape.confidence);

    if shape.interaction.is_clickable() && !element.clickable {
        element.clickable = true;
    }

    for interaction in shape_interactions(shape.interaction) {
        if !element.interactions.contains(&interaction) {
            element.interactions.push(interaction);
            element
                .context
                .available_actions
                .push(interaction.as_str().to_string());
        }
    }
}

fn shape_interactions(category: InteractionCategory) -> Vec<Interaction> {
    match category {
        InteractionCategory::Button
        | InteractionCategory::IconButton
        | InteractionCategory::CloseButton => vec![Interaction::Click],
        InteractionCategory::TextInput => vec![Interaction::Click, Interaction::Type],
        InteractionCategory::Unknown => vec![],
    }
}
