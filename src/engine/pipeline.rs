use serde::{Deserialize, Serialize};

use crate::compress::compress_model::CompressedScreen;
use crate::compress::compressor::compress;
use crate::detect::detection_model::{ShapeDetection, StructuralDetection, TextDetection};
use crate::detect::sanitize::{sanitize_shapes, sanitize_structural, sanitize_text};
use crate::element::element_model::Element;
use crate::engine::config::FusionConfig;
use crate::engine::error::FusionError;
use crate::fuse::dedup::resolve_duplicates;
use crate::fuse::merger::merge_sources;
use crate::fuse::quality::filter_low_signal;
use crate::geometry::coords::Rect;

// ============================================================================
// Fusion pipeline — one synchronous cycle over materialized detection lists
// ============================================================================

/// Everything the engine consumes for one inspection cycle. Empty lists are
/// a normal condition (a sensing source timed out or found nothing).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleInput {
    #[serde(default)]
    pub structural_detections: Vec<StructuralDetection>,
    #[serde(default)]
    pub text_detections: Vec<TextDetection>,
    #[serde(default)]
    pub shape_detections: Vec<ShapeDetection>,
    pub window_bounds: Rect,
}

impl CycleInput {
    /// Build a cycle input from a mixed detection stream.
    pub fn from_raw(detections: Vec<crate::detect::detection_model::RawDetection>, window_bounds: Rect) -> Self {
        let (structural_detections, text_detections, shape_detections) =
            crate::detect::sanitize::partition(detections);

        CycleInput {
            structural_detections,
            text_detections,
            shape_detections,
            window_bounds,
        }
    }
}

/// How many detections entered and how many elements left each stage.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StageCounts {
    pub structural_in: usize,
    pub text_in: usize,
    pub shapes_in: usize,
    pub merged: usize,
    pub deduped: usize,
    pub survivors: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FusionOutcome {
    pub elements: Vec<Element>,
    pub compressed: CompressedScreen,
    pub counts: StageCounts,
}

/// Run one full cycle: sanitize, index, merge, dedup, filter, compress.
///
/// The stages run strictly in sequence over cycle-local state; determinism
/// across repeated runs with identical inputs is part of the contract. The
/// only error path is structurally invalid window bounds; detection content
/// degrades coverage and confidence, never the result.
pub fn run_cycle(input: CycleInput, config: &FusionConfig) -> Result<FusionOutcome, FusionError> {
    validate_window(&input.window_bounds)?;

    let structural = sanitize_structural(input.structural_detections);
    let texts = sanitize_text(input.text_detections);
    let shapes = sanitize_shapes(input.shape_detections);

    let counts_in = (structural.len(), texts.len(), shapes.len());

    let merged = merge_sources(&structural, &texts, &shapes, &input.window_bounds, config);
    let merged_count = merged.len();

    let deduped = resolve_duplicates(merged, config);
    let deduped_count = deduped.len();

    let elements = filter_low_signal(deduped, config);

    let compressed = compress(&elements, &input.window_bounds, config);

    Ok(FusionOutcome {
        counts: StageCounts {
            structural_in: counts_in.0,
            text_in: counts_in.1,
            shapes_in: counts_in.2,
            merged: merged_count,
            deduped: deduped_count,
            survivors: elements.len(),
        },
        elements,
        compressed,
    })
}

fn validate_window(window: &Rect) -> Result<(), FusionError> {
    if !window.origin.x.is_finite() || !window.origin.y.is_finite() {
        return Err(FusionError::InvalidWindow(format!(
            "non-finite origin ({}, {})",
            window.origin.x, window.origin.y
        )));
    }

    if window.size.is_degenerate() {
        return Err(FusionError::InvalidWindow(format!(
            "degenerate size {}x{}",
            window.size.width, window.size.height
        )));
    }

    Ok(())
}
