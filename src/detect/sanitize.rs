use crate::detect::detection_model::{
    RawDetection, ShapeDetection, StructuralDetection, TextDetection,
};
use crate::geometry::coords::{Point, Size};

/// Split a mixed detection stream back into per-source lists, preserving
/// within-source order. Transports that interleave the three sources (e.g.
/// a single sensing bus) feed the engine through this.
pub fn partition(
    detections: Vec<RawDetection>,
) -> (
    Vec<StructuralDetection>,
    Vec<TextDetection>,
    Vec<ShapeDetection>,
) {
    let mut structural = Vec::new();
    let mut texts = Vec::new();
    let mut shapes = Vec::new();

    for detection in detections {
        match detection {
            RawDetection::Structural(d) => structural.push(d),
            RawDetection::Text(d) => texts.push(d),
            RawDetection::Shape(d) => shapes.push(d),
        }
    }

    (structural, texts, shapes)
}

// ============================================================================
// Input sanitizing — malformed detections are dropped, never propagated
// ============================================================================

/// A detection without usable geometry cannot enter the pipeline. Dropping is
/// silent apart from a warning; upstream sensing failures are a data-quality
/// condition, not an error.
fn usable_geometry(position: Point, size: Size) -> bool {
    position.x.is_finite() && position.y.is_finite() && !size.is_degenerate()
}

pub fn sanitize_structural(detections: Vec<StructuralDetection>) -> Vec<StructuralDetection> {
    let total = detections.len();
    let kept: Vec<StructuralDetection> = detections
        .into_iter()
        .filter(|d| usable_geometry(d.position, d.size))
        .collect();

    if kept.len() < total {
        eprintln!(
            "Warning: dropped {} structural detection(s) with malformed geometry",
            total - kept.len()
        );
    }
    kept
}

pub fn sanitize_text(detections: Vec<TextDetection>) -> Vec<TextDetection> {
    let total = detections.len();
    let kept: Vec<TextDetection> = detections
        .into_iter()
        .filter(|d| usable_geometry(d.position, d.size) && d.confidence.is_finite())
        .collect();

    if kept.len() < total {
        eprintln!(
            "Warning: dropped {} text detection(s) with malformed geometry",
            total - kept.len()
        );
    }
    kept
}

pub fn sanitize_shapes(detections: Vec<ShapeDetection>) -> Vec<ShapeDetection> {
    let total = detections.len();
    let kept: Vec<ShapeDetection> = detections
        .into_iter()
        .filter(|d| usable_geometry(d.bounds.origin, d.bounds.size) && d.confidence.is_finite())
        .collect();

    if kept.len() < total {
        eprintln!(
            "Warning: dropped {} shape detection(s) with malformed geometry",
            total - kept.len()
        );
    }
    kept
}
