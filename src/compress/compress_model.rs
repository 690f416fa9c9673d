use std::collections::BTreeMap;

use serde::Serialize;

use crate::element::element_model::Element;
use crate::geometry::coords::Point;

/// An element staged for serialization: normalized position, importance for
/// ranking, and its pre-rendered compact token. Created inside the
/// compressor and discarded after serialization.
#[derive(Debug, Clone)]
pub struct GridMappedElement {
    pub element: Element,
    pub normalized: Point,
    pub importance: f64,
    pub token: String,
}

/// Screen quadrant by normalized 0.5/0.5 split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    pub fn of(normalized: Point) -> Self {
        match (normalized.x < 0.5, normalized.y < 0.5) {
            (true, true) => Quadrant::TopLeft,
            (false, true) => Quadrant::TopRight,
            (true, false) => Quadrant::BottomLeft,
            (false, false) => Quadrant::BottomRight,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompressionMetrics {
    pub token_count: usize,
    pub compression_ratio: f64,
    pub confidence: f32,
    pub region_breakdown: BTreeMap<Quadrant, usize>,
}

impl CompressionMetrics {
    pub fn empty() -> Self {
        let mut region_breakdown = BTreeMap::new();
        for q in [
            Quadrant::TopLeft,
            Quadrant::TopRight,
            Quadrant::BottomLeft,
            Quadrant::BottomRight,
        ] {
            region_breakdown.insert(q, 0);
        }

        CompressionMetrics {
            token_count: 0,
            compression_ratio: 0.0,
            confidence: 0.0,
            region_breakdown,
        }
    }
}

/// The engine's output contract: one compact delimited string plus metrics.
#[derive(Debug, Clone, Serialize)]
pub struct CompressedScreen {
    pub compressed: String,
    pub metrics: CompressionMetrics,
}
