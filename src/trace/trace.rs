use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::compress::compress_model::CompressionMetrics;
use crate::engine::pipeline::StageCounts;

/// One line of the JSONL cycle trace: how the detection sets funneled down
/// to the compressed output.
#[derive(Debug, Serialize)]
pub struct CycleTrace {
    pub timestamp_ms: u128,
    pub cycle: u64,

    pub structural_in: usize,
    pub text_in: usize,
    pub shapes_in: usize,
    pub merged: usize,
    pub deduped: usize,
    pub survivors: usize,

    pub token_count: Option<usize>,
    pub compression_ratio: Option<f64>,
    pub confidence: Option<f32>,
}

impl CycleTrace {
    pub fn now(cycle: u64, counts: &StageCounts) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis(),
            cycle,
            structural_in: counts.structural_in,
            text_in: counts.text_in,
            shapes_in: counts.shapes_in,
            merged: counts.merged,
            deduped: counts.deduped,
            survivors: counts.survivors,
            token_count: None,
            compression_ratio: None,
            confidence: None,
        }
    }

    pub fn with_metrics(mut self, metrics: &CompressionMetrics) -> Self {
        self.token_count = Some(metrics.token_count);
        self.compression_ratio = Some(metrics.compression_ratio);
        self.confidence = Some(metrics.confidence);
        self
    }
}
