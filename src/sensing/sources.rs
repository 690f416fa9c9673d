use crate::detect::detection_model::{ShapeDetection, StructuralDetection, TextDetection};
use crate::engine::error::FusionError;
use crate::engine::pipeline::CycleInput;

// ============================================================================
// Sensing collaborator seams — the engine consumes lists, not services
// ============================================================================

/// Accessibility-tree scanner seam.
pub trait StructuralSource {
    fn collect(&self) -> Result<Vec<StructuralDetection>, String>;
}

/// Optical text recognition seam.
pub trait TextSource {
    fn collect(&self) -> Result<Vec<TextDetection>, String>;
}

/// Vision shape/icon detection seam.
pub trait ShapeSource {
    fn collect(&self) -> Result<Vec<ShapeDetection>, String>;
}

/// Snapshot-backed source: all three detection lists read from one JSON
/// file. This is the mock side of the seam; live sensing services plug in
/// behind the same traits.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    input: CycleInput,
}

impl SnapshotSource {
    pub fn new(input: CycleInput) -> Self {
        SnapshotSource { input }
    }

    pub fn from_file(path: &str) -> Result<Self, FusionError> {
        Ok(SnapshotSource {
            input: load_snapshot(path)?,
        })
    }

    pub fn input(&self) -> &CycleInput {
        &self.input
    }
}

impl StructuralSource for SnapshotSource {
    fn collect(&self) -> Result<Vec<StructuralDetection>, String> {
        Ok(self.input.structural_detections.clone())
    }
}

impl TextSource for SnapshotSource {
    fn collect(&self) -> Result<Vec<TextDetection>, String> {
        Ok(self.input.text_detections.clone())
    }
}

impl ShapeSource for SnapshotSource {
    fn collect(&self) -> Result<Vec<ShapeDetection>, String> {
        Ok(self.input.shape_detections.clone())
    }
}

/// Read one CycleInput from a snapshot JSON file.
pub fn load_snapshot(path: &str) -> Result<CycleInput, FusionError> {
    let content = std::fs::read_to_string(path).map_err(|e| FusionError::SnapshotRead {
        path: path.to_string(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| FusionError::JsonParse {
        context: format!("snapshot {}", path),
        source: e,
    })
}
