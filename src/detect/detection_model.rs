use serde::{Deserialize, Serialize};

use crate::geometry::coords::{Point, Rect, Size};

/// One raw observation from a single sensing source. The three sources are
/// structurally different, so each gets its own variant and the merge rules
/// match exhaustively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum RawDetection {
    Structural(StructuralDetection),
    Text(TextDetection),
    Shape(ShapeDetection),
}

/// Accessibility-tree scan result. Positions and sizes are absolute pixels
/// in the active window's coordinate frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuralDetection {
    pub role: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub help: Option<String>,
    pub value: Option<String>,

    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub focused: bool,
    #[serde(default)]
    pub selected: bool,

    pub position: Point,
    pub size: Size,

    pub parent_role: Option<String>,
    #[serde(default)]
    pub child_roles: Vec<String>,
}

/// Optical text recognition result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextDetection {
    pub text: String,
    pub position: Point,
    pub size: Size,
    pub confidence: f32,
}

/// Vision-based shape/icon detection result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeDetection {
    pub bounds: Rect,
    pub shape: ShapeCategory,
    pub interaction: InteractionCategory,
    pub confidence: f32,
    pub area: f64,
    pub aspect_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeCategory {
    Rectangle,
    Circle,
    IconLike,
    Irregular,
}

/// What the vision model thinks the shape is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionCategory {
    Button,
    IconButton,
    CloseButton,
    TextInput,
    Unknown,
}

impl InteractionCategory {
    pub fn is_clickable(&self) -> bool {
        !matches!(self, InteractionCategory::Unknown)
    }
}

impl StructuralDetection {
    /// Structural detections carry no recognition confidence of their own.
    pub fn confidence(&self) -> f32 {
        1.0
    }
}

impl RawDetection {
    pub fn position(&self) -> Point {
        match self {
            RawDetection::Structural(s) => s.position,
            RawDetection::Text(t) => t.position,
            RawDetection::Shape(s) => s.bounds.origin,
        }
    }

    pub fn size(&self) -> Size {
        match self {
            RawDetection::Structural(s) => s.size,
            RawDetection::Text(t) => t.size,
            RawDetection::Shape(s) => s.bounds.size,
        }
    }
}

fn default_true() -> bool {
    true
}
