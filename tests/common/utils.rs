#![allow(dead_code)]

use screen_fusion::detect::detection_model::{
    InteractionCategory, ShapeCategory, ShapeDetection, StructuralDetection, TextDetection,
};
use screen_fusion::geometry::coords::{Point, Rect, Size};

/// Standard test window: 1000x800 at the origin.
pub fn window() -> Rect {
    Rect::new(0.0, 0.0, 1000.0, 800.0)
}

pub fn structural(role: &str, x: f64, y: f64, w: f64, h: f64) -> StructuralDetection {
    StructuralDetection {
        role: role.to_string(),
        title: None,
        description: None,
        help: None,
        value: None,
        enabled: true,
        focused: false,
        selected: false,
        position: Point::new(x, y),
        size: Size::new(w, h),
        parent_role: None,
        child_roles: vec![],
    }
}

pub fn with_title(mut detection: StructuralDetection, title: &str) -> StructuralDetection {
    detection.title = Some(title.to_string());
    detection
}

pub fn with_description(mut detection: StructuralDetection, desc: &str) -> StructuralDetection {
    detection.description = Some(desc.to_string());
    detection
}

pub fn with_value(mut detection: StructuralDetection, value: &str) -> StructuralDetection {
    detection.value = Some(value.to_string());
    detection
}

pub fn text_det(text: &str, x: f64, y: f64, confidence: f32) -> TextDetection {
    TextDetection {
        text: text.to_string(),
        position: Point::new(x, y),
        size: Size::new(10.0 * text.len().max(1) as f64, 16.0),
        confidence,
    }
}

pub fn shape(
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    interaction: InteractionCategory,
    confidence: f32,
) -> ShapeDetection {
    ShapeDetection {
        bounds: Rect::new(x, y, w, h),
        shape: ShapeCategory::Rectangle,
        interaction,
        confidence,
        area: w * h,
        aspect_ratio: if h > 0.0 { w / h } else { 0.0 },
    }
}
