use serde::{Deserialize, Serialize};

/// Tunable thresholds for the fusion stages. The defaults are the empirical
/// values the pipeline was calibrated with; the property tests pin them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusionConfig {
    /// Text detections pair with structural detections within this radius (px).
    #[serde(default = "default_proximity_radius")]
    pub proximity_radius: f64,

    /// Structural list size above which the spatial grid is built.
    #[serde(default = "default_grid_threshold")]
    pub grid_threshold: usize,

    /// Uniform grid cell edge length (px).
    #[serde(default = "default_grid_cell_size")]
    pub grid_cell_size: f64,

    /// A shape enhances an element when the intersection exceeds this
    /// fraction of the shape's own area.
    #[serde(default = "default_shape_overlap_min")]
    pub shape_overlap_min: f64,

    /// General duplicate rule: max center distance (px).
    #[serde(default = "default_dup_distance_max")]
    pub dup_distance_max: f64,

    /// General duplicate rule: max per-dimension size difference, relative
    /// to the larger of the two.
    #[serde(default = "default_dup_size_tolerance")]
    pub dup_size_tolerance: f64,

    /// System-chrome duplicate rule: tighter max distance (px), no size test.
    #[serde(default = "default_chrome_distance_max")]
    pub chrome_distance_max: f64,

    /// Max area (px²) for an element to count as a small system control.
    #[serde(default = "default_chrome_area_max")]
    pub chrome_area_max: f64,

    /// Below this area (px²) the quality filter applies the special
    /// window-control test instead of the generic text-presence test.
    #[serde(default = "default_small_area")]
    pub small_area: f64,

    /// Compressed token labels are truncated to this many characters.
    #[serde(default = "default_label_max_len")]
    pub label_max_len: usize,
}

impl Default for FusionConfig {
    fn default() -> Self {
        FusionConfig {
            proximity_radius: default_proximity_radius(),
            grid_threshold: default_grid_threshold(),
            grid_cell_size: default_grid_cell_size(),
            shape_overlap_min: default_shape_overlap_min(),
            dup_distance_max: default_dup_distance_max(),
            dup_size_tolerance: default_dup_size_tolerance(),
            chrome_distance_max: default_chrome_distance_max(),
            chrome_area_max: default_chrome_area_max(),
            small_area: default_small_area(),
            label_max_len: default_label_max_len(),
        }
    }
}

// Serde default helpers
fn default_proximity_radius() -> f64 { 25.0 }
fn default_grid_threshold() -> usize { 100 }
fn default_grid_cell_size() -> f64 { 100.0 }
fn default_shape_overlap_min() -> f64 { 0.30 }
fn default_dup_distance_max() -> f64 { 5.0 }
fn default_dup_size_tolerance() -> f64 { 0.20 }
fn default_chrome_distance_max() -> f64 { 3.0 }
fn default_chrome_area_max() -> f64 { 400.0 }
fn default_small_area() -> f64 { 100.0 }
fn default_label_max_len() -> usize { 16 }
