use std::collections::HashMap;

use crate::detect::detection_model::StructuralDetection;
use crate::geometry::coords::{Point, distance};

// ============================================================================
// Position cache / spatial index — rebuilt from scratch every cycle
// ============================================================================

/// Flat position table over the structural detections of one cycle, with a
/// uniform grid layered on top once the table is large enough to make linear
/// scans expensive. Grid mode is a throughput optimization only: `nearest`
/// returns the same result set in both modes.
pub struct PositionIndex {
    positions: Vec<Point>,
    grid: Option<SpatialGrid>,
}

/// Discretized window cells → indices of the structural detections whose
/// position falls in that cell. Never persisted across cycles.
struct SpatialGrid {
    cell_size: f64,
    cells: HashMap<(i64, i64), Vec<usize>>,
}

impl PositionIndex {
    pub fn build(detections: &[StructuralDetection], grid_threshold: usize, cell_size: f64) -> Self {
        let positions: Vec<Point> = detections.iter().map(|d| d.position).collect();

        let grid = if positions.len() > grid_threshold && cell_size > 0.0 {
            Some(SpatialGrid::build(&positions, cell_size))
        } else {
            None
        };

        PositionIndex { positions, grid }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn has_grid(&self) -> bool {
        self.grid.is_some()
    }

    /// Indices of all entries within `radius` pixels of `query`, ascending.
    pub fn nearest(&self, query: Point, radius: f64) -> Vec<usize> {
        match &self.grid {
            Some(grid) => grid.nearest(&self.positions, query, radius),
            None => self.nearest_linear(query, radius),
        }
    }

    /// Full-scan variant, kept public so grid/linear equivalence is testable.
    pub fn nearest_linear(&self, query: Point, radius: f64) -> Vec<usize> {
        self.positions
            .iter()
            .enumerate()
            .filter(|(_, p)| distance(**p, query) <= radius)
            .map(|(i, _)| i)
            .collect()
    }

    /// Distance from the entry at `index` to `query`.
    pub fn distance_to(&self, index: usize, query: Point) -> f64 {
        distance(self.positions[index], query)
    }
}

impl SpatialGrid {
    fn build(positions: &[Point], cell_size: f64) -> Self {
        let mut cells: HashMap<(i64, i64), Vec<usize>> = HashMap::new();

        for (i, p) in positions.iter().enumerate() {
            cells.entry(cell_of(*p, cell_size)).or_default().push(i);
        }

        SpatialGrid { cell_size, cells }
    }

    fn nearest(&self, positions: &[Point], query: Point, radius: f64) -> Vec<usize> {
        // Scan every cell the query circle's bounding box touches; the
        // distance check below restores the exact circular set.
        let min_cell = cell_of(Point::new(query.x - radius, query.y - radius), self.cell_size);
        let max_cell = cell_of(Point::new(query.x + radius, query.y + radius), self.cell_size);

        let mut hits = Vec::new();
        for cx in min_cell.0..=max_cell.0 {
            for cy in min_cell.1..=max_cell.1 {
                if let Some(indices) = self.cells.get(&(cx, cy)) {
                    for &i in indices {
                        if distance(positions[i], query) <= radius {
                            hits.push(i);
                        }
                    }
                }
            }
        }

        // Match the linear scan's ascending order exactly.
        hits.sort_unstable();
        hits
    }
}

fn cell_of(p: Point, cell_size: f64) -> (i64, i64) {
    ((p.x / cell_size).floor() as i64, (p.y / cell_size).floor() as i64)
}
