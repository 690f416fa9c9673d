use crate::{
    engine::{
        config::FusionConfig,
        error::FusionError,
        pipeline::{CycleInput, FusionOutcome, run_cycle},
    },
    sensing::{
        harness::collect_all,
        sources::{ShapeSource, StructuralSource, TextSource},
    },
};

pub mod cli;
pub mod compress;
pub mod detect;
pub mod element;
pub mod engine;
pub mod fuse;
pub mod geometry;
pub mod index;
pub mod report;
pub mod sensing;
pub mod trace;

/// Fuse one already-materialized snapshot with the default thresholds.
pub fn fuse_snapshot(input: CycleInput) -> Result<FusionOutcome, FusionError> {
    run_cycle(input, &FusionConfig::default())
}

/// Run one full inspection cycle against live sensing sources: fan the three
/// collectors out on worker threads, join them (timeouts degrade to empty
/// lists), then fuse synchronously.
pub fn inspect_screen<S, T, P>(
    structural: S,
    text: T,
    shapes: P,
    window_bounds: crate::geometry::coords::Rect,
    timeout: std::time::Duration,
    config: &FusionConfig,
) -> Result<FusionOutcome, FusionError>
where
    S: StructuralSource + Send + 'static,
    T: TextSource + Send + 'static,
    P: ShapeSource + Send + 'static,
{
    let input = collect_all(structural, text, shapes, window_bounds, timeout);
    run_cycle(input, config)
}
