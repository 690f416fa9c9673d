use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::engine::pipeline::CycleInput;
use crate::geometry::coords::Rect;
use crate::sensing::sources::{ShapeSource, StructuralSource, TextSource};

// ============================================================================
// Sensing fan-out — parallel collection, join barrier, per-source timeouts
// ============================================================================

/// Run the three sensing sources on separate worker threads and join all
/// three before the engine runs. A source that times out or fails degrades
/// to an empty list with a warning; the cycle always proceeds with whatever
/// arrived. A timed-out worker is abandoned rather than joined, so one hung
/// sensing service cannot stall the cycle.
pub fn collect_all<S, T, P>(
    structural: S,
    text: T,
    shapes: P,
    window_bounds: Rect,
    timeout: Duration,
) -> CycleInput
where
    S: StructuralSource + Send + 'static,
    T: TextSource + Send + 'static,
    P: ShapeSource + Send + 'static,
{
    let structural_rx = spawn_collector("structural", move || structural.collect());
    let text_rx = spawn_collector("text", move || text.collect());
    let shape_rx = spawn_collector("shape", move || shapes.collect());

    CycleInput {
        structural_detections: await_source("structural", structural_rx, timeout),
        text_detections: await_source("text", text_rx, timeout),
        shape_detections: await_source("shape", shape_rx, timeout),
        window_bounds,
    }
}

fn spawn_collector<D, F>(name: &'static str, collect: F) -> mpsc::Receiver<Result<Vec<D>, String>>
where
    D: Send + 'static,
    F: FnOnce() -> Result<Vec<D>, String> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    let spawned = thread::Builder::new()
        .name(format!("sensing-{}", name))
        .spawn(move || {
            // Receiver may already be gone if the barrier timed out
            let _ = tx.send(collect());
        });

    if let Err(e) = spawned {
        // tx is dropped on failure; the barrier sees a disconnect and
        // degrades to an empty list.
        eprintln!("Warning: could not spawn {} sensing worker: {}", name, e);
    }

    rx
}

fn await_source<D>(
    name: &str,
    rx: mpsc::Receiver<Result<Vec<D>, String>>,
    timeout: Duration,
) -> Vec<D> {
    match rx.recv_timeout(timeout) {
        Ok(Ok(detections)) => detections,
        Ok(Err(reason)) => {
            eprintln!("Warning: {} sensing source failed: {}", name, reason);
            Vec::new()
        }
        Err(mpsc::RecvTimeoutError::Timeout) => {
            eprintln!(
                "Warning: {} sensing source timed out after {:?}",
                name, timeout
            );
            Vec::new()
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            eprintln!("Warning: {} sensing source worker died", name);
            Vec::new()
        }
    }
}

/// Sensing-layer knobs surfaced in the config file.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SensingConfig {
    /// Per-source join timeout, milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for SensingConfig {
    fn default() -> Self {
        SensingConfig {
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl SensingConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_timeout_ms() -> u64 {
    2000
}
