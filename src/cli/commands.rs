use serde::Serialize;

use crate::cli::config::AppConfig;
use crate::compress::compress_model::CompressionMetrics;
use crate::engine::pipeline::{FusionOutcome, run_cycle};
use crate::report::console::format_console_report;
use crate::sensing::sources::load_snapshot;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::CycleTrace;

// ============================================================================
// fuse subcommand
// ============================================================================

/// One fused snapshot in `--format json` output.
#[derive(Debug, Serialize)]
struct FuseRecord {
    file: String,
    compressed: String,
    metrics: CompressionMetrics,
}

pub fn cmd_fuse(
    input: &str,
    format: &str,
    output: Option<&str>,
    verbose: u8,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let paths = snapshot_paths(input)?;

    if paths.is_empty() {
        eprintln!("No snapshot files found at: {}", input);
        return Ok(());
    }

    if verbose > 0 {
        eprintln!("Fusing {} snapshot(s)...", paths.len());
    }

    let mut records = Vec::new();
    for path in &paths {
        if verbose > 0 {
            eprintln!("  Fusing: {}", path);
        }
        let snapshot = load_snapshot(path)?;
        let outcome = run_cycle(snapshot, &config.engine)?;
        records.push(FuseRecord {
            file: path.clone(),
            compressed: outcome.compressed.compressed,
            metrics: outcome.compressed.metrics,
        });
    }

    let output_content = match format {
        "json" => {
            let mut json = serde_json::to_string_pretty(&records)?;
            json.push('\n');
            json
        }
        _ => format_fuse_console(&records),
    };

    match output {
        Some(path) => std::fs::write(path, &output_content)?,
        None => print!("{}", output_content),
    }

    Ok(())
}

fn format_fuse_console(records: &[FuseRecord]) -> String {
    let mut out = String::new();

    for record in records {
        out.push_str(&format!("=== {} ===\n", record.file));
        if record.compressed.is_empty() {
            out.push_str("(empty screen)\n");
        } else {
            out.push_str(&record.compressed);
            out.push('\n');
        }
        out.push_str(&format!(
            "tokens={} ratio={:.2} confidence={:.2}\n\n",
            record.metrics.token_count,
            record.metrics.compression_ratio,
            record.metrics.confidence
        ));
    }

    out
}

// ============================================================================
// inspect subcommand
// ============================================================================

pub fn cmd_inspect(
    input: &str,
    trace_path: Option<&str>,
    verbose: u8,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if verbose > 0 {
        eprintln!("Inspecting: {}", input);
    }

    let snapshot = load_snapshot(input)?;
    let outcome: FusionOutcome = run_cycle(snapshot, &config.engine)?;

    if let Some(path) = trace_path {
        let tracer = TraceLogger::new(path);
        tracer.log(
            &CycleTrace::now(0, &outcome.counts).with_metrics(&outcome.compressed.metrics),
        );
    }

    print!("{}", format_console_report(&outcome));
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Resolve a single snapshot file, or every `.json` in a directory. The
/// directory listing is sorted so batch output order is deterministic.
fn snapshot_paths(input: &str) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let metadata = std::fs::metadata(input)?;

    if metadata.is_dir() {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(input)? {
            let entry = entry?;
            let p = entry.path();
            if p.extension().map_or(false, |e| e == "json") {
                paths.push(p.to_string_lossy().to_string());
            }
        }
        paths.sort();
        Ok(paths)
    } else {
        Ok(vec![input.to_string()])
    }
}
