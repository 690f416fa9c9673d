use clap::Parser;
use screen_fusion::cli::commands::{cmd_fuse, cmd_inspect};
use screen_fusion::cli::config::{AppConfig, Cli, Commands, load_config};
use screen_fusion::engine::error::FusionError;
use screen_fusion::sensing::sources::load_snapshot;

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_fuse_minimal() {
    let cli = Cli::parse_from(["screen-fusion", "fuse", "--input", "snap.json"]);
    match cli.command {
        Commands::Fuse {
            input,
            format,
            output,
        } => {
            assert_eq!(input, "snap.json");
            assert_eq!(format, "console");
            assert!(output.is_none());
        }
        _ => panic!("Expected Fuse command"),
    }
}

#[test]
fn cli_parse_fuse_all_args() {
    let cli = Cli::parse_from([
        "screen-fusion",
        "fuse",
        "--input",
        "snaps/",
        "--format",
        "json",
        "-o",
        "out.json",
        "-vv",
    ]);
    assert_eq!(cli.verbose, 2);
    match cli.command {
        Commands::Fuse {
            input,
            format,
            output,
        } => {
            assert_eq!(input, "snaps/");
            assert_eq!(format, "json");
            assert_eq!(output.as_deref(), Some("out.json"));
        }
        _ => panic!("Expected Fuse command"),
    }
}

#[test]
fn cli_parse_inspect_with_trace() {
    let cli = Cli::parse_from([
        "screen-fusion",
        "inspect",
        "--input",
        "snap.json",
        "--trace",
        "cycles.jsonl",
    ]);
    match cli.command {
        Commands::Inspect { input, trace } => {
            assert_eq!(input, "snap.json");
            assert_eq!(trace.as_deref(), Some("cycles.jsonl"));
        }
        _ => panic!("Expected Inspect command"),
    }
}

// ============================================================================
// Config file loading
// ============================================================================

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let config = load_config(Some("/nonexistent/screen-fusion.yaml"));
    assert_eq!(config.engine.proximity_radius, 25.0);
    assert_eq!(config.engine.grid_threshold, 100);
    assert_eq!(config.sensing.timeout_ms, 2000);
}

#[test]
fn partial_yaml_overrides_only_named_fields() {
    let yaml = "engine:\n  proximity_radius: 40.0\n  chrome_distance_max: 2.0\n";
    let config: AppConfig = serde_yaml::from_str(yaml).expect("valid yaml");

    assert_eq!(config.engine.proximity_radius, 40.0);
    assert_eq!(config.engine.chrome_distance_max, 2.0);
    assert_eq!(
        config.engine.dup_distance_max, 5.0,
        "Unnamed fields keep their defaults"
    );
    assert_eq!(config.sensing.timeout_ms, 2000);
}

#[test]
fn malformed_yaml_falls_back_to_defaults() {
    let dir = scratch_dir("bad_yaml");
    let path = dir.join("screen-fusion.yaml");
    std::fs::write(&path, ":::: not yaml ::::").unwrap();

    let config = load_config(path.to_str());
    assert_eq!(config.engine.proximity_radius, 25.0);
}

// ============================================================================
// Snapshot loading and command round-trips
// ============================================================================

const SNAPSHOT: &str = r#"{
  "structural_detections": [
    {
      "role": "Button",
      "title": "Save",
      "position": { "x": 100.0, "y": 100.0 },
      "size": { "width": 60.0, "height": 20.0 }
    }
  ],
  "text_detections": [
    { "text": "Save", "position": { "x": 102.0, "y": 101.0 },
      "size": { "width": 40.0, "height": 16.0 }, "confidence": 0.9 }
  ],
  "shape_detections": [],
  "window_bounds": {
    "origin": { "x": 0.0, "y": 0.0 },
    "size": { "width": 1000.0, "height": 800.0 }
  }
}"#;

fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "screen_fusion_test_{}_{}",
        name,
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn snapshot_optional_fields_default() {
    let dir = scratch_dir("snapshot_load");
    let path = dir.join("snap.json");
    std::fs::write(&path, SNAPSHOT).unwrap();

    let input = load_snapshot(path.to_str().unwrap()).expect("parses");
    assert_eq!(input.structural_detections.len(), 1);
    let s = &input.structural_detections[0];
    assert!(s.enabled, "enabled defaults to true");
    assert!(s.description.is_none());
    assert!(s.child_roles.is_empty());
}

#[test]
fn snapshot_parse_errors_carry_context() {
    let dir = scratch_dir("snapshot_bad");
    let path = dir.join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_snapshot(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, FusionError::JsonParse { .. }));

    let missing = load_snapshot("/nonexistent/snap.json").unwrap_err();
    assert!(matches!(missing, FusionError::SnapshotRead { .. }));
}

#[test]
fn cmd_fuse_writes_json_output() {
    let dir = scratch_dir("cmd_fuse");
    let snap = dir.join("snap.json");
    std::fs::write(&snap, SNAPSHOT).unwrap();
    let out = dir.join("out.json");

    cmd_fuse(
        snap.to_str().unwrap(),
        "json",
        out.to_str(),
        0,
        &AppConfig::default(),
    )
    .expect("fuse succeeds");

    let written = std::fs::read_to_string(&out).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    let records = parsed.as_array().expect("array of records");
    assert_eq!(records.len(), 1);
    assert!(
        records[0]["compressed"]
            .as_str()
            .unwrap()
            .starts_with("btn:"),
        "Fused snapshot serializes the Save button"
    );
    assert_eq!(records[0]["metrics"]["token_count"], 1);
}

#[test]
fn cmd_fuse_processes_directories_in_sorted_order() {
    let dir = scratch_dir("cmd_fuse_dir");
    std::fs::write(dir.join("b_snap.json"), SNAPSHOT).unwrap();
    std::fs::write(dir.join("a_snap.json"), SNAPSHOT).unwrap();
    // Output lands outside the scanned directory.
    let out = scratch_dir("cmd_fuse_dir_out").join("out.json");

    cmd_fuse(
        dir.to_str().unwrap(),
        "json",
        out.to_str(),
        0,
        &AppConfig::default(),
    )
    .expect("fuse succeeds");

    let written = std::fs::read_to_string(&out).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    let records = parsed.as_array().unwrap();
    assert_eq!(records.len(), 2);
    let first = records[0]["file"].as_str().unwrap();
    let second = records[1]["file"].as_str().unwrap();
    assert!(first < second, "Directory entries fuse in sorted order");
}

#[test]
fn cmd_inspect_appends_a_trace_line() {
    let dir = scratch_dir("cmd_inspect");
    let snap = dir.join("snap.json");
    std::fs::write(&snap, SNAPSHOT).unwrap();
    let trace = dir.join("cycles.jsonl");

    cmd_inspect(
        snap.to_str().unwrap(),
        trace.to_str(),
        0,
        &AppConfig::default(),
    )
    .expect("inspect succeeds");

    let line = std::fs::read_to_string(&trace).unwrap();
    let event: serde_json::Value = serde_json::from_str(line.lines().next().unwrap()).unwrap();
    assert_eq!(event["structural_in"], 1);
    assert_eq!(event["survivors"], 1);
    assert_eq!(event["token_count"], 1);
}
