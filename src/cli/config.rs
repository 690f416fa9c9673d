use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::engine::config::FusionConfig;
use crate::sensing::harness::SensingConfig;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "screen-fusion",
    version,
    about = "Fuses multi-source UI detections into a compact screen representation"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: screen-fusion.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fuse detection snapshots into compressed screen output
    Fuse {
        /// Snapshot JSON file, or a directory of snapshot files
        #[arg(long)]
        input: String,

        /// Output format: console, json
        #[arg(long, default_value = "console")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Run one snapshot through the engine and print the full cycle report
    Inspect {
        /// Snapshot JSON file
        #[arg(long)]
        input: String,

        /// Append a JSONL cycle trace to this file
        #[arg(long)]
        trace: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `screen-fusion.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub engine: FusionConfig,
    #[serde(default)]
    pub sensing: SensingConfig,
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("screen-fusion.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
