use std::fmt;

#[derive(Debug)]
pub enum FusionError {
    /// Snapshot file could not be read from disk
    SnapshotRead { path: String, source: std::io::Error },

    /// Snapshot JSON failed to parse into a CycleInput
    JsonParse { context: String, source: serde_json::Error },

    /// Output serialization failed
    JsonSerialize { context: String, source: serde_json::Error },

    /// Window bounds are structurally invalid (zero, negative, or
    /// non-finite). This is a caller contract violation, not a data-quality
    /// condition: empty detection lists are fine, a broken frame is not.
    InvalidWindow(String),
}

impl fmt::Display for FusionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FusionError::SnapshotRead { path, source } => {
                write!(f, "Failed to read snapshot '{}': {}", path, source)
            }
            FusionError::JsonParse { context, source } => {
                write!(f, "JSON parse error ({}): {}", context, source)
            }
            FusionError::JsonSerialize { context, source } => {
                write!(f, "JSON serialize error ({}): {}", context, source)
            }
            FusionError::InvalidWindow(msg) => {
                write!(f, "Invalid window bounds: {}", msg)
            }
        }
    }
}

impl std::error::Error for FusionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FusionError::SnapshotRead { source, .. } => Some(source),
            FusionError::JsonParse { source, .. } => Some(source),
            FusionError::JsonSerialize { source, .. } => Some(source),
            FusionError::InvalidWindow(_) => None,
        }
    }
}
