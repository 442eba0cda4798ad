pub mod show;
pub mod stats;

use std::path::Path;

use crumbs_core::{ErrorCode, GraphSnapshot};

use crate::output::{CliError, OutputMode};

/// Read and decode a snapshot file, reporting failures in `output` mode.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid snapshot.
pub fn load_snapshot(path: &Path, output: OutputMode) -> anyhow::Result<GraphSnapshot> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            CliError::new(
                ErrorCode::SnapshotReadError,
                format!("cannot read snapshot {}: {e}", path.display()),
            )
            .report(output)?;
            anyhow::bail!("cannot read snapshot {}", path.display());
        }
    };

    match GraphSnapshot::from_json_str(&content) {
        Ok(snapshot) => Ok(snapshot),
        Err(e) => {
            CliError::new(e.code(), e.to_string()).report(output)?;
            anyhow::bail!("invalid snapshot {}", path.display());
        }
    }
}
