//! Bundle serialization and output.

use crate::models::QuestBundle;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Render the bundle as JSON with 2-space indentation and no trailing newline.
pub fn render_bundle(bundle: &QuestBundle) -> Result<String> {
    serde_json::to_string_pretty(bundle).map_err(Into::into)
}

/// Write the bundle to `<output_dir>/<file_name>`, creating the directory
/// if needed and replacing any existing file.
pub async fn write_bundle(
    bundle: &QuestBundle,
    output_dir: &Path,
    file_name: &str,
) -> Result<PathBuf> {
    let content = render_bundle(bundle)?;

    if !output_dir.exists() {
        debug!("Creating output directory: {}", output_dir.display());
        tokio::fs::create_dir_all(output_dir).await.with_context(|| {
            format!("Failed to create output directory {}", output_dir.display())
        })?;
    }

    let output_file = output_dir.join(file_name);
    tokio::fs::write(&output_file, content)
        .await
        .with_context(|| format!("Failed to write bundle to {}", output_file.display()))?;

    Ok(output_file)
}
