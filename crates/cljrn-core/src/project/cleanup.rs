//! Removal of scaffold files that only make sense for a JavaScript codebase

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Metro bundler config; removed so the default config is used
pub const METRO_CONFIG: &str = "metro.config.js";

/// Jest test directory generated by the React Native template
pub const TESTS_DIR: &str = "__tests__";

/// Delete `metro.config.js` and `__tests__/` from a project root
///
/// Missing entries are skipped. Returns the paths that were actually removed.
pub async fn remove_generated_artifacts(root: &Path) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();

    let metro = root.join(METRO_CONFIG);
    if metro.is_file() {
        fs::remove_file(&metro)
            .await
            .with_context(|| format!("Failed to remove {}", metro.display()))?;
        removed.push(metro);
    }

    let tests = root.join(TESTS_DIR);
    if tests.is_dir() {
        fs::remove_dir_all(&tests)
            .await
            .with_context(|| format!("Failed to remove {}", tests.display()))?;
        removed.push(tests);
    }

    Ok(removed)
}
