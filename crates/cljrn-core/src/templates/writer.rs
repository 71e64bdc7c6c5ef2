//! Writing rendered templates into a project root

use crate::project::ProjectDescriptor;
use crate::templates::render;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Build config file name, relative to the project root
pub const SHADOW_CONFIG: &str = "shadow-cljs.edn";

/// JS entrypoint file name, relative to the project root
pub const ENTRYPOINT: &str = "index.js";

/// Write `content` to `root/relative`, creating parent directories as needed
async fn write_file(root: &Path, relative: &Path, content: &str) -> Result<PathBuf> {
    let target_path = root.join(relative);
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(&target_path, content)
        .await
        .with_context(|| format!("Failed to write file: {}", target_path.display()))?;

    Ok(target_path)
}

/// Render and write `shadow-cljs.edn` and `src/main/<snake_name>/core.cljs`
///
/// Both files are overwritten if they exist.
pub async fn emit_templates(
    root: &Path,
    project: &ProjectDescriptor,
    reagent_version: &str,
) -> Result<Vec<PathBuf>> {
    let (shadow_config, core_source) = render::render_all(project, reagent_version);

    let mut written = Vec::new();
    written.push(write_file(root, Path::new(SHADOW_CONFIG), &shadow_config).await?);
    written.push(write_file(root, &project.core_source_path(), &core_source).await?);

    Ok(written)
}

/// Overwrite `index.js` so it only loads the compiled ClojureScript app
pub async fn emit_entrypoint(root: &Path) -> Result<PathBuf> {
    write_file(root, Path::new(ENTRYPOINT), render::ENTRYPOINT_SOURCE).await
}
