//! `package.json` pruning
//!
//! The ClojureScript project does its testing and linting outside of npm, so
//! the jest configuration and the `test`/`lint` scripts generated by the
//! React Native template are removed.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;

/// File name of the npm manifest inside a project root
pub const PACKAGE_JSON: &str = "package.json";

/// Top-level keys dropped from the manifest
const REMOVED_KEYS: &[&str] = &["jest"];

/// Keys dropped from the `scripts` table
const REMOVED_SCRIPTS: &[&str] = &["test", "lint"];

/// An npm manifest, kept as an ordered JSON object
#[derive(Debug, Clone, PartialEq)]
pub struct PackageManifest {
    content: Map<String, Value>,
}

impl PackageManifest {
    /// Parse a manifest from its JSON text
    pub fn parse(text: &str) -> Result<Self> {
        let content: Map<String, Value> =
            serde_json::from_str(text).context("package.json is not a JSON object")?;
        Ok(Self { content })
    }

    /// Read and parse `package.json` from a project root
    pub async fn load(root: &Path) -> Result<Self> {
        let path = root.join(PACKAGE_JSON);
        let text = fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Remove jest configuration and the npm test/lint scripts
    ///
    /// A manifest without a `scripts` table gets an empty one.
    pub fn prune(&mut self) {
        // shift_remove keeps the order of the remaining keys
        for key in REMOVED_KEYS {
            self.content.shift_remove(*key);
        }

        match self.content.get_mut("scripts") {
            Some(Value::Object(scripts)) => {
                for key in REMOVED_SCRIPTS {
                    scripts.shift_remove(*key);
                }
            }
            // present but not a table: nothing to prune
            Some(_) => {}
            None => {
                self.content
                    .insert("scripts".to_string(), Value::Object(Map::new()));
            }
        }
    }

    /// Serialize with 2-space indentation
    pub fn to_pretty_string(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.content).context("Failed to serialize package.json")
    }

    /// Write the manifest back to `package.json` in a project root
    pub async fn save(&self, root: &Path) -> Result<PathBuf> {
        let path = root.join(PACKAGE_JSON);
        fs::write(&path, self.to_pretty_string()?)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}

/// Load, prune and rewrite `package.json` in a project root
pub async fn patch_manifest(root: &Path) -> Result<PackageManifest> {
    let mut manifest = PackageManifest::load(root).await?;
    manifest.prune();
    manifest.save(root).await?;
    Ok(manifest)
}
