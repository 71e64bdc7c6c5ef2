//! Creating the React Native scaffold, or reusing one that already exists

use crate::runtime::{ToolError, ToolInvocation};
use anyhow::Result;
use std::path::Path;

/// How the scaffold step ended
#[derive(Debug)]
pub enum ScaffoldOutcome {
    /// The generator ran and the project directory now exists; a non-zero
    /// exit is kept for reporting
    Created(Result<(), ToolError>),
    /// The directory existed and reuse was confirmed
    Reused,
    /// The directory existed and reuse was declined; nothing was touched
    Declined,
}

impl ScaffoldOutcome {
    pub fn proceeds(&self) -> bool {
        !matches!(self, ScaffoldOutcome::Declined)
    }
}

/// Make sure a scaffold exists at `root`
///
/// An existing directory is never passed to the generator; `confirm` decides
/// whether it is reused. Otherwise `init` runs in `parent` and must leave a
/// directory at `root` behind.
pub async fn ensure_scaffold<F>(
    root: &Path,
    parent: &Path,
    init: &ToolInvocation,
    confirm: F,
) -> Result<ScaffoldOutcome>
where
    F: FnOnce() -> Result<bool>,
{
    if root.is_dir() {
        return Ok(if confirm()? {
            ScaffoldOutcome::Reused
        } else {
            ScaffoldOutcome::Declined
        });
    }

    let result = init.run(parent).await;

    if !root.is_dir() {
        anyhow::bail!(
            "Project directory {} was not created. Is the React Native environment set up?",
            root.display()
        );
    }

    Ok(ScaffoldOutcome::Created(result))
}
