//! External tool invocations: the React Native generator and npm
//!
//! Each invocation inherits the terminal, runs inside an explicit working
//! directory and is awaited to completion. A failure is returned to the
//! caller, which decides whether the run continues.

use std::fmt;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command as TokioCommand;

/// Dev dependency that compiles and watches the ClojureScript sources
pub const DEV_DEPENDENCY: &str = "shadow-cljs";

/// JS test/lint dev dependencies removed from the scaffold
pub const REMOVED_DEV_DEPENDENCIES: &[&str] = &["babel-jest", "eslint", "jest"];

/// Why an external tool did not complete successfully
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    Failed { command: String, status: ExitStatus },
}

/// A single external command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    program: String,
    args: Vec<String>,
}

impl ToolInvocation {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `npx react-native init <name>`
    pub fn react_native_init(project_name: &str) -> Self {
        Self::new("npx", ["react-native", "init", project_name])
    }

    /// `npm install --save-dev <packages>`
    pub fn npm_install_dev(packages: &[&str]) -> Self {
        Self::new(
            "npm",
            ["install", "--save-dev"].iter().chain(packages).copied(),
        )
    }

    /// `npm uninstall --save-dev <packages>`
    pub fn npm_uninstall_dev(packages: &[&str]) -> Self {
        Self::new(
            "npm",
            ["uninstall", "--save-dev"].iter().chain(packages).copied(),
        )
    }

    /// Run in `cwd` and wait for the process to exit
    pub async fn run(&self, cwd: &Path) -> Result<(), ToolError> {
        let status = TokioCommand::new(&self.program)
            .args(&self.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| ToolError::Spawn {
                command: self.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ToolError::Failed {
                command: self.to_string(),
                status,
            })
        }
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Swap the JS test/lint tooling for shadow-cljs in a project root
///
/// Both npm calls always run; the outcome of each is returned in order.
pub async fn patch_dependencies(root: &Path) -> Vec<(ToolInvocation, Result<(), ToolError>)> {
    let mut results = Vec::new();
    for invocation in [
        ToolInvocation::npm_install_dev(&[DEV_DEPENDENCY]),
        ToolInvocation::npm_uninstall_dev(REMOVED_DEV_DEPENDENCIES),
    ] {
        let result = invocation.run(root).await;
        results.push((invocation, result));
    }
    results
}
