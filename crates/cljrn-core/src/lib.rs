//! cljrn Core - Turns a React Native scaffold into a ClojureScript project
//!
//! The transformation is a fixed sequence of steps over a project root:
//! create the scaffold with the React Native generator, swap the JS
//! test/lint dev dependencies for shadow-cljs, prune `package.json`, remove
//! JS-only files, render `shadow-cljs.edn` and a reagent demo app, replace
//! `index.js` and download the demo image.
//!
//! # Architecture
//!
//! - **Layer 1: Steps** - One function per step, each taking the project root
//!   explicitly and returning a typed result (`project`, `templates`,
//!   `runtime`, `remote`)
//! - **Layer 2: Configuration** - `ProductConfig` trait plus environment
//!   overrides for the remote endpoints (`config`)
//! - **Layer 3: CLI Interface** - cliclack-based driver that runs the steps
//!   in order and decides which failures are fatal (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based driver
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use cljrn_core::{project, templates, ProjectDescriptor, RemoteFetcher};
//!
//! let project = ProjectDescriptor::new("MyCoolApp");
//! let root = project.root_in(&std::env::current_dir()?);
//! project::patch_manifest(&root).await?;
//! let version = fetcher.fetch_latest_version("1.1.1").await.version;
//! templates::emit_templates(&root, &project, &version).await?;
//! ```

pub mod config;
pub mod product;
pub mod project;
pub mod remote;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::Endpoints;
pub use product::ProductConfig;
pub use project::{derive_identifiers, PackageManifest, ProjectDescriptor};
pub use remote::{AssetOutcome, RemoteError, RemoteFetcher, ResolvedVersion, VersionSource};
pub use runtime::{resolve_toolchain, RuntimeInfo, ToolError, ToolInvocation};

#[cfg(feature = "tui")]
pub use tui::run;
