//! Toolchain detection and external tool invocations
//!
//! This module provides:
//! - PATH lookup for npm and npx
//! - The React Native generator and npm dev-dependency commands

pub mod check;
pub mod tool;

pub use check::{check_tool, resolve_toolchain, RuntimeInfo, REQUIRED_TOOLS};
pub use tool::{patch_dependencies, ToolError, ToolInvocation};
