//! Generated ClojureScript sources
//!
//! This module provides:
//! - Text templates for `shadow-cljs.edn`, `core.cljs` and `index.js`
//! - Writing them into a project root

pub mod render;
pub mod writer;

pub use render::{core_source, shadow_config, ENTRYPOINT_SOURCE};
pub use writer::{emit_entrypoint, emit_templates, ENTRYPOINT, SHADOW_CONFIG};
