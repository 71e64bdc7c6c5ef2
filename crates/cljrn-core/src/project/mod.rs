//! Project identity and the files of an existing scaffold
//!
//! This module provides:
//! - `ProjectDescriptor`, the name plus its derived snake_case and namespace forms
//! - `package.json` pruning (see [`manifest`])
//! - Removal of JS-only scaffold artifacts (see [`cleanup`])
//! - Creating or reusing the React Native scaffold (see [`scaffold`])

pub mod cleanup;
pub mod manifest;
pub mod scaffold;

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub use cleanup::remove_generated_artifacts;
pub use manifest::{patch_manifest, PackageManifest};
pub use scaffold::{ensure_scaffold, ScaffoldOutcome};

/// Name of a project plus the identifiers derived from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    /// Raw name as typed by the user; also the directory and app registry name
    pub name: String,
    /// snake_case form, used for the source directory under `src/main`
    pub snake_name: String,
    /// Hyphenated form of `snake_name`, used as the ClojureScript namespace root
    pub namespace: String,
}

impl ProjectDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let (snake_name, namespace) = derive_identifiers(&name);
        Self {
            name,
            snake_name,
            namespace,
        }
    }

    /// Project root, relative to the directory the project is created in
    pub fn root_in(&self, parent: &Path) -> PathBuf {
        parent.join(&self.name)
    }

    /// Path of the generated application source, relative to the project root
    pub fn core_source_path(&self) -> PathBuf {
        PathBuf::from("src")
            .join("main")
            .join(&self.snake_name)
            .join("core.cljs")
    }
}

fn camel_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("valid regex"))
}

fn lower_upper_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"))
}

/// Convert a CamelCase name to snake_case
///
/// An underscore goes before every capitalised word that follows another
/// character, and between a lowercase letter or digit and an uppercase letter.
/// The result is lowercased. Separators that are already present (`-`, ` `)
/// are left alone.
pub fn to_snake_case(name: &str) -> String {
    let words = camel_run().replace_all(name, "${1}_${2}");
    lower_upper_boundary()
        .replace_all(&words, "${1}_${2}")
        .to_lowercase()
}

/// Derive `(snake_name, namespace)` from a project name
pub fn derive_identifiers(name: &str) -> (String, String) {
    let snake_name = to_snake_case(name);
    let namespace = snake_name.replace('_', "-");
    (snake_name, namespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_name() {
        let project = ProjectDescriptor::new("MyCoolApp");
        assert_eq!(project.snake_name, "my_cool_app");
        assert_eq!(project.namespace, "my-cool-app");
    }

    #[test]
    fn test_acronyms_and_digits() {
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("getHTTPResponse"), "get_http_response");
        assert_eq!(to_snake_case("App2Go"), "app2_go");
        assert_eq!(to_snake_case("v2App"), "v2_app");
    }

    #[test]
    fn test_already_lowercase() {
        assert_eq!(to_snake_case("myapp"), "myapp");
        assert_eq!(to_snake_case("my_app"), "my_app");
        assert_eq!(derive_identifiers("my_app").1, "my-app");
    }

    #[test]
    fn test_snake_case_is_idempotent() {
        for name in ["MyCoolApp", "HTTPServer", "already_snake", "ABC", "aB1cD", "X", ""] {
            let once = to_snake_case(name);
            assert_eq!(to_snake_case(&once), once, "not idempotent for {:?}", name);
        }
    }

    #[test]
    fn test_derivation_is_deterministic() {
        assert_eq!(ProjectDescriptor::new("AwesomeProject"), ProjectDescriptor::new("AwesomeProject"));
    }

    #[test]
    fn test_core_source_path_uses_snake_name() {
        let project = ProjectDescriptor::new("MyCoolApp");
        assert_eq!(
            project.core_source_path(),
            PathBuf::from("src/main/my_cool_app/core.cljs")
        );
    }
}
