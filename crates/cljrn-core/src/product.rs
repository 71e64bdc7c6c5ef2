//! Product configuration trait for the CLI binary
//!
//! The binary implements this trait to supply the fixed endpoints, the
//! fallback dependency version and the user-facing text of a run.

use crate::project::ProjectDescriptor;

/// Configuration trait for a project transformer product
///
/// Defines:
/// - Product identity (name, display name)
/// - Registry and asset endpoints, and the variables that override them
/// - The reagent version used when the registry cannot be reached
/// - Documentation links and post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Endpoint answering with the newest reagent release
    fn registry_url(&self) -> &'static str;

    /// Environment variable name for overriding the registry URL
    fn registry_url_env(&self) -> &'static str;

    /// URL of the image written to `assets/hickey.png`
    fn asset_url(&self) -> &'static str;

    /// Environment variable name for overriding the asset URL
    fn asset_url_env(&self) -> &'static str;

    /// Reagent version used when the registry lookup fails
    fn fallback_version(&self) -> &'static str;

    /// URL of the React Native environment setup guide
    fn docs_url(&self) -> &'static str;

    /// Generate the "next steps" instructions after the transformation
    fn next_steps(&self, project: &ProjectDescriptor) -> Vec<String>;

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        self.name()
    }
}
