//! Configuration resolved from the product and the environment

pub mod endpoints;

pub use endpoints::Endpoints;
