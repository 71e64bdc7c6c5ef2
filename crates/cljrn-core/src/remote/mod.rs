//! Network access: the Clojars version lookup and the asset download

pub mod fetcher;

pub use fetcher::{AssetOutcome, RemoteError, RemoteFetcher, ResolvedVersion, VersionSource};
