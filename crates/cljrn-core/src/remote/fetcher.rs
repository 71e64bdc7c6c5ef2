//! HTTP fetching for the registry lookup and the image asset
//!
//! Neither request is allowed to fail the run: a registry problem falls back
//! to a pinned version and an asset problem skips the download. The reason is
//! kept in the returned value so the caller can report it.

use crate::config::Endpoints;
use crate::product::ProductConfig;
use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use url::Url;

/// Asset directory, relative to the project root
pub const ASSETS_DIR: &str = "assets";

/// Asset file name inside [`ASSETS_DIR`]; referenced by the generated `core.cljs`
pub const ASSET_FILE: &str = "hickey.png";

/// Why a remote request produced no usable result
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered HTTP {status}")]
    Status { url: Url, status: StatusCode },

    #[error("unreadable response from {url}: {source}")]
    Body {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
}

/// Relevant part of the Clojars artifact document
#[derive(Debug, Deserialize)]
struct ArtifactInfo {
    latest_version: String,
}

/// Where a resolved version came from
#[derive(Debug)]
pub enum VersionSource {
    Registry,
    Fallback(RemoteError),
}

/// Dependency version to write into `shadow-cljs.edn`
#[derive(Debug)]
pub struct ResolvedVersion {
    pub version: String,
    pub source: VersionSource,
}

/// Result of [`RemoteFetcher::fetch_asset_if_absent`]
#[derive(Debug)]
pub enum AssetOutcome {
    /// The file was already there; no request was made
    AlreadyPresent(PathBuf),
    /// The file was downloaded and written
    Downloaded { path: PathBuf, bytes: usize },
    /// The download failed; nothing was written
    Skipped(RemoteError),
}

/// HTTP client bound to the registry and asset endpoints
pub struct RemoteFetcher {
    endpoints: Endpoints,
    client: reqwest::Client,
}

impl RemoteFetcher {
    /// Create a new fetcher with a custom user agent
    pub fn new(endpoints: Endpoints, user_agent: &str) -> Self {
        Self {
            endpoints,
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Create a fetcher from a product config
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self> {
        let endpoints = Endpoints::from_config(config)?;
        Ok(Self::new(endpoints, config.user_agent()))
    }

    /// GET a URL and require an HTTP 200 answer
    async fn get_ok(&self, url: &Url) -> Result<reqwest::Response, RemoteError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| RemoteError::Transport {
                url: url.clone(),
                source,
            })?;

        if response.status() != StatusCode::OK {
            return Err(RemoteError::Status {
                url: url.clone(),
                status: response.status(),
            });
        }

        Ok(response)
    }

    async fn query_registry(&self) -> Result<String, RemoteError> {
        let url = &self.endpoints.registry;
        let info: ArtifactInfo = self
            .get_ok(url)
            .await?
            .json()
            .await
            .map_err(|source| RemoteError::Body {
                url: url.clone(),
                source,
            })?;
        Ok(info.latest_version)
    }

    /// Ask the registry for the newest release, or use `fallback` on any failure
    pub async fn fetch_latest_version(&self, fallback: &str) -> ResolvedVersion {
        match self.query_registry().await {
            Ok(version) => ResolvedVersion {
                version,
                source: VersionSource::Registry,
            },
            Err(e) => ResolvedVersion {
                version: fallback.to_string(),
                source: VersionSource::Fallback(e),
            },
        }
    }

    async fn download(&self) -> Result<Vec<u8>, RemoteError> {
        let url = &self.endpoints.asset;
        let bytes = self
            .get_ok(url)
            .await?
            .bytes()
            .await
            .map_err(|source| RemoteError::Body {
                url: url.clone(),
                source,
            })?;
        Ok(bytes.to_vec())
    }

    /// Download the asset into `root/assets/hickey.png` unless it already exists
    ///
    /// The `assets` directory is created either way. An existing file is never
    /// overwritten and no request is made for it. Only local I/O errors are
    /// returned as errors.
    pub async fn fetch_asset_if_absent(&self, root: &Path) -> Result<AssetOutcome> {
        let dir = root.join(ASSETS_DIR);
        fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

        let path = dir.join(ASSET_FILE);
        if path.exists() {
            return Ok(AssetOutcome::AlreadyPresent(path));
        }

        match self.download().await {
            Ok(content) => {
                fs::write(&path, &content)
                    .await
                    .with_context(|| format!("Failed to write file: {}", path.display()))?;
                Ok(AssetOutcome::Downloaded {
                    path,
                    bytes: content.len(),
                })
            }
            Err(e) => Ok(AssetOutcome::Skipped(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FALLBACK: &str = "1.1.1";

    fn fetcher_for(server: &MockServer) -> RemoteFetcher {
        let base = Url::parse(&server.uri()).unwrap();
        RemoteFetcher::new(
            Endpoints {
                registry: base.join("/api/artifacts/reagent/reagent").unwrap(),
                asset: base.join("/411lb0.png").unwrap(),
            },
            "cljrn-test",
        )
    }

    #[tokio::test]
    async fn test_latest_version_from_registry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/artifacts/reagent/reagent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "group_name": "reagent",
                "jar_name": "reagent",
                "latest_version": "1.2.0"
            })))
            .mount(&server)
            .await;

        let resolved = fetcher_for(&server).fetch_latest_version(FALLBACK).await;

        assert_eq!(resolved.version, "1.2.0");
        assert!(matches!(resolved.source, VersionSource::Registry));
    }

    #[tokio::test]
    async fn test_non_200_uses_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/artifacts/reagent/reagent"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let resolved = fetcher_for(&server).fetch_latest_version(FALLBACK).await;

        assert_eq!(resolved.version, FALLBACK);
        assert!(matches!(
            resolved.source,
            VersionSource::Fallback(RemoteError::Status { status, .. }) if status == StatusCode::SERVICE_UNAVAILABLE
        ));
    }

    #[tokio::test]
    async fn test_malformed_registry_body_uses_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/artifacts/reagent/reagent"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let resolved = fetcher_for(&server).fetch_latest_version(FALLBACK).await;

        assert_eq!(resolved.version, FALLBACK);
        assert!(matches!(
            resolved.source,
            VersionSource::Fallback(RemoteError::Body { .. })
        ));
    }

    #[tokio::test]
    async fn test_existing_asset_is_not_fetched() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"new image".to_vec()))
            .expect(0)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(ASSETS_DIR)).unwrap();
        let asset = dir.path().join(ASSETS_DIR).join(ASSET_FILE);
        std::fs::write(&asset, b"sentinel").unwrap();

        let outcome = fetcher_for(&server)
            .fetch_asset_if_absent(dir.path())
            .await
            .unwrap();

        assert!(matches!(outcome, AssetOutcome::AlreadyPresent(_)));
        assert_eq!(std::fs::read(&asset).unwrap(), b"sentinel");
        server.verify().await;
    }

    #[tokio::test]
    async fn test_missing_asset_is_downloaded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/411lb0.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x89, b'P', b'N', b'G']))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let outcome = fetcher_for(&server)
            .fetch_asset_if_absent(dir.path())
            .await
            .unwrap();

        assert!(matches!(outcome, AssetOutcome::Downloaded { bytes: 4, .. }));
        assert_eq!(
            std::fs::read(dir.path().join(ASSETS_DIR).join(ASSET_FILE)).unwrap(),
            vec![0x89, b'P', b'N', b'G']
        );
    }

    #[tokio::test]
    async fn test_asset_download_follows_redirect() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/411lb0.png"))
            .respond_with(
                ResponseTemplate::new(302)
                    .insert_header("Location", format!("{}/cdn/411lb0.png", server.uri())),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/cdn/411lb0.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"png".to_vec()))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let outcome = fetcher_for(&server)
            .fetch_asset_if_absent(dir.path())
            .await
            .unwrap();

        assert!(matches!(outcome, AssetOutcome::Downloaded { bytes: 3, .. }));
    }

    #[tokio::test]
    async fn test_failed_asset_download_writes_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/411lb0.png"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let outcome = fetcher_for(&server)
            .fetch_asset_if_absent(dir.path())
            .await
            .unwrap();

        assert!(matches!(outcome, AssetOutcome::Skipped(RemoteError::Status { .. })));
        assert!(dir.path().join(ASSETS_DIR).is_dir());
        assert!(!dir.path().join(ASSETS_DIR).join(ASSET_FILE).exists());
    }
}
