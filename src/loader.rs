//! Data loading with per-resource fallbacks.
//!
//! A portfolio is described by three documents fetched by relative name from
//! a [`Source`]:
//!
//! ```text
//! config.json    ─┐ fetched first (renderers assume a config)
//! projects.json  ─┼─ then fetched concurrently, both awaited
//! artists.json   ─┘
//! ```
//!
//! ## Failure handling
//!
//! A failed fetch never aborts the load. Each resource fails independently:
//! the failure is logged, recorded in [`Loaded::failures`] for the error
//! banner, and replaced by a fallback ([`SiteConfig::fallback`] for config,
//! an empty list otherwise). "Failure" covers I/O errors, network errors,
//! non-success HTTP statuses and malformed JSON alike. Nothing is retried.
//!
//! ## Sources
//!
//! - [`DirSource`] reads the documents from a directory on disk.
//! - [`HttpSource`] GETs them relative to a base URL.
//!
//! [`source_for`] picks one from a location string.

use crate::model::{Artist, Project, SiteConfig};
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const CONFIG_FILE: &str = "config.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const ARTISTS_FILE: &str = "artists.json";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where the three documents come from.
pub trait Source: Sync {
    /// Raw bytes of the named document.
    fn fetch(&self, name: &str) -> Result<Vec<u8>, FetchError>;

    /// Human-readable location, for logs and CLI output.
    fn describe(&self) -> String;
}

/// Documents stored as files in one directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl Source for DirSource {
    fn fetch(&self, name: &str) -> Result<Vec<u8>, FetchError> {
        Ok(std::fs::read(self.root.join(name))?)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Documents served over HTTP relative to a base URL.
#[derive(Debug)]
pub struct HttpSource {
    base: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(base: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base: base.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, name: &str) -> String {
        format!("{}/{}", self.base, name)
    }
}

impl Source for HttpSource {
    fn fetch(&self, name: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.url(name);
        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }
        Ok(response.bytes()?.to_vec())
    }

    fn describe(&self) -> String {
        self.base.clone()
    }
}

/// Pick a source for a location: `http(s)://` URLs go over the network,
/// anything else is a directory.
pub fn source_for(location: &str, timeout: Duration) -> Result<Box<dyn Source>, FetchError> {
    if is_url(location) {
        Ok(Box::new(HttpSource::new(location, timeout)?))
    } else {
        Ok(Box::new(DirSource::new(location)))
    }
}

pub fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Which document a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Config,
    Projects,
    Artists,
}

impl Resource {
    pub fn file_name(self) -> &'static str {
        match self {
            Resource::Config => CONFIG_FILE,
            Resource::Projects => PROJECTS_FILE,
            Resource::Artists => ARTISTS_FILE,
        }
    }
}

/// A resource that was replaced by its fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub resource: Resource,
    pub message: String,
}

impl LoadFailure {
    /// Banner text for this failure.
    pub fn banner(&self) -> String {
        format!("Could not load {}: {}", self.resource.file_name(), self.message)
    }
}

/// Everything a page needs, with fallbacks already applied.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub config: SiteConfig,
    pub projects: Vec<Project>,
    pub artists: Vec<Artist>,
    pub failures: Vec<LoadFailure>,
}

impl Loaded {
    pub fn is_degraded(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Load config, then projects and artists concurrently.
pub fn load(source: &dyn Source) -> Loaded {
    info!(source = %source.describe(), "loading portfolio data");
    let mut failures = Vec::new();

    let config = fetch_or(source, Resource::Config, SiteConfig::fallback, &mut failures);

    let (projects, artists) = rayon::join(
        || fetch_json::<Vec<Project>>(source, Resource::Projects),
        || fetch_json::<Vec<Artist>>(source, Resource::Artists),
    );
    let projects = or_fallback(projects, Resource::Projects, Vec::new, &mut failures);
    let artists = or_fallback(artists, Resource::Artists, Vec::new, &mut failures);

    debug!(
        projects = projects.len(),
        artists = artists.len(),
        failures = failures.len(),
        "load finished"
    );
    Loaded {
        config,
        projects,
        artists,
        failures,
    }
}

fn fetch_json<T: DeserializeOwned>(source: &dyn Source, resource: Resource) -> Result<T, FetchError> {
    let bytes = source.fetch(resource.file_name())?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn fetch_or<T: DeserializeOwned>(
    source: &dyn Source,
    resource: Resource,
    fallback: impl FnOnce() -> T,
    failures: &mut Vec<LoadFailure>,
) -> T {
    or_fallback(fetch_json(source, resource), resource, fallback, failures)
}

fn or_fallback<T>(
    result: Result<T, FetchError>,
    resource: Resource,
    fallback: impl FnOnce() -> T,
    failures: &mut Vec<LoadFailure>,
) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            warn!(resource = resource.file_name(), error = %err, "fetch failed, using fallback");
            failures.push(LoadFailure {
                resource,
                message: err.to_string(),
            });
            fallback()
        }
    }
}
