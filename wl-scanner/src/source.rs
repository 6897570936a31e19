//! Schema source resolution
//!
//! A source location is either a local path or an `http(s)` URL. Fetching is
//! a plain blocking call; any failure aborts the run.

use crate::error::ScannerError;
use std::io::Read;
use std::path::PathBuf;

/// Upstream development copy of the core protocol
pub const DEVEL_WAYLAND_XML: &str =
    "https://gitlab.freedesktop.org/wayland/wayland/-/raw/main/protocol/wayland.xml";

/// Where the schema document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    /// A file on disk
    Path(PathBuf),
    /// An `http:` or `https:` URL
    Url(String),
}

impl SchemaSource {
    /// Classify a location string
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http:") || location.starts_with("https:") {
            SchemaSource::Url(location.to_string())
        } else {
            SchemaSource::Path(PathBuf::from(location))
        }
    }

    /// The location as given by the user
    pub fn location(&self) -> String {
        match self {
            SchemaSource::Path(path) => path.display().to_string(),
            SchemaSource::Url(url) => url.clone(),
        }
    }

    /// Read the whole document
    pub fn read(&self) -> Result<Vec<u8>, ScannerError> {
        let fail = |reason: String| ScannerError::Source {
            location: self.location(),
            reason,
        };

        match self {
            SchemaSource::Path(path) => std::fs::read(path).map_err(|e| fail(e.to_string())),
            SchemaSource::Url(url) => {
                tracing::info!(%url, "fetching schema");
                let response = ureq::get(url).call().map_err(|e| fail(e.to_string()))?;
                if response.status() != 200 {
                    return Err(fail(format!("unexpected status {}", response.status())));
                }

                let mut body = Vec::new();
                response
                    .into_reader()
                    .read_to_end(&mut body)
                    .map_err(|e| fail(e.to_string()))?;
                Ok(body)
            }
        }
    }
}
