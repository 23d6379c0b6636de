//! Document sources: filesystem, HTTP and in-memory loaders
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{ResolveError, ResolverResult};
use crate::loader::location::Location;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Capability to fetch the raw text of a document
pub trait DocumentLoader {
    /// Read the full text stored at `location`
    fn load(&self, location: &Location) -> ResolverResult<String>;
}

impl<L: DocumentLoader + ?Sized> DocumentLoader for &L {
    fn load(&self, location: &Location) -> ResolverResult<String> {
        (**self).load(location)
    }
}

impl<L: DocumentLoader + ?Sized> DocumentLoader for Box<L> {
    fn load(&self, location: &Location) -> ResolverResult<String> {
        (**self).load(location)
    }
}

/// Reads documents from the local filesystem
#[derive(Debug, Default, Clone)]
pub struct FileLoader;

impl FileLoader {
    fn read(path: &Path) -> ResolverResult<String> {
        std::fs::read_to_string(path).map_err(|e| ResolveError::unavailable(path.display(), e))
    }
}

impl DocumentLoader for FileLoader {
    fn load(&self, location: &Location) -> ResolverResult<String> {
        match location {
            Location::File(path) => Self::read(path),
            Location::Url(_) => Err(ResolveError::unavailable(
                location,
                "network locations are not served by the file loader",
            )),
        }
    }
}

/// Fetches documents over HTTP(S) with a blocking client
#[derive(Debug, Clone)]
pub struct HttpLoader {
    client: reqwest::blocking::Client,
}

impl HttpLoader {
    /// Create a loader without a request timeout
    pub fn new() -> ResolverResult<Self> {
        Self::with_timeout(None)
    }

    /// Create a loader whose requests give up after `timeout`
    pub fn with_timeout(timeout: Option<Duration>) -> ResolverResult<Self> {
        // `None` disables the blocking client's default 30s limit
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ResolveError::unavailable("<http client>", e))?;
        Ok(Self { client })
    }
}

impl DocumentLoader for HttpLoader {
    fn load(&self, location: &Location) -> ResolverResult<String> {
        let Location::Url(url) = location else {
            return Err(ResolveError::unavailable(
                location,
                "file locations are not served by the HTTP loader",
            ));
        };

        debug!(url = %url, "Fetching remote schema");
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| ResolveError::unavailable(location, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::unavailable(
                location,
                format!("server responded with status {}", status),
            ));
        }

        response.text().map_err(|e| ResolveError::unavailable(location, e))
    }
}

/// Default loader: files from disk, URLs over HTTP
#[derive(Debug, Clone)]
pub struct SourceLoader {
    files: FileLoader,
    http: HttpLoader,
}

impl SourceLoader {
    pub fn new() -> ResolverResult<Self> {
        Self::with_timeout(None)
    }

    /// Create a loader whose network fetches use `timeout`
    pub fn with_timeout(timeout: Option<Duration>) -> ResolverResult<Self> {
        Ok(Self {
            files: FileLoader,
            http: HttpLoader::with_timeout(timeout)?,
        })
    }
}

impl DocumentLoader for SourceLoader {
    fn load(&self, location: &Location) -> ResolverResult<String> {
        match location {
            Location::File(_) => self.files.load(location),
            Location::Url(_) => self.http.load(location),
        }
    }
}

/// Serves documents from an in-memory map, keyed by location
#[derive(Debug, Default, Clone)]
pub struct MemoryLoader {
    documents: HashMap<Location, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document under `source` (a path or URL string)
    pub fn insert(&mut self, source: &str, content: impl Into<String>) -> ResolverResult<()> {
        let location = Location::parse(source)?;
        self.documents.insert(location, content.into());
        Ok(())
    }

    /// Builder-style variant of [`MemoryLoader::insert`]
    pub fn with_document(mut self, source: &str, content: impl Into<String>) -> ResolverResult<Self> {
        self.insert(source, content)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentLoader for MemoryLoader {
    fn load(&self, location: &Location) -> ResolverResult<String> {
        self.documents
            .get(location)
            .cloned()
            .ok_or_else(|| ResolveError::unavailable(location, "no such document"))
    }
}
