//! Main schema loader: fetch, parse and resolve a root document
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::loader::{
    error::ResolverResult,
    location::Location,
    parser::Document,
    resolver::ReferenceResolver,
    source::{DocumentLoader, SourceLoader},
};
use crate::schema::Schema;
use std::time::Duration;
use tracing::info;

/// Configuration for schema loader behavior
#[derive(Debug, Clone, Default)]
pub struct LoaderConfig {
    /// Per-request timeout for network references; `None` waits indefinitely
    pub fetch_timeout: Option<Duration>,
}

/// Loads a schema document and resolves all of its references
#[derive(Debug)]
pub struct SchemaLoader<L = SourceLoader> {
    resolver: ReferenceResolver<L>,
}

impl SchemaLoader<SourceLoader> {
    /// Create a loader reading files from disk and URLs over HTTP
    pub fn new() -> ResolverResult<Self> {
        Self::with_config(LoaderConfig::default())
    }

    /// Create a loader with custom configuration
    pub fn with_config(config: LoaderConfig) -> ResolverResult<Self> {
        Ok(Self::with_loader(SourceLoader::with_timeout(config.fetch_timeout)?))
    }
}

impl<L: DocumentLoader> SchemaLoader<L> {
    /// Create a loader backed by a custom document source
    pub fn with_loader(loader: L) -> Self {
        Self {
            resolver: ReferenceResolver::new(loader),
        }
    }

    /// Load the document at `location` and return its fully resolved schema
    pub fn load(&mut self, location: &Location) -> ResolverResult<Schema> {
        let document = self.resolver.load_document(location.clone())?;
        self.resolve(document)
    }

    /// Load from a path or URL string
    pub fn load_source(&mut self, source: &str) -> ResolverResult<Schema> {
        self.load(&Location::parse(source)?)
    }

    /// Resolve an already-parsed document
    pub fn resolve(&mut self, document: Document) -> ResolverResult<Schema> {
        let location = document.location.clone();
        let schema = self.resolver.resolve_document(document)?;
        info!(location = %location, properties = schema.properties.len(), "Resolved schema");
        Ok(schema)
    }
}
