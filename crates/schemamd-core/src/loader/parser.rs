//! Document parsing for YAML and JSON formats
//!
//! Every loaded document is kept as two views of the same text: the typed
//! [`Schema`] tree and the generic [`Value`] tree used for pointer lookups.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{ResolveError, ResolverResult};
use crate::loader::location::Location;
use crate::schema::Schema;
use serde_json::Value;
use std::sync::Arc;

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (everything else)
    Json,
}

impl Format {
    /// Detect format from the location's extension, defaulting to JSON
    pub fn from_location(location: &Location) -> Self {
        match location.extension().as_deref() {
            Some("yaml") | Some("yml") => Format::Yaml,
            _ => Format::Json,
        }
    }

    /// Parse text into a generic value
    pub fn parse(&self, content: &str, location: &Location) -> ResolverResult<Value> {
        match self {
            Format::Json => {
                serde_json::from_str(content).map_err(|e| ResolveError::malformed(location, e))
            }
            Format::Yaml => {
                // Parse as YAML first to surface YAML-specific errors
                let yaml: serde_yaml::Value =
                    serde_yaml::from_str(content).map_err(|e| ResolveError::malformed(location, e))?;
                serde_json::to_value(yaml).map_err(|e| ResolveError::malformed(location, e))
            }
        }
    }
}

/// A parsed document: where it came from plus its raw and typed views
#[derive(Debug, Clone)]
pub struct Document {
    pub location: Location,
    pub raw: Arc<Value>,
    pub schema: Schema,
}

impl Document {
    /// Parse document text, detecting the format from the location
    pub fn parse(content: &str, location: Location) -> ResolverResult<Self> {
        let format = Format::from_location(&location);
        Self::parse_as(content, format, location)
    }

    /// Parse document text with an explicit format
    pub fn parse_as(content: &str, format: Format, location: Location) -> ResolverResult<Self> {
        let raw = format.parse(content, &location)?;
        Self::from_value(raw, location)
    }

    /// Wrap an already-parsed generic value
    pub fn from_value(raw: Value, location: Location) -> ResolverResult<Self> {
        let schema = Schema::from_value(&raw, &location)?;
        Ok(Self {
            location,
            raw: Arc::new(raw),
            schema,
        })
    }
}
