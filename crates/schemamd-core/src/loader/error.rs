//! Error types for schema loading and reference resolution
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Result type for loader and resolver operations
pub type ResolverResult<T> = Result<T, ResolveError>;

/// Failure kinds raised while loading documents and resolving `$ref`s
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The bytes are not valid structured data, or do not describe a schema
    #[error("Malformed document '{location}': {reason}")]
    MalformedDocument { location: String, reason: String },

    /// A referenced file could not be read or a URL could not be fetched
    #[error("Failed to load '{location}': {reason}")]
    SourceUnavailable { location: String, reason: String },

    /// The pointer part of a reference is syntactically invalid
    #[error("Invalid JSON pointer '{pointer}': {reason}")]
    InvalidPointer { pointer: String, reason: String },

    /// The pointer is well-formed but nothing lives at that location
    #[error("Pointer '{pointer}' not found in '{location}': {reason}")]
    PointerNotFound {
        pointer: String,
        location: String,
        reason: String,
    },

    /// A reference expands (directly or indirectly) into itself
    #[error("Circular reference detected: {chain}")]
    CircularReference { chain: String },
}

impl ResolveError {
    /// Create a malformed document error
    pub fn malformed(location: impl ToString, reason: impl ToString) -> Self {
        Self::MalformedDocument {
            location: location.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a source unavailable error
    pub fn unavailable(location: impl ToString, reason: impl ToString) -> Self {
        Self::SourceUnavailable {
            location: location.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid pointer error
    pub fn invalid_pointer(pointer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPointer {
            pointer: pointer.into(),
            reason: reason.into(),
        }
    }

    /// Create a pointer-not-found error
    pub fn pointer_not_found(
        pointer: impl Into<String>,
        location: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::PointerNotFound {
            pointer: pointer.into(),
            location: location.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a circular reference error from the chain of expanded references
    pub fn circular_reference(chain: &[String]) -> Self {
        Self::CircularReference {
            chain: chain.join(" -> "),
        }
    }

    /// Short machine-friendly name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedDocument { .. } => "malformed_document",
            Self::SourceUnavailable { .. } => "source_unavailable",
            Self::InvalidPointer { .. } => "invalid_pointer",
            Self::PointerNotFound { .. } => "pointer_not_found",
            Self::CircularReference { .. } => "circular_reference",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ResolveError::unavailable("schemas/missing.json", "No such file or directory");
        assert!(matches!(err, ResolveError::SourceUnavailable { .. }));
        assert_eq!(err.kind(), "source_unavailable");
        assert!(err.to_string().contains("schemas/missing.json"));

        let circular = ResolveError::circular_reference(&[
            "a.json#".to_string(),
            "b.json#".to_string(),
            "a.json#".to_string(),
        ]);
        assert_eq!(
            circular.to_string(),
            "Circular reference detected: a.json# -> b.json# -> a.json#"
        );
    }

    #[test]
    fn test_pointer_errors() {
        let invalid = ResolveError::invalid_pointer("definitions", "must start with '/'");
        assert_eq!(invalid.kind(), "invalid_pointer");

        let missing = ResolveError::pointer_not_found("/definitions/x", "root.json", "key 'x' missing");
        assert!(missing.to_string().contains("/definitions/x"));
        assert!(missing.to_string().contains("root.json"));
    }
}
