//! Schemamd - Markdown documentation for JSON Schema documents
//!
//! This crate loads a JSON Schema document, replaces every `$ref` with the
//! schema it points to, and renders the result as Markdown.
//!
//! ## Features
//!
//! - **Schema Model**: typed view of the documentation-relevant keywords
//! - **Reference Resolution**: local, cross-file and pointer `$ref`s, over disk or HTTP
//! - **Markdown Rendering**: headings, descriptions and property tables per object
//! - **Templates**: wrap the rendered Markdown in a custom page layout
//!
//! ## Quick Start
//!
//! ```rust
//! use schemamd_core::Schema;
//!
//! let schema = Schema::from_json_str(r#"{
//!     "title": "Address",
//!     "required": ["street"],
//!     "properties": {"street": {"type": "string", "description": "Street name"}}
//! }"#).unwrap();
//!
//! let markdown = schema.markdown(1);
//! assert!(markdown.starts_with("# Address"));
//! ```
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod documentation;
pub mod loader;
pub mod schema;

// Re-export commonly used types for convenience
pub use documentation::{
    generate_docs, generate_docs_with_template, DocTemplate, MarkdownRenderer, TemplateError,
    DEFAULT_TEMPLATE,
};
pub use loader::{
    DocumentLoader, Location, LoaderConfig, ResolveError, ResolverResult, SchemaLoader,
};
pub use schema::{Schema, SchemaType, TypeSet};
