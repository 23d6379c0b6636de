//! Schema loading and reference resolution
//!
//! This module provides:
//! - YAML and JSON parsing into paired typed/generic views
//! - Document sources for files, URLs and in-memory fixtures
//! - JSON pointer evaluation
//! - Reference resolution ($ref support) with circular reference detection
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use schemamd_core::loader::SchemaLoader;
//!
//! let mut loader = SchemaLoader::new()?;
//! let schema = loader.load_source("schemas/card.schema.json")?;
//! println!("{}", schema.markdown(1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod location;
pub mod parser;
pub mod pointer;
pub mod resolver;
pub mod schema_loader;
pub mod source;

pub use error::{ResolveError, ResolverResult};
pub use location::Location;
pub use parser::{Document, Format};
pub use pointer::JsonPointer;
pub use resolver::{ReferenceResolver, ResolverContext};
pub use schema_loader::{LoaderConfig, SchemaLoader};
pub use source::{DocumentLoader, FileLoader, HttpLoader, MemoryLoader, SourceLoader};
