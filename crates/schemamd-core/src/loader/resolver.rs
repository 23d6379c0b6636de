//! JSON Schema `$ref` resolution
//!
//! This module handles:
//! - Whole-document references (`other.schema.json`)
//! - In-document references (`#/definitions/address`)
//! - Cross-document pointer references (`other.schema.json#/properties/name`)
//! - Circular reference detection
//!
//! Resolution rebuilds the tree: every `$ref` node is replaced by its target,
//! and the target is resolved in the context of the document it came from.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{ResolveError, ResolverResult};
use crate::loader::location::Location;
use crate::loader::parser::Document;
use crate::loader::pointer::JsonPointer;
use crate::loader::source::DocumentLoader;
use crate::schema::Schema;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// The document a subtree belongs to: its location (whose directory is the
/// base for relative references) and its generic parse (for pointers)
#[derive(Debug, Clone)]
pub struct ResolverContext {
    pub location: Location,
    pub root: Arc<Value>,
}

impl ResolverContext {
    /// Create a context for a document at `location` with raw parse `root`
    pub fn new(location: Location, root: Arc<Value>) -> Self {
        Self { location, root }
    }

    /// Context for the given document
    pub fn for_document(document: &Document) -> Self {
        Self::new(document.location.clone(), Arc::clone(&document.raw))
    }

    fn key(&self, pointer: &JsonPointer) -> String {
        format!("{}#{}", self.location, pointer)
    }
}

/// A `$ref` string split at its fragment separator
#[derive(Debug, Clone, PartialEq, Eq)]
enum Reference<'a> {
    /// `other.schema.json`
    Document(&'a str),
    /// `#/definitions/address`
    Local(&'a str),
    /// `other.schema.json#/properties/name`
    External { document: &'a str, pointer: &'a str },
}

impl<'a> Reference<'a> {
    fn parse(reference: &'a str) -> Self {
        match reference.find('#') {
            None => Reference::Document(reference),
            Some(0) => Reference::Local(&reference[1..]),
            Some(i) => Reference::External {
                document: &reference[..i],
                pointer: &reference[i + 1..],
            },
        }
    }
}

/// Replaces every `$ref` node in a schema tree with the schema it points to
#[derive(Debug)]
pub struct ReferenceResolver<L> {
    loader: L,
    /// References currently being expanded, outermost first
    resolution_stack: Vec<String>,
}

impl<L: DocumentLoader> ReferenceResolver<L> {
    /// Create a resolver that fetches documents through `loader`
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            resolution_stack: Vec::new(),
        }
    }

    /// Load and parse the document stored at `location`
    pub fn load_document(&self, location: Location) -> ResolverResult<Document> {
        let text = self.loader.load(&location)?;
        debug!(location = %location, bytes = text.len(), "Loaded schema document");
        Document::parse(&text, location)
    }

    /// Resolve every reference in a whole document
    pub fn resolve_document(&mut self, document: Document) -> ResolverResult<Schema> {
        let context = ResolverContext::for_document(&document);
        self.resolution_stack.push(format!("{}#", context.location));
        let resolved = self.resolve(document.schema, &context);
        self.resolution_stack.pop();
        resolved
    }

    /// Resolve every reference in `schema`, which belongs to `context`'s document
    ///
    /// The node's own reference is expanded before its children are visited,
    /// since the substituted schema may bring new references with it. Only
    /// properties and items are followed; `definitions` are kept as written
    /// and are reached solely through references that point into them.
    pub fn resolve(&mut self, mut schema: Schema, context: &ResolverContext) -> ResolverResult<Schema> {
        if schema.is_reference() {
            return self.expand(&schema.reference, context);
        }

        schema.properties = self.resolve_map(std::mem::take(&mut schema.properties), context)?;

        if let Some(items) = schema.items.take() {
            schema.items = Some(Box::new(self.resolve(*items, context)?));
        }

        Ok(schema)
    }

    fn resolve_map(
        &mut self,
        map: BTreeMap<String, Schema>,
        context: &ResolverContext,
    ) -> ResolverResult<BTreeMap<String, Schema>> {
        map.into_iter()
            .map(|(name, child)| Ok((name, self.resolve(child, context)?)))
            .collect()
    }

    /// Substitute a single reference and resolve the result in its own document
    fn expand(&mut self, reference: &str, context: &ResolverContext) -> ResolverResult<Schema> {
        trace!(reference, from = %context.location, "Resolving reference");

        let (key, target, target_context) = match Reference::parse(reference) {
            Reference::Document(path) => {
                let location = context.location.join(path)?;
                let document = self.load_document(location)?;
                let target_context = ResolverContext::for_document(&document);
                (format!("{}#", document.location), document.schema, target_context)
            }
            Reference::Local(pointer) => {
                let pointer = JsonPointer::parse(pointer)?;
                let target = Self::lookup(&pointer, context)?;
                (context.key(&pointer), target, context.clone())
            }
            Reference::External { document, pointer } => {
                let pointer = JsonPointer::parse(pointer)?;
                let location = context.location.join(document)?;
                let document = self.load_document(location)?;
                let target_context = ResolverContext::for_document(&document);
                let target = Self::lookup(&pointer, &target_context)?;
                (target_context.key(&pointer), target, target_context)
            }
        };

        if self.resolution_stack.contains(&key) {
            let mut chain = self.resolution_stack.clone();
            chain.push(key);
            return Err(ResolveError::circular_reference(&chain));
        }

        self.resolution_stack.push(key);
        let resolved = self.resolve(target, &target_context);
        self.resolution_stack.pop();
        resolved
    }

    /// Evaluate `pointer` against the context's raw document and type the result
    fn lookup(pointer: &JsonPointer, context: &ResolverContext) -> ResolverResult<Schema> {
        let value = pointer.evaluate(&context.root, &context.location)?;
        Schema::from_value(value, context.key(pointer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::source::MemoryLoader;
    use crate::schema::SchemaType;

    fn resolve_in(loader: MemoryLoader, root: &str) -> ResolverResult<Schema> {
        let mut resolver = ReferenceResolver::new(loader);
        let document = resolver.load_document(Location::parse(root)?)?;
        resolver.resolve_document(document)
    }

    #[test]
    fn test_reference_parsing() {
        assert_eq!(Reference::parse("a.json"), Reference::Document("a.json"));
        assert_eq!(Reference::parse("#/definitions/a"), Reference::Local("/definitions/a"));
        assert_eq!(Reference::parse("#"), Reference::Local(""));
        assert_eq!(
            Reference::parse("a.json#/properties/name"),
            Reference::External {
                document: "a.json",
                pointer: "/properties/name"
            }
        );
    }

    #[test]
    fn test_local_reference_replaces_node() {
        let loader = MemoryLoader::new()
            .with_document(
                "root.json",
                r##"{
                    "type": "object",
                    "properties": {
                        "home": {"$ref": "#/definitions/address", "description": "dropped"}
                    },
                    "definitions": {
                        "address": {
                            "type": "object",
                            "properties": {"street": {"type": "string"}}
                        }
                    }
                }"##,
            )
            .unwrap();

        let schema = resolve_in(loader, "root.json").unwrap();
        let home = &schema.properties["home"];
        assert!(!home.is_reference());
        assert!(home.types.contains(SchemaType::Object));
        assert!(home.description.is_empty());
        assert_eq!(home, &schema.definitions["address"]);
    }

    #[test]
    fn test_chained_references() {
        let loader = MemoryLoader::new()
            .with_document(
                "root.json",
                r##"{
                    "properties": {"a": {"$ref": "#/definitions/b"}},
                    "definitions": {
                        "b": {"$ref": "#/definitions/c"},
                        "c": {"type": "string"}
                    }
                }"##,
            )
            .unwrap();

        let schema = resolve_in(loader, "root.json").unwrap();
        assert!(schema.properties["a"].types.contains(SchemaType::String));
        assert!(!schema.properties["a"].is_reference());
        assert!(schema.definitions["b"].is_reference());
    }

    #[test]
    fn test_unreferenced_definitions_are_not_followed() {
        let loader = MemoryLoader::new()
            .with_document(
                "root.json",
                r##"{
                    "properties": {"name": {"type": "string"}},
                    "definitions": {
                        "node": {
                            "type": "object",
                            "properties": {"children": {"type": "array", "items": {"$ref": "#/definitions/node"}}}
                        },
                        "ext": {"$ref": "missing.json"}
                    }
                }"##,
            )
            .unwrap();

        let schema = resolve_in(loader, "root.json").unwrap();
        assert!(schema.properties["name"].types.contains(SchemaType::String));
        assert!(schema.definitions["ext"].is_reference());
        assert!(schema.markdown(1).contains("| `name`   | string |"));
    }

    #[test]
    fn test_whole_document_reference_uses_its_own_directory() {
        let loader = MemoryLoader::new()
            .with_document("schemas/root.json", r#"{"properties": {"card": {"$ref": "cards/card.json"}}}"#)
            .unwrap()
            .with_document(
                "schemas/cards/card.json",
                r#"{"type": "object", "properties": {"geo": {"$ref": "geo.json"}}}"#,
            )
            .unwrap()
            .with_document("schemas/cards/geo.json", r#"{"type": "object", "title": "Geo"}"#)
            .unwrap();

        let schema = resolve_in(loader, "schemas/root.json").unwrap();
        assert_eq!(schema.properties["card"].properties["geo"].title, "Geo");
    }

    #[test]
    fn test_external_pointer_resolves_in_other_document() {
        let loader = MemoryLoader::new()
            .with_document(
                "root.json",
                r#"{"properties": {"name": {"$ref": "other.json#/properties/name"}}}"#,
            )
            .unwrap()
            .with_document(
                "other.json",
                r##"{
                    "properties": {"name": {"$ref": "#/definitions/name"}},
                    "definitions": {"name": {"type": "string", "description": "Full name"}}
                }"##,
            )
            .unwrap();

        let schema = resolve_in(loader, "root.json").unwrap();
        assert_eq!(schema.properties["name"].description, "Full name");
    }

    #[test]
    fn test_error_kinds() {
        let cases = [
            (r##"{"properties": {"a": {"$ref": "missing.json"}}}"##, "source_unavailable"),
            (r##"{"properties": {"a": {"$ref": "#definitions"}}}"##, "invalid_pointer"),
            (r##"{"properties": {"a": {"$ref": "#/definitions/x"}}}"##, "pointer_not_found"),
            (
                r##"{"properties": {"a": {"$ref": "#/title"}}, "title": "not a schema"}"##,
                "malformed_document",
            ),
        ];

        for (document, kind) in cases {
            let loader = MemoryLoader::new().with_document("root.json", document).unwrap();
            let err = resolve_in(loader, "root.json").unwrap_err();
            assert_eq!(err.kind(), kind, "unexpected error for {document}: {err}");
        }
    }

    #[test]
    fn test_circular_reference_detection() {
        let loader = MemoryLoader::new()
            .with_document("a.json", r#"{"properties": {"b": {"$ref": "b.json"}}}"#)
            .unwrap()
            .with_document("b.json", r#"{"properties": {"a": {"$ref": "a.json"}}}"#)
            .unwrap();

        let err = resolve_in(loader, "a.json").unwrap_err();
        match err {
            ResolveError::CircularReference { chain } => {
                assert_eq!(chain, "a.json# -> b.json# -> a.json#");
            }
            other => panic!("Expected CircularReference error, got {other}"),
        }
    }

    #[test]
    fn test_self_referencing_definition() {
        let loader = MemoryLoader::new()
            .with_document(
                "tree.json",
                r##"{
                    "properties": {"root": {"$ref": "#/definitions/node"}},
                    "definitions": {
                        "node": {
                            "type": "object",
                            "properties": {"children": {"type": "array", "items": {"$ref": "#/definitions/node"}}}
                        }
                    }
                }"##,
            )
            .unwrap();

        assert!(matches!(
            resolve_in(loader, "tree.json"),
            Err(ResolveError::CircularReference { .. })
        ));
    }

    #[test]
    fn test_repeated_references_are_not_cycles() {
        let loader = MemoryLoader::new()
            .with_document(
                "root.json",
                r##"{
                    "properties": {
                        "billing": {"$ref": "#/definitions/address"},
                        "shipping": {"$ref": "#/definitions/address"}
                    },
                    "definitions": {"address": {"type": "object"}}
                }"##,
            )
            .unwrap();

        let schema = resolve_in(loader, "root.json").unwrap();
        assert_eq!(schema.properties["billing"], schema.properties["shipping"]);
    }
}
