//! In-memory schema model
//!
//! Only the keywords needed to resolve references and render documentation
//! are modelled; every other keyword in a document is ignored.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod types;

pub use types::{SchemaType, TypeSet};

use crate::documentation::generator::MarkdownRenderer;
use crate::loader::error::{ResolveError, ResolverResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// A JSON Schema node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schema {
    #[serde(rename = "$id", skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(rename = "$ref", skip_serializing_if = "String::is_empty")]
    pub reference: String,

    #[serde(rename = "$schema", skip_serializing_if = "String::is_empty")]
    pub dialect: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub required: BTreeSet<String>,

    #[serde(rename = "type", skip_serializing_if = "TypeSet::is_empty")]
    pub types: TypeSet,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub definitions: BTreeMap<String, Schema>,

    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<Value>,
}

impl Schema {
    /// Build a schema from a generic parse of a document
    ///
    /// `location` only feeds the error message.
    pub fn from_value(value: &Value, location: impl ToString) -> ResolverResult<Self> {
        Self::deserialize(value).map_err(|e| ResolveError::malformed(location, e))
    }

    /// Parse a schema straight from JSON text
    pub fn from_json_str(text: &str) -> ResolverResult<Self> {
        serde_json::from_str(text).map_err(|e| ResolveError::malformed("<inline>", e))
    }

    /// Whether this node is a `$ref` placeholder
    pub fn is_reference(&self) -> bool {
        !self.reference.is_empty()
    }

    /// Whether `name` is listed in this schema's `required` set
    pub fn is_required(&self, name: &str) -> bool {
        self.required.contains(name)
    }

    /// Markdown rendering of this schema with headings starting at `level`
    pub fn markdown(&self, level: usize) -> String {
        MarkdownRenderer::new().render(self, level)
    }

    /// Depth-first iterator over this node and every descendant
    /// (properties, items and definitions)
    pub fn walk(&self) -> impl Iterator<Item = &Schema> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.definitions.values());
            if let Some(items) = node.items.as_deref() {
                stack.push(items);
            }
            stack.extend(node.properties.values());
            Some(node)
        })
    }
}
