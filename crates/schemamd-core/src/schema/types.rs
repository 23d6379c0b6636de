//! Schema `type` keyword: single tags and union sets
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single JSON Schema primitive type
///
/// Names outside the standard set are kept verbatim in `Other` and rendered
/// as written.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Null,
    Other(String),
}

impl SchemaType {
    /// Keyword spelling as it appears in schema documents
    pub fn as_str(&self) -> &str {
        match self {
            SchemaType::String => "string",
            SchemaType::Number => "number",
            SchemaType::Integer => "integer",
            SchemaType::Boolean => "boolean",
            SchemaType::Object => "object",
            SchemaType::Array => "array",
            SchemaType::Null => "null",
            SchemaType::Other(name) => name,
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "string" => SchemaType::String,
            "number" => SchemaType::Number,
            "integer" => SchemaType::Integer,
            "boolean" => SchemaType::Boolean,
            "object" => SchemaType::Object,
            "array" => SchemaType::Array,
            "null" => SchemaType::Null,
            other => SchemaType::Other(other.to_string()),
        })
    }
}

impl From<&str> for SchemaType {
    fn from(name: &str) -> Self {
        match name.parse() {
            Ok(ty) => ty,
            Err(never) => match never {},
        }
    }
}

/// Wire shape of the `type` keyword
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum TypeNames {
    /// `"string"`
    One(String),
    /// `["string", "null"]`
    Many(Vec<String>),
}

/// Ordered, duplicate-free set of types declared by a schema
///
/// Deserializes from either `"string"` or `["string", "null"]`; serializes
/// back to the single form when exactly one type is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TypeNames", into = "TypeNames")]
pub struct TypeSet(Vec<SchemaType>);

impl TypeSet {
    /// Build a set from tags, keeping the first occurrence of each
    pub fn new(types: impl IntoIterator<Item = SchemaType>) -> Self {
        let mut set = Self::default();
        for ty in types {
            set.insert(ty);
        }
        set
    }

    /// Append a tag if it is not already present
    pub fn insert(&mut self, ty: SchemaType) {
        if !self.0.contains(&ty) {
            self.0.push(ty);
        }
    }

    pub fn contains(&self, ty: SchemaType) -> bool {
        self.0.contains(&ty)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemaType> + '_ {
        self.0.iter()
    }
}

impl From<SchemaType> for TypeSet {
    fn from(ty: SchemaType) -> Self {
        Self(vec![ty])
    }
}

impl FromIterator<SchemaType> for TypeSet {
    fn from_iter<I: IntoIterator<Item = SchemaType>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<TypeNames> for TypeSet {
    fn from(names: TypeNames) -> Self {
        match names {
            TypeNames::One(name) => SchemaType::from(name.as_str()).into(),
            TypeNames::Many(names) => names.iter().map(|name| SchemaType::from(name.as_str())).collect(),
        }
    }
}

impl From<TypeSet> for TypeNames {
    fn from(set: TypeSet) -> Self {
        let mut names: Vec<String> = set.0.iter().map(|ty| ty.as_str().to_string()).collect();
        if names.len() == 1 {
            TypeNames::One(names.remove(0))
        } else {
            TypeNames::Many(names)
        }
    }
}
