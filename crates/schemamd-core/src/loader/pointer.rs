//! JSON Pointer (RFC 6901) parsing and evaluation
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{ResolveError, ResolverResult};
use crate::loader::location::Location;
use serde_json::Value;
use std::fmt;

/// A parsed JSON pointer: an ordered list of unescaped reference tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPointer {
    raw: String,
    tokens: Vec<String>,
}

impl JsonPointer {
    /// Parse a pointer string; the empty string addresses the whole document
    pub fn parse(pointer: &str) -> ResolverResult<Self> {
        if pointer.is_empty() {
            return Ok(Self {
                raw: String::new(),
                tokens: Vec::new(),
            });
        }

        let Some(rest) = pointer.strip_prefix('/') else {
            return Err(ResolveError::invalid_pointer(
                pointer,
                "JSON pointer must start with '/' or be empty",
            ));
        };

        let tokens = rest
            .split('/')
            .map(|segment| unescape(segment, pointer))
            .collect::<ResolverResult<Vec<_>>>()?;

        Ok(Self {
            raw: pointer.to_string(),
            tokens,
        })
    }

    /// Unescaped reference tokens
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Evaluate against `document`; `location` is only used for error context
    pub fn evaluate<'a>(&self, document: &'a Value, location: &Location) -> ResolverResult<&'a Value> {
        let mut current = document;

        for token in &self.tokens {
            current = match current {
                Value::Object(map) => map.get(token).ok_or_else(|| {
                    ResolveError::pointer_not_found(
                        &self.raw,
                        location,
                        format!("Property '{}' not found", token),
                    )
                })?,
                Value::Array(items) => {
                    let index = parse_index(token).ok_or_else(|| {
                        ResolveError::pointer_not_found(
                            &self.raw,
                            location,
                            format!("Invalid array index '{}'", token),
                        )
                    })?;
                    items.get(index).ok_or_else(|| {
                        ResolveError::pointer_not_found(
                            &self.raw,
                            location,
                            format!("Array index {} out of bounds", index),
                        )
                    })?
                }
                _ => {
                    return Err(ResolveError::pointer_not_found(
                        &self.raw,
                        location,
                        format!("Cannot access '{}' on a non-object/array value", token),
                    ))
                }
            };
        }

        Ok(current)
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn unescape(segment: &str, pointer: &str) -> ResolverResult<String> {
    let mut out = String::with_capacity(segment.len());
    let mut chars = segment.chars();

    while let Some(ch) = chars.next() {
        if ch != '~' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('0') => out.push('~'),
            Some('1') => out.push('/'),
            _ => {
                return Err(ResolveError::invalid_pointer(
                    pointer,
                    "Invalid escape sequence in JSON pointer",
                ))
            }
        }
    }

    Ok(out)
}

/// Array indices are plain decimals without leading zeros
fn parse_index(token: &str) -> Option<usize> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if token.len() > 1 && token.starts_with('0') {
        return None;
    }
    token.parse().ok()
}
