//! Markdown snippets and document templates
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::documentation::generator::MarkdownRenderer;
use crate::schema::Schema;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;
use thiserror::Error;

/// Deepest heading Markdown supports; deeper titles fall back to bold text
pub const MAX_HEADING_LEVEL: usize = 6;

/// Markdown building blocks shared by the renderer
pub struct Template;

impl Template {
    /// A heading at `level`, or bold text past [`MAX_HEADING_LEVEL`]
    pub fn heading(title: &str, level: usize) -> String {
        if level <= MAX_HEADING_LEVEL {
            format!("{} {}", "#".repeat(level), title)
        } else {
            format!("**{}**", title)
        }
    }

    /// Inline code span
    pub fn code(text: &str) -> String {
        format!("`{}`", text)
    }

    /// Relative link to the section rendered for property `name`
    pub fn anchor_link(label: &str, name: &str) -> String {
        format!("[{}](#{})", label, name.to_lowercase())
    }

    /// Join alternatives: `a`, `a or b`, `a, b, or c`
    pub fn join_alternatives<S: AsRef<str>>(items: &[S]) -> String {
        match items {
            [] => String::new(),
            [single] => single.as_ref().to_string(),
            [first, second] => format!("{} or {}", first.as_ref(), second.as_ref()),
            [init @ .., last] => {
                let init: Vec<&str> = init.iter().map(|s| s.as_ref()).collect();
                format!("{}, or {}", init.join(", "), last.as_ref())
            }
        }
    }

    /// Plain-text form of an enum literal
    pub fn literal(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Null => "null".to_string(),
            other => other.to_string(),
        }
    }

    /// Sentence listing the allowed values of an enum
    pub fn enum_values(values: &[Value]) -> String {
        let values: Vec<String> = values.iter().map(|v| Self::code(&Self::literal(v))).collect();
        format!("Possible values are: {}.", Self::join_alternatives(&values))
    }
}

/// Template parsing errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TemplateError {
    /// An action that is not one of the supported placeholders
    #[error("Unsupported template action '{action}' at byte {offset}")]
    UnsupportedAction { action: String, offset: usize },

    /// A `{{` with no matching `}}`
    #[error("Unclosed template action at byte {offset}")]
    Unclosed { offset: usize },
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// One piece of a parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Markdown(usize),
    Title,
    Description,
    Id,
    Dialect,
}

/// A user-supplied page layout with placeholders for the rendered schema
///
/// Supported actions: `{{ .Markdown N }}`, `{{ .Title }}`,
/// `{{ .Description }}`, `{{ .ID }}` and `{{ .Schema }}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocTemplate {
    segments: Vec<Segment>,
}

/// Largest level accepted by `{{ .Markdown N }}`
pub const MAX_TEMPLATE_LEVEL: usize = 64;

/// Source of the template used when none is supplied
pub const DEFAULT_TEMPLATE: &str = "{{ .Markdown 1 }}";

fn action_regex() -> &'static Regex {
    static ACTION: OnceLock<Regex> = OnceLock::new();
    ACTION.get_or_init(|| {
        Regex::new(r"^\.(?:Markdown\s+(\d+)|(Title|Description|ID|Schema))$")
            .expect("action pattern is valid")
    })
}

impl DocTemplate {
    /// Parse template text
    pub fn parse(source: &str) -> TemplateResult<Self> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(start) = rest.find("{{") {
            if start > 0 {
                segments.push(Segment::Text(rest[..start].to_string()));
            }
            let after_open = &rest[start + 2..];
            let end = after_open.find("}}").ok_or(TemplateError::Unclosed {
                offset: offset + start,
            })?;
            segments.push(Self::parse_action(after_open[..end].trim(), offset + start)?);

            let consumed = start + 2 + end + 2;
            offset += consumed;
            rest = &rest[consumed..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        Ok(Self { segments })
    }

    fn parse_action(action: &str, offset: usize) -> TemplateResult<Segment> {
        let unsupported = || TemplateError::UnsupportedAction {
            action: action.to_string(),
            offset,
        };
        let captures = action_regex().captures(action).ok_or_else(unsupported)?;

        if let Some(level) = captures.get(1) {
            let level = level
                .as_str()
                .parse::<usize>()
                .ok()
                .filter(|level| *level <= MAX_TEMPLATE_LEVEL)
                .ok_or_else(unsupported)?;
            return Ok(Segment::Markdown(level));
        }

        match captures.get(2).map(|m| m.as_str()) {
            Some("Title") => Ok(Segment::Title),
            Some("Description") => Ok(Segment::Description),
            Some("ID") => Ok(Segment::Id),
            Some("Schema") => Ok(Segment::Dialect),
            _ => Err(unsupported()),
        }
    }

    /// Substitute every placeholder with values from `schema`
    pub fn execute(&self, schema: &Schema, renderer: &MarkdownRenderer) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Markdown(level) => out.push_str(&renderer.render(schema, *level)),
                Segment::Title => out.push_str(&schema.title),
                Segment::Description => out.push_str(&schema.description),
                Segment::Id => out.push_str(&schema.id),
                Segment::Dialect => out.push_str(&schema.dialect),
            }
        }
        out
    }
}

impl Default for DocTemplate {
    fn default() -> Self {
        Self {
            segments: vec![Segment::Markdown(1)],
        }
    }
}
