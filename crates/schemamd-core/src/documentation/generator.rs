//! Markdown documentation generator
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::documentation::table::Table;
use crate::documentation::templates::Template;
use crate::schema::{Schema, SchemaType};
use std::io;
use tracing::trace;

const PROPERTY_HEADERS: [&str; 4] = ["Property", "Type", "Required", "Description"];
const COLUMN_PROPERTY: usize = 0;
const COLUMN_REQUIRED: usize = 2;
const REQUIRED_YES: &str = "**Yes**";
const REQUIRED_NO: &str = "No";

/// Renders a resolved schema tree as Markdown
///
/// A section is the title heading, the description, a "Properties" heading,
/// the property table and then one nested section per object-valued
/// property, titled by the property name and ordered by that name.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self
    }

    /// Render `schema` with its title at heading `level` (values below 1 count as 1)
    pub fn render(&self, schema: &Schema, level: usize) -> String {
        let mut out = String::new();
        self.render_section(&mut out, &schema.title, schema, level.max(1));
        out
    }

    /// Render into any writer
    pub fn write_markdown<W: io::Write>(&self, writer: &mut W, schema: &Schema, level: usize) -> io::Result<()> {
        writer.write_all(self.render(schema, level).as_bytes())
    }

    fn render_section(&self, out: &mut String, title: &str, schema: &Schema, level: usize) {
        trace!(title, level, "Rendering section");

        if !title.is_empty() {
            out.push_str(&Template::heading(title, level));
            out.push_str("\n\n");
        }

        if !schema.description.is_empty() {
            out.push_str(&schema.description);
            out.push_str("\n\n");
        }

        if !schema.properties.is_empty() {
            out.push_str(&Template::heading("Properties", level.saturating_add(1)));
            out.push_str("\n\n");
        }

        out.push_str(&self.property_table(schema).render());
        out.push('\n');

        for (name, nested) in Self::nested_sections(schema) {
            self.render_section(out, name, nested, level.saturating_add(1));
        }
    }

    /// The property table for `schema`, optional rows before required ones, then by Property text
    pub fn property_table(&self, schema: &Schema) -> Table {
        let mut table = Table::new(PROPERTY_HEADERS);

        for (name, property) in &schema.properties {
            table.push_row([
                Template::code(name),
                Self::type_column(name, property),
                Self::required_column(schema.is_required(name)).to_string(),
                Self::description_column(property),
            ]);
        }

        // Optional rows first: compare the plain "No"/"Yes" text, not the bold markup.
        table.sort_rows_by(|a, b| {
            let required = |row: &Vec<String>| row[COLUMN_REQUIRED] == REQUIRED_YES;
            required(a)
                .cmp(&required(b))
                .then_with(|| a[COLUMN_PROPERTY].cmp(&b[COLUMN_PROPERTY]))
        });
        table
    }

    fn type_column(name: &str, property: &Schema) -> String {
        let mut alternatives = Vec::new();

        for ty in property.types.iter() {
            match ty {
                SchemaType::Object => alternatives.push(Template::anchor_link("object", name)),
                SchemaType::Array => match &property.items {
                    Some(items) => {
                        for item_type in items.types.iter() {
                            let element = match item_type {
                                SchemaType::Object => Template::anchor_link("object", name),
                                other => other.to_string(),
                            };
                            alternatives.push(format!("{}[]", element));
                        }
                    }
                    None => alternatives.push(SchemaType::Array.to_string()),
                },
                other => alternatives.push(other.to_string()),
            }
        }

        Template::join_alternatives(&alternatives)
    }

    fn required_column(required: bool) -> &'static str {
        if required {
            REQUIRED_YES
        } else {
            REQUIRED_NO
        }
    }

    fn description_column(property: &Schema) -> String {
        let description = property.description.trim();
        if property.enum_values.is_empty() {
            return description.to_string();
        }

        let values = Template::enum_values(&property.enum_values);
        if description.is_empty() {
            values
        } else {
            format!("{} {}", description, values)
        }
    }

    /// Object properties, and object items of array properties, sorted by name
    fn nested_sections(schema: &Schema) -> Vec<(&str, &Schema)> {
        let mut sections = Vec::new();

        for (name, property) in &schema.properties {
            if property.types.contains(SchemaType::Object) {
                sections.push((name.as_str(), property));
            }
            if property.types.contains(SchemaType::Array) {
                if let Some(items) = property.items.as_deref() {
                    if items.types.contains(SchemaType::Object) {
                        sections.push((name.as_str(), items));
                    }
                }
            }
        }

        sections.sort_by(|a, b| a.0.cmp(b.0));
        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn schema(json: &str) -> Schema {
        Schema::from_json_str(json).unwrap()
    }

    #[test]
    fn test_type_column_variants() {
        let s = schema(
            r#"{"properties": {
                "plain": {"type": "string"},
                "union": {"type": ["string", "number", "null"]},
                "home": {"type": "object"},
                "tags": {"type": "array", "items": {"type": "string"}},
                "lines": {"type": "array", "items": {"type": ["object", "null"]}},
                "bare": {"type": "array"},
                "untyped": {}
            }}"#,
        );

        let column = |name: &str| MarkdownRenderer::type_column(name, &s.properties[name]);
        assert_eq!(column("plain"), "string");
        assert_eq!(column("union"), "string, number, or null");
        assert_eq!(column("home"), "[object](#home)");
        assert_eq!(column("tags"), "string[]");
        assert_eq!(column("lines"), "[object](#lines)[] or null[]");
        assert_eq!(column("bare"), "array");
        assert_eq!(column("untyped"), "");
    }

    #[test]
    fn test_description_column_with_enum() {
        let s = schema(
            r#"{"properties": {
                "color": {"description": " Paint ", "enum": ["red", "green", "blue"]},
                "size": {"enum": [1, 2]}
            }}"#,
        );

        assert_eq!(
            MarkdownRenderer::description_column(&s.properties["color"]),
            "Paint Possible values are: `red`, `green`, or `blue`."
        );
        assert_eq!(
            MarkdownRenderer::description_column(&s.properties["size"]),
            "Possible values are: `1` or `2`."
        );
    }

    #[test]
    fn test_optional_rows_precede_required_rows() {
        let s = schema(
            r#"{
                "required": ["zip", "city"],
                "properties": {
                    "zip": {"type": "string"},
                    "city": {"type": "string"},
                    "apartment": {"type": "string"},
                    "note": {"type": "string"}
                }
            }"#,
        );

        let table = MarkdownRenderer::new().property_table(&s);
        let order: Vec<&str> = table.rows().iter().map(|r| r[0].as_str()).collect();
        assert_eq!(order, vec!["`apartment`", "`note`", "`city`", "`zip`"]);
    }

    #[test]
    fn test_level_is_clamped_to_one() {
        let s = schema(r#"{"title": "Root"}"#);
        let renderer = MarkdownRenderer::new();
        assert_eq!(renderer.render(&s, 0), renderer.render(&s, 1));
        assert!(renderer.render(&s, 0).starts_with("# Root\n\n"));
    }

    #[test]
    fn test_largest_level_renders_bold_titles() {
        let s = schema(r#"{"title": "Root", "properties": {"home": {"type": "object", "properties": {}}}}"#);
        let markdown = MarkdownRenderer::new().render(&s, usize::MAX);
        assert!(markdown.starts_with("**Root**\n\n**Properties**\n\n"));
        assert!(markdown.contains("**home**\n\n"));
    }

    #[test]
    fn test_write_markdown_matches_render() {
        let s = schema(r#"{"title": "Root", "properties": {"a": {"type": "boolean"}}}"#);
        let renderer = MarkdownRenderer::new();
        let mut buffer = Vec::new();
        renderer.write_markdown(&mut buffer, &s, 2).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), renderer.render(&s, 2));
    }
}
