//! Schema documentation generation
//!
//! This module turns a resolved schema tree into Markdown: a heading per
//! object, a property table, and nested sections for object-valued
//! properties. Templates wrap the rendered Markdown in a user-defined page.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod generator;
pub mod table;
pub mod templates;

pub use generator::MarkdownRenderer;
pub use table::Table;
pub use templates::{DocTemplate, Template, TemplateError, TemplateResult, DEFAULT_TEMPLATE};

use crate::schema::Schema;

/// Render a schema with the default template
pub fn generate_docs(schema: &Schema) -> String {
    DocTemplate::default().execute(schema, &MarkdownRenderer::new())
}

/// Render a schema through template text
pub fn generate_docs_with_template(schema: &Schema, template: &str) -> TemplateResult<String> {
    let template = DocTemplate::parse(template)?;
    Ok(template.execute(schema, &MarkdownRenderer::new()))
}
