//! Command handler for rendering a schema
//!
//! Loads the root document, resolves it, applies the template and writes
//! the page to the given sink.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use schemamd_core::{DocTemplate, LoaderConfig, MarkdownRenderer, SchemaLoader};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Render the schema named on the command line into `out`
#[instrument(skip_all, fields(schema = %source))]
pub fn handle_render<W: Write>(source: &str, cli: &Cli, config: &Config, out: &mut W) -> Result<()> {
    let loader_config = LoaderConfig {
        fetch_timeout: config.fetch.timeout(cli.timeout),
    };
    debug!(timeout = ?loader_config.fetch_timeout, "Creating schema loader");
    let mut loader = SchemaLoader::with_config(loader_config)?;

    let schema = {
        let timer = Timer::with_details("schema_resolution", source);
        let schema = loader.load_source(source)?;
        info!(elapsed_ms = timer.elapsed().as_millis() as u64, "Schema resolved");
        schema
    };

    let template_path = cli.template.as_deref().or(config.render.template.as_deref());
    let template = load_template(template_path, config.render.heading_level)?;

    let page = {
        let _timer = Timer::new("rendering");
        template.execute(&schema, &MarkdownRenderer::new())
    };

    out.write_all(page.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Read and parse a template file, or build the default one at `heading_level`
pub fn load_template(path: Option<&Path>, heading_level: usize) -> Result<DocTemplate> {
    let Some(path) = path else {
        if heading_level == 1 {
            return Ok(DocTemplate::default());
        }
        return Ok(DocTemplate::parse(&format!("{{{{ .Markdown {} }}}}", heading_level))?);
    };

    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), "Reading template");
    let source = fs::read_to_string(path)?;
    Ok(DocTemplate::parse(&source)?)
}
