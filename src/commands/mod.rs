//! CLI subcommand implementations: one adapter operation per invocation.

mod data;
mod resource;
mod schema;

pub use data::DataCommand;
pub use resource::ResourceCommand;
pub use schema::SchemaCommand;

use crate::output;
use crate::provider::{Diagnostics, ResourceData, Schema};
use anyhow::{Context, Result};
use std::io::Read;

/// Load the JSON property bag from a file, or stdin when the path is "-".
fn read_bag(schema: Schema, input: &str) -> Result<ResourceData> {
    let raw = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read the property bag from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read the property bag from '{}'", input))?
    };

    let value: serde_json::Value =
        serde_json::from_str(&raw).context("Property bag is not valid JSON")?;
    ResourceData::from_json(schema, value)
}

/// Render diagnostics on stderr, and on success print the resulting bag on
/// stdout for the framework to consume.
fn finish(operation: &str, data: &ResourceData, diags: &Diagnostics) -> Result<()> {
    for diag in diags.iter() {
        output::diagnostic(diag);
    }

    if diags.has_error() {
        anyhow::bail!("{} failed", operation);
    }

    println!("{}", serde_json::to_string_pretty(&data.to_json())?);
    output::success(&format!("{} complete", operation));
    Ok(())
}
