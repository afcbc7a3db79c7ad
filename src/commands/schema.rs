use crate::provider::{schema, PasswordDataSource, PasswordResource};
use anyhow::Result;
use serde_json::json;

/// Dumps the provider's schemas so the calling framework can learn which
/// attributes each resource carries and which are sensitive.
pub struct SchemaCommand;

impl SchemaCommand {
    pub fn execute() -> Result<()> {
        let schemas = json!({
            "provider": schema::PROVIDER,
            "resources": {
                "pass_password": PasswordResource::schema(),
            },
            "data_sources": {
                "pass_password": PasswordDataSource::schema(),
            },
        });

        println!("{}", serde_json::to_string_pretty(&schemas)?);
        Ok(())
    }
}
