use super::{finish, read_bag};
use crate::provider::{PasswordResource, ProviderConfig};
use anyhow::Result;

/// Lifecycle operations on the `pass_password` managed resource.
pub struct ResourceCommand;

impl ResourceCommand {
    pub fn execute_create(config: &ProviderConfig, input: &str) -> Result<()> {
        let client = config.client();
        let mut data = read_bag(PasswordResource::schema(), input)?;
        let diags = PasswordResource::create(&client, &mut data);
        finish("create", &data, &diags)
    }

    pub fn execute_read(config: &ProviderConfig, input: &str) -> Result<()> {
        let client = config.client();
        let mut data = read_bag(PasswordResource::schema(), input)?;
        let diags = PasswordResource::read(&client, &mut data);
        finish("read", &data, &diags)
    }

    pub fn execute_update(config: &ProviderConfig, input: &str) -> Result<()> {
        let client = config.client();
        let mut data = read_bag(PasswordResource::schema(), input)?;
        let diags = PasswordResource::update(&client, &mut data);
        finish("update", &data, &diags)
    }

    pub fn execute_delete(config: &ProviderConfig, input: &str) -> Result<()> {
        let client = config.client();
        let mut data = read_bag(PasswordResource::schema(), input)?;
        let diags = PasswordResource::delete(&client, &mut data);
        finish("delete", &data, &diags)
    }
}
