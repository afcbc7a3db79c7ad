use super::{finish, read_bag};
use crate::provider::{PasswordDataSource, ProviderConfig};
use anyhow::Result;

/// Read-only access to the `pass_password` data source.
pub struct DataCommand;

impl DataCommand {
    pub fn execute_read(config: &ProviderConfig, input: &str) -> Result<()> {
        let client = config.client();
        let mut data = read_bag(PasswordDataSource::schema(), input)?;
        let diags = PasswordDataSource::read(&client, &mut data);
        finish("get", &data, &diags)
    }
}
