//! The `pass_password` data source: reads a password from your password
//! store without ever writing to it.

use super::data::ResourceData;
use super::diagnostics::{Diagnostic, Diagnostics};
use super::schema::{Schema, PASSWORD_DATA_SOURCE};
use crate::client::PassClient;
use secrecy::ExposeSecret;

pub struct PasswordDataSource;

impl PasswordDataSource {
    pub fn schema() -> Schema {
        PASSWORD_DATA_SOURCE
    }

    pub fn read(client: &PassClient, data: &mut ResourceData) -> Diagnostics {
        let name = match data.require_str("name") {
            Ok(name) => name.to_string(),
            Err(err) => return Diagnostic::error(err.to_string()).into(),
        };

        let password = match client.get(&name) {
            Ok(password) => password,
            Err(err) => return err.into(),
        };

        if let Err(err) = data.set_str("password", password.expose_secret()) {
            return Diagnostic::error("Failed to store the decrypted value")
                .with_detail(err.to_string())
                .into();
        }

        data.set_id(&name);
        Diagnostics::new()
    }
}
