//! The `pass_password` managed resource: a password stored within your
//! password vault.

use super::data::ResourceData;
use super::diagnostics::{Diagnostic, Diagnostics};
use super::schema::{Schema, PASSWORD_RESOURCE};
use crate::client::PassClient;
use secrecy::ExposeSecret;

pub struct PasswordResource;

impl PasswordResource {
    pub fn schema() -> Schema {
        PASSWORD_RESOURCE
    }

    /// Insert a new entry; the entry's identity becomes its name.
    pub fn create(client: &PassClient, data: &mut ResourceData) -> Diagnostics {
        let name = match data.require_str("name") {
            Ok(name) => name.to_string(),
            Err(err) => return Diagnostic::error(err.to_string()).into(),
        };
        let password = match data.require_secret("password") {
            Ok(password) => password,
            Err(err) => return Diagnostic::error(err.to_string()).into(),
        };

        if let Err(err) = client.create(&name, &password) {
            return err.into();
        }

        data.set_id(&name);
        Diagnostics::new()
    }

    /// Decrypt the entry and store its value back into the bag.
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

    /// Overwrite the entry in place. Identity is immutable: a changed name
    /// means the framework must replace the resource, not update it.
    pub fn update(client: &PassClient, data: &mut ResourceData) -> Diagnostics {
        let name = match data.require_str("name") {
            Ok(name) => name.to_string(),
            Err(err) => return Diagnostic::error(err.to_string()).into(),
        };

        if let Some(id) = data.id() {
            if id != name {
                return Diagnostic::error("Password entries cannot be renamed in place")
                    .with_detail(format!(
                        "Entry \"{}\" was asked to become \"{}\"; changing the name forces a replacement",
                        id, name
                    ))
                    .into();
            }
        }

        let password = match data.require_secret("password") {
            Ok(password) => password,
            Err(err) => return Diagnostic::error(err.to_string()).into(),
        };

        if let Err(err) = client.overwrite(&name, &password) {
            return err.into();
        }

        data.set_id(&name);
        Diagnostics::new()
    }

    /// Remove the entry and clear its identity.
    pub fn delete(client: &PassClient, data: &mut ResourceData) -> Diagnostics {
        let name = match data.require_str("name") {
            Ok(name) => name.to_string(),
            Err(err) => return Diagnostic::error(err.to_string()).into(),
        };

        if let Err(err) = client.delete(&name) {
            return err.into();
        }

        data.clear_id();
        Diagnostics::new()
    }
}
