//! Provider-level configuration shared by every password entry.

use crate::client::{EnvPolicy, PassClient};

#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    /// Absolute path of the password store to use, if not the default
    pub store: String,
    /// Whether spawned `pass` processes inherit the host environment
    pub env_policy: EnvPolicy,
    /// Check for an existing passfile before insert instead of relying on
    /// the tool's own duplicate rejection
    pub duplicate_check: bool,
}

impl ProviderConfig {
    /// Build the client every operation goes through.
    pub fn client(&self) -> PassClient {
        PassClient::with_options(self.store.clone(), self.env_policy, self.duplicate_check)
    }
}
