//! Attribute schemas for the resources this provider exposes.

use serde::Serialize;

/// A single string attribute in a resource schema.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Attribute {
    pub name: &'static str,
    pub description: &'static str,
    /// Must be supplied by the framework for write operations
    pub required: bool,
    /// Redacted in logs, debug output, and diagnostics
    pub sensitive: bool,
    /// Populated by the provider rather than the configuration
    pub computed: bool,
}

/// Schema for one resource or data source: the set of attributes the
/// property bag may carry.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct Schema {
    pub attributes: &'static [Attribute],
}

impl Schema {
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn is_sensitive(&self, name: &str) -> bool {
        self.attribute(name).is_some_and(|a| a.sensitive)
    }
}

/// Provider-level settings shared by every resource instance.
pub const PROVIDER: Schema = Schema {
    attributes: &[Attribute {
        name: "store",
        description: "The absolute path of the password store to use, if not the default",
        required: false,
        sensitive: false,
        computed: false,
    }],
};

/// Schema of the `pass_password` managed resource.
pub const PASSWORD_RESOURCE: Schema = Schema {
    attributes: &[
        Attribute {
            name: "name",
            description: "The name of the password to decrypt",
            required: true,
            sensitive: false,
            computed: false,
        },
        Attribute {
            name: "password",
            description: "The decrypted password's value",
            required: true,
            sensitive: true,
            computed: false,
        },
    ],
};

/// Schema of the `pass_password` data source; the value is computed, never
/// supplied.
pub const PASSWORD_DATA_SOURCE: Schema = Schema {
    attributes: &[
        Attribute {
            name: "name",
            description: "The name of the password to decrypt",
            required: true,
            sensitive: false,
            computed: false,
        },
        Attribute {
            name: "password",
            description: "The decrypted password's value",
            required: false,
            sensitive: true,
            computed: true,
        },
    ],
};
