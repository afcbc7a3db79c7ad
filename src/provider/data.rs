//! Generic property bag mirroring the framework's view of a resource.

use super::schema::Schema;
use anyhow::{bail, Result};
use secrecy::SecretString;
use serde_json::{Map, Value};
use std::fmt;

/// Key under which an existing identity may be supplied in the input object.
const ID_KEY: &str = "id";

/// Declared and computed fields of one resource instance, validated against
/// its schema, plus the framework-level identity.
pub struct ResourceData {
    schema: Schema,
    values: Map<String, Value>,
    id: Option<String>,
}

impl ResourceData {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            values: Map::new(),
            id: None,
        }
    }

    /// Build a bag from a JSON object, rejecting unknown attributes and
    /// non-string values.
    pub fn from_json(schema: Schema, input: Value) -> Result<Self> {
        let Value::Object(fields) = input else {
            bail!("Resource input must be a JSON object");
        };

        let mut data = Self::new(schema);
        for (key, value) in fields {
            if key == ID_KEY {
                match value {
                    Value::String(id) => data.id = Some(id),
                    Value::Null => {}
                    _ => bail!("Attribute \"id\" must be a string"),
                }
                continue;
            }

            if schema.attribute(&key).is_none() {
                bail!("Unknown attribute \"{}\"", key);
            }
            let Value::String(text) = value else {
                bail!("Attribute \"{}\" must be a string", key);
            };
            data.values.insert(key, Value::String(text));
        }

        Ok(data)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Fetch a required attribute, failing with a framework-style message
    /// when it is absent.
    pub fn require_str(&self, key: &str) -> Result<&str> {
        match self.get_str(key) {
            Some(value) => Ok(value),
            None => bail!("Missing required attribute \"{}\"", key),
        }
    }

    /// Fetch a sensitive attribute wrapped so it stays out of debug output.
    pub fn require_secret(&self, key: &str) -> Result<SecretString> {
        Ok(SecretString::new(self.require_str(key)?.to_string()))
    }

    /// Write a value back into the bag. Fails for attributes the schema does
    /// not declare; the framework treats that as fatal for the operation.
    pub fn set_str(&mut self, key: &str, value: &str) -> Result<()> {
        if self.schema.attribute(key).is_none() {
            bail!("Cannot store value: schema has no attribute \"{}\"", key);
        }
        self.values
            .insert(key.to_string(), Value::String(value.to_string()));
        Ok(())
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: &str) {
        self.id = Some(id.to_string());
    }

    pub fn clear_id(&mut self) {
        self.id = None;
    }

    /// Render the bag for the framework: all values plus the identity.
    pub fn to_json(&self) -> Value {
        let mut fields = self.values.clone();
        fields.insert(
            ID_KEY.to_string(),
            match &self.id {
                Some(id) => Value::String(id.clone()),
                None => Value::Null,
            },
        );
        Value::Object(fields)
    }
}

impl fmt::Debug for ResourceData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("ResourceData");
        debug.field("id", &self.id);
        for (key, value) in &self.values {
            if self.schema.is_sensitive(key) {
                debug.field(key, &"(sensitive value)");
            } else {
                debug.field(key, value);
            }
        }
        debug.finish()
    }
}
