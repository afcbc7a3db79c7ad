//! Adapter layer between the orchestration framework's property bags and the
//! pass client: schemas, diagnostics, and the password resource/data source.

pub mod config;
pub mod data;
pub mod diagnostics;
pub mod password_data_source;
pub mod password_resource;
pub mod schema;

pub use config::ProviderConfig;
pub use data::ResourceData;
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use password_data_source::PasswordDataSource;
pub use password_resource::PasswordResource;
pub use schema::Schema;
