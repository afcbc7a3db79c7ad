//! Framework-native diagnostics: a short summary plus free-form detail,
//! typically the external tool's captured stderr.

use crate::client::PassError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    #[allow(dead_code)]
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: String::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }
}

/// Ordered collection of diagnostics for one operation.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn has_error(&self) -> bool {
        self.0.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diagnostic: Diagnostic) -> Self {
        Self(vec![diagnostic])
    }
}

impl From<PassError> for Diagnostics {
    fn from(err: PassError) -> Self {
        let diagnostic = match err {
            PassError::CommandFailed {
                operation,
                name,
                detail,
            } => Diagnostic::error(format!("pass {} failed for \"{}\"", operation, name))
                .with_detail(detail),
            PassError::Io(io) => {
                Diagnostic::error("Failed to run pass").with_detail(io.to_string())
            }
            other => Diagnostic::error(other.to_string()),
        };
        diagnostic.into()
    }
}
