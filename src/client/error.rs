use std::fmt;
use std::path::PathBuf;

/// Error types for password store client operations
#[derive(Debug)]
pub enum PassError {
    /// The external command exited non-zero; detail holds its captured stderr
    CommandFailed {
        operation: &'static str,
        name: String,
        detail: String,
    },

    /// Duplicate pre-check found an existing entry file
    AlreadyExists { name: String, passfile: PathBuf },

    /// Environment-derived precondition not satisfiable
    Precondition(String),

    /// The external command could not be spawned or its pipes failed
    Io(std::io::Error),
}

impl fmt::Display for PassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassError::CommandFailed {
                operation,
                name,
                detail,
            } => {
                write!(f, "pass {} failed for \"{}\"", operation, name)?;

                if !detail.is_empty() {
                    write!(f, ": {}", detail.trim_end())?;
                }

                Ok(())
            }
            PassError::AlreadyExists { name, passfile } => {
                write!(
                    f,
                    "Password \"{}\" already exists in password store ({})",
                    name,
                    passfile.display()
                )
            }
            PassError::Precondition(msg) => {
                write!(f, "Precondition failed: {}", msg)
            }
            PassError::Io(err) => {
                write!(f, "I/O error: {}", err)
            }
        }
    }
}

impl std::error::Error for PassError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PassError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PassError {
    fn from(err: std::io::Error) -> Self {
        PassError::Io(err)
    }
}

/// Result type for client operations
pub type PassResult<T> = Result<T, PassError>;
