//! Client for the external `pass(1)` password manager.

pub mod error;
pub mod pass;
pub mod runner;

pub use error::{PassError, PassResult};
pub use pass::PassClient;
pub use runner::{CommandRunner, EnvPolicy, SystemCommandRunner};
