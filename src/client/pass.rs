//! Thin client around the `pass(1)` command line tool.
//!
//! Every operation spawns exactly one `pass` process through a
//! [`CommandRunner`] and blocks until it exits. The store itself (encryption,
//! key management, file layout) belongs entirely to `pass`; this client only
//! builds arguments and environment, encodes stdin, and normalizes output.

use super::error::{PassError, PassResult};
use super::runner::{CommandRunner, EnvPolicy, SystemCommandRunner};
use secrecy::{ExposeSecret, SecretString};
use std::path::PathBuf;

/// Environment variable overriding the store location for a spawned `pass`.
pub const STORE_DIR_ENV: &str = "PASSWORD_STORE_DIR";

/// Environment variable carrying the terminal for gpg passphrase prompts.
pub const GPG_TTY_ENV: &str = "GPG_TTY";

/// Store directory `pass` uses when no override is set, relative to home.
const DEFAULT_STORE_SUBDIR: &str = ".password-store";

const PASS_PROGRAM: &str = "pass";

/// Client for a `pass`-managed password store.
///
/// Holds no state beyond its configuration; every read and write is a fresh
/// external invocation and the on-disk store remains the source of truth.
pub struct PassClient {
    /// Store path override; empty means the tool's default store
    store: String,
    /// Terminal identifier captured from GPG_TTY at construction
    tty: Option<String>,
    env_policy: EnvPolicy,
    /// Reject duplicates by checking for the entry file before inserting
    duplicate_check: bool,
    runner: Box<dyn CommandRunner>,
}

impl PassClient {
    /// Create a client with default options (inherited environment, no
    /// duplicate pre-check).
    pub fn new(store: impl Into<String>) -> Self {
        Self::with_options(store, EnvPolicy::default(), false)
    }

    pub fn with_options(
        store: impl Into<String>,
        env_policy: EnvPolicy,
        duplicate_check: bool,
    ) -> Self {
        Self {
            store: store.into(),
            tty: std::env::var(GPG_TTY_ENV).ok(),
            env_policy,
            duplicate_check,
            runner: Box::new(SystemCommandRunner::new()),
        }
    }

    /// Substitute the process runner (used by tests to fake `pass`).
    pub fn with_runner(mut self, runner: Box<dyn CommandRunner>) -> Self {
        self.runner = runner;
        self
    }

    #[cfg(test)]
    pub fn with_tty(mut self, tty: Option<&str>) -> Self {
        self.tty = tty.map(|t| t.to_string());
        self
    }

    /// Insert a new entry. Fails when the entry already exists, either via
    /// the optional pre-check or via the tool's own duplicate rejection.
    pub fn create(&self, name: &str, password: &SecretString) -> PassResult<()> {
        if self.duplicate_check {
            self.reject_duplicate(name)?;
        }
        self.insert(name, password, false)
    }

    /// Insert with `--force`, replacing any existing entry in place.
    pub fn overwrite(&self, name: &str, password: &SecretString) -> PassResult<()> {
        self.insert(name, password, true)
    }

    /// Decrypt and return an entry's value.
    ///
    /// A single-line secret comes back from `pass show` with one trailing
    /// newline, which is stripped; any other newline count is left untouched
    /// so multi-line secrets round-trip byte for byte.
    pub fn get(&self, name: &str) -> PassResult<SecretString> {
        let output = self.run("show", name, &["show", name], None)?;
        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        Ok(SecretString::new(normalize_single_line(text)))
    }

    /// Remove an entry without prompting.
    pub fn delete(&self, name: &str) -> PassResult<()> {
        self.run("rm", name, &["rm", "--force", name], None)?;
        Ok(())
    }

    fn insert(&self, name: &str, password: &SecretString, force: bool) -> PassResult<()> {
        let secret = password.expose_secret();
        let multiline = secret.contains('\n');

        let mut args = vec!["insert"];
        if force {
            args.push("--force");
        }
        if multiline {
            args.push("--multiline");
        }
        args.push(name);

        // pass reads a single-line secret twice (value + confirmation);
        // a multi-line secret is consumed verbatim until EOF.
        let stdin = if multiline {
            secret.as_bytes().to_vec()
        } else {
            format!("{}\n{}\n", secret, secret).into_bytes()
        };

        self.run("insert", name, &args, Some(&stdin))?;
        Ok(())
    }

    fn run(
        &self,
        operation: &'static str,
        name: &str,
        args: &[&str],
        stdin: Option<&[u8]>,
    ) -> PassResult<std::process::Output> {
        let output = self
            .runner
            .run(
                PASS_PROGRAM,
                args,
                self.env_policy,
                &self.env_overrides(),
                stdin,
            )
            .map_err(|err| match err.downcast::<std::io::Error>() {
                Ok(io) => PassError::Io(io),
                Err(other) => PassError::Io(std::io::Error::other(other.to_string())),
            })?;

        if !output.status.success() {
            return Err(PassError::CommandFailed {
                operation,
                name: name.to_string(),
                detail: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(output)
    }

    fn env_overrides(&self) -> Vec<(String, String)> {
        let mut env = Vec::new();
        if !self.store.is_empty() {
            env.push((STORE_DIR_ENV.to_string(), self.store.clone()));
        }
        if let Some(tty) = &self.tty {
            env.push((GPG_TTY_ENV.to_string(), tty.clone()));
        }
        env
    }

    /// pass has no "exists" subcommand, so the pre-check duplicates its own
    /// passfile lookup against `<store>/<name>.gpg`.
    fn reject_duplicate(&self, name: &str) -> PassResult<()> {
        let store_dir = if self.store.is_empty() {
            dirs::home_dir()
                .ok_or_else(|| {
                    PassError::Precondition(
                        "Could not determine the home directory for the default password store"
                            .to_string(),
                    )
                })?
                .join(DEFAULT_STORE_SUBDIR)
        } else {
            PathBuf::from(&self.store)
        };

        let passfile = store_dir.join(format!("{}.gpg", name));
        if passfile.exists() {
            return Err(PassError::AlreadyExists {
                name: name.to_string(),
                passfile,
            });
        }

        Ok(())
    }
}

/// Strip exactly one trailing newline when the text contains exactly one
/// newline character; leave every other shape alone.
fn normalize_single_line(text: String) -> String {
    if text.matches('\n').count() == 1 {
        if let Some(stripped) = text.strip_suffix('\n') {
            return stripped.to_string();
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::runner::{MockCommandRunner, MockRunResult};
    use crate::test_helpers::{secret, FakePassRunner};
    use std::sync::Arc;

    fn fake_client() -> PassClient {
        PassClient::new("")
            .with_tty(None)
            .with_runner(Box::new(FakePassRunner::new()))
    }

    #[test]
    fn test_single_line_secret_round_trips_exactly() {
        let client = fake_client();
        client.create("svc/api", &secret("secret123")).unwrap();

        let value = client.get("svc/api").unwrap();
        assert_eq!(value.expose_secret(), "secret123");
    }

    #[test]
    fn test_multi_line_secret_round_trips_exactly() {
        let client = fake_client();
        client.create("svc/multi", &secret("line1\nline2")).unwrap();

        let value = client.get("svc/multi").unwrap();
        assert_eq!(value.expose_secret(), "line1\nline2");
    }

    #[test]
    fn test_multi_line_secret_with_trailing_newline_round_trips() {
        let client = fake_client();
        client
            .create("svc/pem", &secret("line1\nline2\n"))
            .unwrap();

        let value = client.get("svc/pem").unwrap();
        assert_eq!(value.expose_secret(), "line1\nline2\n");
    }

    #[test]
    fn test_get_missing_entry_fails_with_detail() {
        let client = fake_client();
        let err = client.get("missing").unwrap_err();

        match err {
            PassError::CommandFailed {
                operation, detail, ..
            } => {
                assert_eq!(operation, "show");
                assert!(!detail.is_empty());
                assert!(detail.contains("not in the password store"));
            }
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_create_rejects_existing_entry_but_overwrite_replaces_it() {
        let client = fake_client();
        client.create("svc/api", &secret("first")).unwrap();

        let err = client.create("svc/api", &secret("second")).unwrap_err();
        assert!(matches!(err, PassError::CommandFailed { .. }));
        assert_eq!(client.get("svc/api").unwrap().expose_secret(), "first");

        client.overwrite("svc/api", &secret("second")).unwrap();
        assert_eq!(client.get("svc/api").unwrap().expose_secret(), "second");
    }

    #[test]
    fn test_delete_removes_entry_and_subsequent_get_fails() {
        let client = fake_client();
        client.create("svc/api", &secret("secret123")).unwrap();

        client.delete("svc/api").unwrap();
        assert!(client.get("svc/api").is_err());
    }

    #[test]
    fn test_single_line_insert_writes_value_twice_on_stdin() {
        let runner = Arc::new(MockCommandRunner::new());
        let client = PassClient::new("")
            .with_tty(None)
            .with_runner(Box::new(runner.clone()));
        client.create("svc/api", &secret("secret123")).unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].args, vec!["insert", "svc/api"]);
        assert_eq!(
            calls[0].stdin.as_deref(),
            Some(&b"secret123\nsecret123\n"[..])
        );
    }

    #[test]
    fn test_multi_line_insert_uses_multiline_mode_with_verbatim_stdin() {
        let runner = Arc::new(MockCommandRunner::new());
        let client = PassClient::new("")
            .with_tty(None)
            .with_runner(Box::new(runner.clone()));
        client.overwrite("svc/multi", &secret("line1\nline2")).unwrap();

        let calls = runner.calls();
        assert_eq!(
            calls[0].args,
            vec!["insert", "--force", "--multiline", "svc/multi"]
        );
        assert_eq!(calls[0].stdin.as_deref(), Some(&b"line1\nline2"[..]));
    }

    #[test]
    fn test_store_override_sets_env_var_exactly() {
        let runner = Arc::new(MockCommandRunner::new());
        let client = PassClient::new("/tmp/fixture-store")
            .with_tty(Some("/dev/tty1"))
            .with_runner(Box::new(runner.clone()));
        client.get("svc/api").unwrap();

        let calls = runner.calls();
        assert_eq!(
            calls[0].extra_env,
            vec![
                (
                    "PASSWORD_STORE_DIR".to_string(),
                    "/tmp/fixture-store".to_string()
                ),
                ("GPG_TTY".to_string(), "/dev/tty1".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_store_sets_no_store_env_var() {
        let runner = Arc::new(MockCommandRunner::new());
        let client = PassClient::new("")
            .with_tty(None)
            .with_runner(Box::new(runner.clone()));
        client.get("svc/api").unwrap();

        assert!(runner.calls()[0].extra_env.is_empty());
    }

    #[test]
    fn test_secret_never_appears_in_argv() {
        let runner = Arc::new(MockCommandRunner::new());
        let client = PassClient::new("")
            .with_tty(None)
            .with_runner(Box::new(runner.clone()));
        client.create("svc/api", &secret("hunter2")).unwrap();

        for call in runner.calls() {
            assert!(call.args.iter().all(|a| !a.contains("hunter2")));
            assert!(call.extra_env.iter().all(|(_, v)| !v.contains("hunter2")));
        }
    }

    #[test]
    fn test_insert_failure_detail_carries_stderr_not_secret() {
        let runner = MockCommandRunner::with_results(vec![MockRunResult::fail(
            2,
            "gpg: decryption failed: No secret key\n",
        )]);
        let client = PassClient::new("")
            .with_tty(None)
            .with_runner(Box::new(runner));

        let err = client.create("svc/api", &secret("hunter2")).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("No secret key"));
        assert!(!text.contains("hunter2"));
    }

    #[test]
    fn test_duplicate_precheck_rejects_existing_passfile() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("svc")).unwrap();
        std::fs::write(dir.path().join("svc/api.gpg"), b"cipher").unwrap();

        let client = PassClient::with_options(
            dir.path().to_str().unwrap(),
            EnvPolicy::Inherit,
            true,
        )
        .with_tty(None)
        .with_runner(Box::new(FakePassRunner::new()));

        let err = client.create("svc/api", &secret("x")).unwrap_err();
        assert!(matches!(err, PassError::AlreadyExists { .. }));
    }

    #[test]
    fn test_duplicate_precheck_passes_for_new_entry() {
        let dir = tempfile::tempdir().unwrap();
        let client = PassClient::with_options(
            dir.path().to_str().unwrap(),
            EnvPolicy::Inherit,
            true,
        )
        .with_tty(None)
        .with_runner(Box::new(FakePassRunner::new()));

        client.create("svc/new", &secret("x")).unwrap();
    }

    #[test]
    fn test_normalize_strips_exactly_one_trailing_newline() {
        assert_eq!(normalize_single_line("secret123\n".to_string()), "secret123");
    }

    #[test]
    fn test_normalize_leaves_zero_newlines_untouched() {
        assert_eq!(normalize_single_line("secret123".to_string()), "secret123");
    }

    #[test]
    fn test_normalize_leaves_embedded_single_newline_untouched() {
        assert_eq!(normalize_single_line("a\nb".to_string()), "a\nb");
    }

    #[test]
    fn test_normalize_leaves_two_or_more_newlines_untouched() {
        assert_eq!(
            normalize_single_line("line1\nline2\n".to_string()),
            "line1\nline2\n"
        );
    }
}
