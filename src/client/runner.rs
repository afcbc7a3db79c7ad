use anyhow::{Context, Result};
use std::io::Write;
use std::process::{Command, Output, Stdio};

/// How the child process environment is assembled before overrides are applied.
///
/// `pass` relies on ambient state (PATH, the gpg-agent socket), so inheriting
/// is the default; `Clean` starts from an empty environment and sets only the
/// explicit overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvPolicy {
    #[default]
    Inherit,
    Clean,
}

/// Trait for spawning external commands, allowing for mocking in tests.
///
/// One call spawns exactly one child process, feeds it the given stdin bytes,
/// and blocks until it exits with both output streams fully captured. Secret
/// material is only ever passed through `stdin`, never through `args`.
pub trait CommandRunner: Send + Sync {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        env: EnvPolicy,
        extra_env: &[(String, String)],
        stdin: Option<&[u8]>,
    ) -> Result<Output>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for std::sync::Arc<T> {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        env: EnvPolicy,
        extra_env: &[(String, String)],
        stdin: Option<&[u8]>,
    ) -> Result<Output> {
        (**self).run(program, args, env, extra_env, stdin)
    }
}

/// Real command runner using std::process::Command
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        env: EnvPolicy,
        extra_env: &[(String, String)],
        stdin: Option<&[u8]>,
    ) -> Result<Output> {
        let mut command = Command::new(program);
        command.args(args);

        if env == EnvPolicy::Clean {
            command.env_clear();
        }
        for (key, value) in extra_env {
            command.env(key, value);
        }

        command
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = command
            .spawn()
            .with_context(|| format!("Failed to spawn '{}'", program))?;

        if let Some(bytes) = stdin {
            // Write and close the pipe so the child sees EOF.
            let mut handle = child
                .stdin
                .take()
                .context("Child process stdin was not piped")?;
            handle.write_all(bytes)?;
        }

        let output = child
            .wait_with_output()
            .with_context(|| format!("Failed to wait for '{}'", program))?;

        Ok(output)
    }
}

/// Mock command runner for testing
#[cfg(test)]
pub struct MockCommandRunner {
    /// Scripted results, consumed in call order
    results: std::sync::Mutex<std::collections::VecDeque<MockRunResult>>,
    /// Every call made through this runner
    calls: std::sync::Mutex<Vec<RecordedCall>>,
}

#[cfg(test)]
#[derive(Clone, Debug)]
pub struct MockRunResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[cfg(test)]
impl MockRunResult {
    pub fn ok(stdout: &str) -> Self {
        Self {
            exit_code: 0,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    pub fn fail(exit_code: i32, stderr: &str) -> Self {
        Self {
            exit_code,
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }
}

#[cfg(test)]
#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
    pub env: EnvPolicy,
    pub extra_env: Vec<(String, String)>,
    pub stdin: Option<Vec<u8>>,
}

#[cfg(test)]
impl MockCommandRunner {
    pub fn new() -> Self {
        Self {
            results: std::sync::Mutex::new(std::collections::VecDeque::new()),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn with_results(results: Vec<MockRunResult>) -> Self {
        Self {
            results: std::sync::Mutex::new(results.into()),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Default for MockCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl CommandRunner for MockCommandRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        env: EnvPolicy,
        extra_env: &[(String, String)],
        stdin: Option<&[u8]>,
    ) -> Result<Output> {
        self.calls.lock().unwrap().push(RecordedCall {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            env,
            extra_env: extra_env.to_vec(),
            stdin: stdin.map(|b| b.to_vec()),
        });

        let result = self
            .results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(MockRunResult {
                exit_code: 0,
                stdout: String::new(),
                stderr: String::new(),
            });

        Ok(Output {
            status: create_exit_status(result.exit_code),
            stdout: result.stdout.into_bytes(),
            stderr: result.stderr.into_bytes(),
        })
    }
}

#[cfg(test)]
pub fn create_exit_status(code: i32) -> std::process::ExitStatus {
    // ExitStatus can't be constructed directly; build one from a raw status
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        std::process::ExitStatus::from_raw(code << 8)
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::ExitStatusExt;
        std::process::ExitStatus::from_raw(code as u32)
    }
}
