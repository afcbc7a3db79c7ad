//! Test helpers shared across client and adapter tests.

#![cfg(test)]

use crate::client::runner::{create_exit_status, CommandRunner, EnvPolicy};
use anyhow::Result;
use secrecy::SecretString;
use std::collections::HashMap;
use std::process::Output;
use std::sync::Mutex;

pub fn secret(s: &str) -> SecretString {
    SecretString::new(s.to_string())
}

/// In-memory stand-in for `pass`: honors insert/show/rm semantics closely
/// enough to exercise stdin encoding and output normalization end to end.
pub struct FakePassRunner {
    entries: Mutex<HashMap<String, String>>,
}

impl FakePassRunner {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn respond(exit_code: i32, stdout: &str, stderr: &str) -> Output {
        Output {
            status: create_exit_status(exit_code),
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
        }
    }
}

impl Default for FakePassRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for FakePassRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        _env: EnvPolicy,
        _extra_env: &[(String, String)],
        stdin: Option<&[u8]>,
    ) -> Result<Output> {
        assert_eq!(program, "pass");
        let mut entries = self.entries.lock().unwrap();

        match args[0] {
            "insert" => {
                let force = args.contains(&"--force");
                let multiline = args.contains(&"--multiline");
                let name = *args.last().unwrap();
                let input = String::from_utf8(stdin.unwrap().to_vec()).unwrap();

                if !force && entries.contains_key(name) {
                    return Ok(Self::respond(
                        1,
                        "",
                        &format!("An entry already exists for {}.\n", name),
                    ));
                }

                // pass stores the first stdin line plus a newline in
                // single-line mode, and the raw stdin in multiline mode.
                let stored = if multiline {
                    input
                } else {
                    let line = input.lines().next().unwrap_or("");
                    format!("{}\n", line)
                };
                entries.insert(name.to_string(), stored);
                Ok(Self::respond(0, "", ""))
            }
            "show" => {
                let name = args[1];
                match entries.get(name) {
                    Some(stored) => Ok(Self::respond(0, stored, "")),
                    None => Ok(Self::respond(
                        1,
                        "",
                        &format!("Error: {} is not in the password store.\n", name),
                    )),
                }
            }
            "rm" => {
                let name = *args.last().unwrap();
                match entries.remove(name) {
                    Some(_) => Ok(Self::respond(0, "", "")),
                    None => Ok(Self::respond(
                        1,
                        "",
                        &format!("Error: {} is not in the password store.\n", name),
                    )),
                }
            }
            other => panic!("unexpected pass subcommand: {}", other),
        }
    }
}
