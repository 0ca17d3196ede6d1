//! External command execution.
//!
//! Every heavy step (structure conversion, path interpolation, viewing,
//! deck writing) is delegated to an external program configured as a
//! [`CommandConfig`]. This module expands the argument templates and runs
//! the resulting command to completion.

use akmc_protocol::CommandConfig;
use log::debug;
use std::process::{ExitStatus, Stdio};
use thiserror::Error;
use tokio::process::Command;

/// Errors from running an external program.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Failed to spawn command '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("Command '{program}' exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Named values substituted into argument templates.
///
/// A scalar `{name}` is replaced wherever it occurs inside an argument. An
/// argument that consists of exactly `{name}` bound to a list is replaced by
/// the list items, one argument each (an empty list removes the argument).
/// Placeholders without a binding are left untouched.
#[derive(Debug, Clone, Default)]
pub struct Placeholders {
    values: Vec<(String, Value)>,
}

#[derive(Debug, Clone)]
enum Value {
    Scalar(String),
    List(Vec<String>),
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `{name}` to a single value.
    pub fn set(mut self, name: &str, value: impl Into<String>) -> Self {
        self.values
            .push((format!("{{{name}}}"), Value::Scalar(value.into())));
        self
    }

    /// Bind `{name}` to a list of values.
    pub fn set_list(mut self, name: &str, values: Vec<String>) -> Self {
        self.values.push((format!("{{{name}}}"), Value::List(values)));
        self
    }

    /// Expand an argument template.
    pub fn expand(&self, args: &[String]) -> Vec<String> {
        let mut expanded = Vec::with_capacity(args.len());

        for arg in args {
            if let Some(Value::List(items)) = self.lookup(arg) {
                expanded.extend(items.iter().cloned());
                continue;
            }

            let mut result = arg.clone();
            for (key, value) in &self.values {
                if !result.contains(key.as_str()) {
                    continue;
                }
                let replacement = match value {
                    Value::Scalar(s) => s.clone(),
                    Value::List(items) => items.join(" "),
                };
                result = result.replace(key.as_str(), &replacement);
            }
            expanded.push(result);
        }

        expanded
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }
}

/// A fully expanded command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn from_config(config: &CommandConfig, placeholders: &Placeholders) -> Self {
        Self {
            program: config.program.clone(),
            args: placeholders.expand(&config.args),
        }
    }

    /// Run the command to completion.
    ///
    /// Stdout is discarded, stderr is captured for the error message.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Spawn` if the program cannot be started and
    /// `CommandError::Failed` if it exits unsuccessfully.
    pub async fn run(&self) -> Result<(), CommandError> {
        debug!("Running {} {:?}", self.program, self.args);

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::piped());

        let output = cmd.output().await.map_err(|source| CommandError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        if output.status.success() {
            return Ok(());
        }

        Err(CommandError::Failed {
            program: self.program.clone(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }

    /// Run the command with inherited stdio, for interactive programs.
    pub async fn run_interactive(&self) -> Result<(), CommandError> {
        debug!("Running interactively {} {:?}", self.program, self.args);

        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .await
            .map_err(|source| CommandError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(CommandError::Failed {
                program: self.program.clone(),
                status,
                stderr: String::new(),
            })
        }
    }
}

/// Check whether a program can be resolved, either as a path or on `PATH`.
pub fn program_available(program: &str) -> bool {
    which::which(program).is_ok()
}
