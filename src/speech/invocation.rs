//! External command invocations
//!
//! An `Invocation` is a program plus its argument list. Backends build one
//! per utterance, run it once with a blocking wait, and map the outcome to
//! a `DispatchError` using their own `FailureHints`.

use crate::{DispatchError, Result};
use log::{debug, error};
use std::fmt;
use std::io;
use std::process::{Command, ExitStatus, Stdio};

/// Diagnostics a backend reports when its speech host fails
#[derive(Debug, Clone, Copy)]
pub struct FailureHints {
    /// Prefix for spawn failures; the OS error follows it
    pub spawn: &'static str,
    /// Reported when the process exits non-zero
    pub exit: &'static str,
    /// Reported when waiting for the process is interrupted
    pub interrupted: &'static str,
}

/// A program and argument list, executed exactly once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Run `command_line` through `shell -c`
    pub fn shell(shell: &str, command_line: impl Into<String>) -> Self {
        Self::new(shell).arg("-c").arg(command_line)
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null());
        cmd
    }

    /// Run with all output discarded and return the exit status
    ///
    /// Used for probes whose only signal is the exit code.
    pub fn probe(&self) -> io::Result<ExitStatus> {
        debug!("Probing: {}", self);
        self.command().stderr(Stdio::null()).status()
    }

    /// Spawn, wait for exit, and check the exit code
    ///
    /// stderr is inherited so the speech utility's own messages reach the user.
    pub fn run(&self, hints: FailureHints) -> Result<()> {
        debug!("Running: {}", self);

        let mut child = self.command().spawn().map_err(|source| {
            error!("Failed to spawn {}: {}", self.program, source);
            DispatchError::Spawn {
                message: hints.spawn,
                source,
            }
        })?;

        debug!("Spawned {} with PID: {}", self.program, child.id());

        let status = child.wait().map_err(|e| match e.kind() {
            io::ErrorKind::Interrupted => DispatchError::Interrupted(hints.interrupted),
            _ => DispatchError::Io(e),
        })?;

        if status.success() {
            debug!("{} exited successfully", self.program);
            Ok(())
        } else {
            debug!("{} failed with {}", self.program, status);
            Err(DispatchError::NonZeroExit {
                hint: hints.exit,
                code: status.code(),
            })
        }
    }
}

/// Quote an argument for display the way a POSIX shell would read it
fn display_arg(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_alphanumeric() || "-_./=:,+@%".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", display_arg(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", display_arg(arg))?;
        }
        Ok(())
    }
}
