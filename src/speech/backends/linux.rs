//! Linux backend using espeak
//!
//! Dependencies:
//! - espeak (install with: sudo apt install espeak)

use crate::language::Culture;
use crate::speech::escape::escape_text;
use crate::speech::{Dispatcher, FailureHints, Invocation};
use crate::Result;

/// espeak backend
pub struct LinuxDispatcher {
    /// Shell used to run espeak (`-c`)
    shell: String,

    /// Path or name of espeak
    espeak: String,
}

impl LinuxDispatcher {
    pub fn new(shell: &str, espeak: &str) -> Self {
        Self {
            shell: shell.to_string(),
            espeak: espeak.to_string(),
        }
    }
}

impl Dispatcher for LinuxDispatcher {
    fn name(&self) -> &'static str {
        "linux"
    }

    fn invocation(&self, text: &str, culture: Culture) -> Result<Invocation> {
        Ok(Invocation::shell(
            &self.shell,
            format!(
                "{} -v {} \"{}\"",
                self.espeak,
                culture.language_code(),
                escape_text(text)
            ),
        ))
    }

    fn failure_hints(&self) -> FailureHints {
        FailureHints {
            spawn: "'espeak' not installed or cannot execute:",
            exit: "Linux TTS failed. Make sure 'espeak' is installed.",
            interrupted: "Operation interrupted.",
        }
    }
}
