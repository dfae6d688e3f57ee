//! macOS backend using the `say` command

use crate::language::Culture;
use crate::speech::escape::escape_text;
use crate::speech::{Dispatcher, FailureHints, Invocation};
use crate::Result;
use log::debug;

/// Default English voice
pub const ENGLISH_VOICE: &str = "Alex";

/// Hindi voice, shipped with macOS 10.15+
pub const HINDI_VOICE: &str = "Lekha";

/// Used for Hindi when Lekha is not installed
pub const FALLBACK_VOICE: &str = "Samantha";

/// macOS `say` backend
pub struct MacDispatcher {
    /// Shell used to run `say` (`-c`)
    shell: String,

    /// Path or name of the `say` utility
    say: String,
}

impl MacDispatcher {
    pub fn new(shell: &str, say: &str) -> Self {
        Self {
            shell: shell.to_string(),
            say: say.to_string(),
        }
    }

    /// Pick the voice for `culture`
    ///
    /// Hindi probes the installed voice list; a failed probe of any kind
    /// falls back to `FALLBACK_VOICE`.
    pub fn voice_for(&self, culture: Culture) -> &'static str {
        match culture {
            Culture::English => ENGLISH_VOICE,
            Culture::Hindi => {
                if self.has_voice(HINDI_VOICE) {
                    HINDI_VOICE
                } else {
                    debug!("{} voice not installed, using {}", HINDI_VOICE, FALLBACK_VOICE);
                    FALLBACK_VOICE
                }
            }
        }
    }

    fn has_voice(&self, voice: &str) -> bool {
        let probe = Invocation::shell(
            &self.shell,
            format!("{} -v '?' | grep -i '{}'", self.say, voice),
        );
        match probe.probe() {
            Ok(status) => status.success(),
            Err(e) => {
                debug!("Voice probe failed: {}", e);
                false
            }
        }
    }
}

impl Dispatcher for MacDispatcher {
    fn name(&self) -> &'static str {
        "macos"
    }

    fn invocation(&self, text: &str, culture: Culture) -> Result<Invocation> {
        let voice = self.voice_for(culture);
        debug!("Using voice {} for {}", voice, culture);

        Ok(Invocation::shell(
            &self.shell,
            format!("{} -v {} \"{}\"", self.say, voice, escape_text(text)),
        ))
    }

    fn failure_hints(&self) -> FailureHints {
        FailureHints {
            spawn: "Error running 'say' command:",
            exit: "macOS TTS failed. Check available voices using: say -v '?'",
            interrupted: "Operation interrupted.",
        }
    }
}
