//! Windows TTS backend using SAPI (System.Speech.Synthesis)
//!
//! Speaks through a one-shot PowerShell process running an inline script.
//! The script picks a voice by culture:
//! - first voice whose culture matches the requested tag
//! - for `hi-IN`, any `hi-IN` voice
//! - otherwise any `en-*` voice, without telling the user
//! - no voice at all makes the script throw (non-zero exit)

use crate::language::Culture;
use crate::speech::escape::powershell_literal;
use crate::speech::{Dispatcher, FailureHints, Invocation};
use crate::{DispatchError, Result};
use log::{debug, warn};

/// Oldest Windows major version with System.Speech (Vista)
const MIN_MAJOR_VERSION: u32 = 6;

const SCRIPT_TEMPLATE: &str = concat!(
    "$ErrorActionPreference='Stop';",
    "Add-Type -AssemblyName System.Speech;",
    "$s=New-Object System.Speech.Synthesis.SpeechSynthesizer;",
    "$voices=$s.GetInstalledVoices()|ForEach-Object{$_.VoiceInfo};",
    "$pick=($voices|Where-Object{$_.Culture.Name -like '@CULTURE@'})|Select-Object -First 1;",
    "if(-not $pick -and '@CULTURE@' -eq 'hi-IN'){$pick=($voices|Where-Object{$_.Culture.Name -like 'hi-IN'})|Select-Object -First 1;}",
    "if(-not $pick){$pick=($voices|Where-Object{$_.Culture.Name -like 'en-*'})|Select-Object -First 1;}",
    "if(-not $pick){throw 'No suitable TTS voice installed.'};",
    "$s.SelectVoice($pick.Name);",
    "$s.Speak([System.Text.Encoding]::UTF8.GetString([System.Text.Encoding]::Default.GetBytes('@TEXT@')));",
);

/// Windows SAPI backend
pub struct WindowsDispatcher {
    /// PowerShell host program
    powershell: String,

    /// OS version string, e.g. "10.0.19045"
    version: String,
}

impl WindowsDispatcher {
    pub fn new(powershell: &str, version: &str) -> Self {
        Self {
            powershell: powershell.to_string(),
            version: version.to_string(),
        }
    }

    /// Build the inline PowerShell script for `text`
    pub fn script(text: &str, culture: Culture) -> String {
        SCRIPT_TEMPLATE
            .replace("@CULTURE@", culture.tag())
            .replace("@TEXT@", &powershell_literal(text))
    }

    fn check_version(&self) -> Result<()> {
        match windows_major_version(&self.version) {
            Some(major) if major < MIN_MAJOR_VERSION => {
                debug!("Windows major version {} is below {}", major, MIN_MAJOR_VERSION);
                Err(DispatchError::VersionTooOld(major))
            }
            Some(_) => Ok(()),
            None => {
                warn!(
                    "Could not parse Windows version '{}', skipping version check",
                    self.version
                );
                Ok(())
            }
        }
    }
}

/// Major version: the text before the first `.`
///
/// `None` when it is not a number.
pub fn windows_major_version(version: &str) -> Option<u32> {
    version.split('.').next()?.trim().parse().ok()
}

impl Dispatcher for WindowsDispatcher {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn invocation(&self, text: &str, culture: Culture) -> Result<Invocation> {
        self.check_version()?;

        Ok(Invocation::new(&self.powershell)
            .arg("-NoProfile")
            .arg("-Command")
            .arg(Self::script(text, culture)))
    }

    fn failure_hints(&self) -> FailureHints {
        FailureHints {
            spawn: "PowerShell not found or inaccessible.",
            exit: "PowerShell TTS failed. Check if voices are installed.",
            interrupted: "TTS operation was interrupted.",
        }
    }
}
