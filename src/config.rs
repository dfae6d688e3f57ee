//! Runtime configuration
//!
//! Settings come from command-line flags and `TTS_DISPATCH_*` environment
//! variables. There is no config file.

use crate::platform::HostOs;
use crate::{DispatchError, Result};
use log::debug;

pub const ENV_OS_NAME: &str = "TTS_DISPATCH_OS_NAME";
pub const ENV_OS_VERSION: &str = "TTS_DISPATCH_OS_VERSION";
pub const ENV_SHELL: &str = "TTS_DISPATCH_SHELL";
pub const ENV_POWERSHELL: &str = "TTS_DISPATCH_POWERSHELL";
pub const ENV_SAY: &str = "TTS_DISPATCH_SAY";
pub const ENV_ESPEAK: &str = "TTS_DISPATCH_ESPEAK";

/// What the binary should do after parsing its arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Run,
    Help,
    Version,
}

/// Settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Debug logging to a file
    pub debug: bool,

    /// Print the speech command instead of running it
    pub dry_run: bool,

    /// Culture tag forced on the command line, validated at run time
    pub culture: Option<String>,

    /// Overrides the detected OS name
    pub os_name: Option<String>,

    /// Overrides the detected OS version
    pub os_version: Option<String>,

    /// Shell for `say` and `espeak` command lines
    pub shell: String,

    /// PowerShell host program
    pub powershell: String,

    /// macOS speech utility
    pub say: String,

    /// Linux speech utility
    pub espeak: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            dry_run: false,
            culture: None,
            os_name: None,
            os_version: None,
            shell: "bash".to_string(),
            powershell: "powershell".to_string(),
            say: "say".to_string(),
            espeak: "espeak".to_string(),
        }
    }
}

impl Config {
    /// Defaults overlaid with the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`; empty values are ignored
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        config.os_name = get(ENV_OS_NAME);
        config.os_version = get(ENV_OS_VERSION);
        if let Some(shell) = get(ENV_SHELL) {
            config.shell = shell;
        }
        if let Some(powershell) = get(ENV_POWERSHELL) {
            config.powershell = powershell;
        }
        if let Some(say) = get(ENV_SAY) {
            config.say = say;
        }
        if let Some(espeak) = get(ENV_ESPEAK) {
            config.espeak = espeak;
        }

        config
    }

    /// Apply command-line flags (program name already stripped)
    pub fn apply_args<I>(&mut self, args: I) -> Result<Action>
    where
        I: IntoIterator<Item = String>,
    {
        let mut action = Action::Run;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--debug" | "-d" => self.debug = true,
                "--dry-run" | "-n" => self.dry_run = true,
                "--help" | "-h" => action = Action::Help,
                "--version" | "-V" => action = Action::Version,
                "--culture" => match args.next() {
                    Some(tag) => self.culture = Some(tag),
                    None => return Err(DispatchError::MissingValue("--culture".to_string())),
                },
                other => match other.strip_prefix("--culture=") {
                    Some(tag) => self.culture = Some(tag.to_string()),
                    None => return Err(DispatchError::UnknownOption(other.to_string())),
                },
            }
        }

        Ok(action)
    }

    /// Host OS for this run, with any overrides applied
    ///
    /// The real version is only queried when no override is set.
    pub fn host_os(&self) -> HostOs {
        let name = self
            .os_name
            .clone()
            .unwrap_or_else(|| std::env::consts::OS.to_string());
        let version = self
            .os_version
            .clone()
            .unwrap_or_else(crate::platform::os_version);
        debug!("Host OS: name={:?} version={:?}", name, version);
        HostOs::new(&name, &version)
    }
}
