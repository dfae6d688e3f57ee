//! Speech dispatcher abstraction
//!
//! Each supported platform speaks through a different external utility.
//! A `Dispatcher` turns text plus a culture into one `Invocation` for that
//! utility and runs it.

use super::backends::{LinuxDispatcher, MacDispatcher, WindowsDispatcher};
use super::invocation::{FailureHints, Invocation};
use crate::config::Config;
use crate::language::Culture;
use crate::platform::{is_wsl, HostOs, Platform};
use crate::{DispatchError, Result};
use log::info;

/// Speech dispatcher trait
///
/// All backends implement this to speak text through an OS utility.
pub trait Dispatcher {
    /// Backend name for logging
    fn name(&self) -> &'static str;

    /// Build the command that speaks `text`
    ///
    /// May fail before anything is spoken, e.g. when the OS is too old.
    fn invocation(&self, text: &str, culture: Culture) -> Result<Invocation>;

    /// Diagnostics for spawn and exit failures
    fn failure_hints(&self) -> FailureHints;

    /// Speak `text`, blocking until the utility exits
    fn speak(&self, text: &str, culture: Culture) -> Result<()> {
        let invocation = self.invocation(text, culture)?;
        invocation.run(self.failure_hints())
    }
}

/// Create the dispatcher for the host platform
///
/// **Windows:** PowerShell with System.Speech, gated on OS version.
///
/// **macOS:** `say`, probing for a Hindi voice when needed.
///
/// **Linux (and WSL):** `espeak` with a language-code voice.
///
/// Any other OS is rejected before a command is built.
pub fn create_dispatcher(host: &HostOs, config: &Config) -> Result<Box<dyn Dispatcher>> {
    let platform = host.platform();
    info!("Detected platform {} from OS name '{}'", platform, host.name);

    match platform {
        Platform::Windows => Ok(Box::new(WindowsDispatcher::new(
            &config.powershell,
            &host.version,
        ))),
        Platform::MacOs => Ok(Box::new(MacDispatcher::new(&config.shell, &config.say))),
        Platform::Linux => {
            if is_wsl() {
                info!("Detected WSL environment, using espeak");
            }
            Ok(Box::new(LinuxDispatcher::new(&config.shell, &config.espeak)))
        }
        Platform::Unsupported => Err(DispatchError::UnsupportedPlatform(host.name.clone())),
    }
}
