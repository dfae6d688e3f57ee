//! Platform detection utilities

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::fs;

/// Matches the version in `cmd /c ver` output,
/// e.g. "Microsoft Windows [Version 10.0.19045.3803]"
static VER_OUTPUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[version\s+([0-9][0-9.]*)\]").expect("valid regex"));

/// Speech dispatch path for the host OS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    Unsupported,
}

impl Platform {
    /// Classify an OS name by case-insensitive substring
    ///
    /// "win" is checked first, so a name like "darwin" lands on Windows;
    /// callers pass `std::env::consts::OS` style names where that cannot
    /// happen.
    pub fn from_os_name(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains("win") {
            Platform::Windows
        } else if name.contains("mac") {
            Platform::MacOs
        } else if ["nix", "nux", "aix"].iter().any(|s| name.contains(s)) {
            Platform::Linux
        } else {
            Platform::Unsupported
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
            Platform::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Host OS name and version, captured once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostOs {
    pub name: String,
    pub version: String,
}

impl HostOs {
    /// Build from explicit strings (lower-cased)
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_lowercase(),
            version: version.to_lowercase(),
        }
    }

    /// Read the running system's name and version
    pub fn detect() -> Self {
        Self::new(std::env::consts::OS, &os_version())
    }

    pub fn platform(&self) -> Platform {
        Platform::from_os_name(&self.name)
    }
}

/// OS release string for the running system
///
/// On Unix this is the kernel release from uname(2).
#[cfg(unix)]
pub fn os_version() -> String {
    match nix::sys::utsname::uname() {
        Ok(uts) => uts.release().to_string_lossy().into_owned(),
        Err(e) => {
            debug!("uname failed: {}", e);
            "unknown".to_string()
        }
    }
}

/// OS release string for the running system
///
/// Windows has no uname, so ask `cmd` for its version banner.
#[cfg(windows)]
pub fn os_version() -> String {
    use std::process::Command;

    match Command::new("cmd").args(["/C", "ver"]).output() {
        Ok(output) => {
            let text = String::from_utf8_lossy(&output.stdout);
            parse_ver_output(&text).unwrap_or_else(|| "unknown".to_string())
        }
        Err(e) => {
            debug!("cmd /C ver failed: {}", e);
            "unknown".to_string()
        }
    }
}

#[cfg(not(any(unix, windows)))]
pub fn os_version() -> String {
    "unknown".to_string()
}

/// Extract the dotted version from `cmd /c ver` output
pub fn parse_ver_output(output: &str) -> Option<String> {
    VER_OUTPUT
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Detect if running in WSL (Windows Subsystem for Linux)
///
/// Checks for WSL-specific indicators in /proc/version and environment variables.
pub fn is_wsl() -> bool {
    if let Ok(contents) = fs::read_to_string("/proc/version") {
        let lower = contents.to_lowercase();
        if lower.contains("microsoft") || lower.contains("wsl") {
            return true;
        }
    }

    std::env::var("WSL_DISTRO_NAME").is_ok()
}
