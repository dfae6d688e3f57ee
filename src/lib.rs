//! tts-dispatch - speak English or Hindi text
//!
//! Reads a line of text, detects English vs Hindi from its code points, and
//! hands it to the host OS speech utility (PowerShell on Windows, `say` on
//! macOS, `espeak` on Linux).

pub mod app;
pub mod config;
pub mod error;
pub mod language;
pub mod platform;
pub mod speech;

pub use error::{DispatchError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "tts-dispatch";
