//! Platform-specific speech backends

// PowerShell + System.Speech on Windows
pub mod windows;

// `say` on macOS
pub mod macos;

// `espeak` on Linux and other Unix systems
pub mod linux;

pub use linux::LinuxDispatcher;
pub use macos::MacDispatcher;
pub use windows::WindowsDispatcher;
