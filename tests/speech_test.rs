//! Integration tests for speech dispatch
//!
//! These run the full pipeline against small shell scripts standing in
//! for `espeak` and `say`, so they need a POSIX `sh`.

#![cfg(unix)]

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tts_dispatch::app;
use tts_dispatch::config::Config;
use tts_dispatch::DispatchError;

/// Write a fake speech utility that records its arguments, one per line,
/// to `args.txt` next to itself and exits with `exit_code`.
///
/// When called as `<tool> -v ?` it prints `voices` instead, like `say`.
fn fake_tool(dir: &Path, name: &str, voices: &str, exit_code: i32) -> String {
    let path = dir.join(name);
    let script = format!(
        "if [ \"$1\" = \"-v\" ] && [ \"$2\" = \"?\" ]; then\n\
         \x20 printf '%s\\n' '{voices}'\n\
         \x20 exit 0\n\
         fi\n\
         printf '%s\\n' \"$@\" > \"$(dirname \"$0\")/args.txt\"\n\
         exit {exit_code}\n"
    );
    fs::write(&path, script).expect("write fake tool");
    // Run through sh so the script needs no exec bit
    format!("sh {}", path.display())
}

fn recorded_args(dir: &Path) -> Vec<String> {
    let path: PathBuf = dir.join("args.txt");
    fs::read_to_string(path)
        .expect("fake tool was not run")
        .lines()
        .map(str::to_string)
        .collect()
}

fn linux_config(espeak: String) -> Config {
    Config {
        os_name: Some("Linux".to_string()),
        os_version: Some("6.1.0".to_string()),
        shell: "sh".to_string(),
        espeak,
        ..Config::default()
    }
}

fn mac_config(say: String) -> Config {
    Config {
        os_name: Some("Mac OS X".to_string()),
        os_version: Some("14.2".to_string()),
        shell: "sh".to_string(),
        say,
        ..Config::default()
    }
}

fn run(input: &str, config: &Config) -> (Result<(), DispatchError>, String) {
    let mut out = Vec::new();
    let result = app::run(Cursor::new(input.as_bytes()), &mut out, config);
    (result, String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn test_linux_english_end_to_end() {
    let dir = TempDir::new().unwrap();
    let config = linux_config(fake_tool(dir.path(), "espeak", "", 0));

    let (result, out) = run("How are you\n", &config);

    assert!(result.is_ok(), "dispatch failed: {:?}", result);
    assert!(out.contains("Detected OS: linux, Version: 6.1.0"));
    assert_eq!(recorded_args(dir.path()), ["-v", "en", "How are you"]);
}

#[test]
fn test_linux_hindi_end_to_end() {
    let dir = TempDir::new().unwrap();
    let config = linux_config(fake_tool(dir.path(), "espeak", "", 0));

    let (result, _) = run("  नमस्ते, आप कैसे है  \n", &config);

    assert!(result.is_ok(), "dispatch failed: {:?}", result);
    assert_eq!(recorded_args(dir.path()), ["-v", "hi", "नमस्ते, आप कैसे है"]);
}

#[test]
fn test_special_characters_reach_the_utility_intact() {
    let dir = TempDir::new().unwrap();
    let config = linux_config(fake_tool(dir.path(), "espeak", "", 0));

    let (result, _) = run("He said \"hi\" and cost $5\n", &config);

    assert!(result.is_ok(), "dispatch failed: {:?}", result);
    assert_eq!(
        recorded_args(dir.path()),
        ["-v", "en", "He said \"hi\" and cost $5"]
    );
}

#[test]
fn test_nonzero_exit_is_reported() {
    let dir = TempDir::new().unwrap();
    let config = linux_config(fake_tool(dir.path(), "espeak", "", 4));

    let (result, _) = run("Hello\n", &config);

    match result {
        Err(e @ DispatchError::NonZeroExit { .. }) => {
            assert_eq!(e.to_string(), "Linux TTS failed. Make sure 'espeak' is installed.");
            if let DispatchError::NonZeroExit { code, .. } = e {
                assert_eq!(code, Some(4));
            }
        }
        other => panic!("expected NonZeroExit, got {:?}", other),
    }
}

#[test]
fn test_missing_shell_is_a_spawn_error() {
    let mut config = linux_config("espeak".to_string());
    config.shell = "/nonexistent/tts-dispatch-shell".to_string();

    let (result, _) = run("Hello\n", &config);

    match result {
        Err(e @ DispatchError::Spawn { .. }) => {
            assert!(e
                .to_string()
                .starts_with("'espeak' not installed or cannot execute:"));
        }
        other => panic!("expected Spawn error, got {:?}", other),
    }
}

#[test]
fn test_empty_input_dispatches_nothing() {
    let dir = TempDir::new().unwrap();
    let config = linux_config(fake_tool(dir.path(), "espeak", "", 0));

    let (result, _) = run("   \n", &config);

    assert!(matches!(result, Err(DispatchError::EmptyInput)));
    assert!(!dir.path().join("args.txt").exists());
}

#[test]
fn test_unsupported_os_dispatches_nothing() {
    let dir = TempDir::new().unwrap();
    let mut config = linux_config(fake_tool(dir.path(), "espeak", "", 0));
    config.os_name = Some("SomeOtherOS".to_string());

    let (result, _) = run("Hello\n", &config);

    assert!(matches!(result, Err(DispatchError::UnsupportedPlatform(_))));
    assert!(!dir.path().join("args.txt").exists());
}

#[test]
fn test_mac_english_uses_alex() {
    let dir = TempDir::new().unwrap();
    let config = mac_config(fake_tool(dir.path(), "say", "Alex en_US", 0));

    let (result, _) = run("How are you\n", &config);

    assert!(result.is_ok(), "dispatch failed: {:?}", result);
    assert_eq!(recorded_args(dir.path()), ["-v", "Alex", "How are you"]);
}

#[test]
fn test_mac_hindi_uses_lekha_when_installed() {
    let dir = TempDir::new().unwrap();
    let config = mac_config(fake_tool(dir.path(), "say", "Lekha hi_IN", 0));

    let (result, _) = run("नमस्ते\n", &config);

    assert!(result.is_ok(), "dispatch failed: {:?}", result);
    assert_eq!(recorded_args(dir.path()), ["-v", "Lekha", "नमस्ते"]);
}

#[test]
fn test_mac_hindi_falls_back_to_samantha() {
    let dir = TempDir::new().unwrap();
    let config = mac_config(fake_tool(dir.path(), "say", "Alex en_US", 0));

    let (result, _) = run("नमस्ते\n", &config);

    assert!(result.is_ok(), "dispatch failed: {:?}", result);
    assert_eq!(recorded_args(dir.path()), ["-v", "Samantha", "नमस्ते"]);
}

#[test]
fn test_mac_failure_hint() {
    let dir = TempDir::new().unwrap();
    let config = mac_config(fake_tool(dir.path(), "say", "Alex en_US", 1));

    let (result, _) = run("Hello\n", &config);

    let err = result.expect_err("say exited non-zero");
    assert_eq!(
        err.to_string(),
        "macOS TTS failed. Check available voices using: say -v '?'"
    );
}
