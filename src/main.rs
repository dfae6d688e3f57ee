//! tts-dispatch main entry point
//!
//! Parses flags, sets up logging, then runs one dispatch against stdin.
//! Diagnostics go to stderr; any failure exits with status 1.

use log::{debug, info};
use std::io;
use std::process;
use tts_dispatch::app;
use tts_dispatch::config::{Action, Config};

const LOG_FILE: &str = "tts-dispatch.log";

const USAGE: &str = "\
Usage: tts-dispatch [OPTIONS]

Reads one line of English or Hindi text from stdin and speaks it.

Options:
  -d, --debug          Write debug logs to tts-dispatch.log
  -n, --dry-run        Print the speech command instead of running it
      --culture TAG    Force the culture (en-US or hi-IN)
  -h, --help           Show this help
  -V, --version        Show version

Environment:
  TTS_DISPATCH_OS_NAME, TTS_DISPATCH_OS_VERSION   Override OS detection
  TTS_DISPATCH_SHELL, TTS_DISPATCH_POWERSHELL,
  TTS_DISPATCH_SAY, TTS_DISPATCH_ESPEAK           Override helper programs";

fn init_logging(debug_mode: bool) {
    if debug_mode {
        // Debug mode: write to the log file
        use std::fs::OpenOptions;
        match OpenOptions::new().create(true).append(true).open(LOG_FILE) {
            Ok(log_file) => {
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Warning: Failed to open {} for debug logging: {}", LOG_FILE, e);
                eprintln!("Continuing without file logging...");
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Warn)
                    .init();
            }
        }

        info!(
            "{} version {} starting (debug mode, logging to {})",
            tts_dispatch::APP_NAME,
            tts_dispatch::VERSION,
            LOG_FILE
        );
    } else {
        // Normal mode: only errors, RUST_LOG can raise it
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .parse_default_env()
            .init();
    }
}

fn main() {
    let mut config = Config::from_env();

    let action = match config.apply_args(std::env::args().skip(1)) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    match action {
        Action::Help => {
            println!("{}", USAGE);
            return;
        }
        Action::Version => {
            println!("{} {}", tts_dispatch::APP_NAME, tts_dispatch::VERSION);
            return;
        }
        Action::Run => {}
    }

    init_logging(config.debug);
    debug!("Config: {:?}", config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = app::run(stdin.lock(), &mut stdout, &config) {
        debug!("Run failed: {:?}", e);
        eprintln!("{}", e);
        process::exit(1);
    }
}
