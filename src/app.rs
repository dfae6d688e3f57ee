//! One dispatch run
//!
//! Read input -> validate -> detect culture -> detect platform -> dispatch.
//! Every failure returns early with a `DispatchError`; nothing is retried.

use crate::config::Config;
use crate::language::{detect_culture, Culture};
use crate::speech::create_dispatcher;
use crate::{DispatchError, Result};
use log::{debug, info};
use std::io::{BufRead, Write};

/// Banner printed before the prompt
pub const BANNER: &str = "Text to Speech (English & Hindi Supported)\n\
                          English Content:- How are you.\n\
                          Hindi Content:- नमस्ते, आप कैसे है\n\
                          ---------------------------------------------";

pub const PROMPT: &str = "Enter text (English or Hindi): ";

/// Read one line and trim it
///
/// Trimming strips all Unicode whitespace, so a line of only no-break
/// spaces is empty too. End of input counts as empty.
pub fn read_text<R: BufRead>(mut input: R) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;

    let text = line.trim();
    if text.is_empty() {
        return Err(DispatchError::EmptyInput);
    }
    Ok(text.to_string())
}

/// Run the whole pipeline against `input`, writing user-facing output to `out`
///
/// With `config.dry_run` the speech command is printed instead of run.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W, config: &Config) -> Result<()> {
    writeln!(out, "{}", BANNER)?;
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    let text = read_text(input)?;
    let detected = detect_culture(&text);
    debug!("Detected culture {} for {} chars", detected, text.chars().count());

    let host = config.host_os();
    writeln!(out, "Detected OS: {}, Version: {}\n", host.name, host.version)?;

    let culture = match &config.culture {
        Some(tag) => {
            let forced = Culture::from_tag(tag)?;
            info!("Culture forced to {} (detected {})", forced, detected);
            forced
        }
        None => detected,
    };

    let dispatcher = create_dispatcher(&host, config)?;
    info!("Speaking with {} backend", dispatcher.name());

    if config.dry_run {
        let invocation = dispatcher.invocation(&text, culture)?;
        writeln!(out, "{}", invocation)?;
        return Ok(());
    }

    dispatcher.speak(&text, culture)
}
