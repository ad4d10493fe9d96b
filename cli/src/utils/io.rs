use anyhow::{bail, Context, Result};
use colored::{ColoredString, Colorize};
use dialoguer::Password;
use env_logger::{fmt::Formatter as LogFormatter, Builder as LogBuilder};
use log::{Level as LogLevel, LevelFilter as LogLevelFilter, Record as LogRecord};
use once_cell::sync::Lazy;
use std::{
    env,
    io::{self, BufRead, Write},
    ops::Deref,
};

pub fn init_env_logger(verbose: bool) {
    let format = |formatter: &mut LogFormatter, record: &LogRecord<'_>| {
        let level = match record.level() {
            LogLevel::Debug => LOG_PREFIX_DEBUG.deref(),
            LogLevel::Info => LOG_PREFIX_INFO.deref(),
            LogLevel::Warn => LOG_PREFIX_WARN.deref(),
            LogLevel::Error => LOG_PREFIX_ERROR.deref(),
            LogLevel::Trace => LOG_PREFIX_TRACE.deref(),
        };
        writeln!(formatter, "{} {}", level, record.args())
    };

    let mut builder = LogBuilder::new();
    builder.format(format).filter(
        None,
        if verbose {
            LogLevelFilter::Debug
        } else {
            LogLevelFilter::Info
        },
    );

    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    builder.init();
}

/// Prompt on stderr and read one line from `input`. An empty answer picks
/// `default`, when there is one.
pub fn read_line_from(
    mut input: impl BufRead,
    message: &str,
    default: Option<&str>,
) -> Result<String> {
    let mut line = String::new();
    let num_read = write!(
        io::stderr(),
        "{} {}{}: ",
        LOG_PREFIX_INPUT.deref(),
        message,
        if let Some(value) = default {
            format!(" [{value}]")
        } else {
            "".into()
        },
    )
    .and_then(|_| io::stderr().flush())
    .and_then(|_| input.read_line(&mut line))
    .context("Failed to read from stdin.")?;
    if num_read == 0 {
        bail!("Reached the end of stdin while waiting for input.");
    }

    let line = line.trim();
    Ok(match (line.is_empty(), default) {
        (true, Some(default)) => default.into(),
        _ => line.into(),
    })
}

pub fn read_from_stdin(message: &str, default: Option<&str>) -> Result<String> {
    read_line_from(io::stdin().lock(), message, default)
}

/// Asks the user for values that are missing from the configuration.
pub trait Prompt {
    /// Read a value without echoing it.
    fn secret(&self, message: &str) -> Result<String>;

    fn text(&self, message: &str) -> Result<String>;
}

pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn secret(&self, message: &str) -> Result<String> {
        Password::new()
            .with_prompt(format!("{} {}", LOG_PREFIX_INPUT.deref(), message))
            .interact()
            .context("Failed to read secret from the terminal.")
    }

    fn text(&self, message: &str) -> Result<String> {
        read_from_stdin(message, None)
    }
}

pub static LOG_PREFIX_DEBUG: Lazy<ColoredString> = Lazy::new(|| "D".normal());
pub static LOG_PREFIX_INFO: Lazy<ColoredString> = Lazy::new(|| "I".green());
pub static LOG_PREFIX_WARN: Lazy<ColoredString> = Lazy::new(|| "W".yellow().bold());
pub static LOG_PREFIX_ERROR: Lazy<ColoredString> = Lazy::new(|| "E".red().bold());
pub static LOG_PREFIX_TRACE: Lazy<ColoredString> = Lazy::new(|| "T".normal());
pub static LOG_PREFIX_INPUT: Lazy<ColoredString> = Lazy::new(|| "*".blue().bold());
