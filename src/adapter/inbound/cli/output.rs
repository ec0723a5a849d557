//! Terminal output for CLI handlers.
//!
//! Every line goes through [`emit`], which either prints a styled human
//! line or a `{"type", "payload"}` JSON object, depending on the global
//! flags set once by [`configure`]. Quiet mode drops informational human
//! lines but never warnings, errors or JSON.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde_json::{json, Value};

/// Global output flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub json: bool,
    pub quiet: bool,
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }
}

static OUTPUT: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn current() -> OutputConfig {
    let cell = OUTPUT.get_or_init(RwLock::default);
    match cell.read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Apply the global CLI flags.
pub fn configure(config: OutputConfig) {
    let cell = OUTPUT.get_or_init(RwLock::default);
    match cell.write() {
        Ok(mut slot) => *slot = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

#[must_use]
pub fn is_json() -> bool {
    current().json
}

#[must_use]
pub fn is_quiet() -> bool {
    current().quiet
}

/// Number of `-v` flags.
#[must_use]
pub fn verbosity() -> u8 {
    current().verbose
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Level {
    /// Dropped in quiet mode.
    Info,
    /// Always shown.
    Alert,
    /// Always shown, on stderr.
    Failure,
}

fn emit(level: Level, kind: &str, payload: impl FnOnce() -> Value, human: impl FnOnce() -> String) {
    let config = current();

    if config.json {
        let line = json!({ "type": kind, "payload": payload() });
        match level {
            Level::Failure => eprintln!("{line}"),
            _ => println!("{line}"),
        }
        return;
    }

    match level {
        Level::Info if config.quiet => {}
        Level::Failure => eprintln!("{}", human()),
        _ => println!("{}", human()),
    }
}

/// Application name and version. Human mode only.
pub fn header(version: &str) {
    if is_json() {
        return;
    }
    emit(Level::Info, "header", Value::default, || {
        format!("{} {}", "arbscout".bold(), version.dimmed())
    });
}

/// Section title. Human mode only.
pub fn section(title: &str) {
    if is_json() {
        return;
    }
    emit(Level::Info, "section", Value::default, || {
        format!("\n{}", title.bold())
    });
}

/// A labelled value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit(
        Level::Info,
        "field",
        || json!({ "label": label, "value": value }),
        || format!("  {:<14} {}", label.dimmed(), value),
    );
}

pub fn success(message: &str) {
    emit(
        Level::Info,
        "success",
        || json!({ "message": message }),
        || format!("  {} {}", "✓".green(), message),
    );
}

pub fn warning(message: &str) {
    emit(
        Level::Alert,
        "warning",
        || json!({ "message": message }),
        || format!("  {} {}", "⚠".yellow(), message),
    );
}

/// An error, printed to stderr.
pub fn error(message: &str) {
    emit(
        Level::Failure,
        "error",
        || json!({ "message": message }),
        || format!("  {} {}", "×".red(), message),
    );
}

/// A timestamped status line for long-running commands.
pub fn info(timestamp: &str, label: &str, message: &str) {
    emit(
        Level::Info,
        "info",
        || json!({ "timestamp": timestamp, "label": label, "message": message }),
        || format!("  {} {} {}", timestamp.dimmed(), label.cyan(), message),
    );
}

pub fn note(message: &str) {
    emit(
        Level::Info,
        "note",
        || json!({ "message": message }),
        || format!("  {}", message.dimmed()),
    );
}

pub fn hint(message: &str) {
    emit(
        Level::Info,
        "hint",
        || json!({ "message": message }),
        || format!("  {}: {}", "hint".cyan().dimmed(), message.dimmed()),
    );
}

/// A multi-line block such as a rendered table, indented.
pub fn lines(content: &str) {
    emit(
        Level::Info,
        "lines",
        || json!({ "content": content }),
        || {
            content
                .lines()
                .map(|line| format!("  {line}"))
                .collect::<Vec<_>>()
                .join("\n")
        },
    );
}

/// Print a complete JSON document as one line.
pub fn json_output(value: Value) {
    println!("{value}");
}

fn paint(text: String, style: impl FnOnce(&str) -> String) -> String {
    if is_json() {
        text
    } else {
        style(&text)
    }
}

pub fn positive(value: impl Display) -> String {
    paint(value.to_string(), |s| s.green().to_string())
}

pub fn negative(value: impl Display) -> String {
    paint(value.to_string(), |s| s.red().to_string())
}

pub fn highlight(value: impl Display) -> String {
    paint(value.to_string(), |s| s.cyan().to_string())
}

/// `3.84%`, green when positive.
pub fn percentage(value: f64) -> String {
    let text = format!("{value:.2}%");
    if value > 0.0 {
        positive(text)
    } else {
        negative(text)
    }
}

/// An amount with two decimals.
#[must_use]
pub fn money(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_uses_two_decimals() {
        assert_eq!(money(384.294), "384.29");
        assert_eq!(money(10.0), "10.00");
    }

    #[test]
    fn default_config_is_human_and_chatty() {
        let config = OutputConfig::default();
        assert_eq!(config, OutputConfig::new(false, false, 0));
    }
}
