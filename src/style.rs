// src/style.rs

//! # Terminal Styling Module
//!
//! This module provides the ANSI escape sequences used to emphasize
//! failure diagnostics and the final summary line, together with the
//! color policy that decides whether they are emitted at all.

use core::fmt;
use core::str::FromStr;
use thiserror::Error;

const RESET: &str = "\x1b[0m";

/// A set of SGR attributes, written as a single escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    codes: &'static [u8],
}

impl Style {
    /// Plain text, resets any active attributes.
    pub const NORMAL: Style = Style { codes: &[0] };
    /// Red foreground.
    pub const RED: Style = Style { codes: &[31] };
    /// Green foreground.
    pub const GREEN: Style = Style { codes: &[32] };
    /// Red foreground in bold, used for failure headers.
    pub const RED_BOLD: Style = Style { codes: &[31, 1] };

    /// Returns the escape sequence selecting this style.
    pub fn prefix(&self) -> String {
        let codes: Vec<String> = self.codes.iter().map(u8::to_string).collect();
        format!("\x1b[{}m", codes.join(";"))
    }
}

/// Whether styled output should contain escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Color only when writing to stdout and stdout is a terminal.
    #[default]
    Auto,
    /// Always emit escape sequences.
    Always,
    /// Never emit escape sequences.
    Never,
}

impl ColorChoice {
    /// Resolves the policy for a sink. `terminal` tells whether the sink
    /// is an interactive stdout.
    pub fn enabled(self, terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Error returned when parsing an unknown color policy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color choice `{0}`, expected one of: auto, always, never")]
pub struct ParseColorChoiceError(pub String);

impl FromStr for ColorChoice {
    type Err = ParseColorChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(ParseColorChoiceError(s.to_string())),
        }
    }
}

/// A resolved painter: writes styles only when color is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Creates a palette that emits escapes iff `enabled`.
    pub fn new(enabled: bool) -> Self {
        Palette { enabled }
    }

    /// Returns whether escapes are emitted.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Switches the active style without resetting afterwards.
    pub fn set(&self, style: Style) -> Switch {
        Switch {
            style,
            enabled: self.enabled,
        }
    }

    /// Wraps `text` in `style` followed by a reset.
    pub fn paint<'a>(&self, style: Style, text: &'a str) -> Painted<'a> {
        Painted {
            style,
            text,
            enabled: self.enabled,
        }
    }
}

/// Style switch produced by [`Palette::set`].
#[derive(Debug, Clone, Copy)]
pub struct Switch {
    style: Style,
    enabled: bool,
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.enabled {
            f.write_str(&self.style.prefix())?;
        }
        Ok(())
    }
}

/// Styled text produced by [`Palette::paint`].
#[derive(Debug, Clone, Copy)]
pub struct Painted<'a> {
    style: Style,
    text: &'a str,
    enabled: bool,
}

impl fmt::Display for Painted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.enabled {
            write!(f, "{}{}{RESET}", self.style.prefix(), self.text)
        } else {
            f.write_str(self.text)
        }
    }
}
