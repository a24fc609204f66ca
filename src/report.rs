// src/report.rs

//! # Failure Report Module
//!
//! A failed check produces one diagnostic block. The layout is fixed so
//! that log scrapers can rely on it:
//!
//! ```text
//! <red,bold><file>:<line>:
//! FAILED: <normal><expr_x> <relation> <expr_y>
//! 	values were '<x>' and '<y>'[, diff was <diff>]
//! ```

use crate::style::{Palette, Style};
use core::fmt;
use std::io::{self, Write};

/// Relation evaluated by a two-operand check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `x == y`
    Equal,
    /// `x != y`
    NotEqual,
    /// `x < y`
    Less,
    /// `x > y`
    Greater,
    /// `x <= y`
    LessOrEqual,
    /// `x >= y`
    GreaterOrEqual,
}

impl Relation {
    /// Operator text printed between the operand expressions.
    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Equal => "==",
            Relation::NotEqual => "!=",
            Relation::Less => "<",
            Relation::Greater => ">",
            Relation::LessOrEqual => "<=",
            Relation::GreaterOrEqual => ">=",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Expression<'a> {
    Condition(&'a str),
    Comparison {
        left: &'a str,
        relation: Relation,
        right: &'a str,
        values: (String, String),
    },
}

/// Diagnostic for one failed check.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure<'a> {
    file: &'a str,
    line: u32,
    expression: Expression<'a>,
    diff: Option<String>,
}

impl<'a> Failure<'a> {
    /// A failed single-operand assertion.
    pub fn condition(file: &'a str, line: u32, text: &'a str) -> Self {
        Failure {
            file,
            line,
            expression: Expression::Condition(text),
            diff: None,
        }
    }

    /// A failed two-operand comparison with rendered operand values.
    pub fn comparison(
        file: &'a str,
        line: u32,
        left: &'a str,
        relation: Relation,
        right: &'a str,
        values: (String, String),
    ) -> Self {
        Failure {
            file,
            line,
            expression: Expression::Comparison {
                left,
                relation,
                right,
                values,
            },
            diff: None,
        }
    }

    /// Appends a `diff was` clause to the values line.
    pub fn with_diff(mut self, diff: impl fmt::Display) -> Self {
        self.diff = Some(diff.to_string());
        self
    }

    /// Source file of the check.
    pub fn file(&self) -> &str {
        self.file
    }

    /// Source line of the check.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Writes the diagnostic block.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W, palette: Palette) -> io::Result<()> {
        write!(
            out,
            "{}{}:{}:\nFAILED: {}",
            palette.set(Style::RED_BOLD),
            self.file,
            self.line,
            palette.set(Style::NORMAL)
        )?;
        match &self.expression {
            Expression::Condition(text) => writeln!(out, "{text}"),
            Expression::Comparison {
                left,
                relation,
                right,
                values: (x, y),
            } => {
                writeln!(out, "{left} {relation} {right}")?;
                write!(out, "\tvalues were '{x}' and '{y}'")?;
                if let Some(diff) = &self.diff {
                    write!(out, ", diff was {diff}")?;
                }
                writeln!(out)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(failure: &Failure, palette: Palette) -> String {
        let mut out = Vec::new();
        failure.write_to(&mut out, palette).unwrap();
        String::from_utf8(out).unwrap()
    }

    /// Test the symbols of every relation.
    #[test]
    fn test_relation_symbols() {
        let symbols: Vec<&str> = [
            Relation::Equal,
            Relation::NotEqual,
            Relation::Less,
            Relation::Greater,
            Relation::LessOrEqual,
            Relation::GreaterOrEqual,
        ]
        .iter()
        .map(|relation| relation.symbol())
        .collect();
        assert_eq!(symbols, ["==", "!=", "<", ">", "<=", ">="]);
    }

    /// Test the uncolored comparison layout.
    #[test]
    fn test_comparison_layout() {
        let failure = Failure::comparison(
            "src/foo.rs",
            42,
            "a",
            Relation::Equal,
            "b + 1",
            ("3".to_string(), "5".to_string()),
        );
        assert_eq!(
            render(&failure, Palette::new(false)),
            "src/foo.rs:42:\nFAILED: a == b + 1\n\tvalues were '3' and '5'\n"
        );
    }

    /// Test the diff clause of threshold failures.
    #[test]
    fn test_comparison_with_diff() {
        let failure = Failure::comparison(
            "t.rs",
            7,
            "x",
            Relation::Equal,
            "y",
            ("5".to_string(), "5.5".to_string()),
        )
        .with_diff(0.5);
        assert_eq!(
            render(&failure, Palette::new(false)),
            "t.rs:7:\nFAILED: x == y\n\tvalues were '5' and '5.5', diff was 0.5\n"
        );
    }

    /// Test the single-operand layout.
    #[test]
    fn test_condition_layout() {
        let failure = Failure::condition("t.rs", 1, "ready");
        assert_eq!(failure.file(), "t.rs");
        assert_eq!(failure.line(), 1);
        assert_eq!(
            render(&failure, Palette::new(false)),
            "t.rs:1:\nFAILED: ready\n"
        );
    }

    /// Test the escape sequences around the header.
    #[test]
    fn test_colored_header() {
        let failure = Failure::condition("t.rs", 9, "ok");
        assert_eq!(
            render(&failure, Palette::new(true)),
            "\x1b[31;1mt.rs:9:\nFAILED: \x1b[0mok\n"
        );
    }
}
