//! Terminal reporter.
//!
//! Prints response bodies and one status line per use case. In test mode
//! only the status lines are printed:
//!
//! ```text
//! Success: [login] POST http://localhost:8080/login
//! Error: GET http://localhost:8080/users status mismatch: expected status 200, got 401
//! ```

use crate::runner::{Reporter, RunMode, RunSummary, UseCaseFailure};
use std::io::{self, Write};

const COLOR_DEFAULT: &str = "\x1b[39m";
const COLOR_RED: &str = "\x1b[0;31m";
const COLOR_BLUE: &str = "\x1b[94m";
const COLOR_GREEN: &str = "\x1b[32m";

/// Terminal color used for a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Blue,
    Green,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::Red => COLOR_RED,
            Color::Blue => COLOR_BLUE,
            Color::Green => COLOR_GREEN,
        }
    }
}

/// Wraps `text` in ANSI color codes when `enabled`.
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", color.code(), text, COLOR_DEFAULT)
    } else {
        text.to_string()
    }
}

/// Writes report lines to any writer, stdout by default.
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
    color: bool,
    mode: RunMode,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Creates a reporter for a normal-mode run.
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            mode: RunMode::Normal,
        }
    }

    /// Sets the mode of the run being reported. Test runs never print
    /// response bodies, not even for failures.
    pub fn with_mode(mut self, mode: RunMode) -> Self {
        self.mode = mode;
        self
    }

    /// Final line of a test run.
    pub fn summary(&mut self, summary: &RunSummary) {
        let passed = paint(&format!("{} passed", summary.passed), Color::Green, self.color);
        let failed = if summary.failed > 0 {
            paint(&format!("{} failed", summary.failed), Color::Red, self.color)
        } else {
            format!("{} failed", summary.failed)
        };
        self.line(&format!("{}, {}", passed, failed));
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_body(&mut self, body: &str) {
        let mut result = self.out.write_all(body.as_bytes());
        if result.is_ok() && !body.is_empty() && !body.ends_with('\n') {
            result = self.out.write_all(b"\n");
        }
        if let Err(err) = result {
            log::warn!("failed writing response body: {}", err);
        }
    }

    fn line(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{}", text) {
            log::warn!("failed writing report line: {}", err);
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn output(&mut self, _prefix: &str, body: &str) {
        self.write_body(body);
    }

    fn passed(&mut self, prefix: &str) {
        let line = format!(
            "{}: {}",
            paint("Success", Color::Green, self.color),
            paint(prefix, Color::Blue, self.color)
        );
        self.line(&line);
    }

    fn failed(&mut self, failure: &UseCaseFailure) {
        if self.mode == RunMode::Normal {
            if let Some(body) = failure.error.body() {
                self.write_body(body);
            }
        }
        let line = format!(
            "{}: {} {}",
            paint("Error", Color::Red, self.color),
            paint(&failure.prefix, Color::Blue, self.color),
            failure.error
        );
        self.line(&line);
    }
}
