// src/counter.rs

//! # Failure Counter Module
//!
//! This module provides the failure tally shared by every check. The
//! counter is created explicitly and handed to the check macros by
//! reference. When it goes out of scope it prints a single `OK` or
//! `ERRORS!` summary and, if any check failed, ends the process with a
//! non-zero exit status so CI sees the failure. A counter dropped while
//! its thread is panicking always reports `ERRORS!`.

use crate::report::Failure;
use crate::style::{ColorChoice, Palette, Style};
use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};
use parking_lot::Mutex;
use std::io::{self, IsTerminal, Write};

type Sink = Box<dyn Write + Send>;

/// Process exit status used when checks failed.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Tally of failed checks with scope-exit reporting.
///
/// All operations take `&self`; the count is atomic and diagnostics are
/// written under a lock, so one counter may be shared across threads.
///
/// Example Usage
/// ```
/// use unittest_checks::{check_eq, check_lt, FailureCounter};
///
/// let counter = FailureCounter::new();
///
/// let width: u32 = 640;
/// let height: u32 = 480;
/// check_eq!(counter, width * height, 307_200_u32);
/// check_lt!(counter, height, width);
///
/// assert_eq!(counter.count(), 0);
/// // Dropping the counter prints "OK".
/// ```
pub struct FailureCounter {
    failures: AtomicUsize,
    sink: Mutex<Sink>,
    palette: Palette,
    exit_on_failure: bool,
}

impl FailureCounter {
    /// Creates a counter writing to stdout, colored when stdout is a
    /// terminal, which exits the process on drop if any check failed.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Returns a builder for a custom sink, color policy or exit policy.
    pub fn builder() -> CounterBuilder {
        CounterBuilder::new()
    }

    /// Adds one failure. Returns the counter, like a prefix increment.
    pub fn increment(&self) -> &Self {
        self.failures.fetch_add(1, Ordering::Relaxed);
        self
    }

    /// Adds one failure and returns the count before the increment,
    /// like a postfix increment.
    pub fn fetch_increment(&self) -> usize {
        self.failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Adds `n` failures at once.
    pub fn add(&self, n: usize) -> &Self {
        self.failures.fetch_add(n, Ordering::Relaxed);
        self
    }

    /// Current number of failures.
    pub fn count(&self) -> usize {
        self.failures.load(Ordering::Relaxed)
    }

    /// Returns `true` when no check has failed so far.
    pub fn passed(&self) -> bool {
        self.count() == 0
    }

    /// Whether the drop-time summary terminates the process on failure.
    pub fn exits_on_failure(&self) -> bool {
        self.exit_on_failure
    }

    /// Writes the diagnostic for a failed check and counts it.
    ///
    /// Write errors on the sink are logged and otherwise ignored; the
    /// failure is counted regardless.
    pub fn record(&self, failure: &Failure<'_>) {
        {
            let mut sink = self.sink.lock();
            let written = failure
                .write_to(&mut *sink, self.palette)
                .and_then(|()| sink.flush());
            if let Err(err) = written {
                log::warn!("failed to write check diagnostic: {err}");
            }
        }
        let previous = self.fetch_increment();
        log::trace!(
            "check failed at {}:{} (failure #{})",
            failure.file(),
            failure.line(),
            previous + 1
        );
    }

    fn write_summary(&mut self, failed: bool) -> io::Result<()> {
        let summary = if failed {
            self.palette.paint(Style::RED, "ERRORS!\n")
        } else {
            self.palette.paint(Style::GREEN, "OK\n")
        };
        let sink = self.sink.get_mut();
        write!(sink, "{summary}")?;
        sink.flush()
    }
}

impl Default for FailureCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&FailureCounter> for usize {
    fn from(counter: &FailureCounter) -> usize {
        counter.count()
    }
}

impl fmt::Debug for FailureCounter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FailureCounter")
            .field("failures", &self.count())
            .field("palette", &self.palette)
            .field("exit_on_failure", &self.exit_on_failure)
            .finish_non_exhaustive()
    }
}

impl Drop for FailureCounter {
    fn drop(&mut self) {
        let failures = self.count();
        // A body that panicked did not finish its checks.
        let aborted = std::thread::panicking();
        log::debug!("check session finished with {failures} failure(s), aborted: {aborted}");
        if let Err(err) = self.write_summary(failures > 0 || aborted) {
            log::warn!("failed to write check summary: {err}");
        }
        if failures > 0 && self.exit_on_failure {
            std::process::exit(FAILURE_EXIT_CODE);
        }
    }
}

/// Configuration for a [`FailureCounter`].
pub struct CounterBuilder {
    sink: Option<Sink>,
    color: ColorChoice,
    exit_on_failure: bool,
}

impl CounterBuilder {
    /// Stdout, automatic color, exit on failure.
    pub fn new() -> Self {
        CounterBuilder {
            sink: None,
            color: ColorChoice::Auto,
            exit_on_failure: true,
        }
    }

    /// Sends diagnostics and the summary to `writer` instead of stdout.
    pub fn writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.sink = Some(Box::new(writer));
        self
    }

    /// Sets the color policy.
    pub fn color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Sets whether dropping a counter with failures exits the process.
    pub fn exit_on_failure(mut self, exit: bool) -> Self {
        self.exit_on_failure = exit;
        self
    }

    /// Builds the counter.
    pub fn build(self) -> FailureCounter {
        let (sink, terminal) = match self.sink {
            Some(sink) => (sink, false),
            None => (Box::new(io::stdout()) as Sink, io::stdout().is_terminal()),
        };
        let palette = Palette::new(self.color.enabled(terminal));
        log::debug!(
            "check session started (color: {}, exit on failure: {})",
            palette.is_enabled(),
            self.exit_on_failure
        );
        FailureCounter {
            failures: AtomicUsize::new(0),
            sink: Mutex::new(sink),
            palette,
            exit_on_failure: self.exit_on_failure,
        }
    }

    /// Builds a counter, runs `body` with it and reports when it returns.
    pub fn run<F, R>(self, body: F) -> R
    where
        F: FnOnce(&FailureCounter) -> R,
    {
        let counter = self.build();
        body(&counter)
    }
}

impl Default for CounterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs `body` with a default counter and reports when it returns.
///
/// If any check inside `body` failed, the process exits with status 1
/// after the summary is printed.
pub fn session<F, R>(body: F) -> R
where
    F: FnOnce(&FailureCounter) -> R,
{
    CounterBuilder::new().run(body)
}
