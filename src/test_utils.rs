// src/test_utils.rs

//! This module contains utilities for testing.

use crate::counter::{CounterBuilder, FailureCounter};
use crate::style::ColorChoice;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// A constant defining the tolerance within which floating-point values
/// are considered close enough to be equal.
pub const TEST_TOLERANCE: f64 = 1e-9;

/// Checks if two floating point numbers are close enough to be considered
/// equal.
///
/// # Arguments
/// * `target` - The target value.
/// * `value` - The value to compare against the target.
///
/// # Returns
/// `true` if the absolute difference between `target` and `value` is less than
/// `TEST_TOLERANCE`, otherwise `false`.
pub fn value_close(target: f64, value: f64) -> bool {
    (target - value).abs() < TEST_TOLERANCE
}

/// An in-memory sink whose clones share one buffer.
#[derive(Clone, Default)]
pub struct CapturedOutput {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedOutput {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }
}

impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A builder writing uncolored output into `output` that never exits.
pub fn quiet_builder(output: &CapturedOutput) -> CounterBuilder {
    FailureCounter::builder()
        .writer(output.clone())
        .color(ColorChoice::Never)
        .exit_on_failure(false)
}

/// A non-exiting, uncolored counter together with its captured output.
pub fn quiet_counter() -> (FailureCounter, CapturedOutput) {
    let output = CapturedOutput::new();
    (quiet_builder(&output).build(), output)
}
