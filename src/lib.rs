// src/lib.rs

//! # Unit Test Checks
//!
//! This crate provides soft assertions for unit test programs of an
//! imaging library. A failed check prints where it happened, the source
//! text of its operands and their values, then lets the program carry on.
//! Failures are tallied by a [`FailureCounter`]; when the counter goes out
//! of scope it prints `OK` or `ERRORS!` and, after any failure, exits the
//! process with status 1.
//!
//! ```
//! use unittest_checks::{check_eq, check_eq_approx, session};
//!
//! session(|counter| {
//!     let gamma: f32 = 2.2;
//!     check_eq_approx!(counter, gamma.recip(), 0.454545_f32);
//!     check_eq!(counter, vec![1_u8, 2, 3], vec![1_u8, 2, 3]);
//! });
//! ```

#![deny(missing_docs)]

pub mod counter;
pub mod lanes;
mod macros;
pub mod render;
pub mod report;
pub mod style;

#[doc(inline)]
pub use counter::{session, CounterBuilder, FailureCounter};
#[doc(inline)]
pub use lanes::{AllTrue, Lanes};
#[doc(inline)]
pub use render::Sequence;
#[doc(inline)]
pub use style::{ColorChoice, ParseColorChoiceError};

#[cfg(test)]
mod test_utils;
