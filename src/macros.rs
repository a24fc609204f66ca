// src/macros.rs

//! # Check Macros
//!
//! Soft assertions. Each macro takes the [`FailureCounter`] first, then
//! its operands. A failed check prints a diagnostic with the call site,
//! the operand source text and the operand values, counts one failure and
//! lets the test continue. Every operand is evaluated exactly once.
//!
//! [`FailureCounter`]: crate::FailureCounter

/// Shared body of the relational checks.
#[doc(hidden)]
#[macro_export]
macro_rules! __check_relation {
    ($counter:expr, $x:expr, $y:expr, $op:tt, $relation:ident) => {
        match (&$x, &$y) {
            (x, y) => {
                if !(*x $op *y) {
                    #[allow(unused_imports)]
                    use $crate::render::{
                        ShowDebug as _, ShowDisplay as _, ShowNested as _, ShowSequence as _,
                    };
                    $crate::FailureCounter::record(
                        &$counter,
                        &$crate::report::Failure::comparison(
                            ::core::file!(),
                            ::core::line!(),
                            ::core::stringify!($x),
                            $crate::report::Relation::$relation,
                            ::core::stringify!($y),
                            (
                                (&&&$crate::render::Shown(x)).show(),
                                (&&&$crate::render::Shown(y)).show(),
                            ),
                        ),
                    );
                }
            }
        }
    };
}

/// Checks that a condition holds.
///
/// The condition may be a `bool` or any lane mask implementing
/// [`AllTrue`](crate::AllTrue), e.g. `[bool; 4]`.
///
/// ```
/// use unittest_checks::{check, FailureCounter};
///
/// let counter = FailureCounter::new();
/// let pixels: Vec<u8> = vec![0, 128, 255];
/// check!(counter, !pixels.is_empty());
/// check!(counter, [true, true]);
/// assert!(counter.passed());
/// ```
#[macro_export]
macro_rules! check {
    ($counter:expr, $cond:expr $(,)?) => {
        if !$crate::AllTrue::all_true(&$cond) {
            $crate::FailureCounter::record(
                &$counter,
                &$crate::report::Failure::condition(
                    ::core::file!(),
                    ::core::line!(),
                    ::core::stringify!($cond),
                ),
            );
        }
    };
}

/// Checks `x == y`.
///
/// Sequences such as `Vec` or arrays are printed as `{a,b,c}`.
///
/// ```
/// use unittest_checks::{check_eq, FailureCounter};
///
/// let counter = FailureCounter::new();
/// let channels: Vec<u8> = vec![1, 2, 3];
/// check_eq!(counter, channels, vec![1_u8, 2, 3]);
/// assert_eq!(counter.count(), 0);
/// ```
#[macro_export]
macro_rules! check_eq {
    ($counter:expr, $x:expr, $y:expr $(,)?) => {
        $crate::__check_relation!($counter, $x, $y, ==, Equal)
    };
}

/// Checks `x != y`.
#[macro_export]
macro_rules! check_ne {
    ($counter:expr, $x:expr, $y:expr $(,)?) => {
        $crate::__check_relation!($counter, $x, $y, !=, NotEqual)
    };
}

/// Checks `x < y`.
#[macro_export]
macro_rules! check_lt {
    ($counter:expr, $x:expr, $y:expr $(,)?) => {
        $crate::__check_relation!($counter, $x, $y, <, Less)
    };
}

/// Checks `x > y`.
#[macro_export]
macro_rules! check_gt {
    ($counter:expr, $x:expr, $y:expr $(,)?) => {
        $crate::__check_relation!($counter, $x, $y, >, Greater)
    };
}

/// Checks `x <= y`.
#[macro_export]
macro_rules! check_le {
    ($counter:expr, $x:expr, $y:expr $(,)?) => {
        $crate::__check_relation!($counter, $x, $y, <=, LessOrEqual)
    };
}

/// Checks `x >= y`.
#[macro_export]
macro_rules! check_ge {
    ($counter:expr, $x:expr, $y:expr $(,)?) => {
        $crate::__check_relation!($counter, $x, $y, >=, GreaterOrEqual)
    };
}

/// Checks `|x - y| <= eps` on scalars and reports `|x - y|` on failure.
///
/// Integer distances are computed without overflow, so any pair of values
/// of the operand type can be compared.
///
/// ```
/// use unittest_checks::{check_eq_thresh, FailureCounter};
///
/// let counter = FailureCounter::new();
/// check_eq_thresh!(counter, 5.0_f64, 5.05, 0.1);
/// assert!(counter.passed());
/// ```
#[macro_export]
macro_rules! check_eq_thresh {
    ($counter:expr, $x:expr, $y:expr, $eps:expr $(,)?) => {
        match (&$x, &$y, &$eps) {
            (x, y, eps) => {
                if !$crate::lanes::within_threshold(*x, *y, *eps) {
                    #[allow(unused_imports)]
                    use $crate::render::{
                        ShowDebug as _, ShowDisplay as _, ShowNested as _, ShowSequence as _,
                    };
                    $crate::FailureCounter::record(
                        &$counter,
                        &$crate::report::Failure::comparison(
                            ::core::file!(),
                            ::core::line!(),
                            ::core::stringify!($x),
                            $crate::report::Relation::Equal,
                            ::core::stringify!($y),
                            (
                                (&&&$crate::render::Shown(x)).show(),
                                (&&&$crate::render::Shown(y)).show(),
                            ),
                        )
                        .with_diff($crate::lanes::threshold_diff(*x, *y)),
                    );
                }
            }
        }
    };
}

/// Checks that `x` and `y` agree within a relative tolerance of 0.1%,
/// lane by lane for arrays and vectors. Reports `x - y` on failure.
///
/// ```
/// use unittest_checks::{check_eq_approx, FailureCounter};
///
/// let counter = FailureCounter::new();
/// check_eq_approx!(counter, 1.0_f32, 1.0009_f32);
/// check_eq_approx!(counter, [0.5_f32, 2.0], [0.5002_f32, 1.999]);
/// assert!(counter.passed());
/// ```
#[macro_export]
macro_rules! check_eq_approx {
    ($counter:expr, $x:expr, $y:expr $(,)?) => {
        match (&$x, &$y) {
            (x, y) => {
                if !$crate::lanes::equal_approx(x, y) {
                    #[allow(unused_imports)]
                    use $crate::render::{
                        ShowDebug as _, ShowDisplay as _, ShowNested as _, ShowSequence as _,
                    };
                    $crate::FailureCounter::record(
                        &$counter,
                        &$crate::report::Failure::comparison(
                            ::core::file!(),
                            ::core::line!(),
                            ::core::stringify!($x),
                            $crate::report::Relation::Equal,
                            ::core::stringify!($y),
                            (
                                (&&&$crate::render::Shown(x)).show(),
                                (&&&$crate::render::Shown(y)).show(),
                            ),
                        )
                        .with_diff($crate::lanes::lane_diff(x, y)),
                    );
                }
            }
        }
    };
}

/// Checks lane-wise equality of aggregates such as `[f32; 4]`.
#[macro_export]
macro_rules! check_lanes_eq {
    ($counter:expr, $x:expr, $y:expr $(,)?) => {
        match (&$x, &$y) {
            (x, y) => {
                if !$crate::lanes::lanes_equal(x, y) {
                    #[allow(unused_imports)]
                    use $crate::render::{
                        ShowDebug as _, ShowDisplay as _, ShowNested as _, ShowSequence as _,
                    };
                    $crate::FailureCounter::record(
                        &$counter,
                        &$crate::report::Failure::comparison(
                            ::core::file!(),
                            ::core::line!(),
                            ::core::stringify!($x),
                            $crate::report::Relation::Equal,
                            ::core::stringify!($y),
                            (
                                (&&&$crate::render::Shown(x)).show(),
                                (&&&$crate::render::Shown(y)).show(),
                            ),
                        ),
                    );
                }
            }
        }
    };
}

/// Checks lane-wise `|x - y| < eps` for aggregates such as `[f32; 4]`.
#[macro_export]
macro_rules! check_lanes_eq_thresh {
    ($counter:expr, $x:expr, $y:expr, $eps:expr $(,)?) => {
        match (&$x, &$y, &$eps) {
            (x, y, eps) => {
                if !$crate::lanes::lanes_within(x, y, eps) {
                    #[allow(unused_imports)]
                    use $crate::render::{
                        ShowDebug as _, ShowDisplay as _, ShowNested as _, ShowSequence as _,
                    };
                    $crate::FailureCounter::record(
                        &$counter,
                        &$crate::report::Failure::comparison(
                            ::core::file!(),
                            ::core::line!(),
                            ::core::stringify!($x),
                            $crate::report::Relation::Equal,
                            ::core::stringify!($y),
                            (
                                (&&&$crate::render::Shown(x)).show(),
                                (&&&$crate::render::Shown(y)).show(),
                            ),
                        ),
                    );
                }
            }
        }
    };
}
