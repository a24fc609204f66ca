// src/lanes.rs

//! # Lane Comparison Module
//!
//! This module treats scalars, fixed-size arrays and vectors uniformly as
//! a run of lanes. Lane-wise comparisons produce a mask which is reduced
//! to a single verdict with [`AllTrue`]. A scalar is a single lane, so
//! scalar and aggregate checks share one implementation.

use crate::render::braced;
use core::fmt;
use core::ops::Sub;
use num_traits::Float;

/// Relative tolerance used by [`equal_approx`].
pub const APPROX_TOLERANCE: f64 = 0.001;

/// Reduction of a boolean mask with logical AND.
pub trait AllTrue {
    /// Returns `true` when every lane is `true`.
    fn all_true(&self) -> bool;
}

impl AllTrue for bool {
    fn all_true(&self) -> bool {
        *self
    }
}

impl AllTrue for [bool] {
    fn all_true(&self) -> bool {
        self.iter().all(|lane| *lane)
    }
}

impl<const N: usize> AllTrue for [bool; N] {
    fn all_true(&self) -> bool {
        self.iter().all(|lane| *lane)
    }
}

impl AllTrue for Vec<bool> {
    fn all_true(&self) -> bool {
        self.iter().all(|lane| *lane)
    }
}

impl<M: AllTrue + ?Sized> AllTrue for &M {
    fn all_true(&self) -> bool {
        (**self).all_true()
    }
}

/// A value viewed as a contiguous run of lanes.
pub trait Lanes {
    /// Element type of each lane.
    type Lane;

    /// Returns the lanes as a slice.
    fn lanes(&self) -> &[Self::Lane];

    /// Returns `true` for single-lane scalar types.
    fn is_scalar(&self) -> bool {
        false
    }
}

macro_rules! scalar_lanes {
    ($($t:ty),* $(,)?) => {
        $(
            impl Lanes for $t {
                type Lane = $t;

                fn lanes(&self) -> &[$t] {
                    core::slice::from_ref(self)
                }

                fn is_scalar(&self) -> bool {
                    true
                }
            }
        )*
    };
}

scalar_lanes!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T, const N: usize> Lanes for [T; N] {
    type Lane = T;

    fn lanes(&self) -> &[T] {
        self
    }
}

impl<T> Lanes for [T] {
    type Lane = T;

    fn lanes(&self) -> &[T] {
        self
    }
}

impl<T> Lanes for Vec<T> {
    type Lane = T;

    fn lanes(&self) -> &[T] {
        self
    }
}

impl<L: Lanes + ?Sized> Lanes for &L {
    type Lane = L::Lane;

    fn lanes(&self) -> &[L::Lane] {
        (**self).lanes()
    }

    fn is_scalar(&self) -> bool {
        (**self).is_scalar()
    }
}

/// Applies `f` to each pair of lanes.
///
/// When the lane counts differ, the mask gets a trailing `false` so it can
/// never reduce to `true`.
pub fn lane_mask<X, Y, F>(x: &X, y: &Y, mut f: F) -> Vec<bool>
where
    X: Lanes + ?Sized,
    Y: Lanes<Lane = X::Lane> + ?Sized,
    F: FnMut(&X::Lane, &X::Lane) -> bool,
{
    let (xs, ys) = (x.lanes(), y.lanes());
    let mut mask: Vec<bool> = xs.iter().zip(ys).map(|(a, b)| f(a, b)).collect();
    if xs.len() != ys.len() {
        mask.push(false);
    }
    mask
}

/// Lane-wise `==`, reduced with AND.
pub fn lanes_equal<X, Y>(x: &X, y: &Y) -> bool
where
    X: Lanes + ?Sized,
    Y: Lanes<Lane = X::Lane> + ?Sized,
    X::Lane: PartialEq,
{
    lane_mask(x, y, |a, b| a == b).all_true()
}

/// Absolute distance between two lane values that cannot overflow.
///
/// Integer distances are measured in the unsigned type of the same width,
/// so `i8::MIN` and `i8::MAX` are 255 apart rather than an overflow.
pub trait Distance: Copy {
    /// Type the distance is measured in.
    type Output: Copy + PartialOrd + fmt::Display;

    /// Returns `|self - other|`.
    fn distance(self, other: Self) -> Self::Output;

    /// Returns `self` as a tolerance, or `None` when no distance can be
    /// within it (a negative integer tolerance).
    fn tolerance(self) -> Option<Self::Output>;
}

macro_rules! signed_distance {
    ($($t:ty => $u:ty),* $(,)?) => {
        $(
            impl Distance for $t {
                type Output = $u;

                fn distance(self, other: Self) -> $u {
                    self.abs_diff(other)
                }

                fn tolerance(self) -> Option<$u> {
                    <$u>::try_from(self).ok()
                }
            }
        )*
    };
}

macro_rules! unsigned_distance {
    ($($t:ty),* $(,)?) => {
        $(
            impl Distance for $t {
                type Output = $t;

                fn distance(self, other: Self) -> $t {
                    self.abs_diff(other)
                }

                fn tolerance(self) -> Option<$t> {
                    Some(self)
                }
            }
        )*
    };
}

macro_rules! float_distance {
    ($($t:ty),* $(,)?) => {
        $(
            impl Distance for $t {
                type Output = $t;

                fn distance(self, other: Self) -> $t {
                    (self - other).abs()
                }

                fn tolerance(self) -> Option<$t> {
                    Some(self)
                }
            }
        )*
    };
}

signed_distance!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);
unsigned_distance!(u8, u16, u32, u64, u128, usize);
float_distance!(f32, f64);

/// Lane-wise `|a - b| < eps`, reduced with AND.
pub fn lanes_within<X, Y>(x: &X, y: &Y, eps: &X::Lane) -> bool
where
    X: Lanes + ?Sized,
    Y: Lanes<Lane = X::Lane> + ?Sized,
    X::Lane: Distance,
{
    let Some(tolerance) = eps.tolerance() else {
        return false;
    };
    lane_mask(x, y, |a, b| a.distance(*b) < tolerance).all_true()
}

/// Scalar absolute tolerance test, `|x - y| <= eps`.
pub fn within_threshold<T: Distance>(x: T, y: T, eps: T) -> bool {
    eps.tolerance()
        .is_some_and(|tolerance| x.distance(y) <= tolerance)
}

/// Absolute difference reported by threshold checks.
pub fn threshold_diff<T: Distance>(x: T, y: T) -> T::Output {
    x.distance(y)
}

/// Relative tolerance test for one pair of floats:
/// `|x - y| <= 0.001 * max(|x|, |y|)`.
pub fn relative_eq<T: Float>(x: T, y: T) -> bool {
    let tolerance = T::from(APPROX_TOLERANCE).unwrap_or_else(T::epsilon);
    (x - y).abs() <= tolerance * x.abs().max(y.abs())
}

/// Lane-wise [`relative_eq`], reduced with AND.
pub fn equal_approx<X, Y>(x: &X, y: &Y) -> bool
where
    X: Lanes + ?Sized,
    Y: Lanes<Lane = X::Lane> + ?Sized,
    X::Lane: Float,
{
    lane_mask(x, y, |a, b| relative_eq(*a, *b)).all_true()
}

/// Signed lane-wise difference `x - y`, as printed by approximate checks.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneDiff<L> {
    lanes: Vec<L>,
    scalar: bool,
}

impl<L> LaneDiff<L> {
    /// Returns the per-lane differences.
    pub fn lanes(&self) -> &[L] {
        &self.lanes
    }
}

/// Computes `x - y` over the common lanes.
pub fn lane_diff<X, Y>(x: &X, y: &Y) -> LaneDiff<X::Lane>
where
    X: Lanes + ?Sized,
    Y: Lanes<Lane = X::Lane> + ?Sized,
    X::Lane: Sub<Output = X::Lane> + Copy,
{
    LaneDiff {
        lanes: x
            .lanes()
            .iter()
            .zip(y.lanes())
            .map(|(a, b)| *a - *b)
            .collect(),
        scalar: x.is_scalar() && y.is_scalar(),
    }
}

impl<L: fmt::Display> fmt::Display for LaneDiff<L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.scalar, self.lanes.as_slice()) {
            (true, [lane]) => write!(f, "{lane}"),
            _ => f.write_str(&braced(&self.lanes)),
        }
    }
}
