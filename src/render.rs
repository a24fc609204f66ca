// src/render.rs

//! # Value Rendering Module
//!
//! Failure diagnostics print the runtime values of both operands. This
//! module picks the rendering for a value at the macro call site:
//!
//! 1. sequences of sequences print as `{{a,b},{c}}`,
//! 2. sequences of displayable items print as `{a,b,c}`,
//! 3. other `Display` values print with `Display`,
//! 4. everything else falls back to `Debug`.
//!
//! The choice is made by method resolution on [`Shown`] (autoref
//! specialization), so it only works where the operand type is concrete,
//! which is always the case inside the check macros.

use core::fmt::{Debug, Display};
use std::collections::{BTreeSet, LinkedList, VecDeque};

/// Joins displayable items with `,` inside braces, e.g. `{1,2,3}`.
pub fn braced<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let items: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    format!("{{{}}}", items.join(","))
}

/// Ordered collections that render as a braced list in diagnostics.
///
/// Implement this for custom container types to have them printed the
/// same way as `Vec` and arrays.
pub trait Sequence {
    /// Renders the items as `{a,b,c}`.
    fn braced(&self) -> String;
}

impl<T: Display> Sequence for [T] {
    fn braced(&self) -> String {
        braced(self)
    }
}

impl<T: Display, const N: usize> Sequence for [T; N] {
    fn braced(&self) -> String {
        braced(self)
    }
}

impl<T: Display> Sequence for Vec<T> {
    fn braced(&self) -> String {
        braced(self)
    }
}

impl<T: Display> Sequence for VecDeque<T> {
    fn braced(&self) -> String {
        braced(self)
    }
}

impl<T: Display> Sequence for LinkedList<T> {
    fn braced(&self) -> String {
        braced(self)
    }
}

impl<T: Display> Sequence for BTreeSet<T> {
    fn braced(&self) -> String {
        braced(self)
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    fn braced(&self) -> String {
        (**self).braced()
    }
}

/// Ordered collections of [`Sequence`]s, such as rows of pixels.
pub trait NestedSequence {
    /// Renders the inner sequences as `{{a,b},{c}}`.
    fn braced_rows(&self) -> String;
}

macro_rules! nested_sequence {
    ($($container:ty),* $(,)?) => {
        $(
            impl<S: Sequence> NestedSequence for $container {
                fn braced_rows(&self) -> String {
                    braced(self.iter().map(Sequence::braced))
                }
            }
        )*
    };
}

nested_sequence!([S], Vec<S>, VecDeque<S>, LinkedList<S>);

impl<S: Sequence, const N: usize> NestedSequence for [S; N] {
    fn braced_rows(&self) -> String {
        braced(self.iter().map(Sequence::braced))
    }
}

impl<S: NestedSequence + ?Sized> NestedSequence for &S {
    fn braced_rows(&self) -> String {
        (**self).braced_rows()
    }
}

/// Borrowed operand awaiting rendering.
///
/// Call as `(&&&Shown(value)).show()` with all four `Show*` traits in scope.
pub struct Shown<'a, T: ?Sized>(pub &'a T);

impl<T: ?Sized> Clone for Shown<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Shown<'_, T> {}

/// Highest priority rendering: braced sequences of sequences.
pub trait ShowNested {
    /// Renders the operand.
    fn show(self) -> String;
}

/// Second priority rendering: braced sequences.
pub trait ShowSequence {
    /// Renders the operand.
    fn show(self) -> String;
}

/// Third priority rendering: `Display`.
pub trait ShowDisplay {
    /// Renders the operand.
    fn show(self) -> String;
}

/// Fallback rendering: `Debug`.
pub trait ShowDebug {
    /// Renders the operand.
    fn show(self) -> String;
}

impl<T: NestedSequence + ?Sized> ShowNested for &&&Shown<'_, T> {
    fn show(self) -> String {
        self.0.braced_rows()
    }
}

impl<T: Sequence + ?Sized> ShowSequence for &&Shown<'_, T> {
    fn show(self) -> String {
        self.0.braced()
    }
}

impl<T: Display + ?Sized> ShowDisplay for &Shown<'_, T> {
    fn show(self) -> String {
        self.0.to_string()
    }
}

impl<T: Debug + ?Sized> ShowDebug for Shown<'_, T> {
    fn show(self) -> String {
        format!("{:?}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Opaque {
        id: u8,
    }

    /// Test the braced join helper.
    #[test]
    fn test_braced() {
        assert_eq!(braced([1, 2, 3]), "{1,2,3}");
        assert_eq!(braced(Vec::<u8>::new()), "{}");
        assert_eq!(braced(["a"]), "{a}");
    }

    /// Test that sequences of displayable items render braced.
    #[test]
    fn test_show_sequence() {
        let v: Vec<i32> = vec![1, 2, 4];
        assert_eq!((&&&Shown(&v)).show(), "{1,2,4}");

        let lanes: [f32; 2] = [0.5, 1.5];
        assert_eq!((&&&Shown(&lanes)).show(), "{0.5,1.5}");

        let queue: VecDeque<u8> = VecDeque::from(vec![7, 8]);
        assert_eq!((&&&Shown(&queue)).show(), "{7,8}");

        let borrowed: &Vec<i32> = &v;
        assert_eq!((&&&Shown(&borrowed)).show(), "{1,2,4}");
    }

    /// Test that scalars and strings render with Display.
    #[test]
    fn test_show_display() {
        let x: f64 = 5.25;
        assert_eq!((&&&Shown(&x)).show(), "5.25");

        let s: &str = "abc";
        assert_eq!((&&&Shown(&s)).show(), "abc");

        let owned: String = String::from("xyz");
        assert_eq!((&&&Shown(&owned)).show(), "xyz");
    }

    /// Test the Debug fallback for values without Display.
    #[test]
    fn test_show_debug() {
        let value = Opaque { id: 3 };
        assert_eq!((&&&Shown(&value)).show(), "Opaque { id: 3 }");

        let maybe: Option<u8> = Some(1);
        assert_eq!((&&&Shown(&maybe)).show(), "Some(1)");

        let deep: Vec<Vec<Vec<u8>>> = vec![vec![vec![1]]];
        assert_eq!((&&&Shown(&deep)).show(), "[[[1]]]");
    }

    /// Test that one level of nesting renders braced.
    #[test]
    fn test_show_nested() {
        let rows: Vec<Vec<u8>> = vec![vec![1], vec![2, 3]];
        assert_eq!((&&&Shown(&rows)).show(), "{{1},{2,3}}");

        let pixels: [[f32; 2]; 2] = [[0.5, 1.0], [0.25, 0.0]];
        assert_eq!((&&&Shown(&pixels)).show(), "{{0.5,1},{0.25,0}}");

        let empty: Vec<Vec<u8>> = vec![vec![]];
        assert_eq!((&&&Shown(&empty)).show(), "{{}}");
    }
}
