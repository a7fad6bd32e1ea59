//! A value holding exactly one of two alternatives.

use std::fmt;

use crate::node::Node;
use crate::renderer::Renderer;

/// One of two mutually exclusive shapes.
///
/// Renders as whichever side is populated. Asking for the other side yields
/// `None`, or that side's default through the `_or_default` accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    /// The left alternative.
    Left(L),
    /// The right alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns true if the left side is populated.
    #[must_use]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns true if the right side is populated.
    #[must_use]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns the left value, if populated.
    #[must_use]
    pub const fn left(&self) -> Option<&L> {
        match self {
            Self::Left(l) => Some(l),
            Self::Right(_) => None,
        }
    }

    /// Returns the right value, if populated.
    #[must_use]
    pub const fn right(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(r) => Some(r),
        }
    }

    /// Returns the left value, or `L::default()` when the right side is
    /// populated.
    #[must_use]
    pub fn left_or_default(&self) -> L
    where
        L: Clone + Default,
    {
        self.left().cloned().unwrap_or_default()
    }

    /// Returns the right value, or `R::default()` when the left side is
    /// populated.
    #[must_use]
    pub fn right_or_default(&self) -> R
    where
        R: Clone + Default,
    {
        self.right().cloned().unwrap_or_default()
    }

    /// Converts each side with its own function.
    #[must_use]
    pub fn map<L2, R2>(self, f: impl FnOnce(L) -> L2, g: impl FnOnce(R) -> R2) -> Either<L2, R2> {
        match self {
            Self::Left(l) => Either::Left(f(l)),
            Self::Right(r) => Either::Right(g(r)),
        }
    }
}

impl<L: Node, R: Node> Node for Either<L, R> {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        match self {
            Self::Left(l) => l.accept(r),
            Self::Right(x) => x.accept(r),
        }
    }

    fn is_absent(&self) -> bool {
        match self {
            Self::Left(l) => l.is_absent(),
            Self::Right(r) => r.is_absent(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(l) => l.fmt(f),
            Self::Right(r) => r.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Ident, Int};
    use crate::render;

    #[test]
    fn test_renders_populated_side() {
        let left: Either<Ident, Int> = Either::Left(Ident::new("name"));
        let right: Either<Ident, Int> = Either::Right(Int(5));
        assert_eq!(render(&left).unwrap(), "name");
        assert_eq!(render(&right).unwrap(), "5");
    }

    #[test]
    fn test_unpopulated_side_is_zero() {
        let right: Either<String, i32> = Either::Right(3);
        assert!(right.is_right());
        assert!(!right.is_left());
        assert_eq!(right.left(), None);
        assert_eq!(right.left_or_default(), "");
        assert_eq!(right.right_or_default(), 3);
        assert_eq!(right.to_string(), "3");
    }

    #[test]
    fn test_absence_follows_populated_side() {
        let none: Either<Option<Int>, Int> = Either::Left(None);
        assert!(none.is_absent());
        let some: Either<Option<Int>, Int> = Either::Right(Int(0));
        assert!(!some.is_absent());
    }

    #[test]
    fn test_map() {
        let e: Either<i32, &str> = Either::Left(2);
        assert_eq!(e.map(|n| n * 2, str::len), Either::Left(4));
    }
}
