//! Composition primitives.
//!
//! Leaf nodes for single tokens and scalars, plus the delimited and joined
//! groups every SQL clause is assembled from.

use std::borrow::Cow;

use crate::node::Node;
use crate::renderer::Renderer;

/// A single character written as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token(pub char);

impl Node for Token {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.token(self.0)
    }
}

/// The list separator followed by whitespace.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sep;

impl Node for Sep {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.sep().ws()
    }
}

/// Whitespace.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Ws;

impl Node for Ws {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.ws()
    }
}

/// A signed integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Int(pub i64);

impl Node for Int {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.int(self.0)
    }
}

/// An unsigned integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uint(pub u64);

impl Node for Uint {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.uint(self.0)
    }
}

/// A float.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Float(pub f64);

impl Node for Float {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.float(self.0)
    }
}

/// A quoted string literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Str(pub Cow<'static, str>);

impl Str {
    /// Creates a string literal.
    #[must_use]
    pub fn new(s: impl Into<Cow<'static, str>>) -> Self {
        Self(s.into())
    }
}

impl Node for Str {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.string(&self.0)
    }
}

/// An identifier, quoted when needed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ident(pub Cow<'static, str>);

impl Ident {
    /// Creates an identifier.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Returns the unescaped name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Node for Ident {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.ident(&self.0)
    }
}

impl From<&'static str> for Ident {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for Ident {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl From<&String> for Ident {
    fn from(name: &String) -> Self {
        Self(Cow::Owned(name.clone()))
    }
}

/// A keyword written verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keyword(pub &'static str);

impl Node for Keyword {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword(self.0)
    }
}

/// Text written verbatim, without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Raw(pub Cow<'static, str>);

impl Raw {
    /// Creates raw text.
    #[must_use]
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self(text.into())
    }
}

impl Node for Raw {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.raw(&self.0)
    }
}

/// A guarded group between two delimiters.
pub struct Delimited<'a> {
    open: char,
    children: &'a [&'a dyn Node],
    close: char,
}

impl Node for Delimited<'_> {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.delimited(self.open, self.children, self.close)
    }
}

/// Wraps `children` in square brackets. No children gives `[]`.
#[must_use]
pub const fn bracket<'a>(children: &'a [&'a dyn Node]) -> Delimited<'a> {
    Delimited {
        open: '[',
        children,
        close: ']',
    }
}

/// Wraps `children` in parentheses. No children gives `()`.
#[must_use]
pub const fn paren<'a>(children: &'a [&'a dyn Node]) -> Delimited<'a> {
    Delimited {
        open: '(',
        children,
        close: ')',
    }
}

/// Items joined by a separator node.
pub struct Join<'a, T> {
    items: &'a [T],
    sep: &'a dyn Node,
}

/// Joins `items` with `sep` between consecutive items.
#[must_use]
pub const fn join_with<'a, T: Node>(items: &'a [T], sep: &'a dyn Node) -> Join<'a, T> {
    Join { items, sep }
}

impl<T: Node> Node for Join<'_, T> {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.join(self.items, self.sep)
    }
}
