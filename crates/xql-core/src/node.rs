//! The node protocol.
//!
//! Every renderable construct implements [`Node`]: it accepts a [`Renderer`]
//! and writes itself into it, returning the same renderer so calls chain.
//!
//! Absence is structural. `None`, an empty collection or an absent child
//! reports [`Node::is_absent`], which makes the renderer's guarded dispatch
//! skip the whole group it belongs to. Present values that happen to be zero
//! or empty text are never absent.

use crate::renderer::Renderer;

/// A value that renders SQL text into a [`Renderer`].
pub trait Node {
    /// Writes this node into `r`.
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer;

    /// Returns true if this node is structurally absent.
    fn is_absent(&self) -> bool {
        false
    }
}

impl<T: Node + ?Sized> Node for &T {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        (**self).accept(r)
    }

    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Node + ?Sized> Node for Box<T> {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        (**self).accept(r)
    }

    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Node> Node for Option<T> {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        match self {
            Some(node) => node.accept(r),
            None => r,
        }
    }

    fn is_absent(&self) -> bool {
        match self {
            Some(node) => node.is_absent(),
            None => true,
        }
    }
}

/// A list renders its items separated by the list separator.
impl<T: Node> Node for [T] {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.list(self)
    }

    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Node> Node for Vec<T> {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        self.as_slice().accept(r)
    }

    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

/// A node produced from a closure.
///
/// Used for one-off fragments that do not deserve their own type.
pub struct NodeFn<F>(F);

/// Wraps a closure as a [`Node`].
#[must_use]
pub const fn node_fn<F>(f: F) -> NodeFn<F>
where
    F: Fn(&mut Renderer),
{
    NodeFn(f)
}

impl<F> Node for NodeFn<F>
where
    F: Fn(&mut Renderer),
{
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        (self.0)(r);
        r
    }
}

/// A node that is always absent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Absent;

impl Node for Absent {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r
    }

    fn is_absent(&self) -> bool {
        true
    }
}
