//! The output sink.
//!
//! A [`Renderer`] accumulates SQL text. Nodes write into it through a small
//! set of primitive operations and compose children through guarded
//! dispatch: [`Renderer::visit`] writes a group only when none of its members
//! is absent.
//!
//! A renderer lives for a single top-level render. Errors raised by
//! malformed nodes are recorded and surface from [`Renderer::finish`], which
//! never returns partial text.

use tracing::{debug, trace};

use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use crate::escape::{escape_identifier, quote_string};
use crate::node::Node;
use crate::primitives::Sep;

/// Mutable SQL text accumulator.
#[derive(Debug, Default)]
pub struct Renderer {
    buf: String,
    config: RenderConfig,
    error: Option<RenderError>,
}

impl Renderer {
    /// Creates a renderer with the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(RenderConfig::DEFAULT)
    }

    /// Creates a renderer with an explicit configuration.
    #[must_use]
    pub const fn with_config(config: RenderConfig) -> Self {
        Self {
            buf: String::new(),
            config,
            error: None,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Returns the text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Returns true once a node has reported an error.
    #[must_use]
    pub const fn has_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Writes the whitespace character.
    pub fn ws(&mut self) -> &mut Self {
        self.buf.push(self.config.whitespace);
        self
    }

    /// Writes the separator character.
    pub fn sep(&mut self) -> &mut Self {
        self.buf.push(self.config.separator);
        self
    }

    /// Writes a line break.
    pub fn newline(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Writes one level of indentation.
    pub fn indent(&mut self) -> &mut Self {
        self.buf.push('\t');
        self
    }

    /// Writes a single character as is.
    pub fn token(&mut self, c: char) -> &mut Self {
        self.buf.push(c);
        self
    }

    /// Writes a signed integer.
    pub fn int(&mut self, n: i64) -> &mut Self {
        self.buf.push_str(&n.to_string());
        self
    }

    /// Writes an unsigned integer.
    pub fn uint(&mut self, n: u64) -> &mut Self {
        self.buf.push_str(&n.to_string());
        self
    }

    /// Writes a float in its shortest decimal form.
    ///
    /// `NaN` and infinities have no SQL literal and fail the render.
    pub fn float(&mut self, n: f64) -> &mut Self {
        if !n.is_finite() {
            return self.fail(RenderError::invalid("float", format!("{n} is not finite")));
        }
        self.buf.push_str(&n.to_string());
        self
    }

    /// Writes a single-quoted string literal.
    pub fn string(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(&quote_string(s));
        self
    }

    /// Writes an identifier, quoting it if needed.
    pub fn ident(&mut self, name: &str) -> &mut Self {
        let escaped = escape_identifier(name, self.config.quote);
        self.buf.push_str(&escaped);
        self
    }

    /// Writes a keyword verbatim.
    pub fn keyword(&mut self, keyword: &str) -> &mut Self {
        self.buf.push_str(keyword);
        self
    }

    /// Writes text verbatim without any escaping.
    pub fn raw(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(text);
        self
    }

    /// Visits every member of `group` in order, or writes nothing if any
    /// member is absent.
    pub fn visit(&mut self, group: &[&dyn Node]) -> &mut Self {
        if group.iter().any(|node| node.is_absent()) {
            return self;
        }
        for node in group {
            node.accept(self);
        }
        self
    }

    /// Visits `group` when `cond` holds.
    pub fn visit_if(&mut self, cond: bool, group: &[&dyn Node]) -> &mut Self {
        if cond {
            self.visit(group);
        }
        self
    }

    /// Visits `then` when `cond` holds and `otherwise` when it does not.
    pub fn visit_if_else(
        &mut self,
        cond: bool,
        then: &[&dyn Node],
        otherwise: &[&dyn Node],
    ) -> &mut Self {
        if cond {
            self.visit(then)
        } else {
            self.visit(otherwise)
        }
    }

    /// Visits `group` when `guard` is present.
    pub fn visit_if_present(&mut self, guard: &dyn Node, group: &[&dyn Node]) -> &mut Self {
        if !guard.is_absent() {
            self.visit(group);
        }
        self
    }

    /// Writes `items` with `sep` between consecutive items.
    pub fn join<T: Node>(&mut self, items: &[T], sep: &dyn Node) -> &mut Self {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                sep.accept(self);
            }
            item.accept(self);
        }
        self
    }

    /// Writes `items` separated by the separator and a space.
    pub fn list<T: Node>(&mut self, items: &[T]) -> &mut Self {
        self.join(items, &Sep)
    }

    /// Writes `open`, the group, then `close`.
    ///
    /// The group is guarded, so an absent member leaves only the delimiters.
    pub fn delimited(&mut self, open: char, group: &[&dyn Node], close: char) -> &mut Self {
        self.token(open).visit(group).token(close)
    }

    /// Writes a parenthesized group.
    pub fn paren(&mut self, group: &[&dyn Node]) -> &mut Self {
        self.delimited('(', group, ')')
    }

    /// Writes a bracketed group.
    pub fn bracket(&mut self, group: &[&dyn Node]) -> &mut Self {
        self.delimited('[', group, ']')
    }

    /// Writes `items` as a parenthesized block, one item per indented line.
    pub fn block<T: Node>(&mut self, items: &[T]) -> &mut Self {
        self.token('(');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.sep();
            }
            self.newline().indent();
            item.accept(self);
        }
        if !items.is_empty() {
            self.newline();
        }
        self.token(')')
    }

    /// Visits `child`, or records a missing-child error if it is absent.
    pub fn require(
        &mut self,
        node: &'static str,
        child: &'static str,
        value: &dyn Node,
    ) -> &mut Self {
        if value.is_absent() {
            return self.fail(RenderError::missing(node, child));
        }
        value.accept(self)
    }

    /// Records an error. Only the first error is kept.
    pub fn fail(&mut self, err: RenderError) -> &mut Self {
        debug!(node = err.node(), error = %err, "malformed node");
        if self.error.is_none() {
            self.error = Some(err);
        }
        self
    }

    /// Consumes the renderer and returns the rendered text.
    ///
    /// # Errors
    ///
    /// Returns the first error recorded by a node. Partial text is discarded.
    pub fn finish(self) -> Result<String> {
        match self.error {
            Some(err) => {
                debug!(error = %err, "render failed");
                Err(err)
            }
            None => {
                trace!(len = self.buf.len(), "rendered");
                Ok(self.buf)
            }
        }
    }
}

/// Renders `node` with the default configuration.
///
/// # Errors
///
/// Returns an error if a node in the tree is malformed.
pub fn render<N: Node + ?Sized>(node: &N) -> Result<String> {
    render_with(node, RenderConfig::DEFAULT)
}

/// Renders `node` with an explicit configuration.
///
/// # Errors
///
/// Returns an error if a node in the tree is malformed.
pub fn render_with<N: Node + ?Sized>(node: &N, config: RenderConfig) -> Result<String> {
    let mut r = Renderer::with_config(config);
    node.accept(&mut r);
    r.finish()
}
