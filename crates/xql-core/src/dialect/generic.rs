//! Portable dialect: the [`Dialect`] defaults with no vendor overrides.
//!
//! Identifiers that need quoting are wrapped in double quotes. Everything
//! else matches the default [`RenderConfig`](crate::RenderConfig), so the
//! configuration is `RenderConfig::DEFAULT.with_quote('"')`.

use super::Dialect;

/// Double-quoting dialect with no vendor extensions.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Ident, Keyword, Sep, Ws};

    #[test]
    fn test_generic_dialect() {
        let dialect = GenericDialect::new();
        assert_eq!(dialect.name(), "generic");
        assert_eq!(dialect.identifier_quote(), '"');
        assert_eq!(dialect.quote_identifier("users"), "users");
        assert_eq!(dialect.quote_identifier("user name"), "\"user name\"");
        assert_eq!(
            dialect.render_config(),
            crate::RenderConfig::DEFAULT.with_quote('"')
        );
    }

    #[test]
    fn test_generic_render() {
        let dialect = GenericDialect::new();
        let cols = vec![Ident::new("id"), Ident::new("order")];
        assert_eq!(dialect.render(&cols).unwrap(), "id, order");

        let node = crate::node::node_fn(|r| {
            r.visit(&[&Keyword("SELECT"), &Ws, &Ident::new("42"), &Sep, &Ident::new("a\"b")]);
        });
        assert_eq!(dialect.render(&node).unwrap(), "SELECT \"42\", \"a\"\"b\"");
    }
}
