//! SQL dialect presets.
//!
//! Databases disagree on how identifiers are quoted. A [`Dialect`] bundles
//! those conventions and turns them into a [`RenderConfig`].

mod generic;
mod mysql;
mod sqlite;

pub use generic::GenericDialect;
pub use mysql::MySqlDialect;
pub use sqlite::SqliteDialect;

use crate::config::RenderConfig;
use crate::error::Result;
use crate::escape::escape_identifier;
use crate::node::Node;
use crate::renderer::render_with;

/// Trait for SQL dialect-specific behavior.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the identifier quote character (e.g., `"` for standard SQL, `` ` `` for MySQL).
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Returns the list separator character.
    fn separator(&self) -> char {
        ','
    }

    /// Returns the whitespace character.
    fn whitespace(&self) -> char {
        ' '
    }

    /// Quotes an identifier if necessary.
    fn quote_identifier(&self, name: &str) -> String {
        escape_identifier(name, self.identifier_quote()).into_owned()
    }

    /// Returns the renderer configuration for this dialect.
    fn render_config(&self) -> RenderConfig {
        RenderConfig::new(self.whitespace(), self.separator(), self.identifier_quote())
    }

    /// Renders `node` with this dialect's conventions.
    ///
    /// # Errors
    ///
    /// Returns an error if a node in the tree is malformed.
    fn render(&self, node: &dyn Node) -> Result<String> {
        render_with(node, self.render_config())
    }
}
