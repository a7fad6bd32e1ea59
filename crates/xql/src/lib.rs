//! # xql
//!
//! A composable SQL statement builder. Statements are plain data assembled
//! from small node types and rendered to SQL text by [`xql_core`].
//!
//! ## Queries
//!
//! Clause order is enforced by the type system:
//!
//! ```rust
//! use xql::{col, Select, ToSql};
//!
//! let query = Select::new([col("a"), col("b")])
//!     .from("table1")
//!     .where_clause(col("a").gt(5))
//!     .order_by([col("b").desc()])
//!     .limit(10);
//!
//! assert_eq!(
//!     query.to_sql().unwrap(),
//!     "SELECT a, b FROM table1 WHERE a > 5 ORDER BY b DESC LIMIT 10"
//! );
//!
//! // This would NOT compile:
//! // Select::all().from("t").limit(1).where_clause(col("a").eq(1));
//! ```
//!
//! ## Schema definitions
//!
//! ```rust
//! use xql::column::{constraint, not_null, ty};
//! use xql::constraint::ColumnConstraint;
//! use xql::types::CharType;
//! use xql::{ColumnDef, CreateTable};
//!
//! let table = CreateTable::new("films", [
//!     ColumnDef::new("code", [
//!         ty(CharType::char().length(5)),
//!         constraint(ColumnConstraint::primary_key().named("firstkey")),
//!     ]).into(),
//!     ColumnDef::new("title", [ty(CharType::varchar(40)), not_null()]).into(),
//! ]);
//!
//! assert_eq!(
//!     table.to_string(),
//!     "CREATE TABLE films (\n\tcode CHAR(5) CONSTRAINT firstkey PRIMARY KEY,\n\ttitle VARCHAR(40) NOT NULL\n)"
//! );
//! ```

use tracing::trace;
use xql_core::{Dialect, Node};

pub use xql_core;
pub use xql_core::{Either, Opt, RenderConfig, RenderError, Result};

/// Implements `Display` by rendering with the default configuration.
///
/// Formatting fails with `fmt::Error` if the node is malformed, so
/// `to_string()` panics on such a node. Use [`ToSql::to_sql`] to get the
/// error instead.
macro_rules! impl_display {
    ($($ty:ty),+ $(,)?) => {$(
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let sql = xql_core::render(self).map_err(|_| std::fmt::Error)?;
                f.write_str(&sql)
            }
        }
    )+};
}

pub mod column;
pub mod constraint;
pub mod default;
pub mod delete;
pub mod expr;
pub mod insert;
pub mod merge;
pub mod name;
pub mod query;
pub mod seq;
pub mod table;
pub mod truncate;
pub mod types;
pub mod update;
pub mod value;

pub use column::ColumnDef;
pub use delete::Delete;
pub use expr::{col, func, raw, Expr};
pub use insert::Insert;
pub use merge::Merge;
pub use name::{ColumnRef, LocalQualifiedName, SchemaName, SchemaQualifiedName, TableName};
pub use query::{table, Query, Select, TableRef};
pub use table::CreateTable;
pub use truncate::Truncate;
pub use types::DataType;
pub use update::Update;
pub use value::Value;

/// Renders any node to SQL text.
pub trait ToSql: Node {
    /// Renders with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the node tree is malformed.
    fn to_sql(&self) -> Result<String> {
        xql_core::render(self)
    }

    /// Renders with the conventions of `dialect`.
    ///
    /// # Errors
    ///
    /// Returns an error if the node tree is malformed.
    fn to_sql_with(&self, dialect: &dyn Dialect) -> Result<String> {
        trace!(dialect = dialect.name(), "rendering");
        xql_core::render_with(self, dialect.render_config())
    }
}

impl<T: Node + ?Sized> ToSql for T {}
