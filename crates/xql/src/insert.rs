//! `INSERT`.
//!
//! ```rust
//! use xql::{Expr, Insert, Value};
//!
//! let stmt = Insert::into("products")
//!     .columns(["product_no", "name", "price"])
//!     .values([Expr::from(1), "Cheese".into(), Value::Default.into()]);
//! assert_eq!(
//!     stmt.to_string(),
//!     "INSERT INTO products (product_no, name, price) VALUES (1, 'Cheese', DEFAULT)"
//! );
//! ```

use xql_core::primitives::{Ident, Sep};
use xql_core::{Node, RenderError, Renderer};

use crate::expr::Expr;
use crate::name::TableName;
use crate::query::Query;
use crate::types::keyword_enum;

keyword_enum! {
    /// Which value wins for an identity column.
    pub enum Overriding {
        UserValue => "OVERRIDING USER VALUE",
        SystemValue => "OVERRIDING SYSTEM VALUE",
    }
}

/// Where inserted rows come from.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertSource {
    /// `DEFAULT VALUES`
    DefaultValues,
    /// `VALUES (...)`, one entry per row.
    Values(Vec<Vec<Expr>>),
    /// A query.
    Query(Box<Query>),
}

impl Node for InsertSource {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        match self {
            Self::DefaultValues => r.keyword("DEFAULT VALUES"),
            Self::Values(rows) => {
                r.keyword("VALUES");
                match rows.as_slice() {
                    [] => r.fail(RenderError::missing("VALUES", "row")),
                    [row] => {
                        r.ws().token('(');
                        r.require("VALUES", "value", row).token(')')
                    }
                    rows => {
                        for (i, row) in rows.iter().enumerate() {
                            if i > 0 {
                                r.sep();
                            }
                            r.newline().indent().keyword("ROW").token('(');
                            r.require("VALUES", "value", row).token(')');
                        }
                        r
                    }
                }
            }
            Self::Query(query) => query.accept(r),
        }
    }
}

/// `INSERT INTO table [(columns)] [OVERRIDING ...] source`
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Target table.
    pub table: TableName,
    /// Target columns.
    pub columns: Vec<Ident>,
    /// Overriding clause.
    pub overriding: Option<Overriding>,
    /// Source of rows.
    pub source: InsertSource,
}

impl Insert {
    /// Starts an insert into `table`, with `DEFAULT VALUES` as the source.
    #[must_use]
    pub fn into(table: impl Into<TableName>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            overriding: None,
            source: InsertSource::DefaultValues,
        }
    }

    /// Sets the target columns.
    #[must_use]
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Ident>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the overriding clause.
    #[must_use]
    pub const fn overriding(mut self, overriding: Overriding) -> Self {
        self.overriding = Some(overriding);
        self
    }

    /// Appends a row of values.
    ///
    /// A single row renders inline. Two or more rows render as `ROW(...)`
    /// constructors, one per line.
    #[must_use]
    pub fn values<I, E>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        let row = row.into_iter().map(Into::into).collect();
        match &mut self.source {
            InsertSource::Values(rows) => rows.push(row),
            _ => self.source = InsertSource::Values(vec![row]),
        }
        self
    }

    /// Inserts the result of a query.
    #[must_use]
    pub fn select(mut self, query: impl Into<Query>) -> Self {
        self.source = InsertSource::Query(Box::new(query.into()));
        self
    }

    /// Resets the source to `DEFAULT VALUES`.
    #[must_use]
    pub fn default_values(mut self) -> Self {
        self.source = InsertSource::DefaultValues;
        self
    }
}

impl Node for Insert {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        if self.source == InsertSource::DefaultValues && !self.columns.is_empty() {
            return r.fail(RenderError::invalid(
                "INSERT",
                "a column list cannot be combined with DEFAULT VALUES",
            ));
        }
        if let InsertSource::Values(rows) = &self.source {
            let expected = self.columns.len();
            let mismatch = rows
                .iter()
                .enumerate()
                .find(|(_, row)| expected > 0 && row.len() != expected);
            if let Some((i, row)) = mismatch {
                let noun = if row.len() == 1 { "value" } else { "values" };
                return r.fail(RenderError::invalid(
                    "INSERT",
                    format!("row {} has {} {noun}, expected {expected}", i + 1, row.len()),
                ));
            }
        }
        r.keyword("INSERT INTO").ws();
        self.table.accept(r).ws();
        if !self.columns.is_empty() {
            r.token('(').join(&self.columns, &Sep).token(')').ws();
        }
        if let Some(overriding) = self.overriding {
            overriding.accept(r).ws();
        }
        self.source.accept(r)
    }
}

impl_display!(Overriding, InsertSource, Insert);
